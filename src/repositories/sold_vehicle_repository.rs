use crate::models::sold_vehicle::SoldVehicle;
use crate::utils::errors::AppError;
use sqlx::SqlitePool;

/// Lector del libro de ventas. Lo escribe otro sistema.
#[derive(Clone)]
pub struct SoldVehicleRepository {
    pool: SqlitePool,
}

impl SoldVehicleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Todas las entradas del libro en orden de `id`.
    ///
    /// SQLite no impone tipos: un precio guardado como texto se devuelve
    /// como `None` en vez de romper la lectura completa.
    pub async fn find_all(&self) -> Result<Vec<SoldVehicle>, AppError> {
        let entries = sqlx::query_as::<_, SoldVehicle>(
            r#"
            SELECT id,
                   vin,
                   CASE WHEN typeof(sale_price) = 'real' THEN sale_price END AS sale_price,
                   CAST(buyer_name AS TEXT) AS buyer_name,
                   CAST(sold_on AS TEXT) AS sold_on
            FROM sold_vehicles
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }
}
