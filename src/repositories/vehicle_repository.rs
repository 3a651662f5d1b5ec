use crate::models::vehicle::{Vehicle, VehicleChanges};
use crate::utils::errors::{map_write_error, AppError};
use sqlx::SqlitePool;
use tracing::debug;

const VEHICLE_COLUMNS: &str = "vin_number, manufacturer_name, description, horse_power, model_name, \
     model_year, purchase_price, fuel_type, color, vehicle_type";

/// Almacén de vehículos indexado por VIN canónico.
///
/// Los VIN que recibe ya vienen normalizados; aquí solo se hace
/// búsqueda exacta.
#[derive(Clone)]
pub struct VehicleRepository {
    pool: SqlitePool,
}

impl VehicleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Todos los vehículos en orden de inserción
    pub async fn list_all(&self) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(&format!(
            "SELECT {} FROM vehicles ORDER BY rowid",
            VEHICLE_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        debug!("📋 {} vehículos en inventario", vehicles.len());
        Ok(vehicles)
    }

    pub async fn list_vins(&self) -> Result<Vec<String>, AppError> {
        let vins = sqlx::query_scalar::<_, String>("SELECT vin_number FROM vehicles ORDER BY rowid")
            .fetch_all(&self.pool)
            .await?;
        Ok(vins)
    }

    pub async fn find_by_vin(&self, vin: &str) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(&format!(
            "SELECT {} FROM vehicles WHERE vin_number = ?1",
            VEHICLE_COLUMNS
        ))
        .bind(vin)
        .fetch_optional(&self.pool)
        .await?;

        Ok(vehicle)
    }

    /// Insertar un vehículo nuevo. La clave primaria garantiza la unicidad
    /// incluso con creaciones concurrentes del mismo VIN.
    pub async fn create(&self, vehicle: &Vehicle) -> Result<Vehicle, AppError> {
        let created = sqlx::query_as::<_, Vehicle>(&format!(
            r#"
            INSERT INTO vehicles ({columns})
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            RETURNING {columns}
            "#,
            columns = VEHICLE_COLUMNS
        ))
        .bind(&vehicle.vin_number)
        .bind(&vehicle.manufacturer_name)
        .bind(&vehicle.description)
        .bind(vehicle.horse_power)
        .bind(&vehicle.model_name)
        .bind(vehicle.model_year)
        .bind(vehicle.purchase_price)
        .bind(&vehicle.fuel_type)
        .bind(&vehicle.color)
        .bind(&vehicle.vehicle_type)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &vehicle.vin_number))?;

        debug!("💾 Vehículo {} creado", created.vin_number);
        Ok(created)
    }

    /// Sobrescribir un vehículo existente.
    ///
    /// Lectura y escritura van en la misma transacción; si algo falla la
    /// transacción se descarta y no queda estado parcial.
    pub async fn update(&self, vin: &str, changes: VehicleChanges) -> Result<Vehicle, AppError> {
        let mut tx = self.pool.begin().await?;

        let current = sqlx::query_as::<_, Vehicle>(&format!(
            "SELECT {} FROM vehicles WHERE vin_number = ?1",
            VEHICLE_COLUMNS
        ))
        .bind(vin)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(AppError::vehicle_not_found)?;

        let description = changes.description.unwrap_or(current.description);

        let vehicle = sqlx::query_as::<_, Vehicle>(&format!(
            r#"
            UPDATE vehicles
            SET manufacturer_name = ?2, description = ?3, horse_power = ?4, model_name = ?5,
                model_year = ?6, purchase_price = ?7, fuel_type = ?8, color = ?9, vehicle_type = ?10
            WHERE vin_number = ?1
            RETURNING {}
            "#,
            VEHICLE_COLUMNS
        ))
        .bind(vin)
        .bind(changes.manufacturer_name)
        .bind(description)
        .bind(changes.horse_power)
        .bind(changes.model_name)
        .bind(changes.model_year)
        .bind(changes.purchase_price)
        .bind(changes.fuel_type)
        .bind(changes.color)
        .bind(changes.vehicle_type)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_write_error(e, vin))?;

        tx.commit().await?;

        debug!("✏️ Vehículo {} actualizado", vin);
        Ok(vehicle)
    }

    /// Eliminar un vehículo. Un VIN inexistente (o ya eliminado) es `NotFound`.
    pub async fn delete(&self, vin: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM vehicles WHERE vin_number = ?1")
            .bind(vin)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::vehicle_not_found());
        }

        debug!("🗑️ Vehículo {} eliminado", vin);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::database::DatabaseConfig;
    use crate::database::run_migrations;

    async fn repository() -> VehicleRepository {
        let pool = DatabaseConfig::create_test_pool().await.unwrap();
        run_migrations(&pool).await.unwrap();
        VehicleRepository::new(pool)
    }

    fn vehicle(vin: &str, manufacturer: &str, description: &str) -> Vehicle {
        Vehicle {
            vin_number: vin.to_string(),
            manufacturer_name: manufacturer.to_string(),
            description: description.to_string(),
            horse_power: 335,
            model_name: "A8".to_string(),
            model_year: 2024,
            purchase_price: 92000.0,
            fuel_type: "Gasoline".to_string(),
            color: "Blue".to_string(),
            vehicle_type: "Sedan".to_string(),
        }
    }

    fn changes_from(vehicle: &Vehicle) -> VehicleChanges {
        VehicleChanges {
            manufacturer_name: vehicle.manufacturer_name.clone(),
            description: None,
            horse_power: vehicle.horse_power,
            model_name: vehicle.model_name.clone(),
            model_year: vehicle.model_year,
            purchase_price: vehicle.purchase_price,
            fuel_type: vehicle.fuel_type.clone(),
            color: vehicle.color.clone(),
            vehicle_type: vehicle.vehicle_type.clone(),
        }
    }

    #[tokio::test]
    async fn test_list_all_keeps_insertion_order() {
        let repo = repository().await;
        assert!(repo.list_all().await.unwrap().is_empty());

        repo.create(&vehicle("zzz111", "Volvo", "")).await.unwrap();
        repo.create(&vehicle("aaa222", "Audi", "")).await.unwrap();

        let names: Vec<String> = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|v| v.manufacturer_name)
            .collect();
        assert_eq!(names, vec!["Volvo", "Audi"]);
        assert_eq!(repo.list_vins().await.unwrap(), vec!["zzz111", "aaa222"]);
    }

    #[tokio::test]
    async fn test_duplicate_vin_is_rejected() {
        let repo = repository().await;
        repo.create(&vehicle("1ftfw1et1ef123456", "Volvo", "")).await.unwrap();

        let err = repo
            .create(&vehicle("1ftfw1et1ef123456", "Other", ""))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::DuplicateVin(_)));
        assert_eq!(repo.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_creates_yield_one_success() {
        let repo = repository().await;
        let first = vehicle("1hgcm82633a123456", "Audi", "");
        let second = vehicle("1hgcm82633a123456", "Audi", "twin");

        let (a, b) = tokio::join!(repo.create(&first), repo.create(&second));
        let successes = [a.is_ok(), b.is_ok()].iter().filter(|ok| **ok).count();
        assert_eq!(successes, 1);
        assert!(matches!(a.err().or(b.err()), Some(AppError::DuplicateVin(_))));
        assert_eq!(repo.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_non_canonical_vin_violates_constraint() {
        let repo = repository().await;
        let err = repo.create(&vehicle("ABC123", "Audi", "")).await.unwrap_err();
        assert!(matches!(err, AppError::Constraint(_)));
        assert!(repo.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_preserves_description_when_absent() {
        let repo = repository().await;
        let original = vehicle("1hgcm82633a123456", "Audi", "Firmament Blue metallic");
        repo.create(&original).await.unwrap();

        let mut changes = changes_from(&original);
        changes.model_year = 2022;
        let updated = repo.update("1hgcm82633a123456", changes).await.unwrap();
        assert_eq!(updated.model_year, 2022);
        assert_eq!(updated.description, "Firmament Blue metallic");

        let mut changes = changes_from(&original);
        changes.description = Some("Glacier White metallic".to_string());
        let updated = repo.update("1hgcm82633a123456", changes).await.unwrap();
        assert_eq!(updated.description, "Glacier White metallic");
        assert_eq!(
            repo.find_by_vin("1hgcm82633a123456").await.unwrap(),
            Some(updated)
        );
    }

    #[tokio::test]
    async fn test_update_missing_vin_is_not_found() {
        let repo = repository().await;
        let template = vehicle("0abcdef1234567890", "Unknown", "");
        let err = repo
            .update("0abcdef1234567890", changes_from(&template))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_twice_reports_not_found() {
        let repo = repository().await;
        repo.create(&vehicle("1hgcm82633a123456", "Audi", "")).await.unwrap();

        repo.delete("1hgcm82633a123456").await.unwrap();
        let err = repo.delete("1hgcm82633a123456").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(repo.find_by_vin("1hgcm82633a123456").await.unwrap(), None);
    }
}
