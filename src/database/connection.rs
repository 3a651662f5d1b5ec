//! Conexión a SQLite e inicialización del schema
//!
//! La inicialización se hace una sola vez durante el arranque, antes de
//! aceptar peticiones. Las migraciones son idempotentes.

use sqlx::SqlitePool;
use tracing::info;

use crate::config::database::DatabaseConfig;

pub struct DatabaseConnection {
    pool: SqlitePool,
}

impl DatabaseConnection {
    pub async fn new(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        info!("🗄️ Conectando a la base de datos: {}", config.url);
        let pool = config.create_pool().await?;
        Ok(Self { pool })
    }

    pub async fn new_default() -> Result<Self, sqlx::Error> {
        Self::new(&DatabaseConfig::default()).await
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Aplicar el schema. Llamar una vez durante el bootstrap.
    pub async fn initialize(&self) -> Result<(), sqlx::migrate::MigrateError> {
        run_migrations(&self.pool).await
    }
}

/// Ejecutar migraciones de la base de datos
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("✅ Schema de base de datos listo");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_migrations_are_idempotent() {
        let pool = DatabaseConfig::create_test_pool().await.unwrap();
        run_migrations(&pool).await.unwrap();
        run_migrations(&pool).await.unwrap();

        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN ('vehicles', 'sold_vehicles')",
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(count, 2);
    }
}
