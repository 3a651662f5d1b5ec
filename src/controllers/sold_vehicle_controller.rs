use crate::models::sold_vehicle::SoldVehicle;
use crate::repositories::sold_vehicle_repository::SoldVehicleRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::normalize_vin;
use sqlx::SqlitePool;
use std::collections::HashSet;
use tracing::debug;

pub struct SoldVehicleController {
    vehicles: VehicleRepository,
    ledger: SoldVehicleRepository,
}

impl SoldVehicleController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            vehicles: VehicleRepository::new(pool.clone()),
            ledger: SoldVehicleRepository::new(pool),
        }
    }

    /// Entradas del libro de ventas cuyo VIN sigue en el inventario.
    ///
    /// El libro guarda VINs con cualquier capitalización, así que se
    /// comparan en forma canónica. Se mantiene el orden del libro.
    pub async fn list_in_inventory(&self) -> Result<Vec<SoldVehicle>, AppError> {
        let inventory: HashSet<String> = self.vehicles.list_vins().await?.into_iter().collect();

        let sold: Vec<SoldVehicle> = self
            .ledger
            .find_all()
            .await?
            .into_iter()
            .filter(|entry| inventory.contains(&normalize_vin(&entry.vin)))
            .collect();

        debug!(
            "🔎 {} ventas coinciden con {} vehículos en inventario",
            sold.len(),
            inventory.len()
        );
        Ok(sold)
    }
}
