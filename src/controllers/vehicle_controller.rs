use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest};
use crate::models::vehicle::Vehicle;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::{into_object, normalize_vin};
use serde_json::Value;
use sqlx::SqlitePool;
use tracing::info;

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<Vehicle>, AppError> {
        self.repository.list_all().await
    }

    pub async fn get(&self, vin: &str) -> Result<Vehicle, AppError> {
        self.repository
            .find_by_vin(&normalize_vin(vin))
            .await?
            .ok_or_else(AppError::vehicle_not_found)
    }

    pub async fn create(&self, body: Value) -> Result<Vehicle, AppError> {
        let body = into_object(body)?;
        let request = CreateVehicleRequest::from_body(&body)?;

        let vehicle = self.repository.create(&request.into_vehicle()).await?;

        info!("🚗 Vehículo creado: {}", vehicle.vin_number);
        Ok(vehicle)
    }

    /// Actualizar un vehículo.
    ///
    /// El cuerpo llega sin validar: si el VIN no existe se responde
    /// `NotFound` aunque el cuerpo también sea inválido.
    ///
    /// Hay dos lecturas: esta, previa a validar el cuerpo, fija el orden
    /// 404 antes que 422; la del repositorio, dentro de la transacción,
    /// cubre un borrado concurrente entre ambas.
    pub async fn update(
        &self,
        vin: &str,
        body: Result<Value, AppError>,
    ) -> Result<Vehicle, AppError> {
        let vin = normalize_vin(vin);

        if self.repository.find_by_vin(&vin).await?.is_none() {
            return Err(AppError::vehicle_not_found());
        }

        let body = into_object(body?)?;
        let request = UpdateVehicleRequest::from_body(&body)?;

        let vehicle = self.repository.update(&vin, request.into()).await?;

        info!("✏️ Vehículo actualizado: {}", vehicle.vin_number);
        Ok(vehicle)
    }

    pub async fn delete(&self, vin: &str) -> Result<(), AppError> {
        let vin = normalize_vin(vin);
        self.repository.delete(&vin).await?;

        info!("🗑️ Vehículo eliminado: {}", vin);
        Ok(())
    }
}
