use serde_json::{Map, Value};
use validator::Validate;

use crate::models::vehicle::{Vehicle, VehicleChanges};
use crate::utils::errors::AppError;
use crate::utils::validation::{
    normalize_vin, optional_string, required_f64, required_i32, required_string, VIN_PATTERN,
};

// Request para crear un vehículo
#[derive(Debug, Clone, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1, max = 17), regex = "VIN_PATTERN")]
    pub vin_number: String,

    #[validate(length(min = 1, max = 50))]
    pub manufacturer_name: String,

    #[validate(length(max = 200))]
    pub description: Option<String>,

    #[validate(range(min = 0))]
    pub horse_power: i32,

    #[validate(length(min = 1, max = 50))]
    pub model_name: String,

    pub model_year: i32,

    #[validate(range(min = 0.0))]
    pub purchase_price: f64,

    #[validate(length(min = 1, max = 20))]
    pub fuel_type: String,

    #[validate(length(min = 1, max = 30))]
    pub color: String,

    #[validate(length(min = 1, max = 30))]
    pub vehicle_type: String,
}

impl CreateVehicleRequest {
    /// Construir la petición desde el cuerpo JSON, nombrando la primera
    /// clave ausente o con tipo incorrecto.
    pub fn from_body(body: &Map<String, Value>) -> Result<Self, AppError> {
        let request = Self {
            manufacturer_name: required_string(body, "manufacturer_name")?,
            description: optional_string(body, "description")?,
            horse_power: required_i32(body, "horse_power")?,
            model_name: required_string(body, "model_name")?,
            model_year: required_i32(body, "model_year")?,
            purchase_price: required_f64(body, "purchase_price")?,
            fuel_type: required_string(body, "fuel_type")?,
            color: required_string(body, "color")?,
            vehicle_type: required_string(body, "vehicle_type")?,
            vin_number: required_string(body, "vin_number")?,
        };
        request.validate()?;
        Ok(request)
    }

    /// Registro listo para persistir: VIN canónico y descripción vacía por defecto
    pub fn into_vehicle(self) -> Vehicle {
        Vehicle {
            vin_number: normalize_vin(&self.vin_number),
            manufacturer_name: self.manufacturer_name,
            description: self.description.unwrap_or_default(),
            horse_power: self.horse_power,
            model_name: self.model_name,
            model_year: self.model_year,
            purchase_price: self.purchase_price,
            fuel_type: self.fuel_type,
            color: self.color,
            vehicle_type: self.vehicle_type,
        }
    }
}

// Request para actualizar un vehículo (el VIN es inmutable y no se lee del cuerpo)
#[derive(Debug, Clone, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 1, max = 50))]
    pub manufacturer_name: String,

    #[validate(length(max = 200))]
    pub description: Option<String>,

    #[validate(range(min = 0))]
    pub horse_power: i32,

    #[validate(length(min = 1, max = 50))]
    pub model_name: String,

    pub model_year: i32,

    #[validate(range(min = 0.0))]
    pub purchase_price: f64,

    #[validate(length(min = 1, max = 20))]
    pub fuel_type: String,

    #[validate(length(min = 1, max = 30))]
    pub color: String,

    #[validate(length(min = 1, max = 30))]
    pub vehicle_type: String,
}

impl UpdateVehicleRequest {
    pub fn from_body(body: &Map<String, Value>) -> Result<Self, AppError> {
        let request = Self {
            manufacturer_name: required_string(body, "manufacturer_name")?,
            description: optional_string(body, "description")?,
            horse_power: required_i32(body, "horse_power")?,
            model_name: required_string(body, "model_name")?,
            model_year: required_i32(body, "model_year")?,
            purchase_price: required_f64(body, "purchase_price")?,
            fuel_type: required_string(body, "fuel_type")?,
            color: required_string(body, "color")?,
            vehicle_type: required_string(body, "vehicle_type")?,
        };
        request.validate()?;
        Ok(request)
    }
}

impl From<UpdateVehicleRequest> for VehicleChanges {
    fn from(request: UpdateVehicleRequest) -> Self {
        Self {
            manufacturer_name: request.manufacturer_name,
            description: request.description,
            horse_power: request.horse_power,
            model_name: request.model_name,
            model_year: request.model_year,
            purchase_price: request.purchase_price,
            fuel_type: request.fuel_type,
            color: request.color,
            vehicle_type: request.vehicle_type,
        }
    }
}
