//! Modelo de Vehicle
//!
//! Mapea exactamente a la tabla `vehicles`, con el VIN canónico como
//! primary key.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Vehicle principal - también es la forma serializada en las respuestas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub vin_number: String,
    pub manufacturer_name: String,
    pub description: String,
    pub horse_power: i32,
    pub model_name: String,
    pub model_year: i32,
    pub purchase_price: f64,
    pub fuel_type: String,
    pub color: String,
    pub vehicle_type: String,
}

/// Cambios aplicables a un vehículo existente.
///
/// Todo se sobrescribe salvo `description`, que conserva el valor
/// almacenado cuando viene a `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleChanges {
    pub manufacturer_name: String,
    pub description: Option<String>,
    pub horse_power: i32,
    pub model_name: String,
    pub model_year: i32,
    pub purchase_price: f64,
    pub fuel_type: String,
    pub color: String,
    pub vehicle_type: String,
}
