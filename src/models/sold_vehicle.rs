//! Modelo de SoldVehicle
//!
//! Entrada del libro de ventas externo. El servicio nunca escribe aquí.
//! Solo `vin` está garantizado; `sold_on` se devuelve tal como lo guarda
//! el libro, sin exigir formato de fecha.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct SoldVehicle {
    pub id: i64,
    pub vin: String,
    pub sale_price: Option<f64>,
    pub buyer_name: Option<String>,
    pub sold_on: Option<String>,
}
