//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean exactamente
//! al schema SQLite.

pub mod sold_vehicle;
pub mod vehicle;

pub use sold_vehicle::SoldVehicle;
pub use vehicle::{Vehicle, VehicleChanges};
