pub mod sold_vehicle_controller;
pub mod vehicle_controller;
