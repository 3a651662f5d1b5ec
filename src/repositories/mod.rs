pub mod sold_vehicle_repository;
pub mod vehicle_repository;
