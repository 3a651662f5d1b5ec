use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::sold_vehicle_controller::SoldVehicleController;
use crate::models::sold_vehicle::SoldVehicle;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_sold_vehicle_router() -> Router<AppState> {
    Router::new().route("/sold-vehicles", get(list_sold_vehicles))
}

async fn list_sold_vehicles(
    State(state): State<AppState>,
) -> Result<Json<Vec<SoldVehicle>>, AppError> {
    let controller = SoldVehicleController::new(state.pool.clone());
    let sold = controller.list_in_inventory().await?;
    Ok(Json(sold))
}
