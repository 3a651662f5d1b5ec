use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::Value;

use crate::controllers::vehicle_controller::VehicleController;
use crate::models::vehicle::Vehicle;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/vehicle", get(list_vehicles).post(create_vehicle))
        .route(
            "/vehicle/:vin",
            get(get_vehicle).put(update_vehicle).delete(delete_vehicle),
        )
}

/// Un cuerpo que no es JSON válido se trata como error de validación (422)
fn body_value(payload: Result<Json<Value>, JsonRejection>) -> Result<Value, AppError> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| AppError::InvalidBody(rejection.body_text()))
}

async fn list_vehicles(State(state): State<AppState>) -> Result<Json<Vec<Vehicle>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let vehicles = controller.list().await?;
    Ok(Json(vehicles))
}

async fn create_vehicle(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Vehicle>), AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let vehicle = controller.create(body_value(payload)?).await?;
    Ok((StatusCode::CREATED, Json(vehicle)))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(vin): Path<String>,
) -> Result<Json<Vehicle>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let vehicle = controller.get(&vin).await?;
    Ok(Json(vehicle))
}

async fn update_vehicle(
    State(state): State<AppState>,
    Path(vin): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Vehicle>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let vehicle = controller.update(&vin, body_value(payload)).await?;
    Ok(Json(vehicle))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Path(vin): Path<String>,
) -> Result<StatusCode, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    controller.delete(&vin).await?;
    Ok(StatusCode::NO_CONTENT)
}
