pub mod sold_vehicle_routes;
pub mod vehicle_routes;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use crate::state::AppState;

/// Router completo de la API
pub fn create_router(state: AppState) -> Router {
    let cors = if state.config.allows_any_origin() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(&state.config.cors_origins)
    };

    Router::new()
        .route("/", get(home))
        .merge(vehicle_routes::create_vehicle_router())
        .merge(sold_vehicle_routes::create_sold_vehicle_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

async fn home() -> &'static str {
    "Vehicle API"
}
