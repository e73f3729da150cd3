//! Rutas de la API
//!
//! Cada recurso arma su propio sub-router; acá se ensamblan bajo /api
//! con CORS, trace y autenticación. Todo lo que no cuelga de /api/auth
//! exige un Bearer token; la gestión de usuarios además exige ADMIN.

pub mod auth_routes;
pub mod driver_routes;
pub mod fuel_routes;
pub mod report_routes;
pub mod trip_routes;
pub mod user_routes;
pub mod vehicle_routes;

use axum::{middleware, response::Json, routing::get, Router};
use serde_json::json;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::middleware::auth::{admin_only_middleware, auth_middleware};
use crate::middleware::cors::cors_middleware;
use crate::state::AppState;

/// Router completo de la API
pub fn create_api_router(state: AppState) -> Router {
    let users =
        user_routes::create_user_router().layer(middleware::from_fn(admin_only_middleware));

    let protected = Router::new()
        .nest("/users", users)
        .nest("/drivers", driver_routes::create_driver_router())
        .nest("/vehicles", vehicle_routes::create_vehicle_router())
        .nest("/trips", trip_routes::create_trip_router())
        .nest("/fuel", fuel_routes::create_fuel_router())
        .nest("/reports", report_routes::create_report_router())
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/auth", auth_routes::create_auth_router())
        .nest("/api", protected)
        .layer(cors_middleware())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check simple
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "fleet-management",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
