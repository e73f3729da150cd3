use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};

use crate::controllers::fuel_controller::FuelController;
use crate::dto::auth_dto::ApiResponse;
use crate::dto::fuel_dto::{CreateFuelRecordRequest, FuelRecordResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_fuel_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_fuel_records))
        .route("/", post(create_fuel_record))
        .route("/vehicle/:vehicle_id", get(list_fuel_records_by_vehicle))
}

async fn list_fuel_records(
    State(state): State<AppState>,
) -> Result<Json<Vec<FuelRecordResponse>>, AppError> {
    let controller = FuelController::new(state.pool.clone());
    let response = controller.get_all().await?;
    Ok(Json(response))
}

async fn create_fuel_record(
    State(state): State<AppState>,
    Json(request): Json<CreateFuelRecordRequest>,
) -> Result<Json<ApiResponse<FuelRecordResponse>>, AppError> {
    let controller = FuelController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_fuel_records_by_vehicle(
    State(state): State<AppState>,
    Path(vehicle_id): Path<i32>,
) -> Result<Json<Vec<FuelRecordResponse>>, AppError> {
    let controller = FuelController::new(state.pool.clone());
    let response = controller.get_by_vehicle(vehicle_id).await?;
    Ok(Json(response))
}
