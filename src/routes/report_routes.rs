use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::report_controller::ReportController;
use crate::dto::report_dto::SystemOverviewResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_report_router() -> Router<AppState> {
    Router::new().route("/overview", get(system_overview))
}

async fn system_overview(
    State(state): State<AppState>,
) -> Result<Json<SystemOverviewResponse>, AppError> {
    let controller = ReportController::new(state.pool.clone());
    let response = controller.system_overview().await?;
    Ok(Json(response))
}
