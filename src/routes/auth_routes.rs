use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};

use crate::controllers::auth_controller::AuthController;
use crate::dto::auth_dto::{
    AuthenticationRequest, AuthenticationResponse, ChangePasswordRequest, ForgotPasswordRequest,
    ResetPasswordRequest, SetPasswordRequest, SignupRequest, VerifyEmailQuery,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/authenticate", post(authenticate))
        .route("/verify-email", get(verify_email))
        .route("/set-password", post(set_password))
        .route("/forgot-password", post(forgot_password))
        .route("/reset-password", post(reset_password))
        .route("/change-password", post(change_password))
}

fn controller(state: &AppState) -> AuthController {
    AuthController::new(state.pool.clone(), state.config.clone(), state.mailer.clone())
}

async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<AuthenticationResponse>, AppError> {
    let response = controller(&state).signup(request).await?;
    Ok(Json(response))
}

async fn authenticate(
    State(state): State<AppState>,
    Json(request): Json<AuthenticationRequest>,
) -> Result<Json<AuthenticationResponse>, AppError> {
    let response = controller(&state).authenticate(request).await?;
    Ok(Json(response))
}

async fn verify_email(
    State(state): State<AppState>,
    Query(query): Query<VerifyEmailQuery>,
) -> Result<String, AppError> {
    controller(&state).verify_email(&query.token).await?;
    Ok("Email verified successfully".to_string())
}

async fn set_password(
    State(state): State<AppState>,
    Json(request): Json<SetPasswordRequest>,
) -> Result<Json<AuthenticationResponse>, AppError> {
    let response = controller(&state).set_password(request).await?;
    Ok(Json(response))
}

async fn forgot_password(
    State(state): State<AppState>,
    Json(request): Json<ForgotPasswordRequest>,
) -> Result<String, AppError> {
    controller(&state).forgot_password(request).await?;
    Ok("Password reset link sent".to_string())
}

async fn reset_password(
    State(state): State<AppState>,
    Json(request): Json<ResetPasswordRequest>,
) -> Result<String, AppError> {
    controller(&state).reset_password(request).await?;
    Ok("Password has been reset".to_string())
}

async fn change_password(
    State(state): State<AppState>,
    Json(request): Json<ChangePasswordRequest>,
) -> Result<String, AppError> {
    controller(&state).change_password(request).await?;
    Ok("Password changed successfully".to_string())
}
