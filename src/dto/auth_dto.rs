//! DTOs de autenticación
//! 
//! Requests y responses del flujo de cuentas: alta, login,
//! verificación de email y manejo de contraseñas.
//! La API expone claves camelCase.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::user::{Role, User};

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}

/// Request de alta de cuenta. En modo admin_invite solo se usan
/// name + role; en modo self_service se usan name + email (+ password).
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: String,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(min = 8, max = 72))]
    pub password: Option<String>,

    pub role: Role,
}

// Login request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// Response de autenticación y de alta de cuentas.
/// `generated_password` solo viaja en la respuesta del alta por
/// administrador y no se registra en ningún otro lado.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub role: Role,
    pub name: String,
    pub email: String,
    pub id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_password: Option<String>,
    pub password_change_required: bool,
}

impl AuthenticationResponse {
    pub fn from_user(user: &User, token: Option<String>, generated_password: Option<String>) -> Self {
        Self {
            token,
            role: user.role,
            name: user.name.clone(),
            email: user.email.clone(),
            id: user.id,
            generated_password,
            password_change_required: user.password_change_required,
        }
    }
}

// Query de GET /api/auth/verify-email?token=...
#[derive(Debug, Deserialize)]
pub struct VerifyEmailQuery {
    pub token: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SetPasswordRequest {
    #[validate(length(min = 1))]
    pub token: String,

    #[validate(length(min = 8, max = 72))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ForgotPasswordRequest {
    #[validate(email)]
    pub email: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    #[validate(length(min = 1))]
    pub token: String,

    #[validate(length(min = 8, max = 72))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub user_id: i32,

    #[validate(length(min = 8, max = 72))]
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_auth_response_uses_camel_case_and_hides_empty_secrets() {
        let user = User {
            id: 9,
            name: "Jane Doe".to_string(),
            email: "jane.doe.driver@fleetpro.com".to_string(),
            password_hash: "hash".to_string(),
            role: Role::Driver,
            email_verified: true,
            password_change_required: true,
            email_verification_token: None,
            email_verification_token_expiry: None,
            password_reset_token: None,
            password_reset_token_expiry: None,
            phone: None,
            license_number: None,
            status: None,
            joined_date: None,
            avatar_url: None,
            created_at: Utc::now(),
        };

        let response = AuthenticationResponse::from_user(&user, None, Some("Pass123456!".to_string()));
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["passwordChangeRequired"], true);
        assert_eq!(value["generatedPassword"], "Pass123456!");
        assert_eq!(value["role"], "DRIVER");
        // sin token no debe aparecer la clave
        assert!(value.get("token").is_none());
    }

    #[test]
    fn test_signup_request_accepts_camel_case_payload() {
        let request: SignupRequest = serde_json::from_value(serde_json::json!({
            "name": "Jane Doe",
            "role": "DRIVER"
        }))
        .unwrap();

        assert_eq!(request.name, "Jane Doe");
        assert_eq!(request.role, Role::Driver);
        assert!(request.email.is_none());
    }

    #[test]
    fn test_change_password_request_field_names() {
        let request: ChangePasswordRequest = serde_json::from_value(serde_json::json!({
            "userId": 3,
            "newPassword": "supersecret1"
        }))
        .unwrap();

        assert_eq!(request.user_id, 3);
        assert_eq!(request.new_password, "supersecret1");
    }
}
