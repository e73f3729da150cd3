//! DTOs de usuarios

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::user::{Role, User};

/// Response de usuario para la API (sin hash ni tokens)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub email_verified: bool,
    pub password_change_required: bool,
    pub phone: Option<String>,
    pub license_number: Option<String>,
    pub status: Option<String>,
    pub joined_date: Option<NaiveDate>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            email_verified: user.email_verified,
            password_change_required: user.password_change_required,
            phone: user.phone,
            license_number: user.license_number,
            status: user.status,
            joined_date: user.joined_date,
            avatar_url: user.avatar_url,
            created_at: user.created_at,
        }
    }
}

/// Request para actualizar un usuario. Solo datos de cuenta,
/// nunca la contraseña (eso pasa por los flujos de auth).
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    pub role: Option<Role>,
}
