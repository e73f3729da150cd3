//! Modelo de User
//! 
//! Este módulo contiene el struct User, el enum Role y los predicados
//! de expiración de los tokens de credenciales.
//! Mapea exactamente al schema PostgreSQL con primary key 'id'.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};

/// Rol del usuario - se persiste como TEXT
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Manager,
    Driver,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Manager => "MANAGER",
            Role::Driver => "DRIVER",
        }
    }
}

/// User principal - mapea exactamente a la tabla users
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub email_verified: bool,
    pub password_change_required: bool,
    pub email_verification_token: Option<String>,
    pub email_verification_token_expiry: Option<DateTime<Utc>>,
    pub password_reset_token: Option<String>,
    pub password_reset_token_expiry: Option<DateTime<Utc>>,
    // Perfil de conductor (solo relevante cuando role = DRIVER)
    pub phone: Option<String>,
    pub license_number: Option<String>,
    pub status: Option<String>,
    pub joined_date: Option<NaiveDate>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Comparación estricta: en el instante exacto del expiry
    /// el token todavía es válido.
    pub fn verification_token_expired(&self, now: DateTime<Utc>) -> bool {
        self.email_verification_token_expiry
            .map_or(false, |expiry| now > expiry)
    }

    pub fn reset_token_expired(&self, now: DateTime<Utc>) -> bool {
        self.password_reset_token_expiry
            .map_or(false, |expiry| now > expiry)
    }
}

/// Datos para insertar un usuario nuevo (el id lo asigna la base)
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub email_verified: bool,
    pub password_change_required: bool,
    pub phone: Option<String>,
    pub license_number: Option<String>,
    pub status: Option<String>,
    pub joined_date: Option<NaiveDate>,
    pub avatar_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn user_with_expiries(
        verification: Option<DateTime<Utc>>,
        reset: Option<DateTime<Utc>>,
    ) -> User {
        User {
            id: 1,
            name: "Test User".to_string(),
            email: "test@fleetpro.com".to_string(),
            password_hash: "hash".to_string(),
            role: Role::Driver,
            email_verified: false,
            password_change_required: false,
            email_verification_token: verification.map(|_| "vtoken".to_string()),
            email_verification_token_expiry: verification,
            password_reset_token: reset.map(|_| "rtoken".to_string()),
            password_reset_token_expiry: reset,
            phone: None,
            license_number: None,
            status: None,
            joined_date: None,
            avatar_url: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_token_valid_before_and_at_exact_expiry() {
        let now = Utc::now();
        let user = user_with_expiries(Some(now), Some(now));

        // exactamente en el expiry todavía no vence
        assert!(!user.verification_token_expired(now));
        assert!(!user.reset_token_expired(now));
        assert!(!user.verification_token_expired(now - Duration::seconds(1)));
    }

    #[test]
    fn test_token_expired_after_expiry() {
        let now = Utc::now();
        let user = user_with_expiries(Some(now - Duration::seconds(1)), None);

        assert!(user.verification_token_expired(now));
        assert!(!user.reset_token_expired(now));
    }

    #[test]
    fn test_missing_expiry_is_not_expired() {
        let user = user_with_expiries(None, None);
        assert!(!user.verification_token_expired(Utc::now()));
        assert!(!user.reset_token_expired(Utc::now()));
    }

    #[test]
    fn test_role_serializes_screaming_snake_case() {
        assert_eq!(serde_json::to_value(Role::Admin).unwrap(), "ADMIN");
        assert_eq!(serde_json::to_value(Role::Manager).unwrap(), "MANAGER");
        assert_eq!(serde_json::to_value(Role::Driver).unwrap(), "DRIVER");
        assert_eq!(Role::Driver.as_str(), "DRIVER");
    }
}
