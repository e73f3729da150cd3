//! Servicio de tokens de credenciales
//! 
//! Ciclo de vida de los tokens opacos de un solo uso: emisión con su
//! TTL y consumo atómico contra el repositorio de usuarios.

use chrono::{Duration, Utc};
use sqlx::PgPool;

use crate::models::user::User;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;
use crate::utils::security;

/// Vigencia del token de verificación de email
pub const VERIFICATION_TOKEN_TTL_HOURS: i64 = 24;
/// Vigencia del token de reset de contraseña
pub const RESET_TOKEN_TTL_HOURS: i64 = 1;

/// Tipo de token de credenciales
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    EmailVerification,
    PasswordReset,
}

pub struct TokenService {
    repository: UserRepository,
}

impl TokenService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: UserRepository::new(pool),
        }
    }

    /// Emite un token de verificación para el usuario y lo persiste con
    /// su expiry. Reemplaza cualquier token anterior del mismo tipo.
    pub async fn issue_verification_token(&self, user_id: i32) -> Result<String, AppError> {
        let token = security::generate_opaque_token();
        let expiry = Utc::now() + Duration::hours(VERIFICATION_TOKEN_TTL_HOURS);

        self.repository
            .set_verification_token(user_id, &token, expiry)
            .await?;

        Ok(token)
    }

    /// Emite un token de reset para la cuenta con ese email.
    /// Falla con NotFound si el email no está registrado.
    pub async fn issue_reset_token(&self, email: &str) -> Result<(User, String), AppError> {
        let user = self.repository.find_by_email(email).await?.ok_or_else(|| {
            AppError::NotFound(format!("No existe una cuenta con el email '{}'", email))
        })?;

        let token = security::generate_opaque_token();
        let expiry = Utc::now() + Duration::hours(RESET_TOKEN_TTL_HOURS);

        self.repository.set_reset_token(user.id, &token, expiry).await?;

        Ok((user, token))
    }

    /// Consume un token de un solo uso: InvalidToken si no existe,
    /// ExpiredToken si venció. En éxito el par token/expiry queda limpio
    /// y el mismo valor ya no puede volver a usarse.
    pub async fn consume_token(&self, token: &str, kind: TokenKind) -> Result<User, AppError> {
        match kind {
            TokenKind::EmailVerification => self.repository.consume_verification_token(token).await,
            TokenKind::PasswordReset => self.repository.consume_reset_token(token).await,
        }
    }
}
