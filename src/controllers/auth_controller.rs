//! Controller de autenticación
//!
//! Orquesta el alta de cuentas, el login y los flujos de tokens de
//! verificación y reset. El modo de alta (admin_invite o self_service)
//! lo decide la configuración; nunca conviven los dos.

use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::PgPool;
use tracing::info;
use validator::Validate;

use crate::config::environment::{EnvironmentConfig, SignupMode};
use crate::dto::auth_dto::{
    AuthenticationRequest, AuthenticationResponse, ChangePasswordRequest, ForgotPasswordRequest,
    ResetPasswordRequest, SetPasswordRequest, SignupRequest,
};
use crate::models::user::{NewUser, Role, User};
use crate::repositories::user_repository::UserRepository;
use crate::services::mailer_service::MailerService;
use crate::services::token_service::{TokenKind, TokenService};
use crate::utils::errors::{validation_error, AppError};
use crate::utils::jwt::{generate_token, JwtConfig};
use crate::utils::security;

pub struct AuthController {
    repository: UserRepository,
    token_service: TokenService,
    mailer: MailerService,
    config: EnvironmentConfig,
}

impl AuthController {
    pub fn new(pool: PgPool, config: EnvironmentConfig, mailer: MailerService) -> Self {
        Self {
            repository: UserRepository::new(pool.clone()),
            token_service: TokenService::new(pool),
            mailer,
            config,
        }
    }

    fn jwt_config(&self) -> JwtConfig {
        JwtConfig::from(&self.config)
    }

    fn hash_password(password: &str) -> Result<String, AppError> {
        hash(password, DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("Error hashing password: {}", e)))
    }

    pub async fn authenticate(
        &self,
        request: AuthenticationRequest,
    ) -> Result<AuthenticationResponse, AppError> {
        request.validate()?;

        // Cuenta inexistente y contraseña incorrecta son errores distintos
        let user = self
            .repository
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("No existe una cuenta con el email '{}'", request.email))
            })?;

        let valid = verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::Internal(format!("Error verifying password: {}", e)))?;

        if !valid {
            return Err(AppError::InvalidCredentials);
        }

        if !user.email_verified {
            return Err(AppError::AccountNotVerified);
        }

        let token = generate_token(user.id, user.role, &self.jwt_config())?;

        Ok(AuthenticationResponse::from_user(&user, Some(token), None))
    }

    /// Alta de cuenta según el modo configurado.
    pub async fn signup(&self, request: SignupRequest) -> Result<AuthenticationResponse, AppError> {
        request.validate()?;

        match self.config.signup_mode {
            SignupMode::AdminInvite => self.signup_by_admin(request).await,
            SignupMode::SelfService => self.signup_self_service(request).await,
        }
    }

    /// Modo admin_invite: email sintético único + contraseña temporal.
    /// La contraseña generada solo viaja en esta respuesta, no se loguea.
    async fn signup_by_admin(
        &self,
        request: SignupRequest,
    ) -> Result<AuthenticationResponse, AppError> {
        let email = self.next_available_email(&request.name, request.role).await?;

        let generated_password = security::generate_temp_password();
        let password_hash = Self::hash_password(&generated_password)?;

        let user = self
            .repository
            .create(&NewUser {
                name: request.name,
                email,
                password_hash,
                role: request.role,
                email_verified: true,
                password_change_required: true,
                phone: None,
                license_number: None,
                status: None,
                joined_date: None,
                avatar_url: None,
            })
            .await?;

        info!(
            "👤 Cuenta creada por administrador: {} ({})",
            user.email,
            user.role.as_str()
        );

        Ok(AuthenticationResponse::from_user(&user, None, Some(generated_password)))
    }

    /// Busca el primer email sintético libre: base, luego base1, base2...
    async fn next_available_email(&self, name: &str, role: Role) -> Result<String, AppError> {
        let mut suffix = 0;
        loop {
            let candidate = security::synthesize_email(name, role, suffix);
            if !self.repository.email_exists(&candidate).await? {
                return Ok(candidate);
            }
            suffix += 1;
        }
    }

    /// Modo self_service: cuenta sin verificar + token de verificación
    /// enviado por email. El envío es fire-and-forget.
    async fn signup_self_service(
        &self,
        request: SignupRequest,
    ) -> Result<AuthenticationResponse, AppError> {
        let email = match request.email {
            Some(email) => email,
            None => return Err(validation_error("email", "El email es requerido")),
        };

        if self.repository.email_exists(&email).await? {
            return Err(AppError::DuplicateEmail(email));
        }

        // Password provisional si el usuario no eligió una; se fija la
        // definitiva en set-password y nunca viaja en la respuesta
        let password = match request.password {
            Some(password) => password,
            None => security::generate_temp_password(),
        };
        let password_hash = Self::hash_password(&password)?;

        let user = self
            .repository
            .create(&NewUser {
                name: request.name,
                email,
                password_hash,
                role: request.role,
                email_verified: false,
                password_change_required: false,
                phone: None,
                license_number: None,
                status: None,
                joined_date: None,
                avatar_url: None,
            })
            .await?;

        let token = self.token_service.issue_verification_token(user.id).await?;

        let mailer = self.mailer.clone();
        let to = user.email.clone();
        tokio::spawn(async move {
            mailer.send_verification_email(&to, &token).await;
        });

        info!("👤 Cuenta registrada, pendiente de verificación: {}", user.email);

        Ok(AuthenticationResponse::from_user(&user, None, None))
    }

    pub async fn verify_email(&self, token: &str) -> Result<User, AppError> {
        let user = self
            .token_service
            .consume_token(token, TokenKind::EmailVerification)
            .await?;

        self.repository.mark_email_verified(user.id).await
    }

    /// Primer login de una cuenta invitada por email: consume el token de
    /// verificación, fija la contraseña elegida y devuelve sesión completa.
    pub async fn set_password(
        &self,
        request: SetPasswordRequest,
    ) -> Result<AuthenticationResponse, AppError> {
        request.validate()?;

        let user = self
            .token_service
            .consume_token(&request.token, TokenKind::EmailVerification)
            .await?;

        let password_hash = Self::hash_password(&request.password)?;
        let user = self.repository.activate_with_password(user.id, &password_hash).await?;

        let token = generate_token(user.id, user.role, &self.jwt_config())?;

        Ok(AuthenticationResponse::from_user(&user, Some(token), None))
    }

    pub async fn forgot_password(&self, request: ForgotPasswordRequest) -> Result<(), AppError> {
        request.validate()?;

        let (user, token) = self.token_service.issue_reset_token(&request.email).await?;

        let mailer = self.mailer.clone();
        let to = user.email.clone();
        tokio::spawn(async move {
            mailer.send_reset_email(&to, &token).await;
        });

        Ok(())
    }

    pub async fn reset_password(&self, request: ResetPasswordRequest) -> Result<(), AppError> {
        request.validate()?;

        let user = self
            .token_service
            .consume_token(&request.token, TokenKind::PasswordReset)
            .await?;

        let password_hash = Self::hash_password(&request.password)?;
        self.repository.set_password(user.id, &password_hash, false).await?;

        info!("🔑 Contraseña restablecida para {}", user.email);

        Ok(())
    }

    /// Cambio de contraseña autenticado; levanta el flag de cambio
    /// obligatorio de las cuentas invitadas.
    pub async fn change_password(&self, request: ChangePasswordRequest) -> Result<(), AppError> {
        request.validate()?;

        let user = self
            .repository
            .find_by_id(request.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        let password_hash = Self::hash_password(&request.new_password)?;
        self.repository.set_password(user.id, &password_hash, false).await?;

        Ok(())
    }
}
