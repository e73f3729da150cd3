//! Bootstrap de datos iniciales
//! 
//! Crea la cuenta de administrador por defecto si no existe.
//! Idempotente: se ejecuta en cada arranque.

use bcrypt::{hash, DEFAULT_COST};
use sqlx::PgPool;
use tracing::info;

use crate::config::environment::EnvironmentConfig;
use crate::models::user::{NewUser, Role};
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;

pub async fn seed_default_admin(pool: &PgPool, config: &EnvironmentConfig) -> Result<(), AppError> {
    let repository = UserRepository::new(pool.clone());

    if repository.email_exists(&config.admin_email).await? {
        return Ok(());
    }

    let password_hash = hash(&config.admin_password, DEFAULT_COST)
        .map_err(|e| AppError::Internal(format!("Error hashing password: {}", e)))?;

    let admin = NewUser {
        name: "System Administrator".to_string(),
        email: config.admin_email.clone(),
        password_hash,
        role: Role::Admin,
        email_verified: true,
        password_change_required: false,
        phone: None,
        license_number: None,
        status: None,
        joined_date: None,
        avatar_url: None,
    };

    let created = repository.create(&admin).await?;
    info!("👤 Cuenta de administrador creada: {}", created.email);

    Ok(())
}
