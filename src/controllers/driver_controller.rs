//! Controller de conductores
//!
//! Vista de los usuarios con role DRIVER más su perfil operativo.
//! El alta directa por un administrador deja la cuenta verificada;
//! la contraseña por defecto es conocida por la flota.

use bcrypt::{hash, DEFAULT_COST};
use sqlx::PgPool;
use tracing::info;
use validator::Validate;

use crate::dto::auth_dto::ApiResponse;
use crate::dto::driver_dto::{CreateDriverRequest, UpdateDriverRequest};
use crate::dto::user_dto::UserResponse;
use crate::models::user::{NewUser, Role};
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;

const DEFAULT_DRIVER_PASSWORD: &str = "driver123";

pub struct DriverController {
    repository: UserRepository,
}

impl DriverController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: UserRepository::new(pool),
        }
    }

    pub async fn get_all(&self) -> Result<Vec<UserResponse>, AppError> {
        let drivers = self.repository.find_all_by_role(Role::Driver).await?;

        Ok(drivers.into_iter().map(UserResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<UserResponse, AppError> {
        let driver = self
            .repository
            .find_by_id_and_role(id, Role::Driver)
            .await?
            .ok_or_else(|| AppError::NotFound("Conductor no encontrado".to_string()))?;

        Ok(UserResponse::from(driver))
    }

    pub async fn create(
        &self,
        request: CreateDriverRequest,
    ) -> Result<ApiResponse<UserResponse>, AppError> {
        request.validate()?;

        if self.repository.email_exists(&request.email).await? {
            return Err(AppError::DuplicateEmail(request.email));
        }

        let password = request
            .password
            .unwrap_or_else(|| DEFAULT_DRIVER_PASSWORD.to_string());
        let password_hash = hash(&password, DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("Error hashing password: {}", e)))?;

        let driver = self
            .repository
            .create(&NewUser {
                name: request.name,
                email: request.email,
                password_hash,
                role: Role::Driver,
                email_verified: true,
                password_change_required: false,
                phone: request.phone,
                license_number: request.license_number,
                status: request.status,
                joined_date: request.joined_date,
                avatar_url: request.avatar_url,
            })
            .await?;

        info!("🪪 Conductor {} dado de alta ({})", driver.id, driver.email);

        Ok(ApiResponse::success_with_message(
            UserResponse::from(driver),
            "Conductor creado exitosamente".to_string(),
        ))
    }

    pub async fn update(
        &self,
        id: i32,
        request: UpdateDriverRequest,
    ) -> Result<ApiResponse<UserResponse>, AppError> {
        request.validate()?;

        let driver = self
            .repository
            .update_driver_profile(
                id,
                request.name,
                request.email,
                request.phone,
                request.license_number,
                request.status,
                request.joined_date,
                request.avatar_url,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            UserResponse::from(driver),
            "Conductor actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        // Solo borra si el id corresponde a un conductor
        self.repository
            .find_by_id_and_role(id, Role::Driver)
            .await?
            .ok_or_else(|| AppError::NotFound("Conductor no encontrado".to_string()))?;

        self.repository.delete(id).await
    }
}
