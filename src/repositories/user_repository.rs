//! Repositorio de usuarios
//! 
//! Acceso a datos del almacén de credenciales: cuentas, perfil de
//! conductor y los pares token/expiry de verificación y reset.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::models::user::{NewUser, Role, User};
use crate::utils::errors::AppError;

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user: &NewUser) -> Result<User, AppError> {
        let created = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (
                name, email, password_hash, role, email_verified, password_change_required,
                phone, license_number, status, joined_date, avatar_url
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.role)
        .bind(user.email_verified)
        .bind(user.password_change_required)
        .bind(&user.phone)
        .bind(&user.license_number)
        .bind(&user.status)
        .bind(user.joined_date)
        .bind(&user.avatar_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.code().as_deref() == Some(UNIQUE_VIOLATION) => {
                AppError::DuplicateEmail(user.email.clone())
            }
            _ => AppError::Database(e),
        })?;

        Ok(created)
    }

    pub async fn find_all(&self) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(users)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
            .bind(email)
            .fetch_one(&self.pool)
            .await?;

        Ok(result.0)
    }

    pub async fn find_all_by_role(&self, role: Role) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>("SELECT * FROM users WHERE role = $1 ORDER BY id")
            .bind(role)
            .fetch_all(&self.pool)
            .await?;

        Ok(users)
    }

    pub async fn find_by_id_and_role(&self, id: i32, role: Role) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1 AND role = $2")
            .bind(id)
            .bind(role)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    pub async fn count_by_role(&self, role: Role) -> Result<i64, AppError> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE role = $1")
            .bind(role)
            .fetch_one(&self.pool)
            .await?;

        Ok(result.0)
    }

    pub async fn update_account(
        &self,
        id: i32,
        name: Option<String>,
        email: Option<String>,
        role: Option<Role>,
    ) -> Result<User, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        let email = email.unwrap_or(current.email);

        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET name = $2, email = $3, role = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name.unwrap_or(current.name))
        .bind(&email)
        .bind(role.unwrap_or(current.role))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.code().as_deref() == Some(UNIQUE_VIOLATION) => {
                AppError::DuplicateEmail(email.clone())
            }
            _ => AppError::Database(e),
        })?;

        Ok(user)
    }

    pub async fn update_driver_profile(
        &self,
        id: i32,
        name: Option<String>,
        email: Option<String>,
        phone: Option<String>,
        license_number: Option<String>,
        status: Option<String>,
        joined_date: Option<chrono::NaiveDate>,
        avatar_url: Option<String>,
    ) -> Result<User, AppError> {
        let current = self
            .find_by_id_and_role(id, Role::Driver)
            .await?
            .ok_or_else(|| AppError::NotFound("Conductor no encontrado".to_string()))?;

        let email = email.unwrap_or(current.email);

        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET name = $2, email = $3, phone = $4, license_number = $5,
                status = $6, joined_date = $7, avatar_url = $8
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name.unwrap_or(current.name))
        .bind(&email)
        .bind(phone.or(current.phone))
        .bind(license_number.or(current.license_number))
        .bind(status.or(current.status))
        .bind(joined_date.or(current.joined_date))
        .bind(avatar_url.or(current.avatar_url))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.code().as_deref() == Some(UNIQUE_VIOLATION) => {
                AppError::DuplicateEmail(email.clone())
            }
            _ => AppError::Database(e),
        })?;

        Ok(user)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) => {
                    AppError::Conflict("El usuario tiene viajes o cargas asociadas".to_string())
                }
                _ => AppError::Database(e),
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Usuario no encontrado".to_string()));
        }

        Ok(())
    }

    pub async fn set_verification_token(
        &self,
        id: i32,
        token: &str,
        expiry: DateTime<Utc>,
    ) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET email_verification_token = $2, email_verification_token_expiry = $3
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(token)
        .bind(expiry)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Usuario no encontrado".to_string()));
        }

        Ok(())
    }

    pub async fn set_reset_token(
        &self,
        id: i32,
        token: &str,
        expiry: DateTime<Utc>,
    ) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET password_reset_token = $2, password_reset_token_expiry = $3
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(token)
        .bind(expiry)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Usuario no encontrado".to_string()));
        }

        Ok(())
    }

    /// Consume el token de verificación de forma atómica: la fila se
    /// bloquea con FOR UPDATE, se valida la vigencia y el par
    /// token/expiry se limpia en la misma transacción. Un segundo
    /// consumidor concurrente ve la fila ya limpia y recibe InvalidToken.
    pub async fn consume_verification_token(&self, token: &str) -> Result<User, AppError> {
        let mut tx = self.pool.begin().await?;

        let user = sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE email_verification_token = $1 FOR UPDATE",
        )
        .bind(token)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(AppError::InvalidToken)?;

        if user.verification_token_expired(Utc::now()) {
            return Err(AppError::ExpiredToken);
        }

        let updated = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET email_verification_token = NULL, email_verification_token_expiry = NULL
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(user.id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(updated)
    }

    /// Igual que `consume_verification_token`, sobre el par de reset.
    pub async fn consume_reset_token(&self, token: &str) -> Result<User, AppError> {
        let mut tx = self.pool.begin().await?;

        let user = sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE password_reset_token = $1 FOR UPDATE",
        )
        .bind(token)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(AppError::InvalidToken)?;

        if user.reset_token_expired(Utc::now()) {
            return Err(AppError::ExpiredToken);
        }

        let updated = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET password_reset_token = NULL, password_reset_token_expiry = NULL
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(user.id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(updated)
    }

    pub async fn set_password(
        &self,
        id: i32,
        password_hash: &str,
        password_change_required: bool,
    ) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET password_hash = $2, password_change_required = $3
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(password_hash)
        .bind(password_change_required)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        Ok(user)
    }

    pub async fn mark_email_verified(&self, id: i32) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            "UPDATE users SET email_verified = TRUE WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        Ok(user)
    }

    /// Primer login de una cuenta invitada: fija la contraseña, marca el
    /// email verificado y levanta el flag de cambio obligatorio.
    pub async fn activate_with_password(&self, id: i32, password_hash: &str) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET password_hash = $2, email_verified = TRUE, password_change_required = FALSE
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(password_hash)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        Ok(user)
    }
}
