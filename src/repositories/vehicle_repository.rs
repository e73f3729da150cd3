//! Repositorio de vehículos

use sqlx::PgPool;

use crate::models::vehicle::{Vehicle, VehicleStatus};
use crate::utils::errors::AppError;

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        make: String,
        model: String,
        license_plate: String,
        vehicle_type: String,
        status: VehicleStatus,
        year: Option<i32>,
        current_odometer: f64,
        fuel_level: Option<String>,
        last_service_date: Option<chrono::NaiveDate>,
    ) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (
                make, model, license_plate, vehicle_type, status, year,
                current_odometer, fuel_level, last_service_date
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(make)
        .bind(model)
        .bind(&license_plate)
        .bind(vehicle_type)
        .bind(status)
        .bind(year)
        .bind(current_odometer)
        .bind(fuel_level)
        .bind(last_service_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.code().as_deref() == Some(UNIQUE_VIOLATION) => {
                AppError::Conflict(format!(
                    "Vehicle with license_plate '{}' already exists",
                    license_plate
                ))
            }
            _ => AppError::Database(e),
        })?;

        Ok(vehicle)
    }

    pub async fn find_all(&self) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(vehicles)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    pub async fn license_plate_exists(&self, license_plate: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM vehicles WHERE license_plate = $1)")
                .bind(license_plate)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM vehicles")
            .fetch_one(&self.pool)
            .await?;

        Ok(result.0)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: i32,
        make: Option<String>,
        model: Option<String>,
        license_plate: Option<String>,
        vehicle_type: Option<String>,
        status: Option<VehicleStatus>,
        year: Option<i32>,
        current_odometer: Option<f64>,
        fuel_level: Option<String>,
        last_service_date: Option<chrono::NaiveDate>,
    ) -> Result<Vehicle, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        let license_plate = license_plate.unwrap_or(current.license_plate);

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET make = $2, model = $3, license_plate = $4, vehicle_type = $5, status = $6,
                year = $7, current_odometer = $8, fuel_level = $9, last_service_date = $10
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(make.unwrap_or(current.make))
        .bind(model.unwrap_or(current.model))
        .bind(&license_plate)
        .bind(vehicle_type.unwrap_or(current.vehicle_type))
        .bind(status.unwrap_or(current.status))
        .bind(year.or(current.year))
        .bind(current_odometer.unwrap_or(current.current_odometer))
        .bind(fuel_level.or(current.fuel_level))
        .bind(last_service_date.or(current.last_service_date))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.code().as_deref() == Some(UNIQUE_VIOLATION) => {
                AppError::Conflict(format!(
                    "Vehicle with license_plate '{}' already exists",
                    license_plate
                ))
            }
            _ => AppError::Database(e),
        })?;

        Ok(vehicle)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) => {
                    AppError::Conflict("El vehículo tiene viajes o cargas asociadas".to_string())
                }
                _ => AppError::Database(e),
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Vehículo no encontrado".to_string()));
        }

        Ok(())
    }
}
