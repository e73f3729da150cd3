//! Repositorio de viajes
//! 
//! CRUD de viajes y las transiciones del ciclo de vida. `start` y
//! `complete` corren en una transacción con locks de fila sobre el
//! viaje y su vehículo: o se escriben ambas filas o ninguna.

use chrono::Utc;
use sqlx::PgPool;

use crate::models::trip::{Trip, TripStatus};
use crate::models::vehicle::{Vehicle, VehicleStatus};
use crate::utils::errors::AppError;

const FOREIGN_KEY_VIOLATION: &str = "23503";

pub struct TripRepository {
    pool: PgPool,
}

impl TripRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        start_location: String,
        end_location: String,
        driver_id: i32,
        vehicle_id: i32,
        requester_id: Option<i32>,
        distance: Option<String>,
        notes: Option<String>,
    ) -> Result<Trip, AppError> {
        let trip = sqlx::query_as::<_, Trip>(
            r#"
            INSERT INTO trips (
                start_location, end_location, status, driver_id, vehicle_id,
                requester_id, distance, notes
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(start_location)
        .bind(end_location)
        .bind(TripStatus::Assigned)
        .bind(driver_id)
        .bind(vehicle_id)
        .bind(requester_id)
        .bind(distance)
        .bind(notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) => {
                AppError::NotFound("Conductor o vehículo referenciado no existe".to_string())
            }
            _ => AppError::Database(e),
        })?;

        Ok(trip)
    }

    pub async fn find_all(&self) -> Result<Vec<Trip>, AppError> {
        let trips = sqlx::query_as::<_, Trip>("SELECT * FROM trips ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(trips)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Trip>, AppError> {
        let trip = sqlx::query_as::<_, Trip>("SELECT * FROM trips WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(trip)
    }

    pub async fn find_by_driver(&self, driver_id: i32) -> Result<Vec<Trip>, AppError> {
        let trips = sqlx::query_as::<_, Trip>("SELECT * FROM trips WHERE driver_id = $1 ORDER BY id")
            .bind(driver_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(trips)
    }

    pub async fn find_by_requester(&self, requester_id: i32) -> Result<Vec<Trip>, AppError> {
        let trips =
            sqlx::query_as::<_, Trip>("SELECT * FROM trips WHERE requester_id = $1 ORDER BY id")
                .bind(requester_id)
                .fetch_all(&self.pool)
                .await?;

        Ok(trips)
    }

    pub async fn find_by_status(&self, status: TripStatus) -> Result<Vec<Trip>, AppError> {
        let trips = sqlx::query_as::<_, Trip>("SELECT * FROM trips WHERE status = $1 ORDER BY id")
            .bind(status)
            .fetch_all(&self.pool)
            .await?;

        Ok(trips)
    }

    pub async fn count_by_status(&self, status: TripStatus) -> Result<i64, AppError> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM trips WHERE status = $1")
            .bind(status)
            .fetch_one(&self.pool)
            .await?;

        Ok(result.0)
    }

    /// Actualización parcial sin pasar por el ciclo de vida. No toca
    /// odómetros, combustible ni el vehículo.
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: i32,
        start_location: Option<String>,
        end_location: Option<String>,
        start_time: Option<chrono::DateTime<Utc>>,
        end_time: Option<chrono::DateTime<Utc>>,
        status: Option<TripStatus>,
        driver_id: Option<i32>,
        vehicle_id: Option<i32>,
        requester_id: Option<i32>,
        distance: Option<String>,
    ) -> Result<Trip, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Viaje no encontrado".to_string()))?;

        let trip = sqlx::query_as::<_, Trip>(
            r#"
            UPDATE trips
            SET start_location = $2, end_location = $3, start_time = $4, end_time = $5,
                status = $6, driver_id = $7, vehicle_id = $8, requester_id = $9, distance = $10
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(start_location.unwrap_or(current.start_location))
        .bind(end_location.unwrap_or(current.end_location))
        .bind(start_time.or(current.start_time))
        .bind(end_time.or(current.end_time))
        .bind(status.unwrap_or(current.status))
        .bind(driver_id.unwrap_or(current.driver_id))
        .bind(vehicle_id.unwrap_or(current.vehicle_id))
        .bind(requester_id.or(current.requester_id))
        .bind(distance.or(current.distance))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) => {
                AppError::NotFound("Conductor o vehículo referenciado no existe".to_string())
            }
            _ => AppError::Database(e),
        })?;

        Ok(trip)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM trips WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Viaje no encontrado".to_string()));
        }

        Ok(())
    }

    /// ASSIGNED -> STARTED. Congela el odómetro del vehículo como
    /// `start_odometer` y marca el vehículo IN_USE. El lock de fila
    /// serializa transiciones concurrentes: el perdedor relee el estado
    /// nuevo y falla con InvalidTransition.
    pub async fn start(&self, id: i32) -> Result<Trip, AppError> {
        let mut tx = self.pool.begin().await?;

        let trip = sqlx::query_as::<_, Trip>("SELECT * FROM trips WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound("Viaje no encontrado".to_string()))?;

        if !trip.status.can_start() {
            return Err(AppError::InvalidTransition(format!(
                "No se puede iniciar un viaje en estado {}",
                trip.status.as_str()
            )));
        }

        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1 FOR UPDATE")
            .bind(trip.vehicle_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        sqlx::query("UPDATE vehicles SET status = $2 WHERE id = $1")
            .bind(vehicle.id)
            .bind(VehicleStatus::InUse)
            .execute(&mut *tx)
            .await?;

        let updated = sqlx::query_as::<_, Trip>(
            r#"
            UPDATE trips
            SET status = $2, start_time = $3, start_odometer = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(TripStatus::Started)
        .bind(Utc::now())
        .bind(vehicle.current_odometer)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(updated)
    }

    /// STARTED -> COMPLETED. Copia `end_odometer` al odómetro del
    /// vehículo y lo libera como AVAILABLE, en la misma transacción.
    pub async fn complete(
        &self,
        id: i32,
        end_odometer: f64,
        fuel_consumed: Option<f64>,
        notes: Option<String>,
    ) -> Result<Trip, AppError> {
        let mut tx = self.pool.begin().await?;

        let trip = sqlx::query_as::<_, Trip>("SELECT * FROM trips WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound("Viaje no encontrado".to_string()))?;

        if !trip.status.can_complete() {
            return Err(AppError::InvalidTransition(format!(
                "No se puede completar un viaje en estado {}",
                trip.status.as_str()
            )));
        }

        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1 FOR UPDATE")
            .bind(trip.vehicle_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        sqlx::query("UPDATE vehicles SET status = $2, current_odometer = $3 WHERE id = $1")
            .bind(vehicle.id)
            .bind(VehicleStatus::Available)
            .bind(end_odometer)
            .execute(&mut *tx)
            .await?;

        let updated = sqlx::query_as::<_, Trip>(
            r#"
            UPDATE trips
            SET status = $2, end_time = $3, end_odometer = $4, fuel_consumed = $5, notes = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(TripStatus::Completed)
        .bind(Utc::now())
        .bind(end_odometer)
        .bind(fuel_consumed)
        .bind(notes)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(updated)
    }
}
