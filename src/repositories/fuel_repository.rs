//! Repositorio de registros de combustible
//! 
//! Solo inserción y lectura: los registros no se modifican.

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::models::fuel_record::FuelRecord;
use crate::utils::errors::AppError;

const FOREIGN_KEY_VIOLATION: &str = "23503";

pub struct FuelRepository {
    pool: PgPool,
}

impl FuelRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        vehicle_id: i32,
        driver_id: i32,
        quantity: f64,
        cost: f64,
        mileage: Option<f64>,
        date: NaiveDate,
    ) -> Result<FuelRecord, AppError> {
        let record = sqlx::query_as::<_, FuelRecord>(
            r#"
            INSERT INTO fuel_records (vehicle_id, driver_id, quantity, cost, mileage, date)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(vehicle_id)
        .bind(driver_id)
        .bind(quantity)
        .bind(cost)
        .bind(mileage)
        .bind(date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) => {
                AppError::NotFound("Vehículo o conductor referenciado no existe".to_string())
            }
            _ => AppError::Database(e),
        })?;

        Ok(record)
    }

    pub async fn find_all(&self) -> Result<Vec<FuelRecord>, AppError> {
        let records =
            sqlx::query_as::<_, FuelRecord>("SELECT * FROM fuel_records ORDER BY date DESC, id DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(records)
    }

    pub async fn find_by_vehicle(&self, vehicle_id: i32) -> Result<Vec<FuelRecord>, AppError> {
        let records = sqlx::query_as::<_, FuelRecord>(
            "SELECT * FROM fuel_records WHERE vehicle_id = $1 ORDER BY date DESC, id DESC",
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }
}
