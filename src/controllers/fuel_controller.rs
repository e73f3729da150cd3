//! Controller de cargas de combustible

use sqlx::PgPool;
use validator::Validate;

use crate::dto::auth_dto::ApiResponse;
use crate::dto::fuel_dto::{CreateFuelRecordRequest, FuelRecordResponse};
use crate::repositories::fuel_repository::FuelRepository;
use crate::utils::errors::AppError;

pub struct FuelController {
    repository: FuelRepository,
}

impl FuelController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: FuelRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateFuelRecordRequest,
    ) -> Result<ApiResponse<FuelRecordResponse>, AppError> {
        request.validate()?;

        let record = self
            .repository
            .create(
                request.vehicle_id,
                request.driver_id,
                request.quantity,
                request.cost,
                request.mileage,
                request.date,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            FuelRecordResponse::from(record),
            "Carga registrada exitosamente".to_string(),
        ))
    }

    pub async fn get_all(&self) -> Result<Vec<FuelRecordResponse>, AppError> {
        let records = self.repository.find_all().await?;

        Ok(records.into_iter().map(FuelRecordResponse::from).collect())
    }

    pub async fn get_by_vehicle(&self, vehicle_id: i32) -> Result<Vec<FuelRecordResponse>, AppError> {
        let records = self.repository.find_by_vehicle(vehicle_id).await?;

        Ok(records.into_iter().map(FuelRecordResponse::from).collect())
    }
}
