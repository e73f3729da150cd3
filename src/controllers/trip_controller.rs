//! Controller de viajes
//!
//! CRUD de viajes más las dos transiciones del ciclo de vida. Las
//! transiciones delegan en el repository, que las ejecuta en una
//! transacción junto con el vehículo.

use sqlx::PgPool;
use tracing::info;
use validator::Validate;

use crate::dto::auth_dto::ApiResponse;
use crate::dto::trip_dto::{CompleteTripRequest, CreateTripRequest, TripResponse, UpdateTripRequest};
use crate::models::trip::TripStatus;
use crate::repositories::trip_repository::TripRepository;
use crate::utils::errors::{not_found_error, AppError};

pub struct TripController {
    repository: TripRepository,
}

impl TripController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: TripRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateTripRequest,
    ) -> Result<ApiResponse<TripResponse>, AppError> {
        request.validate()?;

        let trip = self
            .repository
            .create(
                request.start_location,
                request.end_location,
                request.driver_id,
                request.vehicle_id,
                request.requester_id,
                request.distance,
                request.notes,
            )
            .await?;

        info!("🚗 Viaje {} asignado al conductor {}", trip.id, trip.driver_id);

        Ok(ApiResponse::success_with_message(
            TripResponse::from(trip),
            "Viaje creado exitosamente".to_string(),
        ))
    }

    pub async fn get_all(&self) -> Result<Vec<TripResponse>, AppError> {
        let trips = self.repository.find_all().await?;

        Ok(trips.into_iter().map(TripResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<TripResponse, AppError> {
        let trip = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Trip", id))?;

        Ok(TripResponse::from(trip))
    }

    pub async fn get_by_driver(&self, driver_id: i32) -> Result<Vec<TripResponse>, AppError> {
        let trips = self.repository.find_by_driver(driver_id).await?;

        Ok(trips.into_iter().map(TripResponse::from).collect())
    }

    pub async fn get_by_requester(&self, requester_id: i32) -> Result<Vec<TripResponse>, AppError> {
        let trips = self.repository.find_by_requester(requester_id).await?;

        Ok(trips.into_iter().map(TripResponse::from).collect())
    }

    pub async fn get_by_status(&self, status: TripStatus) -> Result<Vec<TripResponse>, AppError> {
        let trips = self.repository.find_by_status(status).await?;

        Ok(trips.into_iter().map(TripResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: i32,
        request: UpdateTripRequest,
    ) -> Result<ApiResponse<TripResponse>, AppError> {
        request.validate()?;

        let trip = self
            .repository
            .update(
                id,
                request.start_location,
                request.end_location,
                request.start_time,
                request.end_time,
                request.status,
                request.driver_id,
                request.vehicle_id,
                request.requester_id,
                request.distance,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            TripResponse::from(trip),
            "Viaje actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.repository.delete(id).await
    }

    /// ASSIGNED -> STARTED. Congela el odómetro del vehículo como
    /// startOdometer y lo marca IN_USE.
    pub async fn start(&self, id: i32) -> Result<ApiResponse<TripResponse>, AppError> {
        let trip = self.repository.start(id).await?;

        info!("🚦 Viaje {} iniciado, vehículo {} en uso", trip.id, trip.vehicle_id);

        Ok(ApiResponse::success_with_message(
            TripResponse::from(trip),
            "Viaje iniciado".to_string(),
        ))
    }

    /// STARTED -> COMPLETED. Registra lectura final y libera el vehículo.
    pub async fn complete(
        &self,
        id: i32,
        request: CompleteTripRequest,
    ) -> Result<ApiResponse<TripResponse>, AppError> {
        request.validate()?;

        let trip = self
            .repository
            .complete(id, request.end_odometer, request.fuel_consumed, request.notes)
            .await?;

        info!("🏁 Viaje {} completado, vehículo {} disponible", trip.id, trip.vehicle_id);

        Ok(ApiResponse::success_with_message(
            TripResponse::from(trip),
            "Viaje completado".to_string(),
        ))
    }
}
