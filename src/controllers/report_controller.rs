//! Controller de reportes
//!
//! Agrega conteos de las tablas principales; las tres consultas
//! corren en paralelo.

use sqlx::PgPool;

use crate::dto::report_dto::SystemOverviewResponse;
use crate::models::trip::TripStatus;
use crate::models::user::Role;
use crate::repositories::trip_repository::TripRepository;
use crate::repositories::user_repository::UserRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;

pub struct ReportController {
    users: UserRepository,
    vehicles: VehicleRepository,
    trips: TripRepository,
}

impl ReportController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool.clone()),
            trips: TripRepository::new(pool),
        }
    }

    pub async fn system_overview(&self) -> Result<SystemOverviewResponse, AppError> {
        let (total_vehicles, total_drivers, active_trips) = futures::try_join!(
            self.vehicles.count(),
            self.users.count_by_role(Role::Driver),
            self.trips.count_by_status(TripStatus::Started),
        )?;

        Ok(SystemOverviewResponse {
            total_vehicles,
            total_drivers,
            active_trips,
        })
    }
}
