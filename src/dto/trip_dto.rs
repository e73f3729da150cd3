//! DTOs de viajes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::trip::{Trip, TripStatus};

/// Request para crear un viaje. Siempre nace en ASSIGNED.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTripRequest {
    #[validate(length(min = 1, max = 255))]
    pub start_location: String,

    #[validate(length(min = 1, max = 255))]
    pub end_location: String,

    pub driver_id: i32,
    pub vehicle_id: i32,
    pub requester_id: Option<i32>,
    pub distance: Option<String>,
    pub notes: Option<String>,
}

/// Request de actualización parcial. `status` permite un override
/// administrativo fuera del ciclo start/complete; solo esos dos
/// endpoints tocan el vehículo. Las notas y odómetros se fijan en
/// el complete, no aquí.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTripRequest {
    #[validate(length(min = 1, max = 255))]
    pub start_location: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub end_location: Option<String>,

    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub status: Option<TripStatus>,
    pub driver_id: Option<i32>,
    pub vehicle_id: Option<i32>,
    pub requester_id: Option<i32>,
    pub distance: Option<String>,
}

/// Request de POST /api/trips/:id/complete
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CompleteTripRequest {
    #[validate(range(min = 0.0))]
    pub end_odometer: f64,

    #[validate(range(min = 0.0))]
    pub fuel_consumed: Option<f64>,

    pub notes: Option<String>,
}

/// Response de viaje para la API. Referencias por id plano.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripResponse {
    pub id: i32,
    pub start_location: String,
    pub end_location: String,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub status: TripStatus,
    pub driver_id: i32,
    pub vehicle_id: i32,
    pub requester_id: Option<i32>,
    pub start_odometer: Option<f64>,
    pub end_odometer: Option<f64>,
    pub fuel_consumed: Option<f64>,
    pub notes: Option<String>,
    pub distance: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Trip> for TripResponse {
    fn from(trip: Trip) -> Self {
        Self {
            id: trip.id,
            start_location: trip.start_location,
            end_location: trip.end_location,
            start_time: trip.start_time,
            end_time: trip.end_time,
            status: trip.status,
            driver_id: trip.driver_id,
            vehicle_id: trip.vehicle_id,
            requester_id: trip.requester_id,
            start_odometer: trip.start_odometer,
            end_odometer: trip.end_odometer,
            fuel_consumed: trip.fuel_consumed,
            notes: trip.notes,
            distance: trip.distance,
            created_at: trip.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trip_response_wire_casing() {
        let trip = Trip {
            id: 7,
            start_location: "Depot".to_string(),
            end_location: "Airport".to_string(),
            start_time: Some(Utc::now()),
            end_time: None,
            status: TripStatus::Started,
            driver_id: 3,
            vehicle_id: 5,
            requester_id: Some(2),
            start_odometer: Some(1000.0),
            end_odometer: None,
            fuel_consumed: None,
            notes: None,
            distance: Some("32 km".to_string()),
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(TripResponse::from(trip)).unwrap();
        assert_eq!(value["startLocation"], "Depot");
        assert_eq!(value["driverId"], 3);
        assert_eq!(value["startOdometer"], 1000.0);
        assert_eq!(value["status"], "STARTED");
        assert_eq!(value["distance"], "32 km");
    }

    #[test]
    fn test_complete_request_parses_camel_case() {
        let request: CompleteTripRequest = serde_json::from_value(serde_json::json!({
            "endOdometer": 1150.0,
            "fuelConsumed": 12.5,
            "notes": "ok"
        }))
        .unwrap();

        assert_eq!(request.end_odometer, 1150.0);
        assert_eq!(request.fuel_consumed, Some(12.5));
        assert_eq!(request.notes.as_deref(), Some("ok"));
    }
}
