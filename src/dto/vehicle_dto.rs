//! DTOs de vehículos

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::vehicle::{Vehicle, VehicleStatus};

/// Request para crear un nuevo vehículo
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1, max = 100))]
    pub make: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(length(min = 2, max = 20))]
    pub license_plate: String,

    #[serde(rename = "type")]
    #[validate(length(min = 2, max = 50))]
    pub vehicle_type: String,

    pub status: Option<VehicleStatus>,

    #[validate(range(min = 1900, max = 2100))]
    pub year: Option<i32>,

    #[validate(range(min = 0.0))]
    pub current_odometer: Option<f64>,

    pub fuel_level: Option<String>,

    pub last_service_date: Option<NaiveDate>,
}

/// Request para actualizar un vehículo existente
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 1, max = 100))]
    pub make: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub model: Option<String>,

    #[validate(length(min = 2, max = 20))]
    pub license_plate: Option<String>,

    #[serde(rename = "type")]
    #[validate(length(min = 2, max = 50))]
    pub vehicle_type: Option<String>,

    pub status: Option<VehicleStatus>,

    #[validate(range(min = 1900, max = 2100))]
    pub year: Option<i32>,

    #[validate(range(min = 0.0))]
    pub current_odometer: Option<f64>,

    pub fuel_level: Option<String>,

    pub last_service_date: Option<NaiveDate>,
}

/// Response de vehículo para la API
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleResponse {
    pub id: i32,
    pub make: String,
    pub model: String,
    pub license_plate: String,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub status: VehicleStatus,
    pub year: Option<i32>,
    pub current_odometer: f64,
    pub fuel_level: Option<String>,
    pub last_service_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            make: vehicle.make,
            model: vehicle.model,
            license_plate: vehicle.license_plate,
            vehicle_type: vehicle.vehicle_type,
            status: vehicle.status,
            year: vehicle.year,
            current_odometer: vehicle.current_odometer,
            fuel_level: vehicle.fuel_level,
            last_service_date: vehicle.last_service_date,
            created_at: vehicle.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_response_wire_casing() {
        let vehicle = Vehicle {
            id: 1,
            make: "Toyota".to_string(),
            model: "Hilux".to_string(),
            license_plate: "AB-123-CD".to_string(),
            vehicle_type: "PICKUP".to_string(),
            status: VehicleStatus::Available,
            year: Some(2022),
            current_odometer: 1000.0,
            fuel_level: Some("75%".to_string()),
            last_service_date: None,
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(VehicleResponse::from(vehicle)).unwrap();
        assert_eq!(value["licensePlate"], "AB-123-CD");
        assert_eq!(value["type"], "PICKUP");
        assert_eq!(value["currentOdometer"], 1000.0);
        assert_eq!(value["status"], "AVAILABLE");
    }

    #[test]
    fn test_create_request_parses_type_key() {
        let request: CreateVehicleRequest = serde_json::from_value(serde_json::json!({
            "make": "Renault",
            "model": "Kangoo",
            "licensePlate": "XY-999-ZZ",
            "type": "VAN"
        }))
        .unwrap();

        assert_eq!(request.vehicle_type, "VAN");
        assert!(request.status.is_none());
    }
}
