//! Modelo de Vehicle
//! 
//! Este módulo contiene el struct Vehicle y su enum de estado.
//! Mapea exactamente al schema PostgreSQL con primary key 'id'.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};

/// Estado del vehículo - se persiste como TEXT
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleStatus {
    Available,
    InUse,
    Maintenance,
}

impl VehicleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "AVAILABLE",
            VehicleStatus::InUse => "IN_USE",
            VehicleStatus::Maintenance => "MAINTENANCE",
        }
    }
}

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: i32,
    pub make: String,
    pub model: String,
    pub license_plate: String,
    pub vehicle_type: String,
    pub status: VehicleStatus,
    pub year: Option<i32>,
    pub current_odometer: f64,
    pub fuel_level: Option<String>,
    pub last_service_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_screaming_snake_case() {
        assert_eq!(serde_json::to_value(VehicleStatus::Available).unwrap(), "AVAILABLE");
        assert_eq!(serde_json::to_value(VehicleStatus::InUse).unwrap(), "IN_USE");
        assert_eq!(serde_json::to_value(VehicleStatus::Maintenance).unwrap(), "MAINTENANCE");
    }

    #[test]
    fn test_status_deserializes_from_wire_values() {
        let status: VehicleStatus = serde_json::from_value(serde_json::json!("IN_USE")).unwrap();
        assert_eq!(status, VehicleStatus::InUse);
    }
}
