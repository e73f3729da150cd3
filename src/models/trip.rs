//! Modelo de Trip
//! 
//! Este módulo contiene el struct Trip, su enum de estado y los predicados
//! del ciclo de vida ASSIGNED -> STARTED -> COMPLETED.
//! Mapea exactamente al schema PostgreSQL con primary key 'id'.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};

/// Estado del viaje - se persiste como TEXT
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TripStatus {
    Assigned,
    Started,
    Completed,
}

impl TripStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TripStatus::Assigned => "ASSIGNED",
            TripStatus::Started => "STARTED",
            TripStatus::Completed => "COMPLETED",
        }
    }

    /// Un viaje solo puede iniciarse desde ASSIGNED
    pub fn can_start(&self) -> bool {
        matches!(self, TripStatus::Assigned)
    }

    /// Un viaje solo puede completarse desde STARTED
    pub fn can_complete(&self) -> bool {
        matches!(self, TripStatus::Started)
    }
}

/// Trip principal - mapea exactamente a la tabla trips
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Trip {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_only_from_assigned() {
        assert!(TripStatus::Assigned.can_start());
        assert!(!TripStatus::Started.can_start());
        assert!(!TripStatus::Completed.can_start());
    }

    #[test]
    fn test_complete_only_from_started() {
        assert!(!TripStatus::Assigned.can_complete());
        assert!(TripStatus::Started.can_complete());
        assert!(!TripStatus::Completed.can_complete());
    }

    #[test]
    fn test_completed_is_terminal() {
        assert!(!TripStatus::Completed.can_start());
        assert!(!TripStatus::Completed.can_complete());
    }

    #[test]
    fn test_status_wire_format() {
        assert_eq!(serde_json::to_value(TripStatus::Assigned).unwrap(), "ASSIGNED");
        assert_eq!(serde_json::to_value(TripStatus::Started).unwrap(), "STARTED");
        assert_eq!(serde_json::to_value(TripStatus::Completed).unwrap(), "COMPLETED");

        let status: TripStatus = serde_json::from_value(serde_json::json!("STARTED")).unwrap();
        assert_eq!(status, TripStatus::Started);
    }
}
