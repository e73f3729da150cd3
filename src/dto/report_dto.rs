//! DTOs de reportes

use serde::Serialize;

/// Resumen general del sistema
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemOverviewResponse {
    pub total_vehicles: i64,
    pub total_drivers: i64,
    pub active_trips: i64,
}
