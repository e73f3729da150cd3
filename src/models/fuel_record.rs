//! Modelo de FuelRecord
//! 
//! Registros de carga de combustible. Son append-only: no se
//! actualizan ni se borran una vez creados.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// FuelRecord principal - mapea exactamente a la tabla fuel_records
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FuelRecord {
    pub id: i32,
    pub vehicle_id: i32,
    pub driver_id: i32,
    pub quantity: f64,
    pub cost: f64,
    pub mileage: Option<f64>,
    pub date: NaiveDate,
}
