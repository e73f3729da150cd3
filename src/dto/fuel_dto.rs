//! DTOs de registros de combustible

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::fuel_record::FuelRecord;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFuelRecordRequest {
    pub vehicle_id: i32,
    pub driver_id: i32,

    #[validate(range(min = 0.0))]
    pub quantity: f64,

    #[validate(range(min = 0.0))]
    pub cost: f64,

    #[validate(range(min = 0.0))]
    pub mileage: Option<f64>,

    pub date: NaiveDate,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelRecordResponse {
    pub id: i32,
    pub vehicle_id: i32,
    pub driver_id: i32,
    pub quantity: f64,
    pub cost: f64,
    pub mileage: Option<f64>,
    pub date: NaiveDate,
}

impl From<FuelRecord> for FuelRecordResponse {
    fn from(record: FuelRecord) -> Self {
        Self {
            id: record.id,
            vehicle_id: record.vehicle_id,
            driver_id: record.driver_id,
            quantity: record.quantity,
            cost: record.cost,
            mileage: record.mileage,
            date: record.date,
        }
    }
}
