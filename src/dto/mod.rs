pub mod auth_dto;
pub mod driver_dto;
pub mod fuel_dto;
pub mod report_dto;
pub mod trip_dto;
pub mod user_dto;
pub mod vehicle_dto;
