pub mod auth_controller;
pub mod driver_controller;
pub mod fuel_controller;
pub mod report_controller;
pub mod trip_controller;
pub mod user_controller;
pub mod vehicle_controller;
