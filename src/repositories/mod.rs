//! Repositorios de acceso a datos
//!
//! Este módulo contiene las consultas SQL de cada recurso.

pub mod fuel_repository;
pub mod trip_repository;
pub mod user_repository;
pub mod vehicle_repository;
