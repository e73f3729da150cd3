//! FleetPro - Backend de gestión de flota
//!
//! API REST para administrar vehículos, conductores, viajes y cargas
//! de combustible, con cuentas autenticadas por JWT.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
