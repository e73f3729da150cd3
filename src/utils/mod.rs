//! Utilidades del sistema
//! 
//! Este módulo contiene utilidades para manejo de errores, JWT
//! y generación de secretos.

pub mod errors;
pub mod jwt;
pub mod security;
