//! Services module
//! 
//! Este módulo contiene la lógica de negocio que cruza varios
//! repositorios o integra servicios externos.

pub mod bootstrap;
pub mod mailer_service;
pub mod token_service;
