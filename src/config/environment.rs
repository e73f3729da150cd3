//! Configuración de variables de entorno
//! 
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::env;

/// Modo de alta de cuentas. Uno solo está activo por despliegue:
/// o los administradores invitan (admin_invite) o los usuarios se
/// registran solos y verifican su email (self_service).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupMode {
    AdminInvite,
    SelfService,
}

impl SignupMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "admin_invite" => Some(Self::AdminInvite),
            "self_service" => Some(Self::SelfService),
            _ => None,
        }
    }
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub jwt_secret: String,
    pub jwt_expiration: u64,
    pub cors_origins: Vec<String>,
    pub signup_mode: SignupMode,
    // Cuenta admin sembrada al arrancar
    pub admin_email: String,
    pub admin_password: String,
    // API de email; sin configurar, los enlaces quedan en el log
    pub email_api_url: Option<String>,
    pub email_api_key: Option<String>,
    pub frontend_base_url: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            jwt_secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            jwt_expiration: env::var("JWT_EXPIRATION")
                .unwrap_or_else(|_| "86400".to_string())
                .parse()
                .expect("JWT_EXPIRATION must be a valid number"),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            signup_mode: env::var("SIGNUP_MODE")
                .map(|value| {
                    SignupMode::parse(&value)
                        .expect("SIGNUP_MODE must be admin_invite or self_service")
                })
                .unwrap_or(SignupMode::AdminInvite),
            admin_email: env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@fleet.com".to_string()),
            admin_password: env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "password".to_string()),
            email_api_url: env::var("EMAIL_API_URL").ok(),
            email_api_key: env::var("EMAIL_API_KEY").ok(),
            frontend_base_url: env::var("FRONTEND_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
        }
    }
}

impl EnvironmentConfig {
    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
