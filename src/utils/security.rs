//! Utilidades de seguridad
//!
//! Este módulo genera los secretos de la aplicación: tokens opacos de un solo
//! uso, contraseñas temporales y emails sintéticos para altas de administrador.
//! Toda la aleatoriedad sale de OsRng (CSPRNG).

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use lazy_static::lazy_static;
use rand::rngs::OsRng;
use rand::{Rng, RngCore};
use regex::Regex;

use crate::models::user::Role;

/// Dominio de los emails generados para cuentas creadas por un administrador
pub const GENERATED_EMAIL_DOMAIN: &str = "fleetpro.com";

const TOKEN_BYTES: usize = 32;

lazy_static! {
    static ref NON_ALNUM: Regex = Regex::new(r"[^a-z0-9]+").unwrap();
}

/// Genera un token opaco para verificación de email o reset de contraseña
pub fn generate_opaque_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Genera una contraseña temporal con formato `Pass<dígitos>!`
pub fn generate_temp_password() -> String {
    let digits: u32 = OsRng.gen_range(0..1_000_000);
    format!("Pass{:06}!", digits)
}

/// Construye el email sintético `nombre.rol@fleetpro.com` para cuentas
/// creadas por un administrador. `suffix` 0 produce la forma base; valores
/// mayores se agregan a la parte local para resolver colisiones
/// (`jane.doe.driver1@fleetpro.com`, `...driver2@...`, etc.).
pub fn synthesize_email(name: &str, role: Role, suffix: u32) -> String {
    let local = sanitize_for_email(name);
    let role_part = role.as_str().to_lowercase();
    if suffix == 0 {
        format!("{}.{}@{}", local, role_part, GENERATED_EMAIL_DOMAIN)
    } else {
        format!("{}.{}{}@{}", local, role_part, suffix, GENERATED_EMAIL_DOMAIN)
    }
}

fn sanitize_for_email(name: &str) -> String {
    let lowered = name.to_lowercase();
    let replaced = NON_ALNUM.replace_all(&lowered, ".");
    replaced.trim_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opaque_tokens_are_urlsafe_and_distinct() {
        let a = generate_opaque_token();
        let b = generate_opaque_token();

        // 32 bytes -> 43 caracteres en base64 sin padding
        assert_eq!(a.len(), 43);
        assert_ne!(a, b);
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn test_temp_password_matches_pattern() {
        let pattern = Regex::new(r"^Pass\d+!$").unwrap();
        for _ in 0..20 {
            let password = generate_temp_password();
            assert!(pattern.is_match(&password), "password inesperada: {}", password);
        }
    }

    #[test]
    fn test_synthesize_email_basic() {
        let email = synthesize_email("Jane Doe", Role::Driver, 0);
        assert_eq!(email, "jane.doe.driver@fleetpro.com");
    }

    #[test]
    fn test_synthesize_email_with_suffix() {
        let email = synthesize_email("Jane Doe", Role::Driver, 1);
        assert_eq!(email, "jane.doe.driver1@fleetpro.com");

        let email = synthesize_email("Jane Doe", Role::Driver, 2);
        assert_eq!(email, "jane.doe.driver2@fleetpro.com");
    }

    #[test]
    fn test_synthesize_email_sanitizes_name() {
        let email = synthesize_email("  Mary-Ann  O'Neil ", Role::Manager, 0);
        assert_eq!(email, "mary.ann.o.neil.manager@fleetpro.com");
    }
}
