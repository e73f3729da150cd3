//! Servicio de email
//! 
//! Envío de los correos de verificación y reset a través de una API
//! HTTP de email. Los callers lo disparan con tokio::spawn y nunca
//! esperan la entrega. Sin EMAIL_API_URL configurada el enlace queda
//! en el log, suficiente para desarrollo.

use reqwest::Client;
use serde::Serialize;
use tracing::{error, info};

use crate::config::environment::EnvironmentConfig;

#[derive(Debug, Serialize)]
struct EmailPayload {
    to: String,
    subject: String,
    html_body: String,
}

#[derive(Clone)]
pub struct MailerService {
    client: Client,
    api_url: Option<String>,
    api_key: Option<String>,
    frontend_base_url: String,
}

impl MailerService {
    pub fn from_config(config: &EnvironmentConfig) -> Self {
        Self {
            client: Client::new(),
            api_url: config.email_api_url.clone(),
            api_key: config.email_api_key.clone(),
            frontend_base_url: config.frontend_base_url.clone(),
        }
    }

    pub async fn send_verification_email(&self, to: &str, token: &str) {
        let link = format!("{}/verify-email?token={}", self.frontend_base_url, token);
        let body = format!(
            "<p>Bienvenido a FleetPro.</p>\
             <p>Confirma tu cuenta desde <a href=\"{}\">este enlace</a>. Vence en 24 horas.</p>",
            link
        );

        self.dispatch(to, "Verifica tu cuenta", body, &link).await;
    }

    pub async fn send_reset_email(&self, to: &str, token: &str) {
        let link = format!("{}/reset-password?token={}", self.frontend_base_url, token);
        let body = format!(
            "<p>Recibimos un pedido para restablecer tu contraseña.</p>\
             <p>Podes hacerlo desde <a href=\"{}\">este enlace</a>. Vence en 1 hora.</p>",
            link
        );

        self.dispatch(to, "Restablecer contraseña", body, &link).await;
    }

    async fn dispatch(&self, to: &str, subject: &str, html_body: String, link: &str) {
        let (api_url, api_key) = match (self.api_url.as_ref(), self.api_key.as_ref()) {
            (Some(url), Some(key)) => (url, key),
            _ => {
                info!("📧 Email API no configurada; enlace para {}: {}", to, link);
                return;
            }
        };

        let payload = EmailPayload {
            to: to.to_string(),
            subject: subject.to_string(),
            html_body,
        };

        let result = self
            .client
            .post(api_url)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => {
                info!("📧 Email '{}' enviado a {}", subject, to);
            }
            Ok(response) => {
                error!(
                    "❌ Email API devolvió {} enviando '{}' a {}",
                    response.status(),
                    subject,
                    to
                );
            }
            Err(e) => {
                error!("❌ Error enviando email '{}' a {}: {}", subject, to, e);
            }
        }
    }
}
