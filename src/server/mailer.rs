//! Outbound email, dispatched as detached background tasks.
//!
//! Email never blocks or fails the triggering request: `send_later` spawns a
//! task, logs the outcome, and returns immediately without retaining a
//! handle. A deployment without SMTP settings gets a disabled mailer that
//! only logs.

use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::sync::Arc;

use crate::server::config::SmtpConfig;
use crate::server::error::config::ConfigError;

struct MailerInner {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

#[derive(Clone)]
pub struct Mailer {
    inner: Option<Arc<MailerInner>>,
}

impl Mailer {
    pub fn from_config(config: &SmtpConfig) -> Result<Self, ConfigError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| ConfigError::InvalidVariable("SMTP_HOST", e.to_string()))?
            .credentials(Credentials::new(
                config.email.clone(),
                config.password.clone(),
            ))
            .build();

        let from = config
            .email
            .parse()
            .map_err(|_| ConfigError::InvalidVariable("SMTP_EMAIL", config.email.clone()))?;

        Ok(Self {
            inner: Some(Arc::new(MailerInner { transport, from })),
        })
    }

    /// Mailer that drops every message; used in tests and SMTP-less deployments.
    pub fn disabled() -> Self {
        Self { inner: None }
    }

    /// Queues a message on a detached task. Failures are logged, never returned.
    pub fn send_later(&self, to: String, subject: String, body: String) {
        let Some(inner) = self.inner.clone() else {
            tracing::debug!(to = %to, subject = %subject, "Mailer disabled, dropping email");
            return;
        };

        tokio::spawn(async move {
            let recipient = match to.parse::<Mailbox>() {
                Ok(recipient) => recipient,
                Err(e) => {
                    tracing::error!("Invalid recipient address {:?}: {}", to, e);
                    return;
                }
            };

            let message = Message::builder()
                .from(inner.from.clone())
                .to(recipient)
                .subject(subject)
                .body(body);

            let message = match message {
                Ok(message) => message,
                Err(e) => {
                    tracing::error!("Failed to build email for {}: {}", to, e);
                    return;
                }
            };

            match inner.transport.send(message).await {
                Ok(_) => tracing::info!("Email sent to {}", to),
                Err(e) => tracing::error!("Failed to send email to {}: {}", to, e),
            }
        });
    }

    pub fn send_welcome(&self, to: &str, name: &str) {
        let subject = "Bienvenido a la Plataforma de Pasantías".to_string();
        let body = format!(
            "Hola {name},\n\n\
             Gracias por registrarte en la plataforma de gestión de pasantías.\n\
             Tu cuenta ha sido creada exitosamente.\n\n\
             Ya puedes iniciar sesión y completar tu perfil.\n\n\
             Saludos,\nEquipo de Vinculación"
        );

        self.send_later(to.to_string(), subject, body);
    }

    pub fn send_appointment_confirmation(
        &self,
        to: &str,
        name: &str,
        company: &str,
        date: &str,
        time: &str,
    ) {
        let subject = "Cita Agendada - Plataforma de Pasantías".to_string();
        let body = format!(
            "Hola {name},\n\n\
             Tu cita con {company} ha sido confirmada para el {date} a las {time}.\n\n\
             ¡Éxitos!"
        );

        self.send_later(to.to_string(), subject, body);
    }
}
