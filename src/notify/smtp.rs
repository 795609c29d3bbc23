// src/notify/smtp.rs

//! SMTP notifier backend.
//!
//! Relay host, addresses and message text come from `[email]` in the config;
//! credentials come from the `SMTP_USERNAME` / `SMTP_PASSWORD` environment
//! variables so they never land in a checked-in file.

use std::path::Path;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::error::{AppError, Result};
use crate::models::EmailConfig;
use crate::notify::Notifier;

const USERNAME_VAR: &str = "SMTP_USERNAME";
const PASSWORD_VAR: &str = "SMTP_PASSWORD";

/// Sends the results file as a CSV attachment over SMTP.
pub struct SmtpNotifier {
    config: EmailConfig,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpNotifier {
    /// Build a notifier with explicit credentials.
    pub fn new(config: EmailConfig, credentials: Credentials) -> Result<Self> {
        config.validate()?;
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
            .map_err(AppError::send)?
            .credentials(credentials)
            .build();
        Ok(Self { config, transport })
    }

    /// Build a notifier with credentials from the environment.
    pub fn from_env(config: EmailConfig) -> Result<Self> {
        let username = std::env::var(USERNAME_VAR)
            .map_err(|_| AppError::config(format!("{USERNAME_VAR} is not set")))?;
        let password = std::env::var(PASSWORD_VAR)
            .map_err(|_| AppError::config(format!("{PASSWORD_VAR} is not set")))?;
        Self::new(config, Credentials::new(username, password))
    }

    /// Assemble the outbound message with the report attached.
    fn build_message(&self, attachment_path: &Path, content: Vec<u8>) -> Result<Message> {
        let sender: Mailbox = self.config.sender.parse().map_err(AppError::send)?;
        let recipient: Mailbox = self.config.recipient.parse().map_err(AppError::send)?;

        let file_name = attachment_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "results.csv".to_string());
        let csv_type = ContentType::parse("text/csv; charset=utf-8").map_err(AppError::send)?;

        Message::builder()
            .from(sender)
            .to(recipient)
            .subject(self.config.subject.clone())
            .multipart(
                MultiPart::mixed()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(self.config.body.clone()),
                    )
                    .singlepart(Attachment::new(file_name).body(content, csv_type)),
            )
            .map_err(AppError::send)
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn send(&self, attachment: &Path) -> Result<()> {
        let content = tokio::fs::read(attachment)
            .await
            .map_err(|e| AppError::send(format!("cannot read {}: {e}", attachment.display())))?;
        let message = self.build_message(attachment, content)?;

        self.transport.send(message).await.map_err(AppError::send)?;
        log::info!("Results emailed to {}", self.config.recipient);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email_config() -> EmailConfig {
        EmailConfig {
            enabled: true,
            recipient: "buyer@example.com".to_string(),
            sender: "robot@example.com".to_string(),
            subject: "Results of pricing research script".to_string(),
            body: "Attached.".to_string(),
            smtp_host: "smtp.example.com".to_string(),
        }
    }

    fn notifier() -> SmtpNotifier {
        SmtpNotifier::new(
            email_config(),
            Credentials::new("user".to_string(), "pass".to_string()),
        )
        .unwrap()
    }

    // Transport construction needs a tokio runtime (the connection pool
    // spawns a maintenance task), so these run under #[tokio::test].
    #[tokio::test]
    async fn rejects_incomplete_email_config() {
        let mut config = email_config();
        config.recipient.clear();
        let result = SmtpNotifier::new(
            config,
            Credentials::new("user".to_string(), "pass".to_string()),
        );
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn builds_message_with_attachment_and_subject() {
        let notifier = notifier();
        let message = notifier
            .build_message(
                Path::new("results/results_20260823_120000.csv"),
                b"product_term,title\n".to_vec(),
            )
            .unwrap();

        let formatted = String::from_utf8_lossy(&message.formatted()).to_string();
        assert!(formatted.contains("Results of pricing research script"));
        assert!(formatted.contains("buyer@example.com"));
        assert!(formatted.contains("results_20260823_120000.csv"));
    }

    #[tokio::test]
    async fn rejects_unparseable_recipient_address() {
        let mut config = email_config();
        config.recipient = "not an address".to_string();
        let notifier = SmtpNotifier::new(
            config,
            Credentials::new("user".to_string(), "pass".to_string()),
        )
        .unwrap();

        let result = notifier.build_message(Path::new("results.csv"), Vec::new());
        assert!(matches!(result, Err(AppError::Send(_))));
    }
}
