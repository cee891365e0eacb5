//! Simulated email delivery.
//!
//! The site has no mail provider; delivering an email means writing it to the
//! log, the way the admin tooling reads it during a session.

use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

use super::traits::{BaseEmailService, EmailMessage};

pub struct LoggingEmailService;

impl LoggingEmailService {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingEmailService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseEmailService for LoggingEmailService {
    async fn send(&self, message: EmailMessage) -> Result<()> {
        info!(
            to = %message.to,
            subject = %message.subject,
            body_len = message.body.len(),
            "Email notification would be sent"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_service_always_accepts() {
        let service = LoggingEmailService::new();
        let result = tokio_test::block_on(service.send(EmailMessage {
            to: "admin@fathersrights.org".to_string(),
            subject: "[Gallery Admin] New Photo Uploaded".to_string(),
            body: "Alex has uploaded a new photo".to_string(),
        }));
        assert!(result.is_ok());
    }
}
