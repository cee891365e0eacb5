//! Email delivery of notifications.
//!
//! Rendering happens synchronously inside the listener; the send itself is
//! spawned onto the ambient tokio runtime so the publishing action never
//! waits on it. Failures inside the spawned task are logged and dropped.

use std::sync::Arc;

use anyhow::Result;
use tokio::runtime::Handle;
use tracing::{debug, warn};

use crate::domains::notifications::hub::NotificationListener;
use crate::domains::notifications::models::Notification;
use crate::kernel::{BaseEmailService, EmailMessage};

pub struct EmailNotifier {
    email: Arc<dyn BaseEmailService>,
}

impl EmailNotifier {
    pub fn new(email: Arc<dyn BaseEmailService>) -> Self {
        Self { email }
    }
}

/// Render the email for a notification. None when there is nobody to send to.
pub fn render_email(notification: &Notification) -> Option<EmailMessage> {
    let to = notification.recipient.clone()?;

    if notification.kind.is_admin_alert() {
        let body = format!(
            "Gallery Administration Alert\n\n{}\n\n{}\n\nPriority: {}\nTime: {}\n\nReview in Admin Panel: /admin\n\nThis is an automated notification from the Fathers Rights Gallery system.",
            notification.subject,
            notification.body,
            notification.priority.to_string().to_uppercase(),
            notification.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
        );
        Some(EmailMessage {
            to,
            subject: format!("[Gallery Admin] {}", notification.subject),
            body,
        })
    } else {
        Some(EmailMessage {
            to,
            subject: notification.subject.clone(),
            body: notification.body.clone(),
        })
    }
}

impl NotificationListener for EmailNotifier {
    fn name(&self) -> &str {
        "email"
    }

    fn on_notification(&self, notification: &Notification) -> Result<()> {
        let Some(message) = render_email(notification) else {
            debug!(kind = %notification.kind, "No recipient address; skipping email");
            return Ok(());
        };

        let handle = Handle::try_current()
            .map_err(|e| anyhow::anyhow!("no async runtime for email delivery: {}", e))?;

        let email = Arc::clone(&self.email);
        let kind = notification.kind;
        handle.spawn(async move {
            let to = message.to.clone();
            if let Err(e) = email.send(message).await {
                warn!(kind = %kind, to = %to, error = %e, "Failed to send email notification");
            }
        });

        Ok(())
    }
}
