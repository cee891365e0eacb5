//! In-process notification fan-out.
//!
//! Gallery actions publish a [`Notification`]; every registered
//! [`NotificationListener`] sees it in registration order. Delivery is
//! best-effort: a listener that errors or panics is logged and skipped, and
//! the publisher only learns about it through the returned [`PublishReport`].
//!
//! # Usage
//!
//! ```ignore
//! let mut hub = NotificationHub::new();
//! hub.subscribe(Arc::new(AdminInbox::new()));
//! hub.subscribe(Arc::new(EmailNotifier::new(email_service)));
//! hub.publish(&notification);
//! ```

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, warn};

use super::models::Notification;
use super::templates::{notification_for, NotificationSettings};
use crate::domains::gallery::GalleryEvent;

/// Observer of published notifications.
pub trait NotificationListener: Send + Sync {
    /// Short label used in logs.
    fn name(&self) -> &str;

    fn on_notification(&self, notification: &Notification) -> Result<()>;
}

/// Outcome of one publish call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PublishReport {
    pub delivered: usize,
    pub failed: usize,
}

#[derive(Clone, Default)]
pub struct NotificationHub {
    listeners: Vec<Arc<dyn NotificationListener>>,
    settings: NotificationSettings,
}

impl NotificationHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: NotificationSettings) -> Self {
        Self {
            listeners: Vec::new(),
            settings,
        }
    }

    pub fn settings(&self) -> &NotificationSettings {
        &self.settings
    }

    pub fn subscribe(&mut self, listener: Arc<dyn NotificationListener>) {
        debug!(listener = listener.name(), "Notification listener registered");
        self.listeners.push(listener);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Hand the notification to every listener. Never fails.
    pub fn publish(&self, notification: &Notification) -> PublishReport {
        let mut report = PublishReport::default();

        for listener in &self.listeners {
            let outcome = catch_unwind(AssertUnwindSafe(|| listener.on_notification(notification)));
            match outcome {
                Ok(Ok(())) => report.delivered += 1,
                Ok(Err(e)) => {
                    report.failed += 1;
                    warn!(
                        listener = listener.name(),
                        kind = %notification.kind,
                        error = %e,
                        "Notification delivery failed"
                    );
                }
                Err(_) => {
                    report.failed += 1;
                    warn!(
                        listener = listener.name(),
                        kind = %notification.kind,
                        "Notification listener panicked"
                    );
                }
            }
        }

        debug!(
            kind = %notification.kind,
            delivered = report.delivered,
            failed = report.failed,
            "Notification published"
        );
        report
    }

    /// Publish whatever notification a gallery event calls for.
    pub fn emit(&self, event: &GalleryEvent) -> Option<PublishReport> {
        let notification = notification_for(event, &self.settings)?;
        Some(self.publish(&notification))
    }
}
