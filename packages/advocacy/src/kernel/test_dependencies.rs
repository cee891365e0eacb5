// Test doubles - recorders and failure injectors for the session's seams.
//
// Injected through SessionDeps or NotificationHub::subscribe in tests.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::{BaseEmailService, EmailMessage};
use crate::domains::notifications::{Notification, NotificationKind, NotificationListener};

// =============================================================================
// Mock Email Service
// =============================================================================

#[derive(Default)]
pub struct MockEmailService {
    sent: Arc<Mutex<Vec<EmailMessage>>>,
    attempts: AtomicUsize,
    fail: bool,
}

impl MockEmailService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every send attempt errors.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Emails delivered so far
    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    /// Check if an email went to the address
    pub fn was_sent_to(&self, to: &str) -> bool {
        self.sent().iter().any(|m| m.to == to)
    }

    /// Let spawned deliveries run until at least `n` emails arrived.
    pub async fn wait_for_sends(&self, n: usize) -> Vec<EmailMessage> {
        for _ in 0..200 {
            if self.sent().len() >= n {
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        self.sent()
    }

    pub async fn wait_for_attempts(&self, n: usize) -> usize {
        for _ in 0..200 {
            if self.attempts() >= n {
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        self.attempts()
    }
}

#[async_trait]
impl BaseEmailService for MockEmailService {
    async fn send(&self, message: EmailMessage) -> Result<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            anyhow::bail!("mail relay unavailable");
        }
        self.sent
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(message);
        Ok(())
    }
}

// =============================================================================
// Notification listeners
// =============================================================================

/// Records every notification in publish order.
#[derive(Default)]
pub struct SpyListener {
    received: Mutex<Vec<Notification>>,
}

impl SpyListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn received(&self) -> Vec<Notification> {
        self.received
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn count(&self) -> usize {
        self.received.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn of_kind(&self, kind: NotificationKind) -> Vec<Notification> {
        self.received()
            .into_iter()
            .filter(|n| n.kind == kind)
            .collect()
    }
}

impl NotificationListener for SpyListener {
    fn name(&self) -> &str {
        "spy"
    }

    fn on_notification(&self, notification: &Notification) -> Result<()> {
        self.received
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(notification.clone());
        Ok(())
    }
}

pub struct FailingListener;

impl NotificationListener for FailingListener {
    fn name(&self) -> &str {
        "failing"
    }

    fn on_notification(&self, _notification: &Notification) -> Result<()> {
        anyhow::bail!("listener offline")
    }
}

pub struct PanickingListener;

impl NotificationListener for PanickingListener {
    fn name(&self) -> &str {
        "panicking"
    }

    fn on_notification(&self, _notification: &Notification) -> Result<()> {
        panic!("listener bug")
    }
}
