//! Admin notification inbox (the bell badge in the admin panel).

use std::sync::RwLock;

use anyhow::Result;

use super::hub::NotificationListener;
use super::models::Notification;
use crate::common::NotificationId;

/// Every notification the session raised, newest first.
#[derive(Default)]
pub struct AdminInbox {
    entries: RwLock<Vec<Notification>>,
}

impl AdminInbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.entries
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn unread_count(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|n| !n.read)
            .count()
    }

    /// Returns false when no notification has that id.
    pub fn mark_as_read(&self, id: NotificationId) -> bool {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        match entries.iter_mut().find(|n| n.id == id) {
            Some(n) => {
                n.read = true;
                true
            }
            None => false,
        }
    }

    pub fn mark_all_as_read(&self) {
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .iter_mut()
            .for_each(|n| n.read = true);
    }

    /// Removes one notification; returns false when it was not present.
    pub fn clear(&self, id: NotificationId) -> bool {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        let before = entries.len();
        entries.retain(|n| n.id != id);
        entries.len() != before
    }
}

impl NotificationListener for AdminInbox {
    fn name(&self) -> &str {
        "admin_inbox"
    }

    fn on_notification(&self, notification: &Notification) -> Result<()> {
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(0, notification.clone());
        Ok(())
    }
}
