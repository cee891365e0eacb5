use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::NotificationId;

/// One alert raised during the session - to the site admin or to an uploader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    /// Email address to deliver to; None when the uploader left no contact
    pub recipient: Option<String>,
    pub subject: String,
    pub body: String,
    pub priority: Priority,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
}

impl Notification {
    pub fn new(
        kind: NotificationKind,
        recipient: Option<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            recipient,
            subject: subject.into(),
            body: body.into(),
            priority,
            timestamp: Utc::now(),
            read: false,
        }
    }
}

// =============================================================================
// Enums
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    NewUpload,
    Approved,
    Rejected,
    ApprovalNeeded,
    SystemAlert,
}

impl NotificationKind {
    /// Alerts addressed to the gallery administrator rather than an uploader.
    pub fn is_admin_alert(&self) -> bool {
        matches!(
            self,
            NotificationKind::NewUpload
                | NotificationKind::ApprovalNeeded
                | NotificationKind::SystemAlert
        )
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationKind::NewUpload => write!(f, "new_upload"),
            NotificationKind::Approved => write!(f, "approved"),
            NotificationKind::Rejected => write!(f, "rejected"),
            NotificationKind::ApprovalNeeded => write!(f, "approval_needed"),
            NotificationKind::SystemAlert => write!(f, "system_alert"),
        }
    }
}

impl std::str::FromStr for NotificationKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "new_upload" => Ok(NotificationKind::NewUpload),
            "approved" => Ok(NotificationKind::Approved),
            "rejected" => Ok(NotificationKind::Rejected),
            "approval_needed" => Ok(NotificationKind::ApprovalNeeded),
            "system_alert" => Ok(NotificationKind::SystemAlert),
            _ => Err(anyhow::anyhow!("Invalid notification kind: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_notification_is_unread() {
        let n = Notification::new(
            NotificationKind::SystemAlert,
            None,
            "Maintenance",
            "Gallery uploads paused",
            Priority::Low,
        );
        assert!(!n.read);
        assert_eq!(n.subject, "Maintenance");
    }

    #[test]
    fn test_kind_string_forms() {
        for kind in [
            NotificationKind::NewUpload,
            NotificationKind::Approved,
            NotificationKind::Rejected,
            NotificationKind::ApprovalNeeded,
            NotificationKind::SystemAlert,
        ] {
            let parsed: NotificationKind = kind.to_string().parse().unwrap();
            assert_eq!(parsed, kind);
        }
        assert!("status_changed".parse::<NotificationKind>().is_err());
    }

    #[test]
    fn test_admin_alert_split() {
        assert!(NotificationKind::NewUpload.is_admin_alert());
        assert!(NotificationKind::ApprovalNeeded.is_admin_alert());
        assert!(!NotificationKind::Approved.is_admin_alert());
        assert!(!NotificationKind::Rejected.is_admin_alert());
    }

    #[test]
    fn test_priority_orders_by_urgency() {
        assert!(Priority::High > Priority::Medium);
        assert!(Priority::Medium > Priority::Low);
    }
}
