//! Notification wording for gallery events.

use crate::domains::gallery::GalleryEvent;

use super::models::{Notification, NotificationKind, Priority};

/// Addressing and escalation settings for gallery notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationSettings {
    pub admin_email: String,
    /// Pending count above which reminders are high priority
    pub pending_alert_threshold: usize,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            admin_email: "admin@fathersrights.org".to_string(),
            pending_alert_threshold: 5,
        }
    }
}

/// Build the notification an event should raise. Deletions raise none.
pub fn notification_for(
    event: &GalleryEvent,
    settings: &NotificationSettings,
) -> Option<Notification> {
    match event {
        GalleryEvent::UploadSubmitted { image } => Some(Notification::new(
            NotificationKind::NewUpload,
            Some(settings.admin_email.clone()),
            "New Photo Uploaded",
            format!(
                "{} has uploaded a new photo titled \"{}\" that requires review and approval.",
                image.uploader_name, image.title
            ),
            Priority::Medium,
        )),

        GalleryEvent::ImageApproved { image } => Some(Notification::new(
            NotificationKind::Approved,
            image.uploader_email.clone(),
            format!("Your photo \"{}\" has been approved!", image.title),
            format!(
                "Great news! Your photo \"{}\" has been approved and is now live in our gallery. Thank you for contributing to our cause!",
                image.title
            ),
            Priority::Medium,
        )),

        GalleryEvent::ImageRejected { image } => Some(Notification::new(
            NotificationKind::Rejected,
            image.uploader_email.clone(),
            format!("Update on your photo submission \"{}\"", image.title),
            format!(
                "Thank you for your submission \"{}\". While we appreciate your contribution, this particular image doesn't align with our current gallery guidelines. Please feel free to submit other photos.",
                image.title
            ),
            Priority::Low,
        )),

        GalleryEvent::ImageDeleted { .. } => None,

        GalleryEvent::PendingReviewsWaiting { count } => {
            let priority = if *count > settings.pending_alert_threshold {
                Priority::High
            } else {
                Priority::Medium
            };
            Some(Notification::new(
                NotificationKind::ApprovalNeeded,
                Some(settings.admin_email.clone()),
                "Photos Awaiting Approval",
                format!(
                    "You have {} photo{} waiting for review in the admin panel.",
                    count,
                    if *count == 1 { "" } else { "s" }
                ),
                priority,
            ))
        }
    }
}
