//! Moderation Action Handler - the only write path after submission.
//!
//! Each action checks the policy, mutates the store, then emits the event.
//! Notification delivery happens after the store is updated and its outcome
//! never reaches the caller.

use tracing::{info, warn};

use crate::common::ImageId;
use crate::domains::gallery::error::GalleryError;
use crate::domains::gallery::events::GalleryEvent;
use crate::domains::gallery::models::{ImageRecord, ImageStatus};
use crate::domains::gallery::policy::ModerationPolicy;
use crate::domains::gallery::store::ImageStore;
use crate::domains::notifications::NotificationHub;

/// Who is acting and under which rules.
#[derive(Debug, Clone, Copy)]
pub struct Moderator<'a> {
    pub reviewer: &'a str,
    pub policy: ModerationPolicy,
}

impl<'a> Moderator<'a> {
    pub fn new(reviewer: &'a str, policy: ModerationPolicy) -> Self {
        Self { reviewer, policy }
    }
}

/// Approve a photo (make it live). Returns the updated record.
pub fn approve_image(
    image_id: ImageId,
    moderator: Moderator<'_>,
    store: &mut ImageStore,
    hub: &NotificationHub,
) -> Result<ImageRecord, GalleryError> {
    let image = review(image_id, ImageStatus::Approved, moderator, store)?;

    info!(image_id = %image_id, reviewer = moderator.reviewer, "Photo approved");
    hub.emit(&GalleryEvent::ImageApproved {
        image: image.clone(),
    });

    Ok(image)
}

/// Reject a photo. Returns the updated record.
pub fn reject_image(
    image_id: ImageId,
    moderator: Moderator<'_>,
    store: &mut ImageStore,
    hub: &NotificationHub,
) -> Result<ImageRecord, GalleryError> {
    let image = review(image_id, ImageStatus::Rejected, moderator, store)?;

    info!(image_id = %image_id, reviewer = moderator.reviewer, "Photo rejected");
    hub.emit(&GalleryEvent::ImageRejected {
        image: image.clone(),
    });

    Ok(image)
}

/// Delete a photo permanently. No notification goes out.
pub fn delete_image(
    image_id: ImageId,
    moderator: Moderator<'_>,
    store: &mut ImageStore,
    hub: &NotificationHub,
) -> Result<ImageRecord, GalleryError> {
    let current = store
        .get(image_id)
        .ok_or(GalleryError::NotFound(image_id))?
        .status;

    if !moderator.policy.allows_delete(current) {
        warn!(image_id = %image_id, status = %current, "Delete refused");
        return Err(GalleryError::InvalidState {
            id: image_id,
            status: current,
            action: "delete",
        });
    }

    let image = store
        .remove(image_id)
        .ok_or(GalleryError::NotFound(image_id))?;

    info!(image_id = %image_id, reviewer = moderator.reviewer, "Photo deleted");
    hub.emit(&GalleryEvent::ImageDeleted {
        image_id,
        title: image.title.clone(),
    });

    Ok(image)
}

/// Remind the admin about photos waiting for review.
/// Returns the pending count, or None when nothing is waiting.
pub fn remind_pending_reviews(store: &ImageStore, hub: &NotificationHub) -> Option<usize> {
    let count = store.pending().len();
    if count == 0 {
        return None;
    }

    info!(pending = count, "Sending pending review reminder");
    hub.emit(&GalleryEvent::PendingReviewsWaiting { count });
    Some(count)
}

fn review(
    image_id: ImageId,
    target: ImageStatus,
    moderator: Moderator<'_>,
    store: &mut ImageStore,
) -> Result<ImageRecord, GalleryError> {
    let current = store
        .get(image_id)
        .ok_or(GalleryError::NotFound(image_id))?
        .status;

    if !moderator.policy.allows_review(current) {
        warn!(image_id = %image_id, status = %current, target = %target, "Review refused");
        return Err(GalleryError::InvalidState {
            id: image_id,
            status: current,
            action: match target {
                ImageStatus::Approved => "approve",
                ImageStatus::Rejected => "reject",
                ImageStatus::Pending => "reopen",
            },
        });
    }

    store.set_status(image_id, target, Some(moderator.reviewer))
}
