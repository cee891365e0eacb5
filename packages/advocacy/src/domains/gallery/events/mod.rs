use crate::common::ImageId;
use crate::domains::gallery::models::ImageRecord;

/// Gallery domain events
/// Immutable facts emitted after the store has changed
#[derive(Debug, Clone)]
pub enum GalleryEvent {
    /// A visitor submitted a photo; it now waits in pending
    UploadSubmitted { image: ImageRecord },

    /// Admin approved a photo; it is now live in the gallery
    ImageApproved { image: ImageRecord },

    /// Admin rejected a photo
    ImageRejected { image: ImageRecord },

    /// Admin removed a photo permanently
    ImageDeleted { image_id: ImageId, title: String },

    /// Reminder that photos are waiting for review
    PendingReviewsWaiting { count: usize },
}
