//! Typed id aliases for every entity the session creates.

pub use super::id::Id;

/// Marker type for gallery image records.
pub struct GalleryImage;

/// Marker type for notifications.
pub struct Alert;

/// Marker type for chat messages.
pub struct ChatLine;

/// Marker type for petition signatures.
pub struct Signature;

pub type ImageId = Id<GalleryImage>;

pub type NotificationId = Id<Alert>;

pub type MessageId = Id<ChatLine>;

pub type SignatureId = Id<Signature>;
