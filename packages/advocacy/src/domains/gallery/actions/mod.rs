//! Gallery actions - entry points called by the session.
//!
//! Actions take the store and hub explicitly; they hold no state of their own.

pub mod moderation;
pub mod submit_upload;

pub use moderation::{approve_image, delete_image, reject_image, remind_pending_reviews, Moderator};
pub use submit_upload::{submit_upload, validate_upload};
