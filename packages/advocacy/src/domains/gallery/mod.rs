//! Gallery domain - crowd-sourced photos and their moderation.
//!
//! ```text
//!         submit_upload()          approve_image()
//! (none) ----------------> pending ----------------> approved --delete_image()--> (removed)
//!                             |
//!                             +---- reject_image() --> rejected
//! ```

pub mod actions;
pub mod data;
pub mod error;
pub mod events;
pub mod models;
pub mod policy;
pub mod store;

pub use data::{FileRef, SubmitUploadInput, UploadRequirements};
pub use error::{GalleryError, ValidationError};
pub use events::GalleryEvent;
pub use models::{ImageRecord, ImageStatus};
pub use policy::ModerationPolicy;
pub use store::{GalleryCounts, ImageStore};
