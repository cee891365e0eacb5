use thiserror::Error;

use super::models::ImageStatus;
use crate::common::ImageId;

/// A submission refused before any state change
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Photo title is required")]
    MissingTitle,

    #[error("Uploader name is required")]
    MissingUploaderName,

    #[error("An image file is required")]
    MissingFile,

    #[error("Uploader email is required")]
    MissingEmail,

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("File is not an image (content type {0})")]
    NotAnImage(String),
}

/// Gallery errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GalleryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Image not found: {0}")]
    NotFound(ImageId),

    #[error("Image {id} is already in the gallery")]
    DuplicateId { id: ImageId },

    #[error("Cannot {action} image {id}: status is {status}")]
    InvalidState {
        id: ImageId,
        status: ImageStatus,
        action: &'static str,
    },
}

impl GalleryError {
    /// Not-found is absorbed by the display layer as "nothing changed".
    pub fn is_not_found(&self) -> bool {
        matches!(self, GalleryError::NotFound(_))
    }
}
