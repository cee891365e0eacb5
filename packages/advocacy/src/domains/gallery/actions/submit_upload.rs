//! Upload Intake - validates and admits a new gallery submission.

use tracing::{info, warn};

use crate::common::{is_blank, is_valid_email};
use crate::domains::gallery::data::{SubmitUploadInput, UploadRequirements};
use crate::domains::gallery::error::{GalleryError, ValidationError};
use crate::domains::gallery::events::GalleryEvent;
use crate::domains::gallery::models::ImageRecord;
use crate::domains::gallery::store::ImageStore;
use crate::domains::notifications::NotificationHub;

/// Check a submission without touching any state.
pub fn validate_upload(
    input: &SubmitUploadInput,
    requirements: UploadRequirements,
) -> Result<(), ValidationError> {
    if is_blank(&input.title) {
        return Err(ValidationError::MissingTitle);
    }
    if is_blank(&input.uploader_name) {
        return Err(ValidationError::MissingUploaderName);
    }

    let file = input.file.as_ref().ok_or(ValidationError::MissingFile)?;
    if is_blank(&file.url) {
        return Err(ValidationError::MissingFile);
    }
    if !file.is_image() {
        return Err(ValidationError::NotAnImage(file.content_type.clone()));
    }

    match input.uploader_email.as_deref().map(str::trim) {
        Some(email) if !email.is_empty() => {
            if !is_valid_email(email) {
                return Err(ValidationError::InvalidEmail(email.to_string()));
            }
        }
        _ if requirements.require_email => return Err(ValidationError::MissingEmail),
        _ => {}
    }

    Ok(())
}

/// Submit a photo (public, goes to pending).
///
/// On success the record is in the store and the admin has been notified.
/// On failure nothing is stored and nothing is sent.
pub fn submit_upload(
    input: SubmitUploadInput,
    requirements: UploadRequirements,
    store: &mut ImageStore,
    hub: &NotificationHub,
) -> Result<ImageRecord, GalleryError> {
    if let Err(e) = validate_upload(&input, requirements) {
        warn!(error = %e, "Upload refused");
        return Err(e.into());
    }

    let SubmitUploadInput {
        title,
        description,
        uploader_name,
        uploader_email,
        file,
    } = input;
    let src = file.map(|f| f.url).unwrap_or_default();
    let uploader_email = uploader_email
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty());

    let record = ImageRecord::pending(
        src,
        title.trim().to_string(),
        description,
        uploader_name.trim().to_string(),
        uploader_email,
    );

    store.add(record.clone())?;

    info!(image_id = %record.id, title = %record.title, uploader = %record.uploader_name, "Photo submitted for review");

    hub.emit(&GalleryEvent::UploadSubmitted {
        image: record.clone(),
    });

    Ok(record)
}
