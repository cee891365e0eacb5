//! Image Record Store - the single source of truth for gallery records.
//!
//! Records keep insertion order. The pending/approved/rejected views are
//! computed from the list on every call; nothing is cached beside it.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::{GalleryError, ValidationError};
use super::models::{seed_images, ImageRecord, ImageStatus};
use crate::common::{is_blank, ImageId};

#[derive(Debug, Clone, Default)]
pub struct ImageStore {
    records: Vec<ImageRecord>,
}

/// Per-status totals for the admin badge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryCounts {
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl ImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with the pre-approved fixture photos.
    pub fn seeded() -> Self {
        Self {
            records: seed_images(),
        }
    }

    /// Append a new submission.
    ///
    /// The record must be pending, carry a title, an uploader name and an
    /// image source, and use an id the store has not seen.
    pub fn add(&mut self, record: ImageRecord) -> Result<ImageId, GalleryError> {
        if is_blank(&record.title) {
            return Err(ValidationError::MissingTitle.into());
        }
        if is_blank(&record.uploader_name) {
            return Err(ValidationError::MissingUploaderName.into());
        }
        if is_blank(&record.src) {
            return Err(ValidationError::MissingFile.into());
        }
        if !record.is_pending() {
            return Err(GalleryError::InvalidState {
                id: record.id,
                status: record.status,
                action: "add",
            });
        }
        if self.get(record.id).is_some() {
            return Err(GalleryError::DuplicateId { id: record.id });
        }

        let id = record.id;
        debug!(image_id = %id, title = %record.title, "Image record added");
        self.records.push(record);
        Ok(id)
    }

    /// Set status and stamp the review. Returns the updated record.
    pub fn set_status(
        &mut self,
        id: ImageId,
        status: ImageStatus,
        reviewer: Option<&str>,
    ) -> Result<ImageRecord, GalleryError> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(GalleryError::NotFound(id))?;

        record.status = status;
        record.review_date = Some(Utc::now());
        record.reviewed_by = reviewer.map(str::to_string);

        debug!(image_id = %id, status = %status, "Image status updated");
        Ok(record.clone())
    }

    /// Delete by id; None when absent.
    pub fn remove(&mut self, id: ImageId) -> Option<ImageRecord> {
        let index = self.records.iter().position(|r| r.id == id)?;
        Some(self.records.remove(index))
    }

    pub fn get(&self, id: ImageId) -> Option<&ImageRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// All records in insertion order
    pub fn list(&self) -> &[ImageRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn with_status(&self, status: ImageStatus) -> Vec<&ImageRecord> {
        self.records.iter().filter(|r| r.status == status).collect()
    }

    pub fn pending(&self) -> Vec<&ImageRecord> {
        self.with_status(ImageStatus::Pending)
    }

    pub fn approved(&self) -> Vec<&ImageRecord> {
        self.with_status(ImageStatus::Approved)
    }

    pub fn rejected(&self) -> Vec<&ImageRecord> {
        self.with_status(ImageStatus::Rejected)
    }

    pub fn counts(&self) -> GalleryCounts {
        self.records
            .iter()
            .fold(GalleryCounts::default(), |mut counts, r| {
                match r.status {
                    ImageStatus::Pending => counts.pending += 1,
                    ImageStatus::Approved => counts.approved += 1,
                    ImageStatus::Rejected => counts.rejected += 1,
                }
                counts
            })
    }
}
