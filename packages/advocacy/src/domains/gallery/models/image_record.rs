use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::common::ImageId;

/// A submitted (or seeded) gallery photo plus its moderation metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: ImageId,
    /// Object URL or remote URL of the image bytes
    pub src: String,
    pub title: String,
    pub description: String,
    pub uploader_name: String,
    pub uploader_email: Option<String>,
    pub status: ImageStatus,
    pub upload_date: DateTime<Utc>,

    // Set when the record leaves pending
    pub review_date: Option<DateTime<Utc>>,
    pub reviewed_by: Option<String>,
}

impl ImageRecord {
    /// A fresh user submission. Always pending.
    pub fn pending(
        src: String,
        title: String,
        description: String,
        uploader_name: String,
        uploader_email: Option<String>,
    ) -> Self {
        Self {
            id: ImageId::new(),
            src,
            title,
            description,
            uploader_name,
            uploader_email,
            status: ImageStatus::Pending,
            upload_date: Utc::now(),
            review_date: None,
            reviewed_by: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == ImageStatus::Pending
    }
}

/// The pre-approved photos the gallery opens with.
pub fn seed_images() -> Vec<ImageRecord> {
    let upload_date = Utc
        .with_ymd_and_hms(2025, 6, 1, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now);

    let seed = |n: u128, src: &str, title: &str, description: &str| ImageRecord {
        id: ImageId::fixture(n),
        src: src.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        uploader_name: "Gallery Admin".to_string(),
        uploader_email: None,
        status: ImageStatus::Approved,
        upload_date,
        review_date: None,
        reviewed_by: None,
    };

    vec![
        seed(
            1,
            "/images/LakeMichigan01.jpg",
            "Father and Child at Lake Michigan",
            "A beautiful moment captured at Lake Michigan, showing the special bond between father and child.",
        ),
        seed(
            2,
            "/images/LakeMichigan02.png",
            "Peaceful Moments at the Lake",
            "Enjoying a quiet moment by Lake Michigan - these are the memories that matter most.",
        ),
        seed(
            3,
            "/images/LakeMichigan03.jpg",
            "Family Time at Lake Michigan",
            "Creating lasting memories together at Lake Michigan - fathers and children sharing precious moments.",
        ),
    ]
}

// =============================================================================
// Status
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageStatus {
    Pending,
    Approved,
    Rejected,
}

impl std::fmt::Display for ImageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageStatus::Pending => write!(f, "pending"),
            ImageStatus::Approved => write!(f, "approved"),
            ImageStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl std::str::FromStr for ImageStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "pending" => Ok(ImageStatus::Pending),
            "approved" => Ok(ImageStatus::Approved),
            "rejected" => Ok(ImageStatus::Rejected),
            _ => Err(anyhow::anyhow!("Invalid image status: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submissions_start_pending_and_unreviewed() {
        let record = ImageRecord::pending(
            "blob:1".to_string(),
            "Park Day".to_string(),
            String::new(),
            "Alex".to_string(),
            None,
        );
        assert!(record.is_pending());
        assert!(record.review_date.is_none());
        assert!(record.reviewed_by.is_none());
    }

    #[test]
    fn test_seed_images_are_approved_fixtures() {
        let seeds = seed_images();
        assert_eq!(seeds.len(), 3);
        assert!(seeds.iter().all(|s| s.status == ImageStatus::Approved));
        assert!(seeds.iter().all(|s| s.uploader_name == "Gallery Admin"));
        assert_eq!(seeds[0].upload_date.to_rfc3339(), "2025-06-01T00:00:00+00:00");
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&ImageStatus::Approved).unwrap();
        assert_eq!(json, "\"approved\"");
        assert_eq!("rejected".parse::<ImageStatus>().unwrap(), ImageStatus::Rejected);
        assert!("archived".parse::<ImageStatus>().is_err());
    }
}
