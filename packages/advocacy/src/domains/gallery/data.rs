//! Input types for the gallery upload form.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Reference to the selected image file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    pub name: String,
    /// MIME type reported by the browser, e.g. `image/jpeg`
    pub content_type: String,
    /// Object URL (or remote URL) the display layer renders from
    pub url: String,
}

impl FileRef {
    pub fn new(
        name: impl Into<String>,
        content_type: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            url: url.into(),
        }
    }

    pub fn is_image(&self) -> bool {
        self.content_type
            .trim()
            .to_ascii_lowercase()
            .starts_with("image/")
    }
}

/// Upload form submission
#[derive(Debug, Clone, TypedBuilder, Serialize, Deserialize)]
pub struct SubmitUploadInput {
    #[builder(setter(into))]
    pub title: String,
    #[builder(default, setter(into))]
    pub description: String,
    #[builder(setter(into))]
    pub uploader_name: String,
    #[builder(default, setter(strip_option, into))]
    pub uploader_email: Option<String>,
    #[builder(default, setter(strip_option))]
    pub file: Option<FileRef>,
}

/// What the current upload surface demands beyond the basics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UploadRequirements {
    pub require_email: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_content_types() {
        assert!(FileRef::new("a.jpg", "image/jpeg", "blob:a").is_image());
        assert!(FileRef::new("a.png", "IMAGE/PNG", "blob:a").is_image());
        assert!(!FileRef::new("a.pdf", "application/pdf", "blob:a").is_image());
    }

    #[test]
    fn test_builder_defaults_optional_fields() {
        let input = SubmitUploadInput::builder()
            .title("Park Day")
            .uploader_name("Alex")
            .build();
        assert!(input.description.is_empty());
        assert!(input.uploader_email.is_none());
        assert!(input.file.is_none());
    }
}
