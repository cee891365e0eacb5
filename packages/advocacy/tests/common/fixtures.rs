//! Form submissions used across the integration tests.
#![allow(dead_code)]

use advocacy_core::domains::gallery::{FileRef, SubmitUploadInput};
use advocacy_core::domains::petition::SignatureInput;

/// A complete upload with a photo attached and no contact email.
pub fn upload(title: &str, uploader: &str) -> SubmitUploadInput {
    SubmitUploadInput::builder()
        .title(title)
        .description(format!("{} by {}", title, uploader))
        .uploader_name(uploader)
        .file(photo(title))
        .build()
}

pub fn upload_with_email(title: &str, uploader: &str, email: &str) -> SubmitUploadInput {
    SubmitUploadInput::builder()
        .title(title)
        .uploader_name(uploader)
        .uploader_email(email)
        .file(photo(title))
        .build()
}

pub fn photo(title: &str) -> FileRef {
    let slug = title.to_lowercase().replace(' ', "-");
    FileRef::new(format!("{}.jpg", slug), "image/jpeg", format!("blob:{}", slug))
}

pub fn signature(email: &str) -> SignatureInput {
    SignatureInput::builder()
        .first_name("Alex")
        .last_name("Morgan")
        .email(email)
        .zip_code("60601")
        .is_father(true)
        .build()
}
