use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use typed_builder::TypedBuilder;

use crate::common::{is_blank, is_valid_email, SignatureId};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PetitionError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("This session has already signed the petition")]
    AlreadySigned,
}

/// Petition form submission
#[derive(Debug, Clone, TypedBuilder, Serialize, Deserialize)]
pub struct SignatureInput {
    #[builder(setter(into))]
    pub first_name: String,
    #[builder(setter(into))]
    pub last_name: String,
    #[builder(setter(into))]
    pub email: String,
    #[builder(setter(into))]
    pub zip_code: String,
    #[builder(default)]
    pub is_father: bool,
    #[builder(default)]
    pub share_story: bool,
    #[builder(default, setter(into))]
    pub message: String,
}

impl SignatureInput {
    pub fn validate(&self) -> Result<(), PetitionError> {
        for (label, value) in [
            ("First name", &self.first_name),
            ("Last name", &self.last_name),
            ("Email", &self.email),
            ("ZIP code", &self.zip_code),
        ] {
            if is_blank(value) {
                return Err(PetitionError::MissingField(label));
            }
        }
        if !is_valid_email(&self.email) {
            return Err(PetitionError::InvalidEmail(self.email.trim().to_string()));
        }
        Ok(())
    }
}

/// An accepted signature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    pub id: SignatureId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub zip_code: String,
    pub is_father: bool,
    pub share_story: bool,
    pub message: Option<String>,
    pub signed_at: DateTime<Utc>,
}

impl From<SignatureInput> for Signature {
    fn from(input: SignatureInput) -> Self {
        let message = Some(input.message.trim().to_string()).filter(|m| !m.is_empty());
        Self {
            id: SignatureId::new(),
            first_name: input.first_name.trim().to_string(),
            last_name: input.last_name.trim().to_string(),
            email: input.email.trim().to_string(),
            zip_code: input.zip_code.trim().to_string(),
            is_father: input.is_father,
            share_story: input.share_story,
            message,
            signed_at: Utc::now(),
        }
    }
}
