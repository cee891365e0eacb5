use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::MessageId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: MessageId,
    pub text: String,
    pub is_bot: bool,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn from_user(text: impl Into<String>) -> Self {
        Self::new(text.into(), false)
    }

    pub fn from_bot(text: impl Into<String>) -> Self {
        Self::new(text.into(), true)
    }

    fn new(text: String, is_bot: bool) -> Self {
        Self {
            id: MessageId::new(),
            text,
            is_bot,
            timestamp: Utc::now(),
        }
    }
}
