use serde::{Deserialize, Serialize};

use super::models::ImageStatus;

/// How strictly moderation actions enforce the status machine.
///
/// `Strict`: approve/reject only from pending, delete only when approved.
/// `Permissive`: approve/reject re-stamp any record, delete removes any record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModerationPolicy {
    #[default]
    Strict,
    Permissive,
}

impl ModerationPolicy {
    pub fn allows_review(&self, current: ImageStatus) -> bool {
        match self {
            ModerationPolicy::Strict => current == ImageStatus::Pending,
            ModerationPolicy::Permissive => true,
        }
    }

    pub fn allows_delete(&self, current: ImageStatus) -> bool {
        match self {
            ModerationPolicy::Strict => current == ImageStatus::Approved,
            ModerationPolicy::Permissive => true,
        }
    }
}

impl std::fmt::Display for ModerationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModerationPolicy::Strict => write!(f, "strict"),
            ModerationPolicy::Permissive => write!(f, "permissive"),
        }
    }
}

impl std::str::FromStr for ModerationPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Ok(ModerationPolicy::Strict),
            "permissive" => Ok(ModerationPolicy::Permissive),
            _ => Err(anyhow::anyhow!("Invalid moderation policy: {}", s)),
        }
    }
}
