// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Naming convention: Base* for trait names (e.g., BaseEmailService)

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

// =============================================================================
// Email Service Trait (Infrastructure)
// =============================================================================

/// A rendered email ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[async_trait]
pub trait BaseEmailService: Send + Sync {
    /// Deliver one email. Errors are reported to the caller, who decides
    /// whether they matter (notification delivery never does).
    async fn send(&self, message: EmailMessage) -> Result<()>;
}
