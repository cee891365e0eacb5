//! Session dependencies (using traits for testability)
//!
//! The central container handed to `AdvocacySession`. Every side-effecting
//! service sits behind a trait so tests can swap in recorders.

use std::sync::Arc;

use crate::kernel::{BaseEmailService, LoggingEmailService};

#[derive(Clone)]
pub struct SessionDeps {
    pub email: Arc<dyn BaseEmailService>,
}

impl SessionDeps {
    pub fn new(email: Arc<dyn BaseEmailService>) -> Self {
        Self { email }
    }

    /// Dependencies for a normal page session: emails are only logged.
    pub fn simulated() -> Self {
        Self::new(Arc::new(LoggingEmailService::new()))
    }
}
