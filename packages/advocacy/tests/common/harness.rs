//! Test harness wiring a session to recording test doubles.
#![allow(dead_code)]

use std::sync::Arc;

use advocacy_core::kernel::test_dependencies::{MockEmailService, SpyListener};
use advocacy_core::kernel::SessionDeps;
use advocacy_core::{AdvocacySession, Config};

pub struct TestHarness {
    pub session: AdvocacySession,
    /// Receives every email the session sends.
    pub email: Arc<MockEmailService>,
    /// Subscribed after the built-in listeners; sees every notification.
    pub spy: Arc<SpyListener>,
}

impl TestHarness {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self::build(config, MockEmailService::new())
    }

    /// Harness whose mail relay rejects every send.
    pub fn with_failing_email() -> Self {
        Self::build(Config::default(), MockEmailService::failing())
    }

    fn build(config: Config, email: MockEmailService) -> Self {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let email = Arc::new(email);
        let mut session = AdvocacySession::new(config, SessionDeps::new(email.clone()))
            .expect("Failed to start session");

        let spy = Arc::new(SpyListener::new());
        session.subscribe(spy.clone());

        Self {
            session,
            email,
            spy,
        }
    }
}
