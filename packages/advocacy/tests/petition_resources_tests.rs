//! Integration tests for the petition counter and the state resource directory.

mod common;

use crate::common::{signature, TestHarness};
use advocacy_core::domains::petition::PetitionError;
use advocacy_core::domains::resources::ResourceFilter;
use advocacy_core::Config;

// =============================================================================
// Petition
// =============================================================================

#[test]
fn signing_bumps_the_counter_once_per_session() {
    let mut ctx = TestHarness::new();
    let before = ctx.session.petition().signature_count();

    let signed = ctx
        .session
        .sign_petition(signature("alex@example.com"))
        .unwrap();
    assert_eq!(signed.first_name, "Alex");
    assert_eq!(ctx.session.petition().signature_count(), before + 1);

    assert_eq!(
        ctx.session
            .sign_petition(signature("other@example.com"))
            .unwrap_err(),
        PetitionError::AlreadySigned
    );
    assert_eq!(ctx.session.petition().signature_count(), before + 1);
}

#[test]
fn invalid_signature_is_refused() {
    let mut ctx = TestHarness::new();

    let err = ctx
        .session
        .sign_petition(signature("not-an-email"))
        .unwrap_err();

    assert!(matches!(err, PetitionError::InvalidEmail(_)));
    assert!(!ctx.session.petition().has_signed());
}

#[test]
fn petition_counts_come_from_config() {
    let config = Config {
        petition_initial_signatures: 999,
        petition_goal: 1_000,
        ..Config::default()
    };
    let mut ctx = TestHarness::with_config(config);

    ctx.session
        .sign_petition(signature("alex@example.com"))
        .unwrap();

    assert_eq!(ctx.session.petition().goal(), 1_000);
    assert_eq!(ctx.session.petition().progress_percent(), 100.0);
}

// =============================================================================
// State resources
// =============================================================================

#[test]
fn state_search_and_lookup() {
    let ctx = TestHarness::new();
    let resources = ctx.session.resources();

    assert_eq!(resources.search("dakota"), vec!["North Dakota", "South Dakota"]);
    assert_eq!(resources.lookup("ca").unwrap().state, "California");
    assert!(resources.lookup("Vermont").is_none());
}

#[test]
fn support_filter_shows_only_support_groups() {
    let ctx = TestHarness::new();

    let sections = ctx
        .session
        .resources()
        .sections("Texas", ResourceFilter::Support)
        .unwrap();

    let groups: Vec<_> = sections.support_groups.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(groups, vec!["Dallas Fathers Rights", "Houston Dad Network"]);
    assert!(sections.legal_aid.is_empty());
    assert!(sections.custody_laws.is_none());
    assert!(sections.key_statistics.is_none());
}
