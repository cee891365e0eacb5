//! Integration tests for the photo gallery workflow through AdvocacySession.
//!
//! Covers upload intake, approve/reject/delete and the derived
//! pending/approved views.

mod common;

use crate::common::{upload, TestHarness};
use advocacy_core::common::ImageId;
use advocacy_core::domains::gallery::{
    FileRef, GalleryError, ImageStatus, ModerationPolicy, SubmitUploadInput, ValidationError,
};
use advocacy_core::domains::notifications::NotificationKind;
use advocacy_core::Config;

// =============================================================================
// Upload intake
// =============================================================================

#[test]
fn valid_submission_adds_one_pending_record() {
    let mut ctx = TestHarness::new();
    let before = ctx.session.list_records().len();

    let record = ctx.session.submit_upload(upload("Lake Walk", "Jordan")).unwrap();

    let records = ctx.session.list_records();
    assert_eq!(records.len(), before + 1);
    assert_eq!(records.last().unwrap().id, record.id);
    assert_eq!(record.status, ImageStatus::Pending);
    assert!(record.review_date.is_none());
    assert!(record.reviewed_by.is_none());
}

#[test]
fn missing_fields_are_refused_without_side_effects() {
    let mut ctx = TestHarness::new();
    let before = ctx.session.list_records().to_vec();

    let no_title = SubmitUploadInput::builder()
        .title("  ")
        .uploader_name("Jordan")
        .file(FileRef::new("a.jpg", "image/jpeg", "blob:a"))
        .build();
    let no_file = SubmitUploadInput::builder()
        .title("Lake Walk")
        .uploader_name("Jordan")
        .build();

    assert_eq!(
        ctx.session.submit_upload(no_title).unwrap_err(),
        GalleryError::Validation(ValidationError::MissingTitle)
    );
    assert_eq!(
        ctx.session.submit_upload(no_file).unwrap_err(),
        GalleryError::Validation(ValidationError::MissingFile)
    );

    assert_eq!(ctx.session.list_records(), before.as_slice());
    assert_eq!(ctx.spy.count(), 0);
}

#[test]
fn two_submissions_get_distinct_ids_in_insertion_order() {
    let mut ctx = TestHarness::new();

    let first = ctx.session.submit_upload(upload("Morning Swim", "Sam")).unwrap();
    let second = ctx.session.submit_upload(upload("Evening Walk", "Sam")).unwrap();

    assert_ne!(first.id, second.id);
    let titles: Vec<_> = ctx
        .session
        .list_records()
        .iter()
        .map(|r| r.title.as_str())
        .collect();
    assert_eq!(&titles[titles.len() - 2..], &["Morning Swim", "Evening Walk"]);
}

// =============================================================================
// Moderation
// =============================================================================

#[test]
fn park_day_scenario() {
    let mut ctx = TestHarness::new();
    let start = ctx.session.counts();

    let record = ctx.session.submit_upload(upload("Park Day", "Alex")).unwrap();
    let after_upload = ctx.session.counts();
    assert_eq!(after_upload.pending, start.pending + 1);
    assert_eq!(after_upload.approved, start.approved);
    assert!(ctx.session.pending().iter().any(|r| r.id == record.id));

    ctx.session.approve(record.id).unwrap();

    let after_approve = ctx.session.counts();
    assert_eq!(after_approve.pending, after_upload.pending - 1);
    assert_eq!(after_approve.approved, after_upload.approved + 1);
    assert!(ctx.session.approved().iter().any(|r| r.id == record.id));

    let approvals = ctx.spy.of_kind(NotificationKind::Approved);
    assert_eq!(approvals.len(), 1);
    assert!(approvals[0].subject.contains("Park Day"));
}

#[test]
fn unknown_ids_leave_records_unchanged() {
    let mut ctx = TestHarness::new();
    ctx.session.submit_upload(upload("Lake Walk", "Jordan")).unwrap();
    let before = ctx.session.list_records().to_vec();
    let stranger = ImageId::new();

    assert!(ctx.session.approve(stranger).unwrap_err().is_not_found());
    assert!(ctx.session.reject(stranger).unwrap_err().is_not_found());
    assert!(ctx.session.delete(stranger).unwrap_err().is_not_found());

    assert_eq!(ctx.session.list_records(), before.as_slice());
}

#[test]
fn strict_policy_refuses_second_review() {
    let mut ctx = TestHarness::new();
    let record = ctx.session.submit_upload(upload("Lake Walk", "Jordan")).unwrap();

    ctx.session.approve(record.id).unwrap();
    let err = ctx.session.reject(record.id).unwrap_err();

    assert!(matches!(
        err,
        GalleryError::InvalidState {
            status: ImageStatus::Approved,
            ..
        }
    ));
    assert_eq!(ctx.spy.of_kind(NotificationKind::Rejected).len(), 0);
}

#[test]
fn permissive_policy_last_review_wins() {
    let config = Config {
        moderation_policy: ModerationPolicy::Permissive,
        ..Config::default()
    };
    let mut ctx = TestHarness::with_config(config);
    let record = ctx.session.submit_upload(upload("Lake Walk", "Jordan")).unwrap();

    let approved = ctx.session.approve(record.id).unwrap();
    assert!(approved.review_date.is_some());

    let rejected = ctx.session.reject(record.id).unwrap();
    assert_eq!(rejected.status, ImageStatus::Rejected);
    assert!(rejected.review_date.is_some());
    assert_eq!(ctx.spy.of_kind(NotificationKind::Approved).len(), 1);
    assert_eq!(ctx.spy.of_kind(NotificationKind::Rejected).len(), 1);
}

#[test]
fn deleting_approved_record_removes_it_silently() {
    let mut ctx = TestHarness::new();
    let record = ctx.session.submit_upload(upload("Lake Walk", "Jordan")).unwrap();
    ctx.session.approve(record.id).unwrap();
    let notified = ctx.spy.count();

    ctx.session.delete(record.id).unwrap();

    assert!(ctx.session.list_records().iter().all(|r| r.id != record.id));
    assert_eq!(ctx.spy.count(), notified);

    // Second delete is a not-found no-op
    let before = ctx.session.list_records().to_vec();
    assert!(ctx.session.delete(record.id).unwrap_err().is_not_found());
    assert_eq!(ctx.session.list_records(), before.as_slice());
}

#[test]
fn seeded_records_can_be_deleted() {
    let mut ctx = TestHarness::new();
    let seed = ctx.session.approved()[0].id;

    ctx.session.delete(seed).unwrap();

    assert_eq!(ctx.session.counts().approved, 2);
}

#[test]
fn pending_reminder_reaches_admin_inbox() {
    let mut ctx = TestHarness::new();
    assert_eq!(ctx.session.remind_pending_reviews(), None);

    ctx.session.submit_upload(upload("One", "Jordan")).unwrap();
    ctx.session.submit_upload(upload("Two", "Jordan")).unwrap();

    assert_eq!(ctx.session.remind_pending_reviews(), Some(2));
    let reminders = ctx.spy.of_kind(NotificationKind::ApprovalNeeded);
    assert_eq!(reminders.len(), 1);
    assert!(reminders[0].body.contains("2 photos"));

    // Two uploads plus the reminder
    assert_eq!(ctx.session.inbox().len(), 3);
    assert_eq!(ctx.session.inbox().unread_count(), 3);
}
