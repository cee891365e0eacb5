//! Session Demo
//!
//! Runs one scripted visitor session against the site core and logs what
//! the display layer would show: an upload, its moderation, a chat exchange,
//! a petition signature and a resource lookup.

use advocacy_core::domains::gallery::{FileRef, SubmitUploadInput};
use advocacy_core::domains::petition::SignatureInput;
use advocacy_core::domains::resources::ResourceFilter;
use advocacy_core::kernel::SessionDeps;
use advocacy_core::{AdvocacySession, Config};
use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!(policy = %config.moderation_policy, "Starting advocacy session demo");

    let mut session = AdvocacySession::new(config, SessionDeps::simulated())?;

    // Gallery
    let upload = SubmitUploadInput::builder()
        .title("Park Day")
        .description("Saturday afternoon at the lakefront park")
        .uploader_name("Alex")
        .uploader_email("alex@example.com")
        .file(FileRef::new("park-day.jpg", "image/jpeg", "blob:park-day"))
        .build();
    let record = session.submit_upload(upload)?;
    tracing::info!(counts = ?session.counts(), "After upload");

    session.remind_pending_reviews();
    session.approve(record.id)?;
    tracing::info!(counts = ?session.counts(), "After approval");

    for notification in session.inbox().notifications() {
        tracing::info!(
            kind = %notification.kind,
            priority = %notification.priority,
            subject = %notification.subject,
            "Inbox"
        );
    }

    // FAQ chat
    for question in ["How do I get custody of my child?", "Do you sell t-shirts?"] {
        if let Some(reply) = session.send_chat_message(question).await {
            tracing::info!(question, reply = %reply.text, "Chat");
        }
    }

    // Petition
    let signature = SignatureInput::builder()
        .first_name("Alex")
        .last_name("Morgan")
        .email("alex@example.com")
        .zip_code("60601")
        .is_father(true)
        .build();
    session.sign_petition(signature)?;
    tracing::info!(
        signatures = session.petition().signature_count(),
        progress = %format!("{:.1}%", session.petition().progress_percent()),
        "Petition"
    );

    // Resources
    if let Some(sections) = session.resources().sections("TX", ResourceFilter::Legal) {
        for org in sections.legal_aid {
            tracing::info!(state = sections.state, name = %org.name, phone = %org.phone, "Legal aid");
        }
    }

    // Let fire-and-forget email tasks flush before the runtime shuts down
    tokio::task::yield_now().await;

    Ok(())
}
