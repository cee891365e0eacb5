//! AdvocacySession - one visitor's page session.
//!
//! Owns every in-memory store for the lifetime of the session and is the
//! only surface a display layer calls into. Dropping the session discards
//! all state.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::common::ImageId;
use crate::config::Config;
use crate::domains::faq::{ChatMessage, ChatSession, FaqAssistant, ResponseSelector};
use crate::domains::gallery::actions::{
    approve_image, delete_image, reject_image, remind_pending_reviews, submit_upload, Moderator,
};
use crate::domains::gallery::{
    GalleryCounts, GalleryError, ImageRecord, ImageStore, SubmitUploadInput, UploadRequirements,
};
use crate::domains::notifications::{
    AdminInbox, EmailNotifier, NotificationHub, NotificationListener, NotificationSettings,
};
use crate::domains::petition::{Petition, PetitionError, Signature, SignatureInput};
use crate::domains::resources::StateDirectory;
use crate::kernel::SessionDeps;

/// Name stamped into `reviewed_by` for admin panel actions.
pub const ADMIN_REVIEWER: &str = "Gallery Admin";

pub struct AdvocacySession {
    config: Config,
    images: ImageStore,
    hub: NotificationHub,
    inbox: Arc<AdminInbox>,
    chat: ChatSession,
    petition: Petition,
    resources: StateDirectory,
}

impl AdvocacySession {
    /// Start a session: seeded gallery, empty inbox, fresh chat.
    pub fn new(config: Config, deps: SessionDeps) -> Result<Self> {
        let mut hub = NotificationHub::with_settings(NotificationSettings {
            admin_email: config.admin_email.clone(),
            pending_alert_threshold: config.pending_alert_threshold,
        });

        let inbox = Arc::new(AdminInbox::new());
        hub.subscribe(inbox.clone());
        hub.subscribe(Arc::new(EmailNotifier::new(deps.email.clone())));

        let chat = ChatSession::new(
            FaqAssistant::builtin(ResponseSelector::from_seed(config.chat_seed)),
            config.chat_typing_delay_min,
            config.chat_typing_delay_max,
        );
        let petition = Petition::new(config.petition_initial_signatures, config.petition_goal);
        let resources = StateDirectory::builtin()?;
        let images = ImageStore::seeded();

        info!(
            policy = %config.moderation_policy,
            seeded_images = images.len(),
            "Session started"
        );

        Ok(Self {
            config,
            images,
            hub,
            inbox,
            chat,
            petition,
            resources,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // =========================================================================
    // Gallery
    // =========================================================================

    pub fn submit_upload(&mut self, input: SubmitUploadInput) -> Result<ImageRecord, GalleryError> {
        let requirements = UploadRequirements {
            require_email: self.config.require_uploader_email,
        };
        submit_upload(input, requirements, &mut self.images, &self.hub)
    }

    pub fn approve(&mut self, id: ImageId) -> Result<ImageRecord, GalleryError> {
        let moderator = self.moderator();
        approve_image(id, moderator, &mut self.images, &self.hub)
    }

    pub fn reject(&mut self, id: ImageId) -> Result<ImageRecord, GalleryError> {
        let moderator = self.moderator();
        reject_image(id, moderator, &mut self.images, &self.hub)
    }

    pub fn delete(&mut self, id: ImageId) -> Result<ImageRecord, GalleryError> {
        let moderator = self.moderator();
        delete_image(id, moderator, &mut self.images, &self.hub)
    }

    /// All records in insertion order.
    pub fn list_records(&self) -> &[ImageRecord] {
        self.images.list()
    }

    pub fn pending(&self) -> Vec<&ImageRecord> {
        self.images.pending()
    }

    pub fn approved(&self) -> Vec<&ImageRecord> {
        self.images.approved()
    }

    pub fn counts(&self) -> GalleryCounts {
        self.images.counts()
    }

    pub fn remind_pending_reviews(&self) -> Option<usize> {
        remind_pending_reviews(&self.images, &self.hub)
    }

    fn moderator(&self) -> Moderator<'static> {
        Moderator::new(ADMIN_REVIEWER, self.config.moderation_policy)
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    /// Register an extra notification listener for the rest of the session.
    pub fn subscribe(&mut self, listener: Arc<dyn NotificationListener>) {
        self.hub.subscribe(listener);
    }

    pub fn inbox(&self) -> &AdminInbox {
        &self.inbox
    }

    // =========================================================================
    // FAQ chat
    // =========================================================================

    pub async fn send_chat_message(&mut self, text: &str) -> Option<ChatMessage> {
        self.chat.send_message(text).await
    }

    pub async fn ask_quick_question(&mut self, index: usize) -> Option<ChatMessage> {
        self.chat.ask_quick_question(index).await
    }

    pub fn chat(&self) -> &ChatSession {
        &self.chat
    }

    // =========================================================================
    // Petition and resources
    // =========================================================================

    pub fn sign_petition(&mut self, input: SignatureInput) -> Result<&Signature, PetitionError> {
        self.petition.sign(input)
    }

    pub fn petition(&self) -> &Petition {
        &self.petition
    }

    pub fn resources(&self) -> &StateDirectory {
        &self.resources
    }
}
