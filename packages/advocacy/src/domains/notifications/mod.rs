//! Notifications domain - alerts raised by gallery activity.
//!
//! `NotificationHub` fans notifications out to listeners: the admin inbox,
//! the (simulated) email sender, and anything a test registers.

pub mod effects;
pub mod hub;
pub mod inbox;
pub mod models;
pub mod templates;

pub use effects::EmailNotifier;
pub use hub::{NotificationHub, NotificationListener, PublishReport};
pub use inbox::AdminInbox;
pub use models::{Notification, NotificationKind, Priority};
pub use templates::{notification_for, NotificationSettings};
