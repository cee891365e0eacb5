//! FAQ assistant - keyword matching over a fixed question table.

pub mod chat;
pub mod matcher;
pub mod models;
pub mod responder;

pub use chat::ChatSession;
pub use matcher::find_best_match;
pub use models::{builtin_faq, ChatMessage, FaqEntry};
pub use responder::{FaqAssistant, ResponseSelector};
