pub mod chat_message;
pub mod faq_entry;

pub use chat_message::ChatMessage;
pub use faq_entry::{builtin_faq, FaqEntry, DEFAULT_RESPONSES, QUICK_QUESTIONS, WELCOME_MESSAGE};
