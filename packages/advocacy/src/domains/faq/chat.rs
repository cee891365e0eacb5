//! Chat session with the FAQ assistant.
//!
//! Replies are computed immediately but only become visible after an
//! artificial typing delay. Dropping the future cancels the pending reply.

use std::time::Duration;

use tracing::debug;

use super::models::{ChatMessage, QUICK_QUESTIONS, WELCOME_MESSAGE};
use super::responder::FaqAssistant;

pub struct ChatSession {
    assistant: FaqAssistant,
    messages: Vec<ChatMessage>,
    typing_delay_min: Duration,
    typing_delay_max: Duration,
}

impl ChatSession {
    /// Opens with the welcome message.
    pub fn new(assistant: FaqAssistant, typing_delay_min: Duration, typing_delay_max: Duration) -> Self {
        Self {
            assistant,
            messages: vec![ChatMessage::from_bot(WELCOME_MESSAGE)],
            typing_delay_min,
            typing_delay_max,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn quick_questions(&self) -> &'static [&'static str] {
        &QUICK_QUESTIONS
    }

    /// Post a user message and wait for the bot's reply.
    ///
    /// Blank input is ignored and returns None without touching the history.
    pub async fn send_message(&mut self, text: &str) -> Option<ChatMessage> {
        if text.trim().is_empty() {
            return None;
        }

        self.messages.push(ChatMessage::from_user(text));

        let reply = self.assistant.respond(text);
        let delay = self
            .assistant
            .selector_mut()
            .delay_between(self.typing_delay_min, self.typing_delay_max);

        debug!(delay_ms = delay.as_millis() as u64, "Bot typing");
        tokio::time::sleep(delay).await;

        let message = ChatMessage::from_bot(reply);
        self.messages.push(message.clone());
        Some(message)
    }

    /// Send one of the suggested questions by position.
    pub async fn ask_quick_question(&mut self, index: usize) -> Option<ChatMessage> {
        let question = QUICK_QUESTIONS.get(index)?;
        self.send_message(question).await
    }
}
