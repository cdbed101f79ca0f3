//! Composer state for the message input bar.
//!
//! The endpoint is read-only, so a "sent" draft is logged and cleared but
//! delivered nowhere.

use crate::validation::{sanitize_draft, MAX_DRAFT_CHARS};

#[derive(Default)]
pub struct InputState {
    /// Current message being composed
    pub message_input: String,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Send is enabled only for drafts with visible content.
    pub fn can_send(&self) -> bool {
        !self.message_input.trim().is_empty()
    }

    /// Enforce the length cap after an edit.
    pub fn clamp(&mut self) {
        if self.message_input.chars().count() > MAX_DRAFT_CHARS {
            self.message_input = sanitize_draft(&self.message_input);
        }
    }

    /// Take the trimmed draft and clear the input. `None` if nothing to send.
    pub fn take_draft(&mut self) -> Option<String> {
        if !self.can_send() {
            return None;
        }
        let draft = self.message_input.trim().to_string();
        self.message_input.clear();
        Some(draft)
    }
}
