//! Message list rendering: bubbles, day separators and infinite scroll.

mod format;
mod helpers;
mod render;

// Re-export public API
pub use helpers::{DisplayCache, ScrollAnchor};
pub use render::{render_message_list, ListOutcome};
