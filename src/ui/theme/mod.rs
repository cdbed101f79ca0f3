//! Colour themes and styling utilities for the chat screen.

pub mod colors;
pub mod fonts;
pub mod widgets;

pub use colors::{avatar_color, ChatTheme};
pub use fonts::{apply_app_style, configure_text_styles};
pub use widgets::{generate_identicon_pattern, render_avatar, render_verified_badge};
