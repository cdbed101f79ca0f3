//! Application module structure for TripChatApp
//!
//! - `core`: TripChatApp struct and initialization
//! - `events`: folding fetch completions into alerts and toasts
//! - `update`: main update loop and global shortcuts
//! - `ui::panels`: header and message list
//! - `ui::input`: composer
//! - `ui::menus`: overflow menu and error alert

pub mod core;
pub mod events;
pub mod update;
pub mod ui;

// Re-export TripChatApp for public API
pub use core::TripChatApp;
