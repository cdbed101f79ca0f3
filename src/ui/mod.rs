pub mod messages;
pub mod theme;
pub mod toasts;
