//! Core TripChatApp struct definition and initialization

use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Instant;

use tracing::{debug, info};

use crate::client::PageSource;
use crate::config::Settings;
use crate::input_state::InputState;
use crate::screen::ChatScreen;
use crate::ui::messages::{DisplayCache, ScrollAnchor};
use crate::ui::theme::{apply_app_style, ChatTheme};

pub struct TripChatApp {
    // Chat screen controller (view state and backend channels)
    pub screen: ChatScreen,

    pub settings: Settings,

    // Composer
    pub input: InputState,

    pub theme: ChatTheme,
    pub scroll_anchor: ScrollAnchor,
    pub display_cache: DisplayCache,

    // Toasts: (message, shown at)
    pub status_messages: Vec<(String, Instant)>,

    // Modal alert text, shown until dismissed
    pub error_alert: Option<String>,

    backend_handle: Option<JoinHandle<()>>,
}

impl TripChatApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, source: Arc<dyn PageSource>) -> Self {
        let (screen, handle) = ChatScreen::spawn(source);

        let mut app = Self::with_screen(screen, settings);
        app.backend_handle = Some(handle);

        apply_app_style(&cc.egui_ctx, &app.theme);

        app.screen.load_initial();
        app
    }

    /// Build the app around an existing screen without touching egui.
    pub fn with_screen(screen: ChatScreen, settings: Settings) -> Self {
        let theme = ChatTheme::named(&settings.theme);
        Self {
            screen,
            settings,
            input: InputState::new(),
            theme,
            scroll_anchor: ScrollAnchor::default(),
            display_cache: DisplayCache::default(),
            status_messages: Vec::new(),
            error_alert: None,
            backend_handle: None,
        }
    }

    /// Show a transient status toast.
    pub fn push_status(&mut self, message: impl Into<String>) {
        self.status_messages.push((message.into(), Instant::now()));
    }

    pub fn refresh(&mut self) {
        info!("Refreshing chat");
        self.error_alert = None;
        self.screen.refresh();
    }

    pub fn dismiss_alert(&mut self) {
        self.error_alert = None;
        self.screen.dismiss_error();
    }

    /// Log and clear the composer draft. The endpoint is read-only, so the
    /// draft is delivered nowhere.
    pub fn send_draft(&mut self) -> bool {
        match self.input.take_draft() {
            Some(draft) => {
                info!(chars = draft.chars().count(), text = %draft, "Send pressed");
                true
            }
            None => false,
        }
    }
}

impl Drop for TripChatApp {
    fn drop(&mut self) {
        // The screen sends Shutdown when it drops; the thread is left to
        // finish on its own so closing the window never blocks.
        if let Some(handle) = self.backend_handle.take() {
            debug!(finished = handle.is_finished(), "Chat screen unmounted");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    pub(crate) fn detached_app(settings: Settings) -> TripChatApp {
        let (action_tx, _action_rx) = unbounded();
        let (_event_tx, event_rx) = unbounded();
        TripChatApp::with_screen(ChatScreen::new(action_tx, event_rx), settings)
    }

    #[test]
    fn test_theme_follows_settings() {
        let settings = Settings {
            theme: "dark".into(),
            ..Settings::default()
        };
        assert!(detached_app(settings).theme.is_dark());
        assert!(!detached_app(Settings::default()).theme.is_dark());
    }

    #[test]
    fn test_send_draft_clears_input() {
        let mut app = detached_app(Settings::default());
        app.input.message_input = "  hello  ".into();
        assert!(app.send_draft());
        assert!(app.input.message_input.is_empty());
        assert!(!app.send_draft());
    }
}
