//! Event processing from backend

use tracing::{debug, warn};

use super::TripChatApp;
use crate::state::Completion;

pub const LOAD_FAILED_TITLE: &str = "Error";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load messages";

impl TripChatApp {
    pub fn process_events(&mut self) {
        for completion in self.screen.process_events() {
            self.handle_completion(completion);
        }

        if self.screen.take_older_loaded() {
            self.scroll_anchor.older_messages_added();
        }
    }

    fn handle_completion(&mut self, completion: Completion) {
        match completion {
            Completion::Failed(err) => {
                warn!(error = %err, "Showing load failure");
                if self.settings.alert_on_error {
                    self.error_alert = Some(LOAD_FAILED_MESSAGE.to_string());
                } else {
                    self.push_status(LOAD_FAILED_MESSAGE);
                }
            }
            Completion::Exhausted => {
                debug!("Reached the start of the conversation");
            }
            Completion::Replaced { .. } | Completion::Appended { .. } | Completion::Discarded => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::error::ChatError;
    use crate::protocol::{BackendAction, GuiEvent};
    use crate::screen::ChatScreen;
    use crate::state::tests::page_of;
    use crossbeam_channel::{unbounded, Receiver, Sender};

    fn wired_app(settings: Settings) -> (TripChatApp, Receiver<BackendAction>, Sender<GuiEvent>) {
        let (action_tx, action_rx) = unbounded();
        let (event_tx, event_rx) = unbounded();
        let app = TripChatApp::with_screen(ChatScreen::new(action_tx, event_rx), settings);
        (app, action_rx, event_tx)
    }

    fn answer(action_rx: &Receiver<BackendAction>, event_tx: &Sender<GuiEvent>, result: Result<crate::message::Page, ChatError>) {
        match action_rx.try_recv() {
            Ok(BackendAction::FetchPage { request_id, page }) => event_tx
                .send(GuiEvent::PageFetched { request_id, page, result })
                .unwrap(),
            other => panic!("expected FetchPage, got {:?}", other),
        }
    }

    #[test]
    fn test_failure_raises_alert() {
        let (mut app, action_rx, event_tx) = wired_app(Settings::default());
        app.screen.load_initial();
        answer(&action_rx, &event_tx, Err(ChatError::Network("HTTP 500".into())));
        app.process_events();

        assert_eq!(app.error_alert.as_deref(), Some(LOAD_FAILED_MESSAGE));
        assert!(app.status_messages.is_empty());

        app.dismiss_alert();
        assert!(app.error_alert.is_none());
        assert!(app.screen.state().last_error().is_none());
    }

    #[test]
    fn test_failure_toasts_when_alerts_disabled() {
        let settings = Settings {
            alert_on_error: false,
            ..Settings::default()
        };
        let (mut app, action_rx, event_tx) = wired_app(settings);
        app.screen.load_initial();
        answer(&action_rx, &event_tx, Err(ChatError::Parse("bad".into())));
        app.process_events();

        assert!(app.error_alert.is_none());
        assert_eq!(app.status_messages.len(), 1);
    }

    #[test]
    fn test_older_page_marks_scroll_anchor() {
        let (mut app, action_rx, event_tx) = wired_app(Settings::default());
        app.screen.load_initial();
        answer(&action_rx, &event_tx, Ok(page_of(&["b"])));
        app.process_events();
        assert!(!app.scroll_anchor.is_compensating());
        assert!(app.screen.load_more());
        answer(&action_rx, &event_tx, Ok(page_of(&["a"])));
        app.process_events();

        assert_eq!(app.screen.state().messages().len(), 2);
        assert!(app.scroll_anchor.is_compensating());
    }
}
