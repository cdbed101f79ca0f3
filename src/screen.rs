//! Chat screen controller.
//!
//! Owns the `ViewState` and the channel ends to the backend. `load_initial`,
//! `load_more` and `refresh` are the only mutators; fetch completions are
//! folded in by `process_events`. Dropping the screen shuts the backend down,
//! so results that arrive after unmount have nowhere to go.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{unbounded, Receiver, Sender};
use tracing::{debug, error};

use crate::backend::run_backend;
use crate::client::PageSource;
use crate::error::ChatError;
use crate::protocol::{BackendAction, GuiEvent};
use crate::state::{Completion, FetchRequest, ViewState};

pub struct ChatScreen {
    state: ViewState,
    action_tx: Sender<BackendAction>,
    event_rx: Receiver<GuiEvent>,
    /// Set when older messages were appended since the last check; the list
    /// uses it to keep the scroll position anchored.
    older_loaded: bool,
    backend_error: Option<String>,
}

impl ChatScreen {
    pub fn new(action_tx: Sender<BackendAction>, event_rx: Receiver<GuiEvent>) -> Self {
        Self {
            state: ViewState::new(),
            action_tx,
            event_rx,
            older_loaded: false,
            backend_error: None,
        }
    }

    /// Spawn the backend thread for `source` and return a screen wired to it.
    pub fn spawn(source: Arc<dyn PageSource>) -> (Self, JoinHandle<()>) {
        let (action_tx, action_rx) = unbounded::<BackendAction>();
        let (event_tx, event_rx) = unbounded::<GuiEvent>();

        let handle = thread::spawn(move || {
            run_backend(action_rx, event_tx, source);
        });

        (Self::new(action_tx, event_rx), handle)
    }

    /// Read-only view for presentation.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn backend_error(&self) -> Option<&str> {
        self.backend_error.as_deref()
    }

    pub fn load_initial(&mut self) {
        let request = self.state.begin_initial();
        self.dispatch(request);
    }

    /// Returns false when the call was rejected (already loading, or the
    /// history is exhausted); nothing is sent in that case.
    pub fn load_more(&mut self) -> bool {
        match self.state.begin_more() {
            Some(request) => {
                self.dispatch(request);
                true
            }
            None => false,
        }
    }

    pub fn refresh(&mut self) {
        let request = self.state.begin_refresh();
        self.dispatch(request);
    }

    pub fn dismiss_error(&mut self) {
        self.state.dismiss_error();
    }

    /// Returns true once after older messages were appended.
    pub fn take_older_loaded(&mut self) -> bool {
        std::mem::take(&mut self.older_loaded)
    }

    /// Drain pending backend events into the view state.
    pub fn process_events(&mut self) -> Vec<Completion> {
        let mut completions = Vec::new();
        while let Ok(event) = self.event_rx.try_recv() {
            match event {
                GuiEvent::PageFetched {
                    request_id,
                    page,
                    result,
                } => {
                    debug!(request = request_id.0, page, ok = result.is_ok(), "Fetch completed");
                    let completion = self.state.complete(request_id, result);
                    if matches!(completion, Completion::Appended { added, .. } if added > 0) {
                        self.older_loaded = true;
                    }
                    completions.push(completion);
                }
                GuiEvent::BackendFailed(reason) => {
                    error!(%reason, "Backend unavailable");
                    self.backend_error = Some(reason);
                }
            }
        }
        completions
    }

    fn dispatch(&mut self, request: FetchRequest) {
        debug!(request = request.id.0, page = request.page, kind = ?request.kind, "Dispatching fetch");
        let action = BackendAction::FetchPage {
            request_id: request.id,
            page: request.page,
        };
        if self.action_tx.send(action).is_err() {
            // No backend to answer; settle the request so loading does not stick
            self.state.complete(
                request.id,
                Err(ChatError::Network("backend is not running".into())),
            );
        }
    }
}

impl Drop for ChatScreen {
    fn drop(&mut self) {
        let _ = self.action_tx.send(BackendAction::Shutdown);
    }
}
