//! Backend action handling.
//!
//! Each fetch runs as its own task so a refresh can be issued while an
//! older request is still pending; the UI decides which result wins.

use std::sync::Arc;

use crossbeam_channel::Sender;
use tracing::{debug, warn};

use crate::client::PageSource;
use crate::protocol::{BackendAction, GuiEvent};

#[derive(Debug, PartialEq, Eq)]
pub(super) enum LoopControl {
    Continue,
    Stop,
}

/// Dispatch one action from the UI.
pub(super) fn handle_backend_action(
    action: BackendAction,
    source: &Arc<dyn PageSource>,
    event_tx: &Sender<GuiEvent>,
) -> LoopControl {
    match action {
        BackendAction::FetchPage { request_id, page } => {
            let source = Arc::clone(source);
            let event_tx = event_tx.clone();
            tokio::spawn(async move {
                let result = source.fetch_page(page).await;
                if let Err(e) = &result {
                    warn!(request = request_id.0, page, error = %e, "Page fetch failed");
                }
                let event = GuiEvent::PageFetched {
                    request_id,
                    page,
                    result,
                };
                if event_tx.send(event).is_err() {
                    // Screen is gone; nothing may be mutated anymore
                    debug!(request = request_id.0, "Dropping fetch result after unmount");
                }
            });
            LoopControl::Continue
        }
        BackendAction::Shutdown => {
            debug!("Backend shutdown requested");
            LoopControl::Stop
        }
    }
}
