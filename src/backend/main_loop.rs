//! Backend main loop: a Tokio runtime on its own thread, polling the UI's
//! action channel.

use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender, TryRecvError};
use tokio::runtime::Runtime;
use tracing::{debug, error};

use super::handlers::{handle_backend_action, LoopControl};
use crate::client::PageSource;
use crate::protocol::{BackendAction, GuiEvent};

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Run the backend event loop on a tokio runtime.
///
/// Returns when the UI sends `Shutdown` or drops its action sender. Dropping
/// the runtime on return cancels fetches that are still in flight.
pub fn run_backend(
    action_rx: Receiver<BackendAction>,
    event_tx: Sender<GuiEvent>,
    source: Arc<dyn PageSource>,
) {
    let rt = match Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            error!(error = %e, "Failed to create Tokio runtime");
            let _ = event_tx.send(GuiEvent::BackendFailed(format!(
                "Failed to create Tokio runtime: {}",
                e
            )));
            return;
        }
    };

    rt.block_on(async move {
        loop {
            match action_rx.try_recv() {
                Ok(action) => {
                    if handle_backend_action(action, &source, &event_tx) == LoopControl::Stop {
                        break;
                    }
                }
                Err(TryRecvError::Empty) => tokio::time::sleep(POLL_INTERVAL).await,
                Err(TryRecvError::Disconnected) => {
                    debug!("Action channel closed");
                    break;
                }
            }
        }
    });
    debug!("Backend stopped");
}
