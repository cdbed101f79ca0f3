use crate::error::ChatError;
use crate::message::Page;

/// Identifies one fetch so late responses can be matched or discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub u64);

/// Actions sent from the UI to the Backend
#[derive(Debug, Clone)]
pub enum BackendAction {
    /// Fetch one page; the result comes back as `GuiEvent::PageFetched`
    FetchPage { request_id: RequestId, page: u32 },
    /// Stop the backend loop and drop any in-flight fetches
    Shutdown,
}

/// Events sent from the Backend to the UI
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// A fetch finished, successfully or not
    PageFetched {
        request_id: RequestId,
        page: u32,
        result: Result<Page, ChatError>,
    },
    /// The backend could not start (e.g. runtime creation failed)
    BackendFailed(String),
}
