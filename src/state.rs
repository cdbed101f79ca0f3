//! Chat view state, separated from UI logic.
//!
//! `ViewState` holds the accumulated messages, trip metadata and pagination
//! flags. It never performs I/O: starting a load returns the `FetchRequest`
//! to dispatch, and `complete` folds the backend's answer back in. Only the
//! response to the request currently being tracked is accepted, which gives
//! refresh its last-fetch-wins behaviour.

use std::collections::HashSet;

use tracing::{debug, error, info, warn};

use crate::error::ChatError;
use crate::message::{Message, Page, TripInfo};
use crate::protocol::RequestId;

/// Why a fetch was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    Initial,
    More,
    Refresh,
}

/// A fetch the screen must hand to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    pub id: RequestId,
    pub page: u32,
    pub kind: FetchKind,
}

/// What `complete` did with a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Page 0 replaced the message list.
    Replaced { count: usize },
    /// An older page was appended.
    Appended { added: usize, duplicates: usize },
    /// The page was empty; no more pages will be requested.
    Exhausted,
    /// The fetch failed; state is unchanged apart from the loading flag.
    Failed(ChatError),
    /// The response belonged to a superseded or unknown request.
    Discarded,
}

/// View state for one mounted chat screen.
#[derive(Debug)]
pub struct ViewState {
    /// Newest-first, as delivered by the endpoint.
    messages: Vec<Message>,
    seen_ids: HashSet<String>,
    trip: TripInfo,
    current_page: u32,
    has_more: bool,
    in_flight: Option<FetchRequest>,
    next_request: u64,
    last_error: Option<ChatError>,
    /// Bumped whenever `messages` changes.
    revision: u64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            seen_ids: HashSet::new(),
            trip: TripInfo::default(),
            current_page: 0,
            has_more: true,
            in_flight: None,
            next_request: 1,
            last_error: None,
            revision: 0,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Changes whenever the message list does; derived views key on it.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn trip(&self) -> &TripInfo {
        &self.trip
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn in_flight(&self) -> Option<&FetchRequest> {
        self.in_flight.as_ref()
    }

    pub fn last_error(&self) -> Option<&ChatError> {
        self.last_error.as_ref()
    }

    pub fn dismiss_error(&mut self) {
        self.last_error = None;
    }

    /// Distinct senders other than ourselves, newest first.
    pub fn member_preview(&self, limit: usize) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.messages
            .iter()
            .filter(|m| !m.sender.is_self)
            .map(|m| m.sender.user_id.as_str())
            .filter(|id| seen.insert(*id))
            .take(limit)
            .collect()
    }

    /// Request page 0. Supersedes whatever is in flight.
    pub fn begin_initial(&mut self) -> FetchRequest {
        self.issue(0, FetchKind::Initial)
    }

    /// Request page 0 for a refresh. Supersedes whatever is in flight.
    pub fn begin_refresh(&mut self) -> FetchRequest {
        self.issue(0, FetchKind::Refresh)
    }

    /// Request the next older page, unless a fetch is running or the
    /// history is exhausted. Rejected calls change nothing.
    pub fn begin_more(&mut self) -> Option<FetchRequest> {
        if self.is_loading() || !self.has_more {
            return None;
        }
        Some(self.issue(self.current_page + 1, FetchKind::More))
    }

    fn issue(&mut self, page: u32, kind: FetchKind) -> FetchRequest {
        let request = FetchRequest {
            id: RequestId(self.next_request),
            page,
            kind,
        };
        self.next_request += 1;

        if let Some(previous) = self.in_flight.replace(request) {
            debug!(
                superseded = previous.id.0,
                by = request.id.0,
                "Superseding in-flight fetch"
            );
        }
        request
    }

    /// Fold a backend response into the state.
    pub fn complete(&mut self, id: RequestId, result: Result<Page, ChatError>) -> Completion {
        let request = match self.in_flight {
            Some(request) if request.id == id => request,
            _ => {
                debug!(request = id.0, "Discarding response for superseded request");
                return Completion::Discarded;
            }
        };
        self.in_flight = None;

        let page = match result {
            Ok(page) => page,
            Err(e) => {
                error!(page = request.page, kind = ?request.kind, error = %e, "Failed to load messages");
                self.last_error = Some(e.clone());
                return Completion::Failed(e);
            }
        };
        self.last_error = None;

        match request.kind {
            FetchKind::Initial | FetchKind::Refresh => self.replace(page),
            FetchKind::More => self.append(request.page, page),
        }
    }

    fn replace(&mut self, page: Page) -> Completion {
        self.trip = page.trip();
        self.current_page = 0;
        self.messages.clear();
        self.seen_ids.clear();
        self.revision += 1;

        if page.is_empty() {
            self.mark_exhausted(0);
            return Completion::Exhausted;
        }

        let duplicates = self.merge(page.messages);
        if duplicates > 0 {
            warn!(page = 0, duplicates, "Dropped messages with repeated ids");
        }
        info!(count = self.messages.len(), "Loaded latest messages");
        Completion::Replaced {
            count: self.messages.len(),
        }
    }

    fn append(&mut self, page_number: u32, page: Page) -> Completion {
        if page.is_empty() {
            self.mark_exhausted(page_number);
            return Completion::Exhausted;
        }

        let before = self.messages.len();
        let duplicates = self.merge(page.messages);
        let added = self.messages.len() - before;
        if added > 0 {
            self.revision += 1;
        }
        self.current_page = page_number;
        if duplicates > 0 {
            warn!(page = page_number, duplicates, "Dropped messages with repeated ids");
        }
        debug!(page = page_number, added, total = self.messages.len(), "Appended older messages");
        Completion::Appended { added, duplicates }
    }

    /// Append messages whose id has not been seen; returns how many were dropped.
    fn merge(&mut self, incoming: Vec<Message>) -> usize {
        let before = self.messages.len();
        let total = incoming.len();
        for message in incoming {
            if self.seen_ids.insert(message.id.clone()) {
                self.messages.push(message);
            }
        }
        total - (self.messages.len() - before)
    }

    fn mark_exhausted(&mut self, page: u32) {
        if self.has_more {
            info!(page, "Reached the end of the chat history");
        }
        self.has_more = false;
    }
}
