//! Scroll and layout helpers for the inverted message list.

use chrono::{NaiveDate, TimeZone};

use crate::grouping::{build_display_items, DisplayItem, ListOrder};
use crate::message::Message;

/// Owned display row; messages are referenced by index into the
/// newest-first message slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CachedRow {
    Separator(String),
    Message { index: usize, time_label: String },
}

/// Display rows for the current message revision, rebuilt only when the
/// messages or the local day change.
#[derive(Debug, Default)]
pub struct DisplayCache {
    key: Option<(u64, NaiveDate)>,
    rows: Vec<CachedRow>,
}

impl DisplayCache {
    /// Rows in newest-first order for `messages` at `revision`.
    pub(crate) fn rows<Tz: TimeZone>(
        &mut self,
        messages: &[Message],
        revision: u64,
        zone: &Tz,
        today: NaiveDate,
    ) -> &[CachedRow] {
        let key = (revision, today);
        if self.key != Some(key) {
            let mut index = 0;
            self.rows = build_display_items(messages, ListOrder::NewestFirst, zone, today)
                .into_iter()
                .map(|item| match item {
                    DisplayItem::Separator { label, .. } => CachedRow::Separator(label),
                    DisplayItem::Message { time_label, .. } => {
                        index += 1;
                        CachedRow::Message {
                            index: index - 1,
                            time_label,
                        }
                    }
                })
                .collect();
            self.key = Some(key);
        }
        &self.rows
    }
}

/// Whether the list is close enough to its top (the oldest loaded message)
/// to request the next page. `threshold` is a fraction of the viewport.
pub(crate) fn should_load_more(offset_y: f32, viewport_height: f32, content_height: f32, threshold: f32) -> bool {
    // Content that does not fill the viewport cannot be scrolled to the top
    if content_height <= viewport_height {
        return true;
    }
    offset_y <= viewport_height * threshold
}

/// New scroll offset that keeps the same messages in view after `grown`
/// pixels of older content were inserted above them.
pub(crate) fn compensated_offset(previous_height: f32, new_height: f32, offset_y: f32) -> Option<f32> {
    let grown = new_height - previous_height;
    (grown > 0.5).then_some(offset_y + grown)
}

/// Keeps the viewport anchored when older pages are added above it.
#[derive(Debug, Default)]
pub struct ScrollAnchor {
    content_height: f32,
    compensate_next: bool,
    pending_offset: Option<f32>,
}

impl ScrollAnchor {
    /// Call when older messages were appended since the last frame.
    pub fn older_messages_added(&mut self) {
        self.compensate_next = true;
    }

    /// An older page was added and the next frame's growth will be absorbed.
    pub(crate) fn is_compensating(&self) -> bool {
        self.compensate_next
    }

    /// Offset to force on the scroll area this frame, if any.
    pub(crate) fn take_pending_offset(&mut self) -> Option<f32> {
        self.pending_offset.take()
    }

    /// Record the frame's layout; schedules a correction for the next frame
    /// when older content grew the list.
    pub(crate) fn observe(&mut self, content_height: f32, offset_y: f32) {
        if self.compensate_next {
            self.pending_offset = compensated_offset(self.content_height, content_height, offset_y);
            self.compensate_next = false;
        }
        self.content_height = content_height;
    }
}
