//! Date-separator grouping and time labels for the message list.
//!
//! Everything here is a pure function of the message sequence, the display
//! time zone and "today"; it is recomputed whenever the messages change.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

use crate::message::Message;

/// Formats accepted for timestamps without an offset. These are read as
/// wall-clock time in the display zone.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Order of the message slice handed to `build_display_items`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOrder {
    /// Index 0 is the newest message (inverted list).
    NewestFirst,
    /// Index 0 is the oldest message.
    OldestFirst,
}

/// One row of the rendered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayItem<'a> {
    Separator { date: NaiveDate, label: String },
    Message { message: &'a Message, time_label: String },
}

impl DisplayItem<'_> {
    pub fn is_separator(&self) -> bool {
        matches!(self, DisplayItem::Separator { .. })
    }
}

/// Parse an ISO-ish timestamp into the display zone.
pub fn parse_timestamp<Tz: TimeZone>(raw: &str, zone: &Tz) -> Option<DateTime<Tz>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(zone));
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return zone.from_local_datetime(&naive).earliest();
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .and_then(|naive| zone.from_local_datetime(&naive).earliest())
}

/// Calendar day of a timestamp in the display zone.
pub fn local_date<Tz: TimeZone>(raw: &str, zone: &Tz) -> Option<NaiveDate> {
    parse_timestamp(raw, zone).map(|dt| dt.date_naive())
}

/// 24-hour `HH:MM`. Unparseable timestamps are shown as-is.
pub fn time_label<Tz: TimeZone>(raw: &str, zone: &Tz) -> String {
    match parse_timestamp(raw, zone) {
        Some(dt) => dt.naive_local().format("%H:%M").to_string(),
        None => raw.to_string(),
    }
}

/// `Today`, `Yesterday` or `DD MON YYYY` in upper case.
pub fn day_label(day: NaiveDate, today: NaiveDate) -> String {
    if day == today {
        "Today".to_string()
    } else if today.pred_opt() == Some(day) {
        "Yesterday".to_string()
    } else {
        day.format("%d %b %Y").to_string().to_uppercase()
    }
}

/// Interleave day separators with messages.
///
/// Messages are split into runs of consecutive entries sharing a calendar
/// day. For `NewestFirst` each run is followed by its separator (which an
/// inverted list draws above the run); for `OldestFirst` each run is preceded
/// by it. A message whose timestamp cannot be parsed joins the current run.
pub fn build_display_items<'a, Tz: TimeZone>(
    messages: &'a [Message],
    order: ListOrder,
    zone: &Tz,
    today: NaiveDate,
) -> Vec<DisplayItem<'a>> {
    let mut items = Vec::with_capacity(messages.len() + messages.len() / 4 + 1);
    let mut current_day: Option<NaiveDate> = None;

    for message in messages {
        let day = local_date(&message.timestamp, zone);

        if let Some(day) = day {
            if current_day != Some(day) {
                match order {
                    ListOrder::NewestFirst => {
                        if let Some(prev) = current_day {
                            items.push(separator(prev, today));
                        }
                    }
                    ListOrder::OldestFirst => items.push(separator(day, today)),
                }
                current_day = Some(day);
            }
        }

        items.push(DisplayItem::Message {
            message,
            time_label: time_label(&message.timestamp, zone),
        });
    }

    if order == ListOrder::NewestFirst {
        if let Some(day) = current_day {
            items.push(separator(day, today));
        }
    }

    items
}

fn separator<'a>(date: NaiveDate, today: NaiveDate) -> DisplayItem<'a> {
    DisplayItem::Separator {
        date,
        label: day_label(date, today),
    }
}
