//! Wire and view model for chat pages.
//!
//! Field names follow the chat endpoint's JSON (`chats`, `message`, `time`,
//! `is_kyc_verified`, ...) and are renamed to descriptive Rust names.

use serde::{Deserialize, Serialize};

pub const DEFAULT_TRIP_NAME: &str = "Trip 1";
pub const DEFAULT_TRIP_FROM: &str = "IGI Airport, T3";
pub const DEFAULT_TRIP_TO: &str = "Sector 28";

/// Author of a message as reported by the endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Sender {
    pub user_id: String,
    #[serde(rename = "image")]
    pub avatar_url: String,
    #[serde(rename = "is_kyc_verified")]
    pub is_verified: bool,
    #[serde(rename = "self")]
    pub is_self: bool,
}

/// A single chat message.
///
/// `id` is unique within a page but may repeat across pages.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub id: String,
    #[serde(rename = "message")]
    pub text: String,
    pub sender: Sender,
    #[serde(rename = "time")]
    pub timestamp: String,
}

/// One fetch's worth of messages plus trip metadata.
///
/// Messages arrive newest-first; page 0 holds the most recent ones.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Page {
    #[serde(rename = "chats")]
    pub messages: Vec<Message>,
    #[serde(rename = "from")]
    pub trip_from: String,
    #[serde(rename = "to")]
    pub trip_to: String,
    #[serde(rename = "name")]
    pub trip_name: String,
    pub status: String,
    /// Free-form status text some responses carry.
    #[serde(default)]
    pub message: String,
}

impl Page {
    pub fn trip(&self) -> TripInfo {
        TripInfo {
            name: self.trip_name.clone(),
            from: self.trip_from.clone(),
            to: self.trip_to.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// From/to/name describing the group conversation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TripInfo {
    pub name: String,
    pub from: String,
    pub to: String,
}

impl TripInfo {
    pub fn display_name(&self) -> &str {
        non_empty_or(&self.name, DEFAULT_TRIP_NAME)
    }

    pub fn display_from(&self) -> &str {
        non_empty_or(&self.from, DEFAULT_TRIP_FROM)
    }

    pub fn display_to(&self) -> &str {
        non_empty_or(&self.to, DEFAULT_TRIP_TO)
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "chats": [
            {
                "id": "3f1c",
                "message": "Connect with fellow travelers",
                "sender": {
                    "image": "https://example.com/a.png",
                    "is_kyc_verified": true,
                    "self": false,
                    "user_id": "u-1"
                },
                "time": "2023-01-12 10:00:00"
            }
        ],
        "from": "IGI Airport, T3",
        "message": "Success",
        "name": "Trip 1",
        "status": "success",
        "to": "Sector 28"
    }"#;

    #[test]
    fn test_decode_endpoint_shape() {
        let page: Page = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(page.messages.len(), 1);
        let msg = &page.messages[0];
        assert_eq!(msg.id, "3f1c");
        assert_eq!(msg.text, "Connect with fellow travelers");
        assert_eq!(msg.timestamp, "2023-01-12 10:00:00");
        assert!(msg.sender.is_verified);
        assert!(!msg.sender.is_self);
        assert_eq!(msg.sender.user_id, "u-1");
        assert_eq!(page.trip().name, "Trip 1");
        assert_eq!(page.status, "success");
        assert_eq!(page.message, "Success");
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let broken = SAMPLE.replace("\"status\": \"success\",", "");
        assert!(serde_json::from_str::<Page>(&broken).is_err());
    }

    #[test]
    fn test_status_text_is_optional() {
        let trimmed = SAMPLE.replace("\"message\": \"Success\",", "");
        let page: Page = serde_json::from_str(&trimmed).unwrap();
        assert!(page.message.is_empty());
    }

    #[test]
    fn test_trip_fallbacks() {
        let trip = TripInfo::default();
        assert_eq!(trip.display_name(), DEFAULT_TRIP_NAME);
        assert_eq!(trip.display_from(), DEFAULT_TRIP_FROM);
        assert_eq!(trip.display_to(), DEFAULT_TRIP_TO);

        let trip = TripInfo {
            name: "Goa".into(),
            from: " ".into(),
            to: "Panjim".into(),
        };
        assert_eq!(trip.display_name(), "Goa");
        assert_eq!(trip.display_from(), DEFAULT_TRIP_FROM);
        assert_eq!(trip.display_to(), "Panjim");
    }
}
