//! Error types for fetching pages and loading configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Failure of a single page fetch.
///
/// Both variants are handled at the fetch boundary: logged, loading cleared,
/// messages left untouched. Cloneable so it can travel inside a `GuiEvent`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChatError {
    /// Transport failure, timeout or non-2xx response.
    #[error("network error: {0}")]
    Network(String),
    /// Body was not valid JSON for the page shape.
    #[error("malformed response: {0}")]
    Parse(String),
}

impl ChatError {
    pub fn is_network(&self) -> bool {
        matches!(self, ChatError::Network(_))
    }
}

impl From<reqwest::Error> for ChatError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ChatError::Network(format!("request timed out: {}", err))
        } else {
            ChatError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ChatError {
    fn from(err: serde_json::Error) -> Self {
        ChatError::Parse(err.to_string())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid setting: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_maps_to_parse() {
        let err = serde_json::from_str::<u32>("not json").unwrap_err();
        let chat: ChatError = err.into();
        assert!(matches!(chat, ChatError::Parse(_)));
        assert!(!chat.is_network());
    }

    #[test]
    fn test_display() {
        let err = ChatError::Network("HTTP 503 Service Unavailable".into());
        assert_eq!(err.to_string(), "network error: HTTP 503 Service Unavailable");
    }
}
