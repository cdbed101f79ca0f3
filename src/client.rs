//! Chat data client: one GET per page, no retry.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::Settings;
use crate::error::ChatError;
use crate::message::Page;

/// Anything that can produce a page of chat messages.
///
/// The backend only talks to this trait so tests can drive it with canned
/// pages instead of the network.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_page(&self, page: u32) -> Result<Page, ChatError>;
}

/// HTTP implementation against `<host>/assignment/chat?page=<n>`.
#[derive(Clone)]
pub struct HttpChatClient {
    http: reqwest::Client,
    settings: Settings,
}

impl HttpChatClient {
    pub fn new(settings: Settings) -> Result<Self, ChatError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()?;
        Ok(Self { http, settings })
    }

    pub fn page_url(&self, page: u32) -> String {
        self.settings.endpoint_url(page)
    }
}

#[async_trait]
impl PageSource for HttpChatClient {
    async fn fetch_page(&self, page: u32) -> Result<Page, ChatError> {
        let url = self.page_url(page);
        debug!(%url, page, "Fetching chat page");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "Chat endpoint returned an error status");
            return Err(ChatError::Network(format!("HTTP {}", status)));
        }

        let body = response.bytes().await?;
        let parsed: Page = serde_json::from_slice(&body)?;
        debug!(page, count = parsed.messages.len(), status = %parsed.status, "Chat page received");
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    const PAGE_BODY: &str = r#"{"chats":[{"id":"1","message":"hi","sender":{"image":"","is_kyc_verified":false,"self":true,"user_id":"me"},"time":"2023-01-12 14:05:00"}],"from":"A","to":"B","name":"Trip","status":"success","message":"Success"}"#;

    /// Serve exactly one HTTP response and report the request line.
    async fn serve_once(status_line: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut chunk = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..n]);
            }
            let text = String::from_utf8_lossy(&request).to_string();
            let request_line = text.lines().next().unwrap_or_default().to_string();
            let _ = tx.send(request_line);

            let response = format!(
                "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        (format!("http://{}", addr), rx)
    }

    fn client_for(host: String) -> HttpChatClient {
        let settings = Settings {
            host,
            request_timeout_secs: 5,
            ..Settings::default()
        };
        HttpChatClient::new(settings).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_page_success() {
        let (host, request_rx) = serve_once("HTTP/1.1 200 OK", PAGE_BODY).await;
        let client = client_for(host);

        let page = client.fetch_page(3).await.unwrap();
        assert_eq!(page.messages.len(), 1);
        assert_eq!(page.messages[0].text, "hi");
        assert!(page.messages[0].sender.is_self);
        assert_eq!(page.trip_name, "Trip");

        let request_line = request_rx.await.unwrap();
        assert!(request_line.starts_with("GET /assignment/chat?page=3 "));
    }

    #[tokio::test]
    async fn test_non_success_status_is_network_error() {
        let (host, _rx) = serve_once("HTTP/1.1 503 Service Unavailable", "{}").await;
        let client = client_for(host);

        let err = client.fetch_page(0).await.unwrap_err();
        assert!(err.is_network());
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let (host, _rx) = serve_once("HTTP/1.1 200 OK", r#"{"chats": "nope"}"#).await;
        let client = client_for(host);

        let err = client.fetch_page(0).await.unwrap_err();
        assert!(matches!(err, ChatError::Parse(_)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        // Bind then drop to get a port with nothing listening
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(format!("http://{}", addr));
        let err = client.fetch_page(0).await.unwrap_err();
        assert!(err.is_network());
    }
}
