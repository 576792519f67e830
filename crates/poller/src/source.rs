//! Feed sources the poller can pull from.

use std::time::Duration;

use async_trait::async_trait;
use jobboard_core::types::{DbId, Timestamp};
use serde::Deserialize;

/// Per-request timeout for the HTTP source.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Anything with a stable, monotonically assigned id.
pub trait FeedItem {
    fn id(&self) -> DbId;
}

/// One batch returned by a source.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Highest id the server has seen for this caller. Equal to the request
    /// cursor when nothing new was returned.
    pub latest_id: DbId,
}

/// Errors from fetching a feed page.
#[derive(Debug, thiserror::Error)]
pub enum PollError {
    /// The HTTP request itself failed (network, DNS, TLS, decode).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("Server returned {status}: {body}")]
    Api { status: u16, body: String },

    /// The body was not the expected feed envelope.
    #[error("Malformed feed response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A cursor-based feed.
#[async_trait]
pub trait FeedSource: Send + Sync {
    type Item: FeedItem + Clone + Send + Sync + 'static;

    /// Fetch items with ids strictly greater than `cursor`.
    async fn fetch(&self, cursor: DbId) -> Result<Page<Self::Item>, PollError>;
}

/// A notification as served by `/api/realtime/notifications`.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteNotification {
    pub id: DbId,
    pub kind: String,
    pub title: String,
    pub message: String,
    pub link: Option<String>,
    pub is_read: bool,
    pub created_at: Timestamp,
}

impl FeedItem for RemoteNotification {
    fn id(&self) -> DbId {
        self.id
    }
}

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Deserialize)]
struct NotificationFeed {
    items: Vec<RemoteNotification>,
    latest_id: DbId,
}

/// Decode a `/api/realtime/notifications` response body.
pub fn decode_notification_feed(body: &[u8]) -> Result<Page<RemoteNotification>, PollError> {
    let feed: Envelope<NotificationFeed> = serde_json::from_slice(body)?;
    Ok(Page {
        items: feed.data.items,
        latest_id: feed.data.latest_id,
    })
}

/// Polls the caller's notification feed over HTTP with a bearer token.
pub struct HttpNotificationSource {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl HttpNotificationSource {
    /// Build a source whose requests give up after [`REQUEST_TIMEOUT`].
    ///
    /// * `base_url` - Server root, e.g. `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self, PollError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self::with_client(client, base_url, token))
    }

    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, PollError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PollError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl FeedSource for HttpNotificationSource {
    type Item = RemoteNotification;

    async fn fetch(&self, cursor: DbId) -> Result<Page<RemoteNotification>, PollError> {
        let response = self
            .client
            .get(format!("{}/api/realtime/notifications", self.base_url))
            .query(&[("since_id", cursor)])
            .bearer_auth(&self.token)
            .send()
            .await?;

        let body = Self::ensure_success(response).await?.bytes().await?;
        decode_notification_feed(&body)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn decodes_realtime_envelope() {
        let body = br#"{
            "data": {
                "items": [{
                    "id": 12,
                    "recipient_role": "user",
                    "recipient_id": 3,
                    "kind": "application.status_changed",
                    "title": "Application update",
                    "message": "Your application is now shortlisted",
                    "link": null,
                    "is_read": false,
                    "read_at": null,
                    "created_at": "2026-03-01T09:30:00Z"
                }],
                "latest_id": 12,
                "server_time": "2026-03-01T09:30:05Z"
            }
        }"#;

        let page = decode_notification_feed(body).unwrap();
        assert_eq!(page.latest_id, 12);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].kind, "application.status_changed");
        assert!(page.items[0].link.is_none());
    }

    #[test]
    fn empty_feed_keeps_cursor() {
        let body = br#"{"data":{"items":[],"latest_id":40,"server_time":"2026-03-01T09:30:05Z"}}"#;
        let page = decode_notification_feed(body).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.latest_id, 40);
    }

    #[test]
    fn error_envelope_is_a_decode_error() {
        let body = br#"{"error":"Missing authorization header","code":"UNAUTHORIZED"}"#;
        assert_matches!(decode_notification_feed(body), Err(PollError::Decode(_)));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let source = HttpNotificationSource::new("http://localhost:3000/", "t").unwrap();
        assert_eq!(source.base_url, "http://localhost:3000");
    }
}
