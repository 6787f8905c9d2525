//! Message-oriented WebSocket transport.
//!
//! A [`WebSocketClient`] opens one [`WebSocketSession`] per call. Sessions are never pooled or
//! reused, and the caller owns closing them.

use thiserror::Error;

pub mod tungstenite_client;

/// A data frame received from the peer. Control frames are handled by the transport and never
/// surface here.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Frame {
    Text(String),
    Binary(Vec<u8>),
}

impl Frame {
    pub fn into_text(self) -> Result<String, WebSocketError> {
        match self {
            Frame::Text(text) => Ok(text),
            Frame::Binary(bytes) => String::from_utf8(bytes)
                .map_err(|e| WebSocketError::Receive(format!("binary frame is not UTF-8: {e}"))),
        }
    }
}

#[derive(Debug, Error)]
pub enum WebSocketError {
    #[error("Invalid WebSocket URL `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("Unsupported WebSocket scheme `{0}`")]
    UnsupportedScheme(String),
    #[error("WebSocket connect error: {0}")]
    Connect(String),
    #[error("WebSocket send error: {0}")]
    Send(String),
    #[error("WebSocket receive error: {0}")]
    Receive(String),
}

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait WebSocketClient: Send + Sync {
    /// Resolves once the opening handshake completed.
    async fn connect(&self, url: &str) -> Result<Box<dyn WebSocketSession>, WebSocketError>;
}

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait WebSocketSession: Send {
    async fn send_text(&mut self, text: String) -> Result<(), WebSocketError>;

    /// Next data frame, `None` once the peer closed the connection.
    async fn next_frame(&mut self) -> Result<Option<Frame>, WebSocketError>;

    /// Best effort, never fails.
    async fn close(&mut self);
}

/// Validates that `url` is a `ws://` or `wss://` URL.
pub fn parse_websocket_url(url: &str) -> Result<url::Url, WebSocketError> {
    let parsed = url::Url::parse(url).map_err(|e| WebSocketError::InvalidUrl {
        url: url.to_owned(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "ws" | "wss" => Ok(parsed),
        other => Err(WebSocketError::UnsupportedScheme(other.to_owned())),
    }
}
