use std::time::Duration;

use thiserror::Error;

use crate::proto::websocket::WebSocketError;

#[derive(Debug, Error)]
pub enum SigningPluginError {
    #[error("Signing plugin endpoint is not configured")]
    MissingEndpoint,
    #[error("Unsupported signing plugin endpoint `{0}`")]
    UnsupportedEndpoint(String),
    #[error("Signing plugin transport error: {0}")]
    Transport(#[source] WebSocketError),
    #[error("Signing plugin did not accept the connection within {0:?}")]
    ConnectTimeout(Duration),
    #[error("Signing plugin did not respond within {0:?}")]
    ResponseTimeout(Duration),
    #[error("Signing plugin closed the connection before responding")]
    ClosedBeforeResponse,
    #[error("Cannot encode signing plugin request: {0}")]
    InvalidRequest(String),
    #[error("Invalid signing plugin response: {0}")]
    InvalidResponse(String),
    #[error("Signing failed: {0}")]
    SigningFailed(String),
}
