use thiserror::Error;

use crate::proto::http_client::StatusCode;

#[derive(Debug, Error)]
pub enum BackendClientError {
    #[error("Backend transport error: {0}")]
    Transport(anyhow::Error),
    #[error("Backend responded with HTTP {status}: {reason}")]
    Status { status: StatusCode, reason: String },
    #[error("Invalid backend response: {0}")]
    InvalidResponse(String),
}
