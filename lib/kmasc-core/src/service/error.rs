use thiserror::Error;

use crate::config::ConfigProviderError;
use crate::provider::backend_client::error::BackendClientError;
use crate::provider::signing_plugin::error::SigningPluginError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Signing plugin error: `{0}`")]
    SigningPlugin(#[from] SigningPluginError),
    #[error("Backend error: `{0}`")]
    Backend(#[from] BackendClientError),
    #[error("Settings error: `{0}`")]
    Settings(#[from] ConfigProviderError),
    #[error("Verified credential does not address a single file")]
    MissingFileIdentity,
    #[error("Validation error: `{0}`")]
    ValidationError(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    Plugin001,
    Plugin002,
    Plugin003,
    Plugin004,
    Plugin005,
    Plugin006,

    Backend001,
    Backend002,
    Backend003,

    File001,

    Settings001,

    Validation,
}

impl ErrorCode {
    pub const fn msg(&self) -> &'static str {
        match self {
            ErrorCode::Plugin001 => "Signing service endpoint is not configured",
            ErrorCode::Plugin002 => "Signing service endpoint must be a ws:// or wss:// URL",
            ErrorCode::Plugin003 => {
                "Signing plugin is not reachable, it may not be installed or running"
            }
            ErrorCode::Plugin004 => "Signing plugin did not respond in time",
            ErrorCode::Plugin005 => "Signing was rejected by the signing plugin",
            ErrorCode::Plugin006 => "Signing plugin message could not be processed",

            ErrorCode::Backend001 => "Backend is not reachable",
            ErrorCode::Backend002 => "Backend rejected the request",
            ErrorCode::Backend003 => "Backend returned an invalid response",

            ErrorCode::File001 => "No single file is associated with the verified record",

            ErrorCode::Settings001 => "Signing settings cannot be read or saved",

            ErrorCode::Validation => "Invalid input",
        }
    }
}

impl ServiceError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ServiceError::SigningPlugin(error) => error.error_code(),
            ServiceError::Backend(error) => error.error_code(),
            ServiceError::Settings(_) => ErrorCode::Settings001,
            ServiceError::MissingFileIdentity => ErrorCode::File001,
            ServiceError::ValidationError(_) => ErrorCode::Validation,
        }
    }
}

impl SigningPluginError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            SigningPluginError::MissingEndpoint => ErrorCode::Plugin001,
            SigningPluginError::UnsupportedEndpoint(_) => ErrorCode::Plugin002,
            SigningPluginError::Transport(_)
            | SigningPluginError::ConnectTimeout(_)
            | SigningPluginError::ClosedBeforeResponse => ErrorCode::Plugin003,
            SigningPluginError::ResponseTimeout(_) => ErrorCode::Plugin004,
            SigningPluginError::SigningFailed(_) => ErrorCode::Plugin005,
            SigningPluginError::InvalidRequest(_) | SigningPluginError::InvalidResponse(_) => {
                ErrorCode::Plugin006
            }
        }
    }
}

impl BackendClientError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            BackendClientError::Transport(_) => ErrorCode::Backend001,
            BackendClientError::Status { .. } => ErrorCode::Backend002,
            BackendClientError::InvalidResponse(_) => ErrorCode::Backend003,
        }
    }
}
