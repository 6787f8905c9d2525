//! Client of the locally installed signing plugin (USB token middleware), reached over a
//! WebSocket endpoint configured by the user.

use std::time::Duration;

use crate::model::signature::{SigningRequest, VerificationRequest};

mod dto;
pub mod error;
pub mod provider;
mod session;


use error::SigningPluginError;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait SignerClient: Send + Sync {
    /// Asks the plugin to sign a document hash, returns the signature.
    async fn request_signature(
        &self,
        request: SigningRequest,
        endpoint: &str,
    ) -> Result<String, SigningPluginError>;

    /// `Ok(false)` for a signature the plugin considers invalid.
    async fn verify_signature(
        &self,
        request: VerificationRequest,
        endpoint: &str,
    ) -> Result<bool, SigningPluginError>;

    /// `true` when a socket to `endpoint` opens within `timeout`.
    async fn probe_plugin_presence(&self, endpoint: &str, timeout: Duration) -> bool;
}
