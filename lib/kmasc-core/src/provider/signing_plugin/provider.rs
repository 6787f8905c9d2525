use std::sync::Arc;
use std::time::Duration;

use super::SignerClient;
use super::dto::{
    PluginResponseDTO, ProbeRequestDTO, SignHashRequestDTO, VerifySignatureRequestDTO,
};
use super::error::SigningPluginError;
use super::session::Exchange;
use crate::config::core_config::SigningPluginConfig;
use crate::model::signature::{SigningRequest, VerificationRequest};
use crate::proto::websocket::WebSocketClient;

pub struct PluginSignerClient {
    ws_client: Arc<dyn WebSocketClient>,
    connect_timeout: Duration,
    response_timeout: Duration,
}

impl PluginSignerClient {
    pub fn new(ws_client: Arc<dyn WebSocketClient>, config: &SigningPluginConfig) -> Self {
        Self {
            ws_client,
            connect_timeout: config.connect_timeout,
            response_timeout: config.response_timeout,
        }
    }

    async fn exchange(
        &self,
        endpoint: &str,
        payload: String,
    ) -> Result<PluginResponseDTO, SigningPluginError> {
        let mut exchange = Exchange::new(
            self.ws_client.as_ref(),
            self.connect_timeout,
            self.response_timeout,
        );
        let frame = exchange
            .round_trip(endpoint, payload)
            .await
            .inspect_err(|error| {
                tracing::warn!(state = %exchange.state(), %error, "Signing plugin exchange failed");
            })?;

        serde_json::from_str(&frame).map_err(|e| SigningPluginError::InvalidResponse(e.to_string()))
    }
}

fn encode(payload: &impl serde::Serialize) -> Result<String, SigningPluginError> {
    serde_json::to_string(payload).map_err(|e| SigningPluginError::InvalidRequest(e.to_string()))
}

#[async_trait::async_trait]
impl SignerClient for PluginSignerClient {
    #[tracing::instrument(level = "debug", skip(self), err(Debug))]
    async fn request_signature(
        &self,
        request: SigningRequest,
        endpoint: &str,
    ) -> Result<String, SigningPluginError> {
        self.exchange(endpoint, encode(&SignHashRequestDTO::from(request))?)
            .await?
            .into_signature()
            .map_err(SigningPluginError::SigningFailed)
    }

    #[tracing::instrument(level = "debug", skip(self, request), err(Debug))]
    async fn verify_signature(
        &self,
        request: VerificationRequest,
        endpoint: &str,
    ) -> Result<bool, SigningPluginError> {
        let response = self
            .exchange(endpoint, encode(&VerifySignatureRequestDTO::from(request))?)
            .await?;

        let valid = response.is_valid_signature();
        if !valid {
            tracing::debug!(message = ?response.message, "Signature rejected by signing plugin");
        }
        Ok(valid)
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn probe_plugin_presence(&self, endpoint: &str, timeout: Duration) -> bool {
        let started = tokio::time::Instant::now();
        let mut exchange = Exchange::new(self.ws_client.as_ref(), timeout, timeout);

        let mut session = match exchange.connect(endpoint).await {
            Ok(session) => session,
            Err(error) => {
                tracing::debug!(%error, "Signing plugin not reachable");
                return false;
            }
        };

        let probe = async {
            match encode(&ProbeRequestDTO::default()) {
                Ok(payload) => {
                    if let Err(error) = session.send_text(payload).await {
                        tracing::debug!(%error, "Failed to send probe payload");
                    }
                }
                Err(error) => tracing::warn!(%error, "Failed to encode probe payload"),
            }
            session.close().await;
        };
        // one budget for the whole probe
        let remaining = timeout.saturating_sub(started.elapsed());
        if tokio::time::timeout(remaining, probe).await.is_err() {
            tracing::debug!("Probe session did not close in time");
        }

        true
    }
}
