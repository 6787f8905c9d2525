use std::time::Duration;

use strum::Display;

use super::error::SigningPluginError;
use crate::proto::websocket::{
    WebSocketClient, WebSocketError, WebSocketSession, parse_websocket_url,
};

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub(super) enum ExchangeState {
    Idle,
    Connecting,
    Open,
    AwaitingResponse,
    Settled,
    ConnectFailed,
    TimedOut,
}

/// One request/response exchange with the signing plugin over a dedicated socket.
///
/// Only the first data frame is consumed. The socket is closed on every exit path once it was
/// opened, and dropped together with the pending future on timeout.
pub(super) struct Exchange<'a> {
    ws_client: &'a dyn WebSocketClient,
    connect_timeout: Duration,
    response_timeout: Duration,
    state: ExchangeState,
}

impl<'a> Exchange<'a> {
    pub fn new(
        ws_client: &'a dyn WebSocketClient,
        connect_timeout: Duration,
        response_timeout: Duration,
    ) -> Self {
        Self {
            ws_client,
            connect_timeout,
            response_timeout,
            state: ExchangeState::Idle,
        }
    }

    pub fn state(&self) -> ExchangeState {
        self.state
    }

    fn transition(&mut self, next: ExchangeState) {
        tracing::debug!(from = %self.state, to = %next, "Signing plugin exchange");
        self.state = next;
    }

    pub async fn connect(
        &mut self,
        endpoint: &str,
    ) -> Result<Box<dyn WebSocketSession>, SigningPluginError> {
        if endpoint.trim().is_empty() {
            return Err(SigningPluginError::MissingEndpoint);
        }
        parse_websocket_url(endpoint)
            .map_err(|_| SigningPluginError::UnsupportedEndpoint(endpoint.to_owned()))?;

        self.transition(ExchangeState::Connecting);
        match tokio::time::timeout(self.connect_timeout, self.ws_client.connect(endpoint)).await {
            Ok(Ok(session)) => {
                self.transition(ExchangeState::Open);
                Ok(session)
            }
            Ok(Err(error)) => {
                self.transition(ExchangeState::ConnectFailed);
                Err(SigningPluginError::Transport(error))
            }
            Err(_) => {
                self.transition(ExchangeState::TimedOut);
                Err(SigningPluginError::ConnectTimeout(self.connect_timeout))
            }
        }
    }

    /// Connects, sends `payload` right after the socket opened and returns the first data frame.
    pub async fn round_trip(
        &mut self,
        endpoint: &str,
        payload: String,
    ) -> Result<String, SigningPluginError> {
        let mut session = self.connect(endpoint).await?;
        let result = self.await_response(session.as_mut(), payload).await;
        session.close().await;
        result
    }

    async fn await_response(
        &mut self,
        session: &mut dyn WebSocketSession,
        payload: String,
    ) -> Result<String, SigningPluginError> {
        session
            .send_text(payload)
            .await
            .map_err(SigningPluginError::Transport)?;
        self.transition(ExchangeState::AwaitingResponse);

        let frame = match tokio::time::timeout(self.response_timeout, session.next_frame()).await {
            Ok(frame) => frame.map_err(SigningPluginError::Transport)?,
            Err(_) => {
                self.transition(ExchangeState::TimedOut);
                return Err(SigningPluginError::ResponseTimeout(self.response_timeout));
            }
        };
        self.transition(ExchangeState::Settled);

        frame
            .ok_or(SigningPluginError::ClosedBeforeResponse)?
            .into_text()
            .map_err(|error| match error {
                WebSocketError::Receive(reason) => SigningPluginError::InvalidResponse(reason),
                other => SigningPluginError::Transport(other),
            })
    }
}
