use futures::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{Connector, MaybeTlsStream, WebSocketStream};

use super::{Frame, WebSocketClient, WebSocketError, WebSocketSession, parse_websocket_url};

/// [`WebSocketClient`] backed by tokio-tungstenite, TLS through native-tls.
#[derive(Clone, Default)]
pub struct TungsteniteClient {
    accept_invalid_certs: bool,
}

impl TungsteniteClient {
    /// Local signing plugins usually serve `wss://127.0.0.1` with a self-signed certificate.
    pub fn new(accept_invalid_certs: bool) -> Self {
        Self {
            accept_invalid_certs,
        }
    }

    fn connector(&self) -> Result<Option<Connector>, WebSocketError> {
        if !self.accept_invalid_certs {
            return Ok(None);
        }

        let tls = native_tls::TlsConnector::builder()
            .danger_accept_invalid_certs(true)
            .danger_accept_invalid_hostnames(true)
            .build()
            .map_err(|e| WebSocketError::Connect(e.to_string()))?;

        Ok(Some(Connector::NativeTls(tls)))
    }
}

#[async_trait::async_trait]
impl WebSocketClient for TungsteniteClient {
    #[tracing::instrument(level = "debug", skip(self), err(Debug))]
    async fn connect(&self, url: &str) -> Result<Box<dyn WebSocketSession>, WebSocketError> {
        let url = parse_websocket_url(url)?;

        let (stream, response) = tokio_tungstenite::connect_async_tls_with_config(
            url.as_str(),
            None,
            false,
            self.connector()?,
        )
        .await
        .map_err(|e| WebSocketError::Connect(e.to_string()))?;

        tracing::debug!(status = %response.status(), "WebSocket handshake completed");

        Ok(Box::new(TungsteniteSession { stream }))
    }
}

struct TungsteniteSession {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

#[async_trait::async_trait]
impl WebSocketSession for TungsteniteSession {
    async fn send_text(&mut self, text: String) -> Result<(), WebSocketError> {
        self.stream
            .send(Message::Text(text.into()))
            .await
            .map_err(|e| WebSocketError::Send(e.to_string()))
    }

    async fn next_frame(&mut self) -> Result<Option<Frame>, WebSocketError> {
        while let Some(message) = self.stream.next().await {
            let message = message.map_err(|e| WebSocketError::Receive(e.to_string()))?;

            match message {
                Message::Text(text) => return Ok(Some(Frame::Text(text.to_string()))),
                Message::Binary(bytes) => return Ok(Some(Frame::Binary(bytes.to_vec()))),
                Message::Close(frame) => {
                    tracing::debug!(?frame, "WebSocket closed by peer");
                    return Ok(None);
                }
                Message::Ping(_) | Message::Pong(_) | Message::Frame(_) => continue,
            }
        }

        Ok(None)
    }

    async fn close(&mut self) {
        if let Err(error) = self.stream.close(None).await {
            tracing::debug!(%error, "WebSocket close failed");
        }
    }
}
