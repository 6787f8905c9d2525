use std::sync::Arc;

use config::config_provider::ConfigProvider;
use config::core_config::CoreConfig;
use config::json_config_provider::JsonFileConfigProvider;
use proto::http_client::reqwest_client::ReqwestClient;
use proto::websocket::tungstenite_client::TungsteniteClient;
use provider::backend_client::BackendClient;
use provider::backend_client::http_client::HttpBackendClient;
use provider::signing_plugin::SignerClient;
use provider::signing_plugin::provider::PluginSignerClient;
use service::signature::SignatureService;
use service::verification::VerificationService;

pub mod config;
pub mod model;
pub mod proto;
pub mod provider;
pub mod service;

#[derive(Clone)]
pub struct KmascCore {
    pub signature_service: SignatureService,
    pub verification_service: VerificationService,
    pub config: Arc<CoreConfig>,
}

impl KmascCore {
    /// Wires the production transports: tokio-tungstenite for the signing plugin, reqwest for
    /// the backend and the settings file at `settings.path`.
    pub fn new(config: CoreConfig) -> Result<Self, proto::http_client::Error> {
        let http_client = ReqwestClient::with_timeout(config.backend.request_timeout)?;
        let ws_client = TungsteniteClient::new(config.signing_plugin.accept_invalid_certs);

        let signer_client = PluginSignerClient::new(Arc::new(ws_client), &config.signing_plugin);
        let backend_client = HttpBackendClient::new(Arc::new(http_client), &config.backend);
        let config_provider = JsonFileConfigProvider::new(&config.settings.path);

        Ok(Self::with_providers(
            config,
            Arc::new(signer_client),
            Arc::new(backend_client),
            Arc::new(config_provider),
        ))
    }

    pub fn with_providers(
        config: CoreConfig,
        signer_client: Arc<dyn SignerClient>,
        backend_client: Arc<dyn BackendClient>,
        config_provider: Arc<dyn ConfigProvider>,
    ) -> Self {
        let config = Arc::new(config);

        Self {
            signature_service: SignatureService::new(
                signer_client,
                backend_client.clone(),
                config_provider,
                config.clone(),
            ),
            verification_service: VerificationService::new(backend_client),
            config,
        }
    }
}
