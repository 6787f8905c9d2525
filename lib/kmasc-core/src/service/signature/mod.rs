use std::sync::Arc;

use crate::config::config_provider::ConfigProvider;
use crate::config::core_config;
use crate::provider::backend_client::BackendClient;
use crate::provider::signing_plugin::SignerClient;

pub mod dto;
pub mod service;
pub(crate) mod validator;


#[derive(Clone)]
pub struct SignatureService {
    signer_client: Arc<dyn SignerClient>,
    backend_client: Arc<dyn BackendClient>,
    config_provider: Arc<dyn ConfigProvider>,
    config: Arc<core_config::CoreConfig>,
}

impl SignatureService {
    pub(crate) fn new(
        signer_client: Arc<dyn SignerClient>,
        backend_client: Arc<dyn BackendClient>,
        config_provider: Arc<dyn ConfigProvider>,
        config: Arc<core_config::CoreConfig>,
    ) -> Self {
        Self {
            signer_client,
            backend_client,
            config_provider,
            config,
        }
    }
}
