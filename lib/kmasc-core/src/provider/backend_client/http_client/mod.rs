use std::sync::Arc;

use crate::config::core_config::{BackendConfig, ReconciliationEncoding};
use crate::proto::http_client::HttpClient;

mod dto;
mod provider;


pub struct HttpBackendClient {
    http_client: Arc<dyn HttpClient>,
    base_url: String,
    access_token: Option<String>,
    reconciliation_encoding: ReconciliationEncoding,
}

impl HttpBackendClient {
    pub fn new(http_client: Arc<dyn HttpClient>, config: &BackendConfig) -> Self {
        Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            access_token: config
                .access_token
                .clone()
                .filter(|token| !token.is_empty()),
            reconciliation_encoding: config.reconciliation_encoding,
        }
    }
}
