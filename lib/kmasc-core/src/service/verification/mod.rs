use std::sync::Arc;

use crate::provider::backend_client::BackendClient;

pub mod dto;
pub mod service;

#[cfg(test)]
mod test;

/// Reconciles credential records with the ledger and gates the credential file behind a positive
/// verdict.
#[derive(Clone)]
pub struct VerificationService {
    backend_client: Arc<dyn BackendClient>,
}

impl VerificationService {
    pub(crate) fn new(backend_client: Arc<dyn BackendClient>) -> Self {
        Self { backend_client }
    }
}
