//! REST client of the credential backend: ledger reconciliation, the gated file download and
//! template signature submission.

use shared_types::TemplateId;

use crate::model::blob::Blob;
use crate::model::reconciliation::{FileIdentity, ReconciliationQuery, ReconciliationResult};

pub mod error;
pub mod http_client;

use error::BackendClientError;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait BackendClient: Send + Sync {
    /// Asks the backend to compare its records with the ledger.
    ///
    /// A mismatch is a successful call with `verified == false`.
    async fn reconcile(
        &self,
        query: &ReconciliationQuery,
    ) -> Result<ReconciliationResult, BackendClientError>;

    async fn fetch_gated_file(&self, identity: &FileIdentity) -> Result<Blob, BackendClientError>;

    async fn submit_template_signature(
        &self,
        template_id: &TemplateId,
        signature: &str,
    ) -> Result<(), BackendClientError>;
}
