use super::VerificationService;
use super::dto::{CredentialView, FileView};
use crate::model::blob::Blob;
use crate::model::reconciliation::{
    ReconciliationOutcome, ReconciliationQuery, VerifiedCredential,
};
use crate::service::error::ServiceError;

impl VerificationService {
    #[tracing::instrument(level = "debug", skip(self), err(Debug))]
    pub async fn reconcile(
        &self,
        query: &ReconciliationQuery,
    ) -> Result<ReconciliationOutcome, ServiceError> {
        if query.university_id.as_str().trim().is_empty() {
            return Err(ServiceError::ValidationError(
                "university id must not be empty".to_string(),
            ));
        }

        let result = self.backend_client.reconcile(query).await?;
        let outcome = ReconciliationOutcome::from_result(query, result);

        if !outcome.is_verified() {
            tracing::warn!(message = outcome.message(), "Record does not match the ledger");
        }
        Ok(outcome)
    }

    /// Downloads the file of a verified credential.
    pub async fn fetch_gated_file(
        &self,
        credential: &VerifiedCredential,
    ) -> Result<Blob, ServiceError> {
        let Some(identity) = credential.file_identity() else {
            return Err(ServiceError::MissingFileIdentity);
        };

        Ok(self.backend_client.fetch_gated_file(identity).await?)
    }

    /// Reconciles, then loads the file only when the record matches the ledger.
    pub async fn load_credential_view(
        &self,
        query: &ReconciliationQuery,
    ) -> Result<CredentialView, ServiceError> {
        let outcome = self.reconcile(query).await?;

        let file = match &outcome {
            ReconciliationOutcome::Mismatch { message, .. } => FileView::Untrusted(message.clone()),
            ReconciliationOutcome::Verified(credential) => {
                match self.fetch_gated_file(credential).await {
                    Ok(blob) => FileView::Loaded(blob),
                    Err(ServiceError::MissingFileIdentity) => FileView::NoFile,
                    Err(error) => {
                        tracing::warn!(%error, "Verified credential file unavailable");
                        FileView::Unavailable(error.to_string())
                    }
                }
            }
        };

        Ok(CredentialView { outcome, file })
    }
}
