use crate::model::blob::Blob;
use crate::model::reconciliation::ReconciliationOutcome;

/// Everything the credential page shows after loading.
#[derive(Clone, Debug, PartialEq)]
pub struct CredentialView {
    pub outcome: ReconciliationOutcome,
    pub file: FileView,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FileView {
    Loaded(Blob),
    /// Ledger mismatch; the file was not requested. Holds the notice to show.
    Untrusted(String),
    /// Verified, but the download failed.
    Unavailable(String),
    /// Verified batch without a single file.
    NoFile,
}
