use shared_types::{FacultyId, RecordId, UniversityId};

use super::credential::{CredentialRecord, RecordKind};

/// Identifies the credential(s) to reconcile against the ledger.
///
/// Optional filters holding an empty or blank string are treated as absent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReconciliationQuery {
    pub university_id: UniversityId,
    pub faculty_id: Option<FacultyId>,
    pub certificate_type: Option<String>,
    pub course: Option<String>,
    pub record_id: Option<RecordId>,
    pub kind: RecordKind,
}

impl ReconciliationQuery {
    pub fn new(university_id: impl Into<UniversityId>) -> Self {
        Self {
            university_id: university_id.into(),
            ..Default::default()
        }
    }

    pub fn with_record(mut self, kind: RecordKind, record_id: impl Into<RecordId>) -> Self {
        self.kind = kind;
        self.record_id = Some(record_id.into());
        self
    }

    /// The record addressed by this query, surrounding whitespace removed.
    ///
    /// Both the reconciliation request and the gated file key are derived from this value.
    pub fn record_id(&self) -> Option<RecordId> {
        self.record_id
            .as_ref()
            .and_then(|id| non_blank(id.as_str()))
            .map(RecordId::from)
    }
}

/// Verdict as reported by the reconciliation endpoint.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReconciliationResult {
    pub verified: bool,
    pub message: String,
    /// Absent when the query addressed a batch rather than a single record.
    pub data: Option<CredentialRecord>,
}

/// Key of the ledger-gated file download.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileIdentity {
    pub university_code: String,
    pub record_id: RecordId,
}

/// A positive reconciliation verdict.
///
/// Only obtainable from a result with `verified == true`, which makes it the capability required
/// to fetch the gated file.
#[derive(Clone, Debug, PartialEq)]
pub struct VerifiedCredential {
    message: String,
    data: Option<CredentialRecord>,
    file_identity: Option<FileIdentity>,
}

impl VerifiedCredential {
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn data(&self) -> Option<&CredentialRecord> {
        self.data.as_ref()
    }

    pub fn file_identity(&self) -> Option<&FileIdentity> {
        self.file_identity.as_ref()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ReconciliationOutcome {
    Verified(VerifiedCredential),
    /// Local record and ledger disagree. An expected outcome, not an error.
    Mismatch {
        message: String,
        data: Option<CredentialRecord>,
    },
}

impl ReconciliationOutcome {
    pub fn from_result(query: &ReconciliationQuery, result: ReconciliationResult) -> Self {
        let ReconciliationResult {
            verified,
            message,
            data,
        } = result;

        if !verified {
            return Self::Mismatch { message, data };
        }

        let file_identity = file_identity(query, data.as_ref());

        Self::Verified(VerifiedCredential {
            message,
            data,
            file_identity,
        })
    }

    pub fn is_verified(&self) -> bool {
        matches!(self, Self::Verified(_))
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Verified(verified) => verified.message(),
            Self::Mismatch { message, .. } => message,
        }
    }

    pub fn data(&self) -> Option<&CredentialRecord> {
        match self {
            Self::Verified(verified) => verified.data(),
            Self::Mismatch { data, .. } => data.as_ref(),
        }
    }
}

fn file_identity(
    query: &ReconciliationQuery,
    data: Option<&CredentialRecord>,
) -> Option<FileIdentity> {
    let record_id = query.record_id().or_else(|| {
        data.and_then(|data| data.id.as_ref())
            .and_then(|id| non_blank(id.as_str()))
            .map(RecordId::from)
    })?;

    let university_code = data
        .and_then(|data| data.university_code.as_deref())
        .and_then(non_blank)
        .unwrap_or(query.university_id.as_str().trim())
        .to_owned();

    Some(FileIdentity {
        university_code,
        record_id,
    })
}

fn non_blank(value: &str) -> Option<&str> {
    Some(value.trim()).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod test {
    use super::*;

    fn verified_result(data: Option<CredentialRecord>) -> ReconciliationResult {
        ReconciliationResult {
            verified: true,
            message: "Dữ liệu khớp hoàn toàn".to_string(),
            data,
        }
    }

    #[test]
    fn test_mismatch_never_yields_verified_credential() {
        let query = ReconciliationQuery::new("KMA").with_record(RecordKind::Degree, "E123");
        let outcome = ReconciliationOutcome::from_result(
            &query,
            ReconciliationResult {
                verified: false,
                message: "mismatch".to_string(),
                data: None,
            },
        );

        assert_eq!(
            outcome,
            ReconciliationOutcome::Mismatch {
                message: "mismatch".to_string(),
                data: None
            }
        );
        assert!(!outcome.is_verified());
    }

    #[test]
    fn test_file_identity_prefers_query_record_and_ledger_university_code() {
        let query = ReconciliationQuery::new("64f0c0ffee").with_record(RecordKind::Degree, "E123");
        let data = CredentialRecord {
            id: Some("other".into()),
            university_code: Some("KMA".to_string()),
            ..Default::default()
        };

        let ReconciliationOutcome::Verified(verified) =
            ReconciliationOutcome::from_result(&query, verified_result(Some(data)))
        else {
            panic!("expected verified outcome");
        };

        assert_eq!(
            verified.file_identity(),
            Some(&FileIdentity {
                university_code: "KMA".to_string(),
                record_id: "E123".into(),
            })
        );
    }

    #[test]
    fn test_file_identity_falls_back_to_record_data() {
        let query = ReconciliationQuery {
            record_id: Some("".into()),
            ..ReconciliationQuery::new("KMA")
        };
        let data = CredentialRecord {
            id: Some("E456".into()),
            ..Default::default()
        };

        let outcome = ReconciliationOutcome::from_result(&query, verified_result(Some(data)));
        let ReconciliationOutcome::Verified(verified) = outcome else {
            panic!("expected verified outcome");
        };

        assert_eq!(
            verified.file_identity(),
            Some(&FileIdentity {
                university_code: "KMA".to_string(),
                record_id: "E456".into(),
            })
        );
    }

    #[test]
    fn test_record_id_is_trimmed_once() {
        let padded = ReconciliationQuery::new("KMA").with_record(RecordKind::Degree, " E123 ");
        assert_eq!(padded.record_id(), Some("E123".into()));

        let blank = ReconciliationQuery::new("KMA").with_record(RecordKind::Degree, "   ");
        assert_eq!(blank.record_id(), None);

        let ReconciliationOutcome::Verified(verified) =
            ReconciliationOutcome::from_result(&blank, verified_result(None))
        else {
            panic!("expected verified outcome");
        };
        assert_eq!(verified.file_identity(), None);
    }

    #[test]
    fn test_batch_verdict_has_no_file_identity() {
        let query = ReconciliationQuery {
            faculty_id: Some("F1".into()),
            ..ReconciliationQuery::new("KMA")
        };

        let outcome = ReconciliationOutcome::from_result(&query, verified_result(None));
        let ReconciliationOutcome::Verified(verified) = outcome else {
            panic!("expected verified outcome");
        };

        assert_eq!(verified.file_identity(), None);
    }
}
