use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::model::credential::{CredentialRecord, RecordKind};
use crate::model::reconciliation::{ReconciliationQuery, ReconciliationResult};

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub(super) struct VerifyBatchRequestRestDTO {
    pub university_id: Option<String>,
    pub faculty_id: Option<String>,
    pub certificate_type: Option<String>,
    pub course: Option<String>,
    pub ediploma_id: Option<String>,
    pub certificate_id: Option<String>,
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}

impl From<&ReconciliationQuery> for VerifyBatchRequestRestDTO {
    fn from(query: &ReconciliationQuery) -> Self {
        let record_id = query.record_id().map(String::from);
        let (ediploma_id, certificate_id) = match query.kind {
            RecordKind::Degree => (record_id, None),
            RecordKind::Certificate => (None, record_id),
        };

        Self {
            university_id: non_empty(Some(query.university_id.as_str())),
            faculty_id: non_empty(query.faculty_id.as_ref().map(|id| id.as_str())),
            certificate_type: non_empty(query.certificate_type.as_deref()),
            course: non_empty(query.course.as_deref()),
            ediploma_id,
            certificate_id,
        }
    }
}

impl VerifyBatchRequestRestDTO {
    /// Present fields as form fields, in declaration order.
    pub fn multipart_fields(&self) -> Vec<(&'static str, &str)> {
        [
            ("university_id", &self.university_id),
            ("faculty_id", &self.faculty_id),
            ("certificate_type", &self.certificate_type),
            ("course", &self.course),
            ("ediploma_id", &self.ediploma_id),
            ("certificate_id", &self.certificate_id),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.as_deref().map(|value| (name, value)))
        .collect()
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub(super) struct VerifyBatchResponseRestDTO {
    #[serde(default, alias = "valid")]
    pub verified: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default, alias = "certificate", alias = "ediploma")]
    pub data: Option<CredentialRecord>,
    #[serde(default)]
    pub batch_id: Option<String>,
}

impl From<VerifyBatchResponseRestDTO> for ReconciliationResult {
    fn from(value: VerifyBatchResponseRestDTO) -> Self {
        Self {
            verified: value.verified.unwrap_or(false),
            message: value
                .message
                .filter(|message| !message.is_empty())
                .or(value.details)
                .unwrap_or_default(),
            data: value.data,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub(super) struct SubmitSignatureRequestRestDTO<'a> {
    pub signature: &'a str,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub(super) struct ErrorResponseRestDTO {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorResponseRestDTO {
    pub fn reason(self) -> Option<String> {
        self.error
            .filter(|error| !error.is_empty())
            .or(self.message.filter(|message| !message.is_empty()))
    }
}
