use serde::{Deserialize, Serialize};
use shared_types::{FacultyId, RecordId, UniversityId};
use strum::{Display, EnumString};

#[derive(
    Debug, Copy, Clone, Default, Display, EnumString, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum RecordKind {
    /// Digital degree (e-diploma).
    #[default]
    Degree,
    Certificate,
}

/// Human-readable credential data as held by the backend.
///
/// The backend's field set differs between degrees and certificates, so every field is optional
/// and unknown fields are ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CredentialRecord {
    pub id: Option<RecordId>,
    pub certificate_id: Option<RecordId>,

    pub university_id: Option<UniversityId>,
    pub university_code: Option<String>,
    pub university_name: Option<String>,
    pub faculty_id: Option<FacultyId>,
    pub faculty_code: Option<String>,
    pub faculty_name: Option<String>,

    pub student_code: Option<String>,
    pub student_name: Option<String>,

    pub name: Option<String>,
    pub full_name: Option<String>,
    pub template_name: Option<String>,
    pub certificate_type: Option<String>,
    pub course: Option<String>,
    pub education_type: Option<String>,
    pub gpa: Option<f64>,
    pub graduation_rank: Option<String>,
    pub issue_date: Option<String>,
    pub serial_number: Option<String>,
    pub registration_number: Option<String>,

    pub issued: bool,
    pub signed: bool,
    pub data_encrypted: bool,
    pub on_blockchain: bool,
}
