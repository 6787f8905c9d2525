use shared_types::TemplateId;

use crate::model::signature::HashAlgorithm;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignHashRequestDTO {
    /// Base64 digest of the document.
    pub hash_value: String,
    /// Falls back to `signingPlugin.defaultHashAlgorithm`.
    pub hash_algorithm: Option<HashAlgorithm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignTemplateResponseDTO {
    pub template_id: TemplateId,
    pub signature: String,
}
