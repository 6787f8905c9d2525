use serde::{Deserialize, Serialize};

use crate::model::signature::{HashAlgorithm, SigningRequest, VerificationRequest};

#[derive(Clone, Debug, Serialize)]
pub(super) struct SignHashRequestDTO {
    #[serde(rename = "HashValue")]
    pub hash_value: String,
    #[serde(rename = "HashAlg")]
    pub hash_alg: HashAlgorithm,
}

impl From<SigningRequest> for SignHashRequestDTO {
    fn from(value: SigningRequest) -> Self {
        Self {
            hash_value: value.hash_value,
            hash_alg: value.hash_algorithm,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub(super) struct VerifySignatureRequestDTO {
    #[serde(rename = "Signature")]
    pub signature: String,
    #[serde(rename = "Base64Content")]
    pub base64_content: String,
}

impl From<VerificationRequest> for VerifySignatureRequestDTO {
    fn from(value: VerificationRequest) -> Self {
        Self {
            signature: value.signature,
            base64_content: value.content,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub(super) struct ProbeRequestDTO {
    #[serde(rename = "Action")]
    pub action: &'static str,
}

impl Default for ProbeRequestDTO {
    fn default() -> Self {
        Self { action: "Ping" }
    }
}

/// Single reply of the plugin. Plugins answer in PascalCase, some builds in camelCase.
#[derive(Clone, Debug, Default, Deserialize)]
pub(super) struct PluginResponseDTO {
    #[serde(rename = "Status", alias = "status", default)]
    pub status: Option<i64>,
    #[serde(rename = "Signature", alias = "signature", default)]
    pub signature: Option<String>,
    #[serde(rename = "Message", alias = "message", default)]
    pub message: Option<String>,
    #[serde(
        rename = "ValidationStatus",
        alias = "validationStatus",
        alias = "validation_status",
        default
    )]
    pub validation_status: Option<ValidationStatusDTO>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub(super) struct ValidationStatusDTO {
    #[serde(rename = "Status", alias = "status")]
    pub status: i64,
}

impl PluginResponseDTO {
    pub fn into_signature(self) -> Result<String, String> {
        match (self.status, self.signature) {
            (Some(0), Some(signature)) if !signature.is_empty() => Ok(signature),
            _ => Err(self
                .message
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| UNKNOWN_SIGNING_ERROR.to_string())),
        }
    }

    pub fn is_valid_signature(&self) -> bool {
        self.validation_status
            .as_ref()
            .is_some_and(|validation| validation.status == 0)
    }
}

pub(super) const UNKNOWN_SIGNING_ERROR: &str = "Unknown error while signing";
