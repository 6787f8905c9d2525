use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(
    Debug, Copy, Clone, Default, Display, EnumString, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum HashAlgorithm {
    #[serde(rename = "SHA1")]
    #[strum(serialize = "SHA1")]
    Sha1,
    #[default]
    #[serde(rename = "SHA256")]
    #[strum(serialize = "SHA256")]
    Sha256,
    #[serde(rename = "SHA384")]
    #[strum(serialize = "SHA384")]
    Sha384,
    #[serde(rename = "SHA512")]
    #[strum(serialize = "SHA512")]
    Sha512,
}

/// Digest to be signed by the plugin. Built per call, never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SigningRequest {
    pub hash_value: String,
    pub hash_algorithm: HashAlgorithm,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationRequest {
    pub signature: String,
    /// Base64 content or hash the signature was produced over.
    pub content: String,
}
