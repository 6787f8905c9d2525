use std::time::Duration;

use shared_types::TemplateId;

use super::SignatureService;
use super::dto::{SignHashRequestDTO, SignTemplateResponseDTO};
use super::validator::{validate_hash_value, validate_sign_settings};
use crate::config::config_provider::SignSettings;
use crate::model::signature::{SigningRequest, VerificationRequest};
use crate::service::error::ServiceError;

impl SignatureService {
    pub fn get_sign_settings(&self) -> Result<SignSettings, ServiceError> {
        Ok(self.config_provider.sign_settings()?)
    }

    pub fn save_sign_settings(&self, settings: SignSettings) -> Result<(), ServiceError> {
        validate_sign_settings(&settings)?;
        Ok(self.config_provider.save_sign_settings(&settings)?)
    }

    /// Signs a document hash with the plugin at the configured sign service.
    pub async fn sign_hash(&self, request: SignHashRequestDTO) -> Result<String, ServiceError> {
        validate_hash_value(&request.hash_value)?;
        let settings = self.config_provider.sign_settings()?;

        let request = SigningRequest {
            hash_value: request.hash_value,
            hash_algorithm: request
                .hash_algorithm
                .unwrap_or(self.config.signing_plugin.default_hash_algorithm),
        };

        Ok(self
            .signer_client
            .request_signature(request, &settings.sign_service)
            .await?)
    }

    /// `Ok(false)` when the plugin reports the signature as invalid.
    pub async fn verify_signature(
        &self,
        signature: String,
        content: String,
    ) -> Result<bool, ServiceError> {
        let settings = self.config_provider.sign_settings()?;

        Ok(self
            .signer_client
            .verify_signature(
                VerificationRequest { signature, content },
                settings.verify_endpoint(),
            )
            .await?)
    }

    pub async fn probe_plugin(&self, timeout: Option<Duration>) -> Result<bool, ServiceError> {
        let settings = self.config_provider.sign_settings()?;
        let timeout = timeout.unwrap_or(self.config.signing_plugin.probe_timeout);

        Ok(self
            .signer_client
            .probe_plugin_presence(&settings.sign_service, timeout)
            .await)
    }

    /// Signs the template hash with the user's token and stores the signature on the template.
    pub async fn sign_template(
        &self,
        template_id: TemplateId,
        hash_value: String,
    ) -> Result<SignTemplateResponseDTO, ServiceError> {
        let signature = self
            .sign_hash(SignHashRequestDTO {
                hash_value,
                hash_algorithm: None,
            })
            .await?;

        self.backend_client
            .submit_template_signature(&template_id, &signature)
            .await?;

        tracing::info!(%template_id, "Template signed");
        Ok(SignTemplateResponseDTO {
            template_id,
            signature,
        })
    }

    /// Checks a template signature against its hash before credentials are issued from it.
    pub async fn verify_template_signature(
        &self,
        signature: String,
        hash_value: String,
    ) -> Result<bool, ServiceError> {
        validate_hash_value(&hash_value)?;

        let valid = self.verify_signature(signature, hash_value).await?;
        if !valid {
            tracing::warn!("Template signature is not valid");
        }
        Ok(valid)
    }
}
