use serde::{Deserialize, Serialize};

use super::ConfigProviderError;

/// User-editable signing settings, persisted locally and edited from the settings screen.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignSettings {
    /// WebSocket endpoint of the signing plugin.
    pub sign_service: String,
    /// WebSocket endpoint used for signature verification; empty means `sign_service`.
    pub verify_service: String,
    /// Location of the PDF signing application, used by the PDF signing flow.
    pub pdf_sign_location: String,
}

impl SignSettings {
    pub fn verify_endpoint(&self) -> &str {
        if self.verify_service.trim().is_empty() {
            &self.sign_service
        } else {
            &self.verify_service
        }
    }
}

/// Source of [`SignSettings`]. Read at every call so edits apply without a restart.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait ConfigProvider: Send + Sync {
    fn sign_settings(&self) -> Result<SignSettings, ConfigProviderError>;

    fn save_sign_settings(&self, settings: &SignSettings) -> Result<(), ConfigProviderError>;
}

/// Fixed in-memory settings.
#[derive(Debug, Default)]
pub struct StaticConfigProvider {
    settings: std::sync::RwLock<SignSettings>,
}

impl StaticConfigProvider {
    pub fn new(settings: SignSettings) -> Self {
        Self {
            settings: std::sync::RwLock::new(settings),
        }
    }
}

impl ConfigProvider for StaticConfigProvider {
    fn sign_settings(&self) -> Result<SignSettings, ConfigProviderError> {
        Ok(self
            .settings
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone())
    }

    fn save_sign_settings(&self, settings: &SignSettings) -> Result<(), ConfigProviderError> {
        *self
            .settings
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = settings.clone();
        Ok(())
    }
}
