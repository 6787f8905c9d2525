use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::ConfigProviderError;
use super::config_provider::{ConfigProvider, SignSettings};

/// Settings stored as a JSON object in a local file.
///
/// A missing file yields empty settings.
#[derive(Clone, Debug)]
pub struct JsonFileConfigProvider {
    path: PathBuf,
}

impl JsonFileConfigProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> ConfigProviderError {
        ConfigProviderError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl ConfigProvider for JsonFileConfigProvider {
    fn sign_settings(&self) -> Result<SignSettings, ConfigProviderError> {
        let content = match std::fs::read(&self.path) {
            Ok(content) => content,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No settings file, using defaults");
                return Ok(SignSettings::default());
            }
            Err(error) => return Err(self.io_error(error)),
        };

        Ok(serde_json::from_slice(&content)?)
    }

    fn save_sign_settings(&self, settings: &SignSettings) -> Result<(), ConfigProviderError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let content = serde_json::to_vec_pretty(settings)?;
        std::fs::write(&self.path, content).map_err(|e| self.io_error(e))?;

        tracing::info!(path = %self.path.display(), "Signing settings saved");
        Ok(())
    }
}
