use std::path::{Path, PathBuf};
use std::time::Duration;

use figment::Figment;
#[cfg(feature = "config_env")]
use figment::providers::Env;
#[cfg(feature = "config_json")]
use figment::providers::Json;
#[cfg(feature = "config_yaml")]
use figment::providers::Yaml;
use figment::providers::{Data, Format};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_with::{DurationMilliSeconds, DurationSeconds, serde_as, skip_serializing_none};
use strum::{Display, EnumString};

use super::ConfigParsingError;
use crate::model::signature::HashAlgorithm;

#[cfg(feature = "config_env")]
const ENV_PREFIX: &str = "KMASC_";

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoCustomConfig;

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppCustomConfigSerdeDTO<Custom> {
    #[serde(default)]
    app: Custom,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig<Custom> {
    pub core: CoreConfig,
    #[serde(default)]
    pub app: Custom,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreConfig {
    #[serde(default)]
    pub signing_plugin: SigningPluginConfig,
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub settings: SettingsConfig,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SigningPluginConfig {
    /// Deadline for the socket to reach the open state.
    #[serde_as(as = "DurationSeconds<u64>")]
    pub connect_timeout: Duration,
    /// Deadline for the plugin's single reply. Covers the user entering the token PIN.
    #[serde_as(as = "DurationSeconds<u64>")]
    pub response_timeout: Duration,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub probe_timeout: Duration,
    pub default_hash_algorithm: HashAlgorithm,
    pub accept_invalid_certs: bool,
}

impl Default for SigningPluginConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(5),
            response_timeout: Duration::from_secs(60),
            probe_timeout: Duration::from_millis(2000),
            default_hash_algorithm: HashAlgorithm::Sha256,
            accept_invalid_certs: false,
        }
    }
}

#[derive(
    Debug, Copy, Clone, Default, Display, EnumString, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ReconciliationEncoding {
    #[default]
    Multipart,
    Json,
}

#[skip_serializing_none]
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BackendConfig {
    pub base_url: String,
    pub access_token: Option<String>,
    pub reconciliation_encoding: ReconciliationEncoding,
    #[serde_as(as = "DurationSeconds<u64>")]
    pub request_timeout: Duration,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080".to_string(),
            access_token: None,
            reconciliation_encoding: ReconciliationEncoding::default(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsConfig {
    /// JSON file holding the user-editable signing settings.
    pub path: PathBuf,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("settings.json"),
        }
    }
}

pub enum InputFormat {
    #[cfg(feature = "config_yaml")]
    Yaml(Data<Yaml>),
    #[cfg(feature = "config_json")]
    Json(Data<Json>),
}

impl InputFormat {
    #[cfg(feature = "config_yaml")]
    pub fn yaml_file(p: impl AsRef<Path>) -> InputFormat {
        InputFormat::Yaml(Yaml::file(p))
    }

    #[cfg(feature = "config_yaml")]
    pub fn yaml_str(s: impl AsRef<str>) -> InputFormat {
        InputFormat::Yaml(Yaml::string(s.as_ref()))
    }

    #[cfg(feature = "config_json")]
    pub fn json_file(p: impl AsRef<Path>) -> InputFormat {
        InputFormat::Json(Json::file(p))
    }

    #[cfg(feature = "config_json")]
    pub fn json_str(s: impl AsRef<str>) -> InputFormat {
        InputFormat::Json(Json::string(s.as_ref()))
    }
}

impl<Custom> AppConfig<Custom>
where
    Custom: Serialize + DeserializeOwned + Default,
{
    pub fn from_files(files: &[impl AsRef<Path>]) -> Result<Self, ConfigParsingError> {
        let mut inputs: Vec<InputFormat> = Vec::with_capacity(files.len());

        for path in files {
            #[cfg(feature = "config_yaml")]
            if path
                .as_ref()
                .extension()
                .is_some_and(|ext| ext == "yml" || ext == "yaml")
            {
                inputs.push(InputFormat::yaml_file(path));
                continue;
            }

            #[cfg(feature = "config_json")]
            if path.as_ref().extension() == Some("json".as_ref()) {
                inputs.push(InputFormat::json_file(path));
                continue;
            }

            return Err(ConfigParsingError::GeneralParsingError(format!(
                "Unsupported file or missing file extension: {:?}",
                path.as_ref().to_str()
            )));
        }

        AppConfig::parse(inputs)
    }

    #[cfg(feature = "config_yaml")]
    pub fn from_yaml(
        configs: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Result<Self, ConfigParsingError> {
        let inputs = configs.into_iter().map(InputFormat::yaml_str);

        AppConfig::parse(inputs)
    }

    /// Later inputs override earlier ones; `KMASC_`-prefixed environment variables override all
    /// files (`__` separates nested keys, e.g. `KMASC_backend__baseUrl`).
    pub fn parse(
        inputs: impl IntoIterator<Item = InputFormat>,
    ) -> Result<Self, ConfigParsingError> {
        let mut figment = Figment::new();

        for data in inputs {
            figment = match data {
                #[cfg(feature = "config_yaml")]
                InputFormat::Yaml(content) => figment.merge(content),
                #[cfg(feature = "config_json")]
                InputFormat::Json(content) => figment.merge(content),
            };
        }

        #[cfg(feature = "config_env")]
        {
            figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(false));
        }

        let core = figment
            .extract::<CoreConfig>()
            .map_err(|e| ConfigParsingError::GeneralParsingError(e.to_string()))?;
        let custom = figment
            .extract::<AppCustomConfigSerdeDTO<Custom>>()
            .map_err(|e| ConfigParsingError::GeneralParsingError(e.to_string()))?;

        Ok(Self {
            core,
            app: custom.app,
        })
    }
}
