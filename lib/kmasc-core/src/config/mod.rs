use thiserror::Error;

pub mod config_provider;
pub mod core_config;
pub mod json_config_provider;


#[derive(Debug, Error)]
pub enum ConfigParsingError {
    #[error("Config parsing error: {0}")]
    GeneralParsingError(String),
}

#[derive(Debug, Error)]
pub enum ConfigProviderError {
    #[error("Cannot access settings file `{path}`: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Invalid settings content: {0}")]
    Json(#[from] serde_json::Error),
}
