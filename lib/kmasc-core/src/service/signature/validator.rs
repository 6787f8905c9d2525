use crate::config::config_provider::SignSettings;
use crate::proto::websocket::parse_websocket_url;
use crate::service::error::ServiceError;

pub(crate) fn validate_hash_value(hash_value: &str) -> Result<(), ServiceError> {
    if hash_value.trim().is_empty() {
        return Err(ServiceError::ValidationError(
            "hash value must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Endpoints may be left empty, otherwise they must be WebSocket URLs.
pub(crate) fn validate_sign_settings(settings: &SignSettings) -> Result<(), ServiceError> {
    for (name, endpoint) in [
        ("signService", &settings.sign_service),
        ("verifyService", &settings.verify_service),
    ] {
        if endpoint.is_empty() {
            continue;
        }
        parse_websocket_url(endpoint)
            .map_err(|e| ServiceError::ValidationError(format!("{name}: {e}")))?;
    }
    Ok(())
}
