// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;
use actix_web::HttpResponse;
use serde::de::DeserializeOwned;

/// Malformed or mistyped JSON bodies become a 400 in the standard envelope
/// instead of actix's plain-text default.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(256 * 1024)
        .error_handler(|err, req| {
            let message = err.to_string();
            tracing::debug!("Rejected JSON body on {}: {}", req.path(), message);
            actix_web::error::InternalError::from_response(
                err,
                ApiResponse::bad_request("VALIDATION_ERROR", &message),
            )
            .into()
        })
}

/// Decodes a raw body for handlers that must check the path first.
pub fn parse_json_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, HttpResponse> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!("Rejected JSON body: {}", e);
        ApiResponse::validation_error(&e.to_string())
    })
}
