use axum::http::HeaderMap;

use crate::api::config::AUTH_HEADER;
use crate::api::error::ApiError;

/// Paths reachable without the shared secret
pub const PUBLIC_PATHS: [&str; 2] = ["/", "/health"];

/// Compare the shared-secret header against the configured key
pub async fn validate_auth(
    headers: &HeaderMap,
    secret_key: &str,
) -> Result<(), ApiError> {
    let token = headers
        .get(AUTH_HEADER)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::debug!("missing {} header", AUTH_HEADER);
            ApiError::Unauthorized
        })?;

    if token != secret_key {
        tracing::debug!("invalid {} header", AUTH_HEADER);
        return Err(ApiError::Unauthorized);
    }

    Ok(())
}
