//! Error types for Gitea API operations.

use thiserror::Error;

use crate::platform::PlatformError;

/// Errors that can occur when interacting with the Gitea API.
#[derive(Debug, Error)]
pub enum GiteaError {
    /// HTTP transport failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// JSON parsing failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// API returned an error response.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Authentication failed or token invalid.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<GiteaError> for PlatformError {
    fn from(err: GiteaError) -> Self {
        match err {
            GiteaError::Http(message) => PlatformError::Network { message },
            GiteaError::Json(e) => PlatformError::Internal {
                message: format!("JSON parse error: {}", e),
            },
            GiteaError::Api { status, message } => {
                if status == 401 || status == 403 {
                    PlatformError::AuthRequired
                } else if status == 404 {
                    PlatformError::NotFound { resource: message }
                } else {
                    PlatformError::Api { message }
                }
            }
            GiteaError::Auth(_) => PlatformError::AuthRequired,
            GiteaError::Config(msg) => PlatformError::Internal { message: msg },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_to_platform_error() {
        let err = GiteaError::Api {
            status: 404,
            message: "not found".to_string(),
        };
        let platform_err: PlatformError = err.into();
        assert!(matches!(platform_err, PlatformError::NotFound { .. }));
    }

    #[test]
    fn test_forbidden_maps_to_auth_required() {
        let err = GiteaError::Api {
            status: 403,
            message: "forbidden".to_string(),
        };
        let platform_err: PlatformError = err.into();
        assert!(matches!(platform_err, PlatformError::AuthRequired));
    }

    #[test]
    fn test_auth_error_to_platform_error() {
        let err = GiteaError::Auth("invalid token".to_string());
        let platform_err: PlatformError = err.into();
        assert!(matches!(platform_err, PlatformError::AuthRequired));
    }

    #[test]
    fn test_http_error_maps_to_network() {
        let err = GiteaError::Http("connection reset".to_string());
        let platform_err: PlatformError = err.into();
        assert!(matches!(platform_err, PlatformError::Network { .. }));
    }

    #[test]
    fn test_server_error_maps_to_api() {
        let err = GiteaError::Api {
            status: 500,
            message: "boom".to_string(),
        };
        let platform_err: PlatformError = err.into();
        assert!(matches!(platform_err, PlatformError::Api { .. }));
    }
}
