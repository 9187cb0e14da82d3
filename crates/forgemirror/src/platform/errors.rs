use thiserror::Error;

/// Errors that can occur when interacting with a code host.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// API error from the host.
    #[error("API error: {message}")]
    Api { message: String },

    /// Authentication required or failed.
    #[error("Authentication required")]
    AuthRequired,

    /// Resource not found (repo, user, etc.).
    #[error("Not found: {resource}")]
    NotFound { resource: String },

    /// Network or connection error.
    #[error("Network error: {message}")]
    Network { message: String },

    /// Unexpected/internal error.
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl PlatformError {
    /// Create an API error.
    #[inline]
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a not found error.
    #[inline]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create a network error.
    #[inline]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create an internal error.
    #[inline]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

/// Extract a short error message suitable for display.
///
/// Takes the first line of an error message, which keeps progress output and
/// per-repository log lines to a single line even for errors that carry
/// multi-line details.
#[inline]
pub fn short_error_message(e: &impl std::error::Error) -> String {
    let full = e.to_string();
    full.lines().next().unwrap_or(&full).to_string()
}

/// Result type for host operations.
pub type Result<T> = std::result::Result<T, PlatformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_error_api() {
        let err = PlatformError::api("something went wrong");
        assert!(err.to_string().contains("API error"));
        assert!(err.to_string().contains("something went wrong"));
    }

    #[test]
    fn test_platform_error_not_found() {
        let err = PlatformError::not_found("octocat/foo");
        assert!(err.to_string().contains("Not found"));
        assert!(err.to_string().contains("octocat/foo"));
    }

    #[test]
    fn test_platform_error_network() {
        let err = PlatformError::network("connection refused");
        assert!(err.to_string().contains("Network error"));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_platform_error_auth_required() {
        let err = PlatformError::AuthRequired;
        assert!(err.to_string().contains("Authentication required"));
    }

    #[test]
    fn test_short_error_message_single_line() {
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        assert_eq!(short_error_message(&err), "file not found");
    }

    #[test]
    fn test_short_error_message_multiline() {
        let err = std::io::Error::other("first line\nsecond line\nthird line");
        assert_eq!(short_error_message(&err), "first line");
    }
}
