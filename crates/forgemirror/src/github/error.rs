//! GitHub API error types.

use thiserror::Error;

use crate::platform::PlatformError;

/// Errors that can occur when interacting with the GitHub API.
#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("GitHub API error: {0}")]
    Api(#[from] octocrab::Error),

    #[error("Authentication required")]
    AuthRequired,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Check if an error is a definite 404 from GitHub.
///
/// Only an actual GitHub response with status 404 counts; transport and
/// parse failures leave existence unknown.
pub fn is_not_found(e: &octocrab::Error) -> bool {
    match e {
        octocrab::Error::GitHub { source, .. } => source.status_code.as_u16() == 404,
        _ => false,
    }
}

/// Check if an error is an authentication failure (401/403).
pub fn is_auth_error(e: &octocrab::Error) -> bool {
    match e {
        octocrab::Error::GitHub { source, .. } => {
            let status = source.status_code.as_u16();
            status == 401 || status == 403
        }
        _ => false,
    }
}

impl From<GitHubError> for PlatformError {
    fn from(err: GitHubError) -> Self {
        match err {
            GitHubError::Api(e) => {
                if is_not_found(&e) {
                    PlatformError::NotFound {
                        resource: e.to_string(),
                    }
                } else if is_auth_error(&e) {
                    PlatformError::AuthRequired
                } else {
                    PlatformError::Api {
                        message: e.to_string(),
                    }
                }
            }
            GitHubError::AuthRequired => PlatformError::AuthRequired,
            GitHubError::Internal(msg) => PlatformError::Internal { message: msg },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_required_to_platform_error() {
        let err = GitHubError::AuthRequired;
        let platform_err: PlatformError = err.into();
        assert!(matches!(platform_err, PlatformError::AuthRequired));
    }

    #[test]
    fn test_internal_to_platform_error() {
        let err = GitHubError::Internal("unexpected state".to_string());
        let platform_err: PlatformError = err.into();
        assert!(matches!(platform_err, PlatformError::Internal { .. }));
        assert!(platform_err.to_string().contains("unexpected state"));
    }

    #[test]
    fn test_is_not_found_ignores_transport_errors() {
        let uri_err = octocrab::Error::Other {
            source: "connection reset".into(),
            backtrace: std::backtrace::Backtrace::capture(),
        };
        assert!(!is_not_found(&uri_err));
        assert!(!is_auth_error(&uri_err));
    }
}
