//! Gitea API data types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::platform::PushMirrorSpec;

/// Gitea repository - fields we need from the API response.
///
/// Only the fields the mirror pipeline reads are declared, which keeps
/// deserialization resilient to API additions.
///
/// API docs: https://docs.gitea.com/api/1.20/#tag/repository/operation/repoGet
#[derive(Debug, Clone, Deserialize)]
pub struct GiteaRepo {
    /// Repository ID.
    pub id: i64,
    /// Repository name.
    pub name: String,
    /// Full name including owner (e.g., "owner/repo").
    pub full_name: String,
    /// Repository description.
    pub description: Option<String>,
    /// Whether the repository is private.
    pub private: bool,
    /// Whether the repository is a fork.
    pub fork: bool,
    /// Whether the repository is a mirror.
    pub mirror: bool,
    /// Upstream URL when the repo was migrated/mirrored from elsewhere.
    /// Gitea reports the empty string for original repositories.
    #[serde(default)]
    pub original_url: String,
    /// Whether wiki is enabled.
    #[serde(default)]
    pub has_wiki: bool,
    /// Whether the projects board is enabled.
    #[serde(default)]
    pub has_projects: bool,
    /// When the repo was created.
    pub created_at: DateTime<Utc>,
    /// When the repo was last updated.
    pub updated_at: DateTime<Utc>,
    /// Owner information.
    pub owner: GiteaUser,
}

/// Gitea user/organization.
#[derive(Debug, Clone, Deserialize)]
pub struct GiteaUser {
    /// User ID.
    pub id: i64,
    /// Username/login.
    pub login: String,
    /// Full name.
    pub full_name: Option<String>,
}

/// Request body for `POST /repos/{owner}/{repo}/push_mirrors`.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePushMirrorOption {
    pub remote_address: String,
    pub remote_username: String,
    pub remote_password: String,
    pub interval: String,
    pub sync_on_commit: bool,
}

impl From<&PushMirrorSpec> for CreatePushMirrorOption {
    fn from(spec: &PushMirrorSpec) -> Self {
        Self {
            remote_address: spec.remote_address.clone(),
            remote_username: spec.remote_username.clone(),
            remote_password: spec.remote_password.clone(),
            interval: spec.interval.clone(),
            sync_on_commit: spec.sync_on_commit,
        }
    }
}

/// A configured push mirror as reported by Gitea.
#[derive(Debug, Clone, Deserialize)]
pub struct PushMirror {
    /// Name of the mirrored repository.
    #[serde(default)]
    pub repo_name: String,
    /// Gitea-assigned remote name for the mirror.
    #[serde(default)]
    pub remote_name: String,
    /// Destination URL refs are pushed to.
    #[serde(default)]
    pub remote_address: String,
    /// Sync interval in Go duration syntax.
    #[serde(default)]
    pub interval: String,
    /// Whether the mirror also pushes on every commit.
    #[serde(default)]
    pub sync_on_commit: bool,
    /// Last error reported by the mirror job, if any.
    #[serde(default)]
    pub last_error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gitea_repo_deserializes_required_fields() {
        let json = serde_json::json!({
            "id": 7,
            "name": "foo",
            "full_name": "alice/foo",
            "description": "a test repo",
            "private": true,
            "fork": false,
            "mirror": false,
            "original_url": "",
            "has_wiki": true,
            "has_projects": false,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-02T00:00:00Z",
            "owner": { "id": 1, "login": "alice", "full_name": "Alice" }
        });

        let repo: GiteaRepo = serde_json::from_value(json).expect("repo should deserialize");
        assert_eq!(repo.name, "foo");
        assert_eq!(repo.owner.login, "alice");
        assert!(repo.private);
        assert!(repo.original_url.is_empty());
    }

    #[test]
    fn test_gitea_repo_defaults_optional_flags() {
        let json = serde_json::json!({
            "id": 8,
            "name": "bare",
            "full_name": "alice/bare",
            "description": null,
            "private": false,
            "fork": false,
            "mirror": false,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z",
            "owner": { "id": 1, "login": "alice", "full_name": null }
        });

        let repo: GiteaRepo = serde_json::from_value(json).expect("repo should deserialize");
        assert!(repo.original_url.is_empty());
        assert!(!repo.has_wiki);
        assert!(!repo.has_projects);
    }

    #[test]
    fn test_create_push_mirror_option_from_spec() {
        let spec = PushMirrorSpec {
            remote_address: "https://github.com/octocat/foo".to_string(),
            remote_username: "octocat".to_string(),
            remote_password: "token".to_string(),
            interval: "1h01m0s".to_string(),
            sync_on_commit: true,
        };

        let option = CreatePushMirrorOption::from(&spec);
        let json = serde_json::to_value(&option).unwrap();
        assert_eq!(json["remote_address"], "https://github.com/octocat/foo");
        assert_eq!(json["remote_username"], "octocat");
        assert_eq!(json["remote_password"], "token");
        assert_eq!(json["interval"], "1h01m0s");
        assert_eq!(json["sync_on_commit"], true);
    }

    #[test]
    fn test_push_mirror_deserializes_sparse_response() {
        let json = serde_json::json!({
            "repo_name": "foo",
            "remote_name": "remote_mirror_x",
            "remote_address": "https://github.com/octocat/foo",
            "interval": "1h01m0s",
            "sync_on_commit": true
        });

        let mirror: PushMirror = serde_json::from_value(json).expect("mirror should deserialize");
        assert_eq!(mirror.repo_name, "foo");
        assert_eq!(mirror.interval, "1h01m0s");
        assert!(mirror.sync_on_commit);
        assert!(mirror.last_error.is_none());
    }
}
