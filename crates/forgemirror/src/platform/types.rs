use async_trait::async_trait;
use serde::Serialize;

use super::errors::{PlatformError, Result};

/// A repository as seen on the source host, reduced to the fields the mirror
/// pipeline needs. Fetched, reconciled, discarded; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRepo {
    /// Repository name.
    pub name: String,
    /// Owner account login on the source host.
    pub owner: String,
    /// Whether the repository is private.
    pub private: bool,
    /// Repository description.
    pub description: Option<String>,
    /// Whether the wiki is enabled.
    pub has_wiki: bool,
    /// Whether the projects board is enabled.
    pub has_projects: bool,
    /// Upstream URL when this repository was itself created by mirroring or
    /// migrating another repository. Non-empty means "do not re-mirror".
    pub original_url: Option<String>,
}

impl SourceRepo {
    /// Full "owner/name" path.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    /// True if this repository originated from another upstream.
    ///
    /// Derived repositories are never reconciled: mirroring a mirror would
    /// chain replication behind an upstream this tool does not control.
    #[must_use]
    pub fn is_derived(&self) -> bool {
        self.original_url.as_deref().is_some_and(|u| !u.is_empty())
    }
}

/// The field set written to the destination host on create and edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoSettings {
    pub name: String,
    pub private: bool,
    pub description: Option<String>,
    pub has_wiki: bool,
    pub has_projects: bool,
}

impl RepoSettings {
    /// Project the destination-relevant fields out of a source repository.
    #[must_use]
    pub fn from_source(repo: &SourceRepo) -> Self {
        Self {
            name: repo.name.clone(),
            private: repo.private,
            description: repo.description.clone(),
            has_wiki: repo.has_wiki,
            has_projects: repo.has_projects,
        }
    }
}

/// Outcome of probing the destination host for a repository.
///
/// A failed probe is kept distinct from a missing repository: creating on top
/// of a transient outage would race the real state, so the reconciler skips
/// instead.
#[derive(Debug)]
pub enum RepoPresence {
    /// The repository exists on the destination host.
    Exists,
    /// The destination host reported a definite 404.
    Missing,
    /// The probe itself failed; existence is unknown.
    CheckFailed(PlatformError),
}

/// Everything the source host needs to push refs to the destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushMirrorSpec {
    /// Destination clone URL, e.g. `https://github.com/octocat/foo`.
    pub remote_address: String,
    /// Account the source host authenticates as when pushing.
    pub remote_username: String,
    /// Access token used as the push password.
    pub remote_password: String,
    /// Sync interval in Go duration syntax, e.g. `1h01m0s`.
    pub interval: String,
    /// Also push on every commit, not just on the interval.
    pub sync_on_commit: bool,
}

/// Destination coordinates used to compute push-mirror remotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushTarget {
    /// Web base URL of the destination host, e.g. `https://github.com`.
    pub base_url: String,
    /// Destination account that owns the mirrored repositories.
    pub account: String,
    /// Access token for pushing to the destination.
    pub token: String,
}

impl PushTarget {
    /// Remote URL for one mirrored repository.
    #[must_use]
    pub fn remote_url(&self, repo: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            self.account,
            repo
        )
    }
}

/// The source host: lists repositories and accepts push-mirror configuration.
#[async_trait]
pub trait MirrorSource: Send + Sync {
    /// Fetch one page of the account's repositories. Pages are 1-indexed;
    /// an empty page means the listing is exhausted.
    async fn list_repos_page(
        &self,
        account: &str,
        page: u32,
        limit: u32,
    ) -> Result<Vec<SourceRepo>>;

    /// Install a push mirror for `owner/name` pointing at the destination.
    async fn configure_push_mirror(
        &self,
        owner: &str,
        name: &str,
        mirror: &PushMirrorSpec,
    ) -> Result<()>;
}

/// The destination host: point lookups and repository writes.
#[async_trait]
pub trait MirrorTarget: Send + Sync {
    /// Account that owns mirrored repositories on the destination host.
    fn account(&self) -> &str;

    /// Coordinates and credentials the source host pushes with.
    fn push_target(&self) -> PushTarget;

    /// Check whether `owner/name` exists on the destination host.
    async fn probe_repo(&self, owner: &str, name: &str) -> RepoPresence;

    /// Create a repository under the authenticated account.
    async fn create_repo(&self, settings: &RepoSettings) -> Result<()>;

    /// Update visibility/metadata of an existing repository.
    async fn update_repo(&self, owner: &str, name: &str, settings: &RepoSettings) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_repo() -> SourceRepo {
        SourceRepo {
            name: "foo".to_string(),
            owner: "alice".to_string(),
            private: true,
            description: Some("a test repo".to_string()),
            has_wiki: true,
            has_projects: false,
            original_url: None,
        }
    }

    #[test]
    fn test_source_repo_full_name() {
        assert_eq!(sample_repo().full_name(), "alice/foo");
    }

    #[test]
    fn test_is_derived_for_original_repo() {
        assert!(!sample_repo().is_derived());
    }

    #[test]
    fn test_is_derived_for_mirrored_repo() {
        let mut repo = sample_repo();
        repo.original_url = Some("https://upstream.test/alice/foo".to_string());
        assert!(repo.is_derived());
    }

    #[test]
    fn test_is_derived_treats_empty_marker_as_original() {
        let mut repo = sample_repo();
        repo.original_url = Some(String::new());
        assert!(!repo.is_derived());
    }

    #[test]
    fn test_repo_settings_from_source() {
        let settings = RepoSettings::from_source(&sample_repo());
        assert_eq!(settings.name, "foo");
        assert!(settings.private);
        assert_eq!(settings.description.as_deref(), Some("a test repo"));
        assert!(settings.has_wiki);
        assert!(!settings.has_projects);
    }

    #[test]
    fn test_repo_settings_serialize_field_names() {
        let json = serde_json::to_value(RepoSettings::from_source(&sample_repo())).unwrap();
        assert_eq!(json["name"], "foo");
        assert_eq!(json["private"], true);
        assert_eq!(json["description"], "a test repo");
        assert_eq!(json["has_wiki"], true);
        assert_eq!(json["has_projects"], false);
    }

    #[test]
    fn test_push_target_remote_url() {
        let target = PushTarget {
            base_url: "https://github.com".to_string(),
            account: "octocat".to_string(),
            token: "secret".to_string(),
        };
        assert_eq!(target.remote_url("foo"), "https://github.com/octocat/foo");
    }

    #[test]
    fn test_push_target_remote_url_normalizes_trailing_slash() {
        let target = PushTarget {
            base_url: "https://github.com/".to_string(),
            account: "octocat".to_string(),
            token: "secret".to_string(),
        };
        assert_eq!(target.remote_url("foo"), "https://github.com/octocat/foo");
    }

    #[test]
    fn test_repo_presence_check_failed_holds_error() {
        let presence = RepoPresence::CheckFailed(PlatformError::network("timeout"));
        match presence {
            RepoPresence::CheckFailed(err) => {
                assert!(err.to_string().contains("timeout"));
            }
            other => panic!("unexpected presence: {other:?}"),
        }
    }
}
