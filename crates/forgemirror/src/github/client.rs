//! GitHub API client creation and repository writes.

use std::sync::Arc;

use async_trait::async_trait;
use octocrab::Octocrab;

use super::error::{GitHubError, is_not_found};
use super::types::GitHubRepo;
use crate::platform::{
    self, MirrorTarget, PlatformError, PushTarget, RepoPresence, RepoSettings,
};

/// Web host mirrored repositories are pushed to.
pub const GITHUB_WEB_HOST: &str = "https://github.com";

/// Create an authenticated Octocrab instance from a GitHub token.
pub fn create_client(token: &str) -> Result<Octocrab, GitHubError> {
    Octocrab::builder()
        .personal_token(token.to_string())
        .build()
        .map_err(GitHubError::Api)
}

/// GitHub API client implementing the [`MirrorTarget`] trait.
///
/// This wraps an `Octocrab` instance and provides the point lookups and
/// repository writes the mirror engine needs on the destination side.
#[derive(Clone)]
pub struct GitHubClient {
    inner: Arc<Octocrab>,
    /// The account mirrored repositories are created under.
    account: String,
    /// The authentication token, reused as the push-mirror password.
    token: String,
}

impl GitHubClient {
    /// Create a new GitHub client from an authentication token.
    ///
    /// `account` is the login of the user the token belongs to; created
    /// repositories land under it and push mirrors authenticate as it.
    pub fn new(token: &str, account: &str) -> Result<Self, GitHubError> {
        let client = create_client(token)?;
        Ok(Self {
            inner: Arc::new(client),
            account: account.to_string(),
            token: token.to_string(),
        })
    }

    /// Create a GitHub client from an existing Octocrab instance.
    pub fn from_octocrab(client: Octocrab, token: &str, account: &str) -> Self {
        Self {
            inner: Arc::new(client),
            account: account.to_string(),
            token: token.to_string(),
        }
    }

    /// Fetch a repository by owner and name.
    pub async fn get_repo(&self, owner: &str, name: &str) -> Result<GitHubRepo, GitHubError> {
        self.inner
            .get(format!("/repos/{}/{}", owner, name), None::<&()>)
            .await
            .map_err(GitHubError::Api)
    }
}

#[async_trait]
impl MirrorTarget for GitHubClient {
    fn account(&self) -> &str {
        &self.account
    }

    fn push_target(&self) -> PushTarget {
        PushTarget {
            base_url: GITHUB_WEB_HOST.to_string(),
            account: self.account.clone(),
            token: self.token.clone(),
        }
    }

    async fn probe_repo(&self, owner: &str, name: &str) -> RepoPresence {
        match self.get_repo(owner, name).await {
            Ok(_) => RepoPresence::Exists,
            Err(GitHubError::Api(e)) if is_not_found(&e) => RepoPresence::Missing,
            Err(e) => RepoPresence::CheckFailed(PlatformError::from(e)),
        }
    }

    async fn create_repo(&self, settings: &RepoSettings) -> platform::Result<()> {
        let _created: GitHubRepo = self
            .inner
            .post("/user/repos", Some(settings))
            .await
            .map_err(GitHubError::Api)
            .map_err(PlatformError::from)?;

        tracing::debug!(repo = %settings.name, "repository created");
        Ok(())
    }

    async fn update_repo(
        &self,
        owner: &str,
        name: &str,
        settings: &RepoSettings,
    ) -> platform::Result<()> {
        let _updated: GitHubRepo = self
            .inner
            .patch(format!("/repos/{}/{}", owner, name), Some(settings))
            .await
            .map_err(GitHubError::Api)
            .map_err(PlatformError::from)?;

        tracing::debug!(repo = %format!("{owner}/{name}"), "repository settings updated");
        Ok(())
    }
}
