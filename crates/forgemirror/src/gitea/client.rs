//! Gitea API client creation and management.

use std::sync::Arc;
use std::time::Duration as StdDuration;

use async_trait::async_trait;

use super::convert::to_source_repo;
use super::error::GiteaError;
use super::types::{CreatePushMirrorOption, GiteaRepo, PushMirror};
use crate::http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
use crate::platform::{self, MirrorSource, PlatformError, PushMirrorSpec, SourceRepo};

/// Default Gitea Cloud host.
pub const GITEA_COM_HOST: &str = "https://gitea.com";

/// Gitea API client.
///
/// This client uses reqwest to interact with the Gitea API, which is
/// compatible with self-hosted Gitea, Forgejo, and Codeberg.
#[derive(Clone)]
pub struct GiteaClient {
    transport: Arc<dyn HttpTransport>,
    host: String,
    token: String,
}

impl GiteaClient {
    /// Create a new Gitea client.
    ///
    /// # Arguments
    ///
    /// * `host` - Gitea host URL (e.g., "https://git.example.com")
    /// * `token` - Personal access token
    pub fn new(host: &str, token: &str) -> Result<Self, GiteaError> {
        let host = host.trim_end_matches('/');
        let transport = ReqwestTransport::with_timeout(StdDuration::from_secs(30))
            .map_err(|e| GiteaError::Config(e.to_string()))?;

        Ok(Self::new_with_transport(host, token, Arc::new(transport)))
    }

    pub fn new_with_transport(host: &str, token: &str, transport: Arc<dyn HttpTransport>) -> Self {
        let host = host.trim_end_matches('/').to_string();
        Self {
            transport,
            host,
            token: token.to_string(),
        }
    }

    /// Get the host URL.
    pub fn host(&self) -> &str {
        &self.host
    }

    fn auth_headers(&self) -> Vec<(String, String)> {
        vec![
            ("Accept".to_string(), "application/json".to_string()),
            ("User-Agent".to_string(), "forgemirror".to_string()),
            ("Authorization".to_string(), format!("token {}", self.token)),
        ]
    }

    /// Make an authenticated GET request.
    async fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, GiteaError> {
        let url = format!("{}/api/v1{}", self.host, path);

        let request = HttpRequest {
            method: HttpMethod::Get,
            url,
            headers: self.auth_headers(),
            body: Vec::new(),
        };

        let response: HttpResponse = self
            .transport
            .send(request)
            .await
            .map_err(|e| GiteaError::Http(e.to_string()))?;

        if !(200..300).contains(&response.status) {
            let message = String::from_utf8_lossy(&response.body).to_string();
            return Err(GiteaError::Api {
                status: response.status,
                message,
            });
        }

        serde_json::from_slice(&response.body).map_err(GiteaError::Json)
    }

    /// Make an authenticated POST request with a JSON body.
    async fn post<B: serde::Serialize, T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, GiteaError> {
        let url = format!("{}/api/v1{}", self.host, path);

        let mut headers = self.auth_headers();
        headers.push((
            "Content-Type".to_string(),
            "application/json".to_string(),
        ));

        let request = HttpRequest {
            method: HttpMethod::Post,
            url,
            headers,
            body: serde_json::to_vec(body).map_err(GiteaError::Json)?,
        };

        let response = self
            .transport
            .send(request)
            .await
            .map_err(|e| GiteaError::Http(e.to_string()))?;

        if !(200..300).contains(&response.status) {
            let message = String::from_utf8_lossy(&response.body).to_string();
            return Err(GiteaError::Api {
                status: response.status,
                message,
            });
        }

        serde_json::from_slice(&response.body).map_err(GiteaError::Json)
    }

    /// Fetch one page of a user's repositories.
    ///
    /// Pages are 1-indexed. An empty page means the listing is exhausted;
    /// a partial page does NOT: Gitea can return short pages mid-listing,
    /// so callers must keep paging until they see an empty one.
    pub async fn list_user_repos_page_internal(
        &self,
        username: &str,
        page: u32,
        limit: u32,
    ) -> Result<Vec<GiteaRepo>, GiteaError> {
        self.get(&format!(
            "/users/{}/repos?page={}&limit={}",
            username, page, limit
        ))
        .await
    }

    /// Install a push mirror on `owner/repo`.
    ///
    /// Gitea starts pushing to the remote on the configured interval (and on
    /// every commit when `sync_on_commit` is set).
    pub async fn create_push_mirror_internal(
        &self,
        owner: &str,
        repo: &str,
        option: &CreatePushMirrorOption,
    ) -> Result<PushMirror, GiteaError> {
        self.post(&format!("/repos/{}/{}/push_mirrors", owner, repo), option)
            .await
    }
}

#[async_trait]
impl MirrorSource for GiteaClient {
    async fn list_repos_page(
        &self,
        account: &str,
        page: u32,
        limit: u32,
    ) -> platform::Result<Vec<SourceRepo>> {
        let repos = self
            .list_user_repos_page_internal(account, page, limit)
            .await
            .map_err(PlatformError::from)?;

        Ok(repos.iter().map(to_source_repo).collect())
    }

    async fn configure_push_mirror(
        &self,
        owner: &str,
        name: &str,
        mirror: &PushMirrorSpec,
    ) -> platform::Result<()> {
        let option = CreatePushMirrorOption::from(mirror);
        let created = self
            .create_push_mirror_internal(owner, name, &option)
            .await
            .map_err(PlatformError::from)?;

        tracing::debug!(
            repo = %format!("{owner}/{name}"),
            remote = %created.remote_address,
            interval = %created.interval,
            "push mirror configured"
        );

        Ok(())
    }
}
