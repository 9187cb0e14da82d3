//! Forgemirror - replicate Gitea repositories to GitHub.
//!
//! This library ensures that every repository owned by a Gitea account has a
//! same-named GitHub counterpart with matching visibility and metadata, and
//! configures a scheduled push mirror on Gitea so commits keep flowing to
//! GitHub without further intervention.
//!
//! # Example
//!
//! ```ignore
//! use forgemirror::gitea::GiteaClient;
//! use forgemirror::github::GitHubClient;
//! use forgemirror::mirror::{MirrorOptions, mirror_account};
//!
//! let source = GiteaClient::new("https://git.example.com", gitea_token)?;
//! let target = GitHubClient::new(github_token, "octocat")?;
//!
//! let result = mirror_account(&source, &target, "alice", &MirrorOptions::default(), None).await?;
//! println!("created {} repositories", result.created);
//! ```

pub mod gitea;
pub mod github;
pub mod http;
pub mod mirror;
pub mod platform;

pub use gitea::{GITEA_COM_HOST, GiteaClient};
pub use github::{GITHUB_WEB_HOST, GitHubClient};
pub use mirror::{
    DEFAULT_MIRROR_INTERVAL, DEFAULT_PAGE_SIZE, MirrorOptions, MirrorRunResult, ReconcileOutcome,
    mirror_account,
};
pub use platform::{
    MirrorSource, MirrorTarget, PlatformError, PushMirrorSpec, PushTarget, RepoPresence,
    RepoSettings, SourceRepo,
};
