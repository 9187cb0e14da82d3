//! Gitea API client for the mirror source.
//!
//! This module talks to Gitea-based forges (self-hosted Gitea, Forgejo,
//! Codeberg): listing a user's repositories page by page and installing
//! push mirrors that replicate repositories to the destination host.
//!
//! # Module Structure
//!
//! - [`error`] - Error types for Gitea API operations
//! - [`types`] - Gitea API data structures
//! - [`client`] - Client creation and management
//! - [`convert`] - Conversion to host-agnostic mirror types
//!
//! For the full mirror pipeline, use the engine in [`crate::mirror`]:
//!
//! ```ignore
//! use forgemirror::gitea::GiteaClient;
//! use forgemirror::github::GitHubClient;
//! use forgemirror::mirror::{MirrorOptions, mirror_account};
//!
//! let source = GiteaClient::new("https://git.example.com", "gitea-token")?;
//! let target = GitHubClient::new("github-token", "octocat")?;
//!
//! let result = mirror_account(&source, &target, "alice", &MirrorOptions::default(), None).await?;
//! println!("Mirrored {} repositories", result.created + result.updated);
//! ```

mod client;
mod convert;
mod error;
mod types;

pub use error::GiteaError;

pub use types::{CreatePushMirrorOption, GiteaRepo, GiteaUser, PushMirror};

pub use client::{GITEA_COM_HOST, GiteaClient};

pub use convert::to_source_repo;
