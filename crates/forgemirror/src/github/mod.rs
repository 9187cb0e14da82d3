//! GitHub API client for the mirror destination.
//!
//! This module uses octocrab to probe for, create, and update repositories
//! under the authenticated GitHub account. The mirror engine drives it
//! through the [`crate::platform::MirrorTarget`] trait.
//!
//! # Module Structure
//!
//! - [`error`] - Error types for GitHub API operations
//! - [`types`] - Data structures for API responses
//! - [`client`] - Client creation and repository writes

mod client;
mod error;
mod types;

pub use error::{GitHubError, is_auth_error, is_not_found};

pub use types::GitHubRepo;

pub use client::{GITHUB_WEB_HOST, GitHubClient, create_client};
