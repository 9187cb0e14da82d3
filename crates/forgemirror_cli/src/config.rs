//! Configuration file support for forgemirror.
//!
//! Configuration is loaded with the following precedence (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (prefixed with `FORGEMIRROR_`, e.g., `FORGEMIRROR_GITEA_TOKEN`)
//! 3. Config file (~/.config/forgemirror/config.toml or ./forgemirror.toml)
//! 4. Built-in defaults
//!
//! Example config file:
//! ```toml
//! [gitea]
//! url = "https://git.example.com"  # optional, defaults to https://gitea.com
//! user = "alice"
//! token = "..."  # or use FORGEMIRROR_GITEA_TOKEN env var
//!
//! [github]
//! user = "octocat"
//! token = "ghp_..."  # or use FORGEMIRROR_GITHUB_TOKEN env var
//!
//! [mirror]
//! interval = "1h01m0s"
//! sync_on_commit = true
//! ```

use std::path::PathBuf;

use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use directories::ProjectDirs;
use serde::Deserialize;

use forgemirror::GITEA_COM_HOST;
use forgemirror::mirror::DEFAULT_MIRROR_INTERVAL;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Gitea (source host) configuration.
    pub gitea: GiteaConfig,
    /// GitHub (destination host) configuration.
    pub github: GitHubConfig,
    /// Push-mirror options.
    pub mirror: MirrorConfig,
}

/// Gitea configuration (the source host).
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GiteaConfig {
    /// Gitea host URL (e.g., "https://git.example.com").
    /// Can also be set via FORGEMIRROR_GITEA_URL environment variable.
    /// Defaults to https://gitea.com if not specified.
    pub url: Option<String>,
    /// Gitea account whose repositories are mirrored.
    /// Can also be set via FORGEMIRROR_GITEA_USER environment variable.
    pub user: Option<String>,
    /// Gitea API token (personal access token).
    /// Can also be set via FORGEMIRROR_GITEA_TOKEN environment variable.
    pub token: Option<String>,
}

/// GitHub configuration (the destination host).
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// GitHub account mirrored repositories are created under.
    /// Can also be set via FORGEMIRROR_GITHUB_USER environment variable.
    pub user: Option<String>,
    /// GitHub personal access token. Also used as the push-mirror password.
    /// Can also be set via FORGEMIRROR_GITHUB_TOKEN environment variable.
    pub token: Option<String>,
}

/// Push-mirror options.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MirrorConfig {
    /// Sync interval in Go duration syntax.
    pub interval: String,
    /// Also push on every commit, not just on the interval.
    pub sync_on_commit: bool,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_MIRROR_INTERVAL.to_string(),
            sync_on_commit: true,
        }
    }
}

impl Config {
    /// Load configuration using the config crate's layered approach.
    ///
    /// Sources are loaded in order (later sources override earlier):
    /// 1. Built-in defaults
    /// 2. XDG config file (~/.config/forgemirror/config.toml)
    /// 3. Local config file (./forgemirror.toml)
    /// 4. Environment variables with FORGEMIRROR_ prefix
    pub fn load() -> Self {
        let mut builder = ConfigBuilder::builder();

        // Add XDG config file if it exists
        if let Some(proj_dirs) = ProjectDirs::from("", "", "forgemirror") {
            let xdg_config = proj_dirs.config_dir().join("config.toml");
            if xdg_config.exists() {
                tracing::debug!("Loading config from {:?}", xdg_config);
                builder = builder.add_source(
                    File::from(xdg_config)
                        .format(FileFormat::Toml)
                        .required(false),
                );
            }
        }

        // Add local config file (higher priority than XDG)
        let local_config = PathBuf::from("forgemirror.toml");
        if local_config.exists() {
            tracing::debug!("Loading config from ./forgemirror.toml");
            builder = builder.add_source(
                File::from(local_config)
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }

        // Add FORGEMIRROR_ prefixed environment variables
        // e.g., FORGEMIRROR_GITEA_TOKEN -> gitea.token
        builder = builder.add_source(
            Environment::with_prefix("FORGEMIRROR")
                .separator("_")
                .try_parsing(true),
        );

        // Build the config and deserialize
        match builder.build() {
            Ok(settings) => match settings.try_deserialize::<Config>() {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Failed to deserialize config: {}", e);
                    Config::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to build config: {}", e);
                Config::default()
            }
        }
    }

    /// Get the Gitea host URL, falling back to the hosted instance.
    pub fn gitea_url(&self) -> String {
        self.gitea
            .url
            .clone()
            .unwrap_or_else(|| GITEA_COM_HOST.to_string())
    }

    /// Get the Gitea account whose repositories are mirrored.
    pub fn gitea_user(&self) -> Option<String> {
        self.gitea.user.clone()
    }

    /// Get the Gitea token.
    pub fn gitea_token(&self) -> Option<String> {
        self.gitea.token.clone()
    }

    /// Get the GitHub account.
    pub fn github_user(&self) -> Option<String> {
        self.github.user.clone()
    }

    /// Get the GitHub token.
    pub fn github_token(&self) -> Option<String> {
        self.github.token.clone()
    }
}
