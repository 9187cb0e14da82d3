//! Forgemirror CLI - mirror Gitea repositories to GitHub.

mod commands;
mod config;
mod progress;

use std::io::Write;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use console::Term;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "forgemirror")]
#[command(version)]
#[command(about = "Mirror repositories from a Gitea instance to GitHub")]
#[command(
    long_about = "Forgemirror lists every repository of a Gitea account, creates or updates \
the matching repository under a GitHub account, and configures a Gitea push \
mirror for each repository it creates, so future commits replicate \
automatically."
)]
#[command(after_long_help = r#"EXAMPLES
    Mirror all repositories of the configured Gitea account:
        $ forgemirror sync

    Mirror from a specific Gitea instance:
        $ forgemirror sync --gitea-url https://git.example.com

    Dry run to see what would happen:
        $ forgemirror sync --dry-run

    Generate shell completions:
        $ forgemirror completions bash > ~/.local/share/bash-completion/completions/forgemirror

CONFIGURATION
    Forgemirror reads configuration from:
      1. ~/.config/forgemirror/config.toml (or $XDG_CONFIG_HOME/forgemirror/config.toml)
      2. ./forgemirror.toml
      3. Environment variables (FORGEMIRROR_* prefix)
      4. .env file in current directory

ENVIRONMENT VARIABLES
    FORGEMIRROR_GITEA_URL       Gitea host URL (default: https://gitea.com)
    FORGEMIRROR_GITEA_USER      Gitea account to mirror (required)
    FORGEMIRROR_GITEA_TOKEN     Gitea personal access token (required)
    FORGEMIRROR_GITHUB_USER     GitHub account to mirror into (required)
    FORGEMIRROR_GITHUB_TOKEN    GitHub personal access token (required)
"#)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mirror all repositories of the Gitea account to GitHub
    Sync {
        /// Gitea host URL (default: https://gitea.com, or from config/env)
        #[arg(short = 'H', long)]
        gitea_url: Option<String>,

        /// Push-mirror sync interval in Go duration syntax (e.g., "1h01m0s")
        #[arg(short = 'i', long)]
        interval: Option<String>,

        /// Dry run - show what would be done without making changes
        #[arg(short = 'n', long)]
        dry_run: bool,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
    /// Generate man page(s)
    Man {
        /// Output directory for man pages (prints to stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Initialize tracing for non-TTY mode (structured logging)
    // Only initialize if not connected to a TTY
    if !Term::stdout().is_term() {
        let env_filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => EnvFilter::new("forgemirror=info,forgemirror_cli=info"),
        };

        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .init();
    }

    // Load configuration (config file -> env vars -> defaults)
    let config = config::Config::load();

    let cli = Cli::parse();

    match cli.command {
        Commands::Sync {
            gitea_url,
            interval,
            dry_run,
        } => {
            commands::sync::handle_sync(&config, gitea_url, interval, dry_run).await?;
        }
        Commands::Completions { shell } => {
            std::io::stdout().write_all(&render_completions(shell))?;
        }
        Commands::Man { output } => match output {
            Some(dir) => {
                std::fs::create_dir_all(&dir)?;
                clap_mangen::generate_to(Cli::command(), &dir)?;
                println!("Generated man pages in: {}", dir.display());
            }
            None => std::io::stdout().write_all(&render_man_page()?)?,
        },
    }

    Ok(())
}

/// Completion script for one shell, for the `completions` subcommand.
fn render_completions(shell: clap_complete::Shell) -> Vec<u8> {
    let mut out = Vec::new();
    clap_complete::generate(shell, &mut Cli::command(), "forgemirror", &mut out);
    out
}

/// The top-level man page as roff, for `man` without an output directory.
fn render_man_page() -> std::io::Result<Vec<u8>> {
    let mut out = Vec::new();
    clap_mangen::Man::new(Cli::command()).render(&mut out)?;
    Ok(out)
}
