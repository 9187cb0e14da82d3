//! Progress reporting for mirror runs.
//!
//! Two modes, selected by TTY detection:
//! - Interactive mode (TTY): one console line per event
//! - Logging mode (non-TTY): structured logging using tracing

use console::{Term, style};
use forgemirror::mirror::{MirrorProgress, ProgressCallback};

/// Progress reporter that handles both interactive and logging modes.
pub enum ProgressReporter {
    /// Console lines for TTY.
    Interactive(Term),
    /// Structured logging for non-TTY (CI, pipes).
    Logging,
}

impl ProgressReporter {
    /// Create a new progress reporter, auto-detecting TTY mode.
    pub fn new() -> Self {
        let term = Term::stdout();
        if term.is_term() {
            Self::Interactive(term)
        } else {
            Self::Logging
        }
    }

    /// Handle a progress event.
    pub fn handle(&self, event: MirrorProgress) {
        match self {
            Self::Interactive(term) => Self::print(term, event),
            Self::Logging => Self::log(event),
        }
    }

    /// Convert to a ProgressCallback for the library.
    pub fn into_callback(self) -> ProgressCallback {
        Box::new(move |event| self.handle(event))
    }

    fn print(term: &Term, event: MirrorProgress) {
        let line = match event {
            MirrorProgress::FetchingRepos { account } => {
                format!("Listing repositories of {account}...")
            }
            MirrorProgress::FetchedPage {
                page,
                count,
                total_so_far,
                ..
            } => format!("  page {page}: {count} repos ({total_so_far} total)"),
            MirrorProgress::ListTruncated { page, error, .. } => format!(
                "  {} page {page} failed ({error}), continuing with partial list",
                style("warning:").yellow()
            ),
            MirrorProgress::Reconciling { .. } => return,
            MirrorProgress::RepoCreated { repo } => {
                format!("{} {repo}", style("created").green())
            }
            MirrorProgress::RepoUpdated { repo } => {
                format!("{} {repo}", style("updated").cyan())
            }
            MirrorProgress::RepoSkippedDerived { repo } => {
                format!("{} {repo} (derived from another upstream)", style("skipped").dim())
            }
            MirrorProgress::RepoSkippedProbeFailed { repo, error } => {
                format!("{} {repo} (probe failed: {error})", style("skipped").yellow())
            }
            MirrorProgress::RepoFailed { repo, error } => {
                format!("{} {repo}: {error}", style("failed").red())
            }
            MirrorProgress::MirrorConfigured { repo, remote } => {
                format!("{} {repo} -> {remote}", style("mirror").green())
            }
            MirrorProgress::MirrorFailed { repo, error } => {
                format!("{} push mirror for {repo}: {error}", style("failed").red())
            }
            MirrorProgress::Complete { .. } => return,
        };
        let _ = term.write_line(&line);
    }

    fn log(event: MirrorProgress) {
        match event {
            MirrorProgress::FetchingRepos { account } => {
                tracing::info!(account = %account, "listing repositories");
            }
            MirrorProgress::FetchedPage {
                account,
                page,
                count,
                total_so_far,
            } => {
                tracing::info!(account = %account, page, count, total = total_so_far, "page fetched");
            }
            MirrorProgress::ListTruncated {
                account,
                page,
                error,
            } => {
                tracing::warn!(account = %account, page, error = %error, "listing truncated");
            }
            MirrorProgress::Reconciling { repo } => {
                tracing::debug!(repo = %repo, "reconciling");
            }
            MirrorProgress::RepoCreated { repo } => {
                tracing::info!(repo = %repo, "created");
            }
            MirrorProgress::RepoUpdated { repo } => {
                tracing::info!(repo = %repo, "updated");
            }
            MirrorProgress::RepoSkippedDerived { repo } => {
                tracing::info!(repo = %repo, "skipped derived repository");
            }
            MirrorProgress::RepoSkippedProbeFailed { repo, error } => {
                tracing::warn!(repo = %repo, error = %error, "skipped, probe failed");
            }
            MirrorProgress::RepoFailed { repo, error } => {
                tracing::warn!(repo = %repo, error = %error, "reconciliation failed");
            }
            MirrorProgress::MirrorConfigured { repo, remote } => {
                tracing::info!(repo = %repo, remote = %remote, "push mirror configured");
            }
            MirrorProgress::MirrorFailed { repo, error } => {
                tracing::warn!(repo = %repo, error = %error, "push mirror configuration failed");
            }
            MirrorProgress::Complete { total } => {
                tracing::info!(total, "run complete");
            }
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}
