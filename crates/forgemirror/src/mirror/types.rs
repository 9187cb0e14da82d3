//! Types for the mirror engine.

/// Page size used when listing source repositories.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Push-mirror sync interval, in the Go duration syntax Gitea expects.
/// Offset from the full hour so scheduled pushes don't pile up on the
/// hour boundary.
pub const DEFAULT_MIRROR_INTERVAL: &str = "1h01m0s";

/// Options for a mirror run.
#[derive(Debug, Clone)]
pub struct MirrorOptions {
    /// Page size for listing source repositories.
    pub page_size: u32,
    /// Push-mirror sync interval in Go duration syntax.
    pub interval: String,
    /// Also push on every commit, not just on the interval.
    pub sync_on_commit: bool,
    /// Probe and report, but never write to either host.
    pub dry_run: bool,
}

impl Default for MirrorOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            interval: DEFAULT_MIRROR_INTERVAL.to_string(),
            sync_on_commit: true,
            dry_run: false,
        }
    }
}

/// Outcome of reconciling a single source repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// The repository was created on the destination host.
    Created,
    /// The repository already existed; its settings were updated.
    Updated,
    /// Skipped: the repository is itself derived from another upstream.
    SkippedDerived,
    /// Skipped: the existence probe failed, so neither create nor update
    /// was safe to attempt.
    SkippedProbeFailed {
        /// Short message from the failed probe.
        error: String,
    },
}

/// Aggregate counts from a mirror run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MirrorRunResult {
    /// Source repositories seen.
    pub total: usize,
    /// Repositories created on the destination host.
    pub created: usize,
    /// Repositories whose destination settings were updated.
    pub updated: usize,
    /// Repositories skipped because they are derived from another upstream.
    pub skipped_derived: usize,
    /// Repositories skipped because the existence probe failed.
    pub skipped_probe_failed: usize,
    /// Repositories where create/update itself failed.
    pub failed: usize,
    /// Push mirrors successfully configured on the source host.
    pub mirrors_configured: usize,
    /// Push-mirror configurations that failed.
    pub mirror_failures: usize,
    /// True when the source listing ended early on a page error, so
    /// `total` undercounts the account.
    pub list_truncated: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = MirrorOptions::default();
        assert_eq!(options.page_size, 20);
        assert_eq!(options.interval, "1h01m0s");
        assert!(options.sync_on_commit);
        assert!(!options.dry_run);
    }

    #[test]
    fn test_run_result_starts_empty() {
        let result = MirrorRunResult::default();
        assert_eq!(result.total, 0);
        assert_eq!(result.created, 0);
        assert!(!result.list_truncated);
    }
}
