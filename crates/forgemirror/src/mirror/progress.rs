//! Progress events emitted during a mirror run.

/// Progress events for mirror operations.
///
/// Callers register a [`ProgressCallback`] to receive these; the engine
/// never prints anything itself.
#[derive(Debug, Clone)]
pub enum MirrorProgress {
    /// Listing the source account's repositories has started.
    FetchingRepos { account: String },
    /// One page of repositories was fetched.
    FetchedPage {
        account: String,
        page: u32,
        count: usize,
        total_so_far: usize,
    },
    /// A page fetch failed; the listing stops here and the run continues
    /// with the repositories collected so far.
    ListTruncated {
        account: String,
        page: u32,
        error: String,
    },
    /// Reconciling a repository against the destination host.
    Reconciling { repo: String },
    /// The repository was created on the destination host.
    RepoCreated { repo: String },
    /// The repository's destination settings were updated.
    RepoUpdated { repo: String },
    /// Skipped: the repository is derived from another upstream.
    RepoSkippedDerived { repo: String },
    /// Skipped: the existence probe failed.
    RepoSkippedProbeFailed { repo: String, error: String },
    /// Create or update failed for this repository.
    RepoFailed { repo: String, error: String },
    /// A push mirror was configured on the source host.
    MirrorConfigured { repo: String, remote: String },
    /// Configuring the push mirror failed.
    MirrorFailed { repo: String, error: String },
    /// The run finished.
    Complete { total: usize },
}

/// Callback invoked with progress events.
pub type ProgressCallback = Box<dyn Fn(MirrorProgress) + Send + Sync>;

/// Emit a progress event if a callback is registered.
#[inline]
pub fn emit(on_progress: Option<&ProgressCallback>, event: MirrorProgress) {
    if let Some(cb) = on_progress {
        cb(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_emit_with_callback() {
        static COUNT: AtomicUsize = AtomicUsize::new(0);
        let cb: ProgressCallback = Box::new(|_| {
            COUNT.fetch_add(1, Ordering::Relaxed);
        });

        emit(
            Some(&cb),
            MirrorProgress::Reconciling {
                repo: "alice/foo".to_string(),
            },
        );
        assert_eq!(COUNT.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_emit_without_callback_is_noop() {
        emit(None, MirrorProgress::Complete { total: 3 });
    }

    #[test]
    fn test_events_carry_repo_names() {
        let seen: Mutex<Vec<String>> = Mutex::new(Vec::new());
        let events = vec![
            MirrorProgress::RepoCreated {
                repo: "alice/foo".to_string(),
            },
            MirrorProgress::RepoUpdated {
                repo: "alice/bar".to_string(),
            },
        ];

        for event in events {
            match event {
                MirrorProgress::RepoCreated { repo } | MirrorProgress::RepoUpdated { repo } => {
                    seen.lock().unwrap().push(repo);
                }
                _ => {}
            }
        }

        assert_eq!(
            *seen.lock().unwrap(),
            vec!["alice/foo".to_string(), "alice/bar".to_string()]
        );
    }
}
