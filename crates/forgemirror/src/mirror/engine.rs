//! The mirror engine: list, reconcile, configure.

use super::progress::{MirrorProgress, ProgressCallback, emit};
use super::reconcile::reconcile_repo;
use super::types::{MirrorOptions, MirrorRunResult, ReconcileOutcome};
use crate::platform::{
    self, MirrorSource, MirrorTarget, PushMirrorSpec, SourceRepo, short_error_message,
};

/// Collect every repository of `account` from the source host.
///
/// Pages until an empty page signals the end of the listing. A page error
/// ends the listing early and the repositories collected so far are
/// returned with the truncation flag set; the run proceeds on the partial
/// set rather than aborting.
pub async fn collect_source_repos(
    source: &dyn MirrorSource,
    account: &str,
    page_size: u32,
    on_progress: Option<&ProgressCallback>,
) -> (Vec<SourceRepo>, bool) {
    emit(
        on_progress,
        MirrorProgress::FetchingRepos {
            account: account.to_string(),
        },
    );

    let mut all_repos = Vec::new();
    let mut page = 1u32;

    loop {
        match source.list_repos_page(account, page, page_size).await {
            Ok(repos) => {
                if repos.is_empty() {
                    break;
                }

                let count = repos.len();
                all_repos.extend(repos);

                emit(
                    on_progress,
                    MirrorProgress::FetchedPage {
                        account: account.to_string(),
                        page,
                        count,
                        total_so_far: all_repos.len(),
                    },
                );

                page += 1;
            }
            Err(e) => {
                let error = short_error_message(&e);
                tracing::warn!(
                    account = %account,
                    page,
                    error = %error,
                    "repository listing failed, continuing with partial results"
                );
                emit(
                    on_progress,
                    MirrorProgress::ListTruncated {
                        account: account.to_string(),
                        page,
                        error,
                    },
                );
                return (all_repos, true);
            }
        }
    }

    (all_repos, false)
}

/// Mirror every repository of `account` from the source host to the
/// destination host.
///
/// Each repository is reconciled independently: a failure on one is
/// counted and logged, never fatal to the run. Push mirrors are configured
/// only for repositories that were created in this run; pre-existing
/// repositories are assumed to already have one.
pub async fn mirror_account(
    source: &dyn MirrorSource,
    target: &dyn MirrorTarget,
    account: &str,
    options: &MirrorOptions,
    on_progress: Option<&ProgressCallback>,
) -> platform::Result<MirrorRunResult> {
    let (repos, list_truncated) =
        collect_source_repos(source, account, options.page_size, on_progress).await;

    let mut result = MirrorRunResult {
        total: repos.len(),
        list_truncated,
        ..Default::default()
    };

    let push_target = target.push_target();

    for repo in &repos {
        let full_name = repo.full_name();
        emit(
            on_progress,
            MirrorProgress::Reconciling {
                repo: full_name.clone(),
            },
        );

        let outcome = match reconcile_repo(target, repo, options.dry_run).await {
            Ok(outcome) => outcome,
            Err(e) => {
                let error = short_error_message(&e);
                tracing::warn!(repo = %full_name, error = %error, "reconciliation failed");
                emit(
                    on_progress,
                    MirrorProgress::RepoFailed {
                        repo: full_name,
                        error,
                    },
                );
                result.failed += 1;
                continue;
            }
        };

        match outcome {
            ReconcileOutcome::Created => {
                result.created += 1;
                tracing::info!(repo = %full_name, "repository created on destination");
                emit(
                    on_progress,
                    MirrorProgress::RepoCreated {
                        repo: full_name.clone(),
                    },
                );

                if !options.dry_run {
                    configure_mirror(
                        source,
                        &push_target,
                        repo,
                        options,
                        &mut result,
                        on_progress,
                    )
                    .await;
                }
            }
            ReconcileOutcome::Updated => {
                result.updated += 1;
                tracing::info!(repo = %full_name, "repository settings updated on destination");
                emit(on_progress, MirrorProgress::RepoUpdated { repo: full_name });
            }
            ReconcileOutcome::SkippedDerived => {
                result.skipped_derived += 1;
                emit(
                    on_progress,
                    MirrorProgress::RepoSkippedDerived { repo: full_name },
                );
            }
            ReconcileOutcome::SkippedProbeFailed { error } => {
                result.skipped_probe_failed += 1;
                emit(
                    on_progress,
                    MirrorProgress::RepoSkippedProbeFailed {
                        repo: full_name,
                        error,
                    },
                );
            }
        }
    }

    emit(
        on_progress,
        MirrorProgress::Complete {
            total: result.total,
        },
    );

    Ok(result)
}

/// Install a push mirror for one newly created repository.
///
/// A failure here is counted and reported but does not fail the run: the
/// destination repository exists and a later run can finish the job.
async fn configure_mirror(
    source: &dyn MirrorSource,
    push_target: &platform::PushTarget,
    repo: &SourceRepo,
    options: &MirrorOptions,
    result: &mut MirrorRunResult,
    on_progress: Option<&ProgressCallback>,
) {
    let remote = push_target.remote_url(&repo.name);
    let spec = PushMirrorSpec {
        remote_address: remote.clone(),
        remote_username: push_target.account.clone(),
        remote_password: push_target.token.clone(),
        interval: options.interval.clone(),
        sync_on_commit: options.sync_on_commit,
    };

    match source
        .configure_push_mirror(&repo.owner, &repo.name, &spec)
        .await
    {
        Ok(()) => {
            result.mirrors_configured += 1;
            tracing::info!(repo = %repo.full_name(), remote = %remote, "push mirror configured");
            emit(
                on_progress,
                MirrorProgress::MirrorConfigured {
                    repo: repo.full_name(),
                    remote,
                },
            );
        }
        Err(e) => {
            result.mirror_failures += 1;
            let error = short_error_message(&e);
            tracing::warn!(
                repo = %repo.full_name(),
                error = %error,
                "push mirror configuration failed"
            );
            emit(
                on_progress,
                MirrorProgress::MirrorFailed {
                    repo: repo.full_name(),
                    error,
                },
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::PlatformError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Source host that serves a fixed sequence of page results.
    struct FakeSource {
        pages: Mutex<Vec<platform::Result<Vec<SourceRepo>>>>,
        requested: Mutex<Vec<u32>>,
    }

    impl FakeSource {
        fn new(pages: Vec<platform::Result<Vec<SourceRepo>>>) -> Self {
            Self {
                pages: Mutex::new(pages),
                requested: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl MirrorSource for FakeSource {
        async fn list_repos_page(
            &self,
            _account: &str,
            page: u32,
            _limit: u32,
        ) -> platform::Result<Vec<SourceRepo>> {
            self.requested.lock().unwrap().push(page);
            let mut pages = self.pages.lock().unwrap();
            if pages.is_empty() {
                Ok(Vec::new())
            } else {
                pages.remove(0)
            }
        }

        async fn configure_push_mirror(
            &self,
            _owner: &str,
            _name: &str,
            _mirror: &PushMirrorSpec,
        ) -> platform::Result<()> {
            Ok(())
        }
    }

    fn repos(count: usize, offset: usize) -> Vec<SourceRepo> {
        (0..count)
            .map(|i| SourceRepo {
                name: format!("repo-{}", offset + i),
                owner: "alice".to_string(),
                private: false,
                description: None,
                has_wiki: true,
                has_projects: true,
                original_url: None,
            })
            .collect()
    }

    #[tokio::test]
    async fn test_collect_pages_until_empty_page() {
        let source = FakeSource::new(vec![
            Ok(repos(20, 0)),
            Ok(repos(20, 20)),
            Ok(repos(7, 40)),
            Ok(Vec::new()),
        ]);

        let (collected, truncated) = collect_source_repos(&source, "alice", 20, None).await;

        assert_eq!(collected.len(), 47);
        assert!(!truncated);
        assert_eq!(*source.requested.lock().unwrap(), vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_collect_partial_page_does_not_stop_listing() {
        // A short page mid-listing must not terminate pagination.
        let source = FakeSource::new(vec![
            Ok(repos(7, 0)),
            Ok(repos(20, 7)),
            Ok(Vec::new()),
        ]);

        let (collected, truncated) = collect_source_repos(&source, "alice", 20, None).await;

        assert_eq!(collected.len(), 27);
        assert!(!truncated);
        assert_eq!(*source.requested.lock().unwrap(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_collect_page_error_truncates_with_partial_results() {
        let source = FakeSource::new(vec![
            Ok(repos(20, 0)),
            Err(PlatformError::network("connection reset")),
        ]);

        let (collected, truncated) = collect_source_repos(&source, "alice", 20, None).await;

        assert_eq!(collected.len(), 20);
        assert!(truncated);
        assert_eq!(*source.requested.lock().unwrap(), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_collect_empty_account() {
        let source = FakeSource::new(vec![Ok(Vec::new())]);

        let (collected, truncated) = collect_source_repos(&source, "alice", 20, None).await;

        assert!(collected.is_empty());
        assert!(!truncated);
        assert_eq!(*source.requested.lock().unwrap(), vec![1]);
    }
}
