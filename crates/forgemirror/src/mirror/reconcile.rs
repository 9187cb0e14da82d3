//! Per-repository reconciliation against the destination host.

use super::types::ReconcileOutcome;
use crate::platform::{
    self, MirrorTarget, RepoPresence, RepoSettings, SourceRepo, short_error_message,
};

/// Reconcile one source repository against the destination host.
///
/// Derived repositories (those carrying a non-empty upstream marker) are
/// skipped outright. Otherwise the destination is probed: a missing
/// repository is created, an existing one has its settings updated. When
/// the probe itself fails, existence is unknown and the repository is
/// skipped rather than risking a create on top of live state.
///
/// With `dry_run` set, the probe still runs but no writes are issued; the
/// returned outcome reports what would have happened.
pub async fn reconcile_repo(
    target: &dyn MirrorTarget,
    repo: &SourceRepo,
    dry_run: bool,
) -> platform::Result<ReconcileOutcome> {
    if repo.is_derived() {
        tracing::debug!(
            repo = %repo.full_name(),
            original_url = %repo.original_url.as_deref().unwrap_or_default(),
            "skipping derived repository"
        );
        return Ok(ReconcileOutcome::SkippedDerived);
    }

    let settings = RepoSettings::from_source(repo);

    match target.probe_repo(target.account(), &repo.name).await {
        RepoPresence::Exists => {
            if !dry_run {
                target
                    .update_repo(target.account(), &repo.name, &settings)
                    .await?;
            }
            Ok(ReconcileOutcome::Updated)
        }
        RepoPresence::Missing => {
            if !dry_run {
                target.create_repo(&settings).await?;
            }
            Ok(ReconcileOutcome::Created)
        }
        RepoPresence::CheckFailed(e) => {
            tracing::warn!(
                repo = %repo.full_name(),
                error = %short_error_message(&e),
                "existence probe failed, skipping"
            );
            Ok(ReconcileOutcome::SkippedProbeFailed {
                error: short_error_message(&e),
            })
        }
    }
}
