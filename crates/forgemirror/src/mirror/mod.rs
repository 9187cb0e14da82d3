//! The mirror engine.
//!
//! Lists every repository of the source account, reconciles each one
//! against the destination host (create if missing, update if present,
//! skip if derived or unknowable), and configures a push mirror on the
//! source host for each repository created in this run.
//!
//! # Module Structure
//!
//! - [`types`] - Options, outcomes, and run results
//! - [`progress`] - Progress events and callbacks
//! - [`reconcile`] - Per-repository reconciliation
//! - [`engine`] - Listing and the run loop
//!
//! ```ignore
//! use forgemirror::mirror::{MirrorOptions, mirror_account};
//!
//! let result = mirror_account(&source, &target, "alice", &MirrorOptions::default(), None).await?;
//! println!(
//!     "created {}, updated {}, skipped {}",
//!     result.created,
//!     result.updated,
//!     result.skipped_derived + result.skipped_probe_failed
//! );
//! ```

mod engine;
mod progress;
mod reconcile;
mod types;

pub use types::{
    DEFAULT_MIRROR_INTERVAL, DEFAULT_PAGE_SIZE, MirrorOptions, MirrorRunResult, ReconcileOutcome,
};

pub use progress::{MirrorProgress, ProgressCallback, emit};

pub use reconcile::reconcile_repo;

pub use engine::{collect_source_repos, mirror_account};
