//! Host-agnostic types and traits for the mirror pipeline.
//!
//! The mirror engine never talks to a concrete forge directly: it sees the
//! source host through [`MirrorSource`] and the destination host through
//! [`MirrorTarget`]. The Gitea and GitHub clients implement these traits, and
//! tests substitute in-memory fakes.

mod errors;
mod types;

pub use errors::{PlatformError, Result, short_error_message};
pub use types::{
    MirrorSource, MirrorTarget, PushMirrorSpec, PushTarget, RepoPresence, RepoSettings, SourceRepo,
};
