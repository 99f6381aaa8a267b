//! Error types for plan construction.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the planning core.
///
/// The merge engine itself is total over well-formed inputs and has no error
/// channel; failures here come from the edges (filesystem access during git
/// metadata resolution, plan serialization).
#[derive(Debug, Error)]
pub enum PlanError {
    /// The path handed in for git metadata resolution does not exist or is
    /// not readable. This is a caller misconfiguration, not a soft absence.
    #[error("cannot access path {path}")]
    PathAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Plan (de)serialization failed.
    #[error("plan serialization failed: {0}")]
    Serialization(#[from] serde_yaml::Error),
}
