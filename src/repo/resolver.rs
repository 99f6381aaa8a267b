//! Resolver trait definition.

use anyhow::Result;
use std::path::Path;

/// Everything known about the repository enclosing a path, as seen through
/// one chosen remote.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RepoDetails {
    /// URLs of the chosen remote; empty when the remote has none.
    pub remote_urls: Vec<String>,
    /// Current branch; empty when detached or unknown.
    pub branch: String,
    /// Absolute path to the repository root.
    pub repo_dir: String,
}

/// Abstraction over git plumbing for testability.
///
/// Implementations report "no repository here" through the error channel;
/// [`gather_git_info`](super::gather_git_info) downgrades that to a soft
/// absence rather than propagating it.
pub trait RepoMetadataResolver: Send + Sync {
    /// Lists the names of the remotes configured at `path`, in the order git
    /// reports them.
    fn list_remote_names(&self, path: &Path) -> Result<Vec<String>>;

    /// Resolves branch, repository root and the URLs of `remote` at `path`.
    /// A missing remote yields empty URLs, not an error; a missing repository
    /// is an error.
    fn repo_details(&self, path: &Path, remote: &str) -> Result<RepoDetails>;
}
