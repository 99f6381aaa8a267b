//! Best-effort git metadata resolution for discovered services.
//!
//! Planning wants to know where a service's source came from (remote URL,
//! branch, repo root) so CI/CD pipelines can be wired up later. Absence of a
//! git repository is never an error; only an unreadable source path is.
//!
//! The git plumbing sits behind [`RepoMetadataResolver`] so the merge and
//! assembly core can be tested without a real git environment.

mod git_cli;
mod mock;
mod resolver;

pub use git_cli::GitCli;
pub use mock::MockResolver;
pub use resolver::{RepoDetails, RepoMetadataResolver};

use crate::error::PlanError;
use crate::plan::model::{RepoInfo, Service};
use std::path::Path;
use tracing::{debug, warn};

/// Remote names tried in order before falling back to the first remote the
/// repository lists.
const PREFERRED_REMOTES: [&str; 2] = ["upstream", "origin"];

fn preferred_remote(names: &[String]) -> &str {
    for candidate in PREFERRED_REMOTES {
        if names.iter().any(|name| name == candidate) {
            return candidate;
        }
    }
    names
        .first()
        .map(String::as_str)
        .unwrap_or(PREFERRED_REMOTES[0])
}

/// Tries to find the git repository enclosing `path` and record its metadata
/// on `service`.
///
/// A file path is resolved to its parent directory first. Returns `Ok(true)`
/// when a repository was found, `Ok(false)` when there is none (the service's
/// [`RepoInfo`] is left untouched), and [`PlanError::PathAccess`] when the
/// path itself cannot be read. On success the branch may still be empty
/// (detached head) and the URL may be empty (chosen remote has no URLs).
pub fn gather_git_info(
    service: &mut Service,
    path: &Path,
    resolver: &dyn RepoMetadataResolver,
) -> Result<bool, PlanError> {
    let metadata = std::fs::metadata(path).map_err(|source| {
        warn!(path = %path.display(), error = %source, "failed to stat service path");
        PlanError::PathAccess {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let dir = if metadata.is_dir() {
        path
    } else {
        let parent = path.parent().unwrap_or(path);
        debug!(path = %path.display(), parent = %parent.display(), "path is a file, using its parent");
        parent
    };

    let remote_names = match resolver.list_remote_names(dir) {
        Ok(names) => names,
        Err(err) => {
            debug!(path = %dir.display(), error = %err, "no git remotes found");
            Vec::new()
        }
    };
    let remote = preferred_remote(&remote_names);

    let details = match resolver.repo_details(dir, remote) {
        Ok(details) => details,
        Err(err) => {
            debug!(path = %dir.display(), error = %err, "no git repository found");
            return Ok(false);
        }
    };

    let mut repo_info = RepoInfo {
        git_repo_dir: details.repo_dir,
        git_repo_branch: details.branch,
        // Populated by a later pipeline stage, preserved across resolution.
        target_path: service.repo_info.target_path.clone(),
        ..RepoInfo::default()
    };
    match details.remote_urls.first() {
        Some(url) => repo_info.git_repo_url = url.clone(),
        None => debug!(path = %dir.display(), "git repository has no remotes set"),
    }
    service.repo_info = repo_info;
    Ok(true)
}
