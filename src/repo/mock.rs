//! In-memory resolver for tests.

use super::resolver::{RepoDetails, RepoMetadataResolver};
use anyhow::{bail, Result};
use std::path::Path;

/// [`RepoMetadataResolver`] with canned answers, for exercising planning
/// logic without a git environment.
#[derive(Debug, Clone, Default)]
pub struct MockResolver {
    remotes: Vec<(String, Vec<String>)>,
    branch: String,
    repo_dir: String,
    is_repo: bool,
}

impl MockResolver {
    /// A resolver that reports "no git repository" for every path.
    pub fn not_a_repo() -> Self {
        MockResolver::default()
    }

    /// A resolver for a repository rooted at `repo_dir` on `branch`, with no
    /// remotes until [`with_remote`](Self::with_remote) adds some.
    pub fn repo(repo_dir: impl Into<String>, branch: impl Into<String>) -> Self {
        MockResolver {
            repo_dir: repo_dir.into(),
            branch: branch.into(),
            is_repo: true,
            ..MockResolver::default()
        }
    }

    pub fn with_remote(mut self, name: impl Into<String>, urls: &[&str]) -> Self {
        self.remotes
            .push((name.into(), urls.iter().map(|u| u.to_string()).collect()));
        self
    }
}

impl RepoMetadataResolver for MockResolver {
    fn list_remote_names(&self, _path: &Path) -> Result<Vec<String>> {
        if !self.is_repo {
            bail!("not a git repository");
        }
        Ok(self.remotes.iter().map(|(name, _)| name.clone()).collect())
    }

    fn repo_details(&self, _path: &Path, remote: &str) -> Result<RepoDetails> {
        if !self.is_repo {
            bail!("not a git repository");
        }
        let remote_urls = self
            .remotes
            .iter()
            .find(|(name, _)| name == remote)
            .map(|(_, urls)| urls.clone())
            .unwrap_or_default();
        Ok(RepoDetails {
            remote_urls,
            branch: self.branch.clone(),
            repo_dir: self.repo_dir.clone(),
        })
    }
}
