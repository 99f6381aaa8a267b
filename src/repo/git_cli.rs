//! Resolver backed by the `git` command line tool.

use super::resolver::{RepoDetails, RepoMetadataResolver};
use anyhow::{bail, Context, Result};
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Default [`RepoMetadataResolver`] that shells out to `git`.
///
/// Planning is sequential, so the invocations are plain blocking
/// `std::process::Command` calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitCli;

impl GitCli {
    pub fn new() -> Self {
        GitCli
    }

    fn run(&self, dir: &Path, args: &[&str]) -> Result<String> {
        debug!(dir = %dir.display(), args = ?args, "running git");
        let output = Command::new("git")
            .args(args)
            .current_dir(dir)
            .output()
            .context("failed to spawn git")?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("git {} failed: {}", args.join(" "), stderr.trim());
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl RepoMetadataResolver for GitCli {
    fn list_remote_names(&self, path: &Path) -> Result<Vec<String>> {
        let stdout = self.run(path, &["remote"])?;
        Ok(stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    fn repo_details(&self, path: &Path, remote: &str) -> Result<RepoDetails> {
        // These two fail when there is no repository at all, which is the
        // caller's signal to treat the path as untracked.
        let repo_dir = self.run(path, &["rev-parse", "--show-toplevel"])?;
        let branch = match self.run(path, &["rev-parse", "--abbrev-ref", "HEAD"])? {
            // Detached head reports the literal string HEAD.
            head if head == "HEAD" => String::new(),
            branch => branch,
        };

        // A missing remote is a soft absence: the repository exists, it just
        // has no URLs to report.
        let url_key = format!("remote.{}.url", remote);
        let remote_urls = match self.run(path, &["config", "--get-all", &url_key]) {
            Ok(stdout) => stdout
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
            Err(err) => {
                debug!(remote, error = %err, "no URLs configured for remote");
                Vec::new()
            }
        };

        Ok(RepoDetails {
            remote_urls,
            branch,
            repo_dir,
        })
    }
}
