//! Git metadata resolution against a mocked resolver and real temp paths.

use replan::plan::model::Service;
use replan::plan::types::TranslationType;
use replan::repo::MockResolver;
use replan::{gather_git_info, PlanError};
use std::path::Path;

fn service() -> Service {
    Service::new("web", TranslationType::Containerize)
}

#[test]
fn missing_path_is_a_hard_error_and_leaves_repo_info_untouched() {
    let mut svc = service();
    svc.repo_info.target_path = "deploy/web".to_string();

    let resolver = MockResolver::repo("/src/app", "main").with_remote(
        "origin",
        &["https://example.com/app.git"],
    );
    let result = gather_git_info(&mut svc, Path::new("/definitely/not/here"), &resolver);

    assert!(matches!(result, Err(PlanError::PathAccess { .. })));
    assert_eq!(svc.repo_info.target_path, "deploy/web");
    assert!(svc.repo_info.git_repo_url.is_empty());
    assert!(svc.repo_info.git_repo_dir.is_empty());
}

#[test]
fn no_repository_is_a_soft_absence() {
    let dir = tempfile::tempdir().unwrap();
    let mut svc = service();

    let found = gather_git_info(&mut svc, dir.path(), &MockResolver::not_a_repo()).unwrap();

    assert!(!found);
    assert!(svc.repo_info.is_empty());
}

#[test]
fn upstream_wins_over_origin() {
    let dir = tempfile::tempdir().unwrap();
    let mut svc = service();

    let resolver = MockResolver::repo("/src/app", "main")
        .with_remote("origin", &["https://example.com/fork.git"])
        .with_remote("upstream", &["https://example.com/app.git"]);
    let found = gather_git_info(&mut svc, dir.path(), &resolver).unwrap();

    assert!(found);
    assert_eq!(svc.repo_info.git_repo_url, "https://example.com/app.git");
    assert_eq!(svc.repo_info.git_repo_branch, "main");
    assert_eq!(svc.repo_info.git_repo_dir, "/src/app");
}

#[test]
fn falls_back_to_first_remote_when_no_preferred_name_matches() {
    let dir = tempfile::tempdir().unwrap();
    let mut svc = service();

    let resolver = MockResolver::repo("/src/app", "main")
        .with_remote("fork", &["https://example.com/fork.git"])
        .with_remote("mirror", &["https://example.com/mirror.git"]);
    let found = gather_git_info(&mut svc, dir.path(), &resolver).unwrap();

    assert!(found);
    assert_eq!(svc.repo_info.git_repo_url, "https://example.com/fork.git");
}

#[test]
fn repository_without_remotes_still_counts_as_found() {
    let dir = tempfile::tempdir().unwrap();
    let mut svc = service();

    let resolver = MockResolver::repo("/src/app", "feature/login");
    let found = gather_git_info(&mut svc, dir.path(), &resolver).unwrap();

    assert!(found);
    assert!(svc.repo_info.git_repo_url.is_empty());
    assert_eq!(svc.repo_info.git_repo_branch, "feature/login");
    assert_eq!(svc.repo_info.git_repo_dir, "/src/app");
}

#[test]
fn file_path_is_resolved_to_its_parent_directory() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("manifest.yml");
    std::fs::write(&file, "applications: []\n").unwrap();
    let mut svc = service();

    let resolver =
        MockResolver::repo("/src/app", "main").with_remote("origin", &["https://example.com/app.git"]);
    let found = gather_git_info(&mut svc, &file, &resolver).unwrap();

    assert!(found);
    assert_eq!(svc.repo_info.git_repo_url, "https://example.com/app.git");
}

#[test]
fn detached_head_leaves_branch_empty() {
    let dir = tempfile::tempdir().unwrap();
    let mut svc = service();

    let resolver =
        MockResolver::repo("/src/app", "").with_remote("origin", &["https://example.com/app.git"]);
    let found = gather_git_info(&mut svc, dir.path(), &resolver).unwrap();

    assert!(found);
    assert!(svc.repo_info.git_repo_branch.is_empty());
    assert_eq!(svc.repo_info.git_repo_dir, "/src/app");
}
