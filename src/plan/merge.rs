//! Service merge engine.
//!
//! Folds a candidate [`Service`] into an existing one when the two describe
//! the same logical service, unioning every set-valued field without losing
//! either side's findings. The merge is a pure, total computation: it never
//! fails, and merging the same candidate twice produces the same result as
//! merging it once.

use crate::plan::model::Service;
use crate::plan::types::BuildArtifactType;

/// Appends every item of `src` not already present in `dest`, keeping
/// `dest`'s original order. This is the ordered-set union all duplicate-free
/// plan lists are built from.
pub(crate) fn union_into<T: PartialEq + Clone>(dest: &mut Vec<T>, src: &[T]) {
    for item in src {
        if !dest.contains(item) {
            dest.push(item.clone());
        }
    }
}

/// Whether two candidates describe the same logical service.
///
/// Name, image, translation type and container build type must all be equal.
/// When both sides additionally declare a source-directory build artifact,
/// the first declared path must match too; otherwise they are the same app
/// built from two different checkouts and must coexist as separate entries.
pub fn same_identity(a: &Service, b: &Service) -> bool {
    if a.service_name != b.service_name
        || a.image != b.image
        || a.translation_type != b.translation_type
        || a.container_build_type != b.container_build_type
    {
        return false;
    }
    let a_source = a
        .build_artifacts
        .get(&BuildArtifactType::SourceCode)
        .and_then(|paths| paths.first());
    let b_source = b
        .build_artifacts
        .get(&BuildArtifactType::SourceCode)
        .and_then(|paths| paths.first());
    match (a_source, b_source) {
        (Some(a_path), Some(b_path)) => a_path == b_path,
        _ => true,
    }
}

/// Attempts to fold `candidate` into `existing`.
///
/// Returns `None` without any effect when the identity rule fails. Otherwise
/// returns the merged service: pipeline flags are OR'd, and source types,
/// target options and per-key artifact path lists are unioned with
/// existing-then-new-unique order. The caller writes the result back into the
/// owning collection.
pub fn try_merge(existing: &Service, candidate: &Service) -> Option<Service> {
    if !same_identity(existing, candidate) {
        return None;
    }
    let mut merged = existing.clone();
    merged.update_container_build_pipeline |= candidate.update_container_build_pipeline;
    merged.update_deploy_pipeline |= candidate.update_deploy_pipeline;
    union_into(&mut merged.source_types, &candidate.source_types);
    union_into(
        &mut merged.containerization_target_options,
        &candidate.containerization_target_options,
    );
    for (kind, paths) in &candidate.source_artifacts {
        union_into(merged.source_artifacts.entry(*kind).or_default(), paths);
    }
    for (kind, paths) in &candidate.build_artifacts {
        union_into(merged.build_artifacts.entry(*kind).or_default(), paths);
    }
    Some(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::types::{
        ContainerBuildType, SourceArtifactType, SourceType, TranslationType,
    };

    fn nodejs() -> Service {
        let mut svc = Service::new("nodejs", TranslationType::Containerize);
        svc.container_build_type = Some(ContainerBuildType::NewDockerfile);
        svc.add_source_type(SourceType::Directory);
        svc.add_source_artifact(SourceArtifactType::SourceCode, ".");
        svc
    }

    #[test]
    fn test_union_into_keeps_order_and_dedupes() {
        let mut dest = vec!["a".to_string(), "b".to_string()];
        union_into(&mut dest, &["b".to_string(), "c".to_string()]);
        assert_eq!(dest, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_same_identity_requires_all_four_fields() {
        let base = nodejs();

        let mut other = nodejs();
        other.image = "nodejs:12".to_string();
        assert!(!same_identity(&base, &other));

        let mut other = nodejs();
        other.translation_type = Some(TranslationType::DockerCompose);
        assert!(!same_identity(&base, &other));

        let mut other = nodejs();
        other.container_build_type = Some(ContainerBuildType::S2i);
        assert!(!same_identity(&base, &other));

        let mut other = nodejs();
        other.service_name = "python".to_string();
        assert!(!same_identity(&base, &other));

        assert!(same_identity(&base, &nodejs()));
    }

    #[test]
    fn test_same_identity_checks_first_source_directory() {
        let mut a = nodejs();
        a.add_build_artifact(BuildArtifactType::SourceCode, "src/frontend");

        let mut b = nodejs();
        b.add_build_artifact(BuildArtifactType::SourceCode, "src/backend");
        assert!(!same_identity(&a, &b));

        // Only one side declaring a source directory is not a conflict.
        let c = nodejs();
        assert!(same_identity(&a, &c));
        assert!(same_identity(&c, &b));
    }

    #[test]
    fn test_try_merge_rejects_different_identity() {
        let existing = nodejs();
        let mut candidate = nodejs();
        candidate.container_build_type = Some(ContainerBuildType::S2i);
        assert!(try_merge(&existing, &candidate).is_none());
    }

    #[test]
    fn test_try_merge_ors_pipeline_flags() {
        let mut existing = nodejs();
        existing.update_container_build_pipeline = true;

        let mut candidate = nodejs();
        candidate.update_deploy_pipeline = true;

        let merged = try_merge(&existing, &candidate).unwrap();
        assert!(merged.update_container_build_pipeline);
        assert!(merged.update_deploy_pipeline);
    }

    #[test]
    fn test_try_merge_unions_source_types_in_encounter_order() {
        let existing = nodejs();
        let mut candidate = nodejs();
        candidate.add_source_type(SourceType::Dockerfile);

        let merged = try_merge(&existing, &candidate).unwrap();
        assert_eq!(
            merged.source_types,
            vec![SourceType::Directory, SourceType::Dockerfile]
        );
    }

    #[test]
    fn test_try_merge_unions_artifact_paths_per_key() {
        let mut existing = nodejs();
        existing.add_source_artifact(SourceArtifactType::SourceCode, "a");
        existing.add_source_artifact(SourceArtifactType::SourceCode, "b");

        let mut candidate = nodejs();
        candidate.add_source_artifact(SourceArtifactType::SourceCode, "b");
        candidate.add_source_artifact(SourceArtifactType::SourceCode, "c");
        candidate.add_source_artifact(SourceArtifactType::Dockerfile, "Dockerfile");

        let merged = try_merge(&existing, &candidate).unwrap();
        assert_eq!(
            merged.source_artifacts[&SourceArtifactType::SourceCode],
            vec![".", "a", "b", "c"]
        );
        assert_eq!(
            merged.source_artifacts[&SourceArtifactType::Dockerfile],
            vec!["Dockerfile"]
        );
    }

    #[test]
    fn test_try_merge_is_idempotent() {
        let existing = nodejs();
        let mut candidate = nodejs();
        candidate.add_source_type(SourceType::Dockerfile);
        candidate.add_target_option("ubi");

        let once = try_merge(&existing, &candidate).unwrap();
        let twice = try_merge(&once, &candidate).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_try_merge_keeps_existing_repo_info() {
        let mut existing = nodejs();
        existing.repo_info.git_repo_url = "https://example.com/app.git".to_string();

        let candidate = nodejs();
        let merged = try_merge(&existing, &candidate).unwrap();
        assert_eq!(merged.repo_info.git_repo_url, "https://example.com/app.git");
    }
}
