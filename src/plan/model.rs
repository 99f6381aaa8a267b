//! Plan entity model.
//!
//! A [`Plan`] is the canonical, merged intermediate representation of every
//! deployable service discovered in one source tree, together with the
//! target-output configuration. It serializes to a YAML document with
//! `apiVersion`/`kind`/`metadata`/`spec` sections so a later run can load and
//! re-merge it.
//!
//! No validation lives here: analyzers are responsible for handing a
//! well-formed [`Service`] to [`Plan::add_services`].

use crate::error::PlanError;
use crate::plan::merge::{self, try_merge};
use crate::plan::types::{
    BuildArtifactType, ContainerBuildType, SourceArtifactType, SourceType,
    TargetInfoArtifactType, TranslationType,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// apiVersion written into every plan file.
pub const API_VERSION: &str = "replan.dev/v1alpha1";

/// Kind tag of a plan file.
pub const PLAN_KIND: &str = "Plan";

/// Project name used when the caller has not chosen one.
pub const DEFAULT_PROJECT_NAME: &str = "myproject";

/// Target cluster type used when the caller has not chosen one.
pub const DEFAULT_CLUSTER_TYPE: &str = "Kubernetes";

/// Top-level plan artifact. Created once per planning run, mutated by
/// repeated [`Plan::add_services`] calls, then written to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    #[serde(rename = "apiVersion")]
    pub api_version: String,
    pub kind: String,
    pub metadata: Metadata,
    pub spec: PlanSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanSpec {
    pub inputs: Inputs,
    pub outputs: Outputs,
}

/// Input section of a plan: where the source tree lives and what was found
/// in it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inputs {
    #[serde(rename = "rootDir", default)]
    pub root_dir: String,

    /// Pre-existing Kubernetes manifests found in the tree.
    #[serde(rename = "kubernetesYamls", default, skip_serializing_if = "Vec::is_empty")]
    pub k8s_files: Vec<String>,

    /// Service name to the ordered list of merged candidates under that name.
    /// One name may legitimately map to several entries, e.g. the same app
    /// built two different ways.
    pub services: BTreeMap<String, Vec<Service>>,

    /// Target-cluster metadata artifacts keyed by type.
    #[serde(
        rename = "targetInfoArtifacts",
        default,
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub target_info_artifacts: BTreeMap<TargetInfoArtifactType, Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Outputs {
    pub kubernetes: KubernetesOutput,
}

/// Output configuration for the Kubernetes artifacts a generator will emit.
///
/// Built from defaults at plan creation and progressively overridden by
/// [`KubernetesOutput::merge`] as configuration sources (CLI flags, config
/// files) are applied in priority order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KubernetesOutput {
    #[serde(rename = "registryURL", default, skip_serializing_if = "String::is_empty")]
    pub registry_url: String,

    #[serde(
        rename = "registryNamespace",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub registry_namespace: String,

    #[serde(
        rename = "targetCluster",
        default,
        skip_serializing_if = "TargetClusterType::is_empty"
    )]
    pub target_cluster: TargetClusterType,

    #[serde(rename = "ignoreUnsupportedKinds", default, skip_serializing_if = "is_false")]
    pub ignore_unsupported_kinds: bool,
}

/// Either the name of a target cluster type or a path to a file holding the
/// cluster metadata. Specify one or the other, not both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetClusterType {
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub cluster_type: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub path: String,
}

impl TargetClusterType {
    pub fn is_empty(&self) -> bool {
        self.cluster_type.is_empty() && self.path.is_empty()
    }
}

/// Git metadata for a service, used when wiring up CI/CD pipelines.
///
/// Populated at most once per service. All fields empty is valid and means
/// no git repository was detected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepoInfo {
    #[serde(rename = "gitRepoDir", default, skip_serializing_if = "String::is_empty")]
    pub git_repo_dir: String,

    #[serde(rename = "gitRepoURL", default, skip_serializing_if = "String::is_empty")]
    pub git_repo_url: String,

    #[serde(rename = "gitRepoBranch", default, skip_serializing_if = "String::is_empty")]
    pub git_repo_branch: String,

    #[serde(rename = "targetPath", default, skip_serializing_if = "String::is_empty")]
    pub target_path: String,
}

impl RepoInfo {
    pub fn is_empty(&self) -> bool {
        *self == RepoInfo::default()
    }
}

/// One analyzer's proposal for how a piece of the source tree maps to a
/// deployable unit.
///
/// Within one service, the source type list, the target option list and the
/// path list under each artifact key are duplicate-free with order equal to
/// discovery order. [`Plan::add_services`] keeps those invariants when
/// folding overlapping candidates together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Service {
    #[serde(rename = "serviceName")]
    pub service_name: String,

    #[serde(rename = "serviceRelPath", default, skip_serializing_if = "String::is_empty")]
    pub service_rel_path: String,

    pub image: String,

    #[serde(rename = "translationType", default)]
    pub translation_type: Option<TranslationType>,

    #[serde(rename = "containerBuildType", default)]
    pub container_build_type: Option<ContainerBuildType>,

    #[serde(rename = "sourceType", default)]
    pub source_types: Vec<SourceType>,

    #[serde(rename = "targetOptions", default, skip_serializing_if = "Vec::is_empty")]
    pub containerization_target_options: Vec<String>,

    #[serde(rename = "sourceArtifacts", default)]
    pub source_artifacts: BTreeMap<SourceArtifactType, Vec<String>>,

    #[serde(
        rename = "buildArtifacts",
        default,
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub build_artifacts: BTreeMap<BuildArtifactType, Vec<String>>,

    #[serde(rename = "updateContainerBuildPipeline", default)]
    pub update_container_build_pipeline: bool,

    #[serde(rename = "updateDeployPipeline", default)]
    pub update_deploy_pipeline: bool,

    #[serde(rename = "repoInfo", default, skip_serializing_if = "RepoInfo::is_empty")]
    pub repo_info: RepoInfo,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Service {
    /// Creates a service candidate with the default relative path, image name
    /// and `Reuse` build strategy, and empty source/target/artifact sets.
    pub fn new(service_name: impl Into<String>, translation_type: TranslationType) -> Self {
        let service_name = service_name.into();
        Service {
            service_rel_path: format!("/{}", service_name),
            image: format!("{}:latest", service_name),
            translation_type: Some(translation_type),
            container_build_type: Some(ContainerBuildType::Reuse),
            service_name,
            ..Service::default()
        }
    }

    /// Records a source artifact path, ignoring it if that path is already
    /// present under the same artifact type.
    pub fn add_source_artifact(&mut self, kind: SourceArtifactType, path: impl Into<String>) {
        merge::union_into(
            self.source_artifacts.entry(kind).or_default(),
            &[path.into()],
        );
    }

    /// Records a build artifact path, ignoring duplicates per artifact type.
    pub fn add_build_artifact(&mut self, kind: BuildArtifactType, path: impl Into<String>) {
        merge::union_into(self.build_artifacts.entry(kind).or_default(), &[path.into()]);
    }

    /// Records a source type, preserving discovery order and ignoring
    /// duplicates.
    pub fn add_source_type(&mut self, source_type: SourceType) {
        merge::union_into(&mut self.source_types, &[source_type]);
    }

    /// Records a containerization target option, ignoring duplicates.
    pub fn add_target_option(&mut self, option: impl Into<String>) {
        merge::union_into(&mut self.containerization_target_options, &[option.into()]);
    }
}

impl KubernetesOutput {
    /// Folds a higher-priority output configuration into this one, field by
    /// field.
    ///
    /// Empty strings in `new_output` mean "no opinion, keep existing". The
    /// boolean has no such sentinel, so the last writer wins. A zero-value
    /// `new_output` is a no-op, including for the boolean.
    pub fn merge(&mut self, new_output: KubernetesOutput) {
        if new_output == KubernetesOutput::default() {
            return;
        }
        if !new_output.registry_url.is_empty() {
            self.registry_url = new_output.registry_url;
        }
        if !new_output.registry_namespace.is_empty() {
            self.registry_namespace = new_output.registry_namespace;
        }
        self.ignore_unsupported_kinds = new_output.ignore_unsupported_kinds;
        if !new_output.target_cluster.cluster_type.is_empty() {
            self.target_cluster = new_output.target_cluster;
        }
    }
}

impl Plan {
    /// Creates an empty plan with the default project name and target
    /// cluster type.
    pub fn new() -> Self {
        Plan {
            api_version: API_VERSION.to_string(),
            kind: PLAN_KIND.to_string(),
            metadata: Metadata {
                name: DEFAULT_PROJECT_NAME.to_string(),
            },
            spec: PlanSpec {
                inputs: Inputs::default(),
                outputs: Outputs {
                    kubernetes: KubernetesOutput {
                        target_cluster: TargetClusterType {
                            cluster_type: DEFAULT_CLUSTER_TYPE.to_string(),
                            path: String::new(),
                        },
                        ignore_unsupported_kinds: false,
                        ..KubernetesOutput::default()
                    },
                },
            },
        }
    }

    /// Inserts newly discovered service candidates into the plan.
    ///
    /// Each candidate is offered to every existing entry under the same
    /// service name via [`try_merge`]. By construction at most one existing
    /// entry is identity-equal to the candidate; should a caller violate that
    /// and several match, the candidate is folded into all of them and the
    /// outcome still counts as merged. A candidate matching no entry is
    /// appended as a new one.
    pub fn add_services(&mut self, services: Vec<Service>) {
        for service in services {
            let entries = self
                .spec
                .inputs
                .services
                .entry(service.service_name.clone())
                .or_insert_with(|| {
                    debug!(service = %service.service_name, "added new service to plan");
                    Vec::new()
                });
            let mut merged = false;
            for existing in entries.iter_mut() {
                if let Some(combined) = try_merge(existing, &service) {
                    *existing = combined;
                    merged = true;
                }
            }
            if !merged {
                entries.push(service);
            }
        }
    }

    /// Serializes the plan to its YAML document form.
    pub fn to_yaml(&self) -> Result<String, PlanError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Loads a plan from its YAML document form.
    pub fn from_yaml(document: &str) -> Result<Plan, PlanError> {
        Ok(serde_yaml::from_str(document)?)
    }
}

impl Default for Plan {
    fn default() -> Self {
        Plan::new()
    }
}
