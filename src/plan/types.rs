//! Closed vocabularies used throughout the plan.
//!
//! Every component references these enums rather than loose strings, so the
//! variant sets stay exhaustive and centrally defined. The serialized names
//! are the wire vocabulary of the plan file format and must not drift.

use serde::{Deserialize, Serialize};
use std::fmt;

/// High-level source platform category driving which transformation strategy
/// applies to a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TranslationType {
    /// Source is a docker compose file.
    DockerCompose,
    /// Source is a Cloud Foundry manifest.
    CloudFoundry,
    /// Source is of an unknown platform and gets containerized from scratch.
    Containerize,
    /// Source is already Kubernetes.
    Kubernetes,
    /// Source carries its own Dockerfile.
    Dockerfile,
}

/// What kind of source a candidate service was discovered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SourceType {
    DockerCompose,
    Directory,
    CfManifest,
    Dockerfile,
    Knative,
    Kubernetes,
}

/// Mechanism chosen to produce a container image for a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ContainerBuildType {
    /// Generate a fresh Dockerfile.
    NewDockerfile,
    /// Reuse a Dockerfile found in the source tree.
    ReuseDockerfile,
    /// Reuse an existing container image.
    Reuse,
    /// Cloud Native Buildpack.
    #[serde(rename = "CNB")]
    Cnb,
    /// The image is assumed to be created manually.
    Manual,
    /// Source-to-Image.
    #[serde(rename = "S2I")]
    S2i,
}

/// What kind of file a recorded source artifact path refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SourceArtifactType {
    Kubernetes,
    Knative,
    DockerCompose,
    ImageInfo,
    CfManifest,
    CfRunningManifest,
    SourceCode,
    Dockerfile,
}

/// What kind of file a recorded build artifact path refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BuildArtifactType {
    SourceCode,
}

/// What kind of target-cluster metadata a recorded artifact path refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TargetInfoArtifactType {
    KubernetesCluster,
}

impl TranslationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TranslationType::DockerCompose => "DockerCompose",
            TranslationType::CloudFoundry => "CloudFoundry",
            TranslationType::Containerize => "Containerize",
            TranslationType::Kubernetes => "Kubernetes",
            TranslationType::Dockerfile => "Dockerfile",
        }
    }
}

impl SourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::DockerCompose => "DockerCompose",
            SourceType::Directory => "Directory",
            SourceType::CfManifest => "CfManifest",
            SourceType::Dockerfile => "Dockerfile",
            SourceType::Knative => "Knative",
            SourceType::Kubernetes => "Kubernetes",
        }
    }
}

impl ContainerBuildType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerBuildType::NewDockerfile => "NewDockerfile",
            ContainerBuildType::ReuseDockerfile => "ReuseDockerfile",
            ContainerBuildType::Reuse => "Reuse",
            ContainerBuildType::Cnb => "CNB",
            ContainerBuildType::Manual => "Manual",
            ContainerBuildType::S2i => "S2I",
        }
    }
}

impl SourceArtifactType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceArtifactType::Kubernetes => "Kubernetes",
            SourceArtifactType::Knative => "Knative",
            SourceArtifactType::DockerCompose => "DockerCompose",
            SourceArtifactType::ImageInfo => "ImageInfo",
            SourceArtifactType::CfManifest => "CfManifest",
            SourceArtifactType::CfRunningManifest => "CfRunningManifest",
            SourceArtifactType::SourceCode => "SourceCode",
            SourceArtifactType::Dockerfile => "Dockerfile",
        }
    }
}

impl BuildArtifactType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildArtifactType::SourceCode => "SourceCode",
        }
    }
}

impl TargetInfoArtifactType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetInfoArtifactType::KubernetesCluster => "KubernetesCluster",
        }
    }
}

macro_rules! impl_display_via_as_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

impl_display_via_as_str!(
    TranslationType,
    SourceType,
    ContainerBuildType,
    SourceArtifactType,
    BuildArtifactType,
    TargetInfoArtifactType,
);
