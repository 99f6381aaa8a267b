//! The plan data model and the service merge engine.

pub mod merge;
pub mod model;
pub mod types;

pub use merge::{same_identity, try_merge};
pub use model::{
    Inputs, KubernetesOutput, Metadata, Outputs, Plan, PlanSpec, RepoInfo, Service,
    TargetClusterType,
};
pub use types::{
    BuildArtifactType, ContainerBuildType, SourceArtifactType, SourceType,
    TargetInfoArtifactType, TranslationType,
};
