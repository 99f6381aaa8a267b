//! Plan aggregation engine for replatforming source repositories to Kubernetes.
//!
//! Independent source analyzers (Cloud Foundry manifests, Compose files, plain
//! source directories, existing Kubernetes/Knative manifests) each propose
//! [`Service`] candidates for the same source tree. This crate folds those
//! possibly-overlapping candidates into one canonical [`Plan`]: a declarative,
//! YAML-serializable intermediate representation that downstream generators
//! consume to emit containerization and deployment artifacts.
//!
//! The crate deliberately stays small: the entity model, the deterministic
//! service merge engine, plan assembly, and best-effort git metadata
//! resolution. Analyzers and artifact generators live elsewhere and talk to
//! this crate through plain `Service` values.
//!
//! # Quick start
//!
//! ```
//! use replan::plan::model::{Plan, Service};
//! use replan::plan::types::{SourceArtifactType, SourceType, TranslationType};
//!
//! let mut plan = Plan::new();
//!
//! let mut svc = Service::new("nodejs", TranslationType::Containerize);
//! svc.add_source_type(SourceType::Directory);
//! svc.add_source_artifact(SourceArtifactType::SourceCode, ".");
//!
//! plan.add_services(vec![svc]);
//! let yaml = plan.to_yaml().unwrap();
//! assert!(yaml.contains("nodejs"));
//! ```

pub mod error;
pub mod plan;
pub mod repo;

pub use error::PlanError;
pub use plan::merge::{same_identity, try_merge};
pub use plan::model::{Plan, Service};
pub use repo::{gather_git_info, GitCli, MockResolver, RepoDetails, RepoMetadataResolver};
