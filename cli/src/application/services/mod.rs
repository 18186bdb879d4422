//! Application services: use-case orchestration.
//!
//! Each service composes domain logic with port trait calls. Services import
//! only from `crate::domain` and `crate::application`, never from
//! `crate::infra`, `crate::commands`, or `crate::output`.

pub mod project_resolver;
pub mod project_store;
pub mod reconciler;

pub use project_resolver::{ProjectResolver, SearchFilter};
pub use project_store::ProjectStore;
pub use reconciler::{ContainerReconciler, StartOptions, StartOutcome};
