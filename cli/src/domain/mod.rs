//! Domain layer: pure types and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::process`.
//! All functions are synchronous and take data in, returning data out.

pub mod container;
pub mod error;
pub mod event;
pub mod volume;

pub use container::{
    BuildSpec, ContainerRef, ContainerSpec, ContainerStatus, extra_host_entries, merge_env,
};
pub use dockyard_common::{AppConfig, IndexEntry, Project, ProjectType};
pub use error::{EngineError, ProjectError};
pub use event::LifecycleEvent;
pub use volume::{VolumeSpec, resolve_volume, resolve_volumes};
