//! Container and image value types plus the pure parts of reconciliation.

use std::collections::BTreeMap;
use std::path::PathBuf;

use dockyard_common::Project;

use crate::domain::error::ProjectError;
use crate::domain::volume::resolve_volumes;

/// Status reported by the engine for an existing container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerStatus {
    Created,
    Running,
    Exited,
    /// Any other engine status (`paused`, `restarting`, `dead`, ...).
    Other(String),
}

impl ContainerStatus {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "created" => Self::Created,
            "running" => Self::Running,
            "exited" => Self::Exited,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Only freshly created or exited containers may be started.
    #[must_use]
    pub fn is_startable(&self) -> bool {
        matches!(self, Self::Created | Self::Exited)
    }
}

/// Handle to a container that exists in the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerRef {
    pub id: String,
    pub name: String,
}

/// Everything the engine needs to create a project container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerSpec {
    pub name: String,
    pub image: String,
    pub env: BTreeMap<String, String>,
    pub ports: Vec<String>,
    /// Resolved `source:dest[:options]` strings.
    pub volumes: Vec<String>,
    /// `ip:hostname` entries.
    pub extra_hosts: Vec<String>,
}

/// Parameters for building a project image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildSpec {
    pub tag: String,
    pub build_args: BTreeMap<String, String>,
    pub context: PathBuf,
    /// Dockerfile relative to `context`; the engine default when `None`.
    pub dockerfile: Option<String>,
}

impl BuildSpec {
    #[must_use]
    pub fn for_project(project: &Project, tag: &str) -> Self {
        Self {
            tag: tag.to_owned(),
            build_args: project.build_args.clone(),
            context: project.path.clone(),
            dockerfile: project.dockerfile.clone(),
        }
    }
}

/// Overlay project env on top of the global env; project keys win.
#[must_use]
pub fn merge_env(
    global: &BTreeMap<String, String>,
    project: &BTreeMap<String, String>,
) -> BTreeMap<String, String> {
    let mut merged = global.clone();
    merged.extend(project.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged
}

/// Convert a hostname → ip map into engine `ip:hostname` entries.
#[must_use]
pub fn extra_host_entries(hosts: &BTreeMap<String, String>) -> Vec<String> {
    hosts
        .iter()
        .map(|(hostname, ip)| format!("{ip}:{hostname}"))
        .collect()
}

impl ContainerSpec {
    /// Assemble the create spec for `project`.
    ///
    /// # Errors
    ///
    /// Returns `ProjectError::Validation` when the project has no image and
    /// `ProjectError::MalformedVolume` for a bad volume string.
    pub fn for_project(
        project: &Project,
        global_env: &BTreeMap<String, String>,
    ) -> Result<Self, ProjectError> {
        let image = project
            .image_name
            .clone()
            .filter(|i| !i.is_empty())
            .ok_or_else(|| {
                ProjectError::Validation(format!("project '{}' has no image", project.name))
            })?;
        Ok(Self {
            name: project.container_name(),
            image,
            env: merge_env(global_env, &project.env),
            ports: project.ports.clone(),
            volumes: resolve_volumes(&project.volumes, &project.path)?,
            extra_hosts: extra_host_entries(&project.extra_hosts),
        })
    }
}
