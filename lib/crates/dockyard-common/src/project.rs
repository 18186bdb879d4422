use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Suffix appended to a project name to form its container name.
pub const CONTAINER_SUFFIX: &str = ".workspace";

/// How the project's image is obtained.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    /// Runs a prebuilt image named by `imageName`.
    #[default]
    Generic,
    /// Builds a local image from the project's Dockerfile.
    Dockerfile,
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic => f.write_str("generic"),
            Self::Dockerfile => f.write_str("dockerfile"),
        }
    }
}

impl FromStr for ProjectType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "generic" => Ok(Self::Generic),
            "dockerfile" => Ok(Self::Dockerfile),
            other => Err(format!("unknown project type '{other}' (expected generic or dockerfile)")),
        }
    }
}

/// A project record as stored in `projects/<id>/config.json`.
///
/// `path` is never serialized: the index owns it and it is overlaid after
/// the record is read back.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(skip)]
    pub path: PathBuf,
    #[serde(rename = "type", default)]
    pub kind: ProjectType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_name: Option<String>,
    /// Dockerfile path relative to the project directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dockerfile: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub build_args: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,
    /// `host:container` port mappings, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<String>,
    /// Raw `source:dest[:options]` volume strings, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<String>,
    /// hostname → ip
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra_hosts: BTreeMap<String, String>,
}

impl Project {
    /// Create a generic project with the given name and host directory.
    #[must_use]
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            ..Self::default()
        }
    }

    /// Container name derived from the project name.
    #[must_use]
    pub fn container_name(&self) -> String {
        format!("{}{CONTAINER_SUFFIX}", self.name)
    }

    /// Tag used for images built from the project's Dockerfile.
    #[must_use]
    pub fn dev_image_tag(&self) -> String {
        format!("project-{}:develop", self.name)
    }
}
