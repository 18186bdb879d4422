//! Volume string grammar: `SOURCE:DEST[:OPTIONS]`.
//!
//! SOURCE and DEST never contain `:`. OPTIONS is passed through untouched.

use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::error::ProjectError;

#[allow(clippy::expect_used)] // Pattern is a compile-time constant
static VOLUME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^:]+):([^:]+)(?::([^:]+))?$").expect("valid regex"));

/// A parsed volume mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeSpec {
    pub source: String,
    pub dest: String,
    pub options: Option<String>,
}

impl FromStr for VolumeSpec {
    type Err = ProjectError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let caps = VOLUME_RE
            .captures(raw)
            .ok_or_else(|| ProjectError::MalformedVolume(raw.to_owned()))?;
        Ok(Self {
            source: caps[1].to_owned(),
            dest: caps[2].to_owned(),
            options: caps.get(3).map(|m| m.as_str().to_owned()),
        })
    }
}

impl fmt::Display for VolumeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.source, self.dest)?;
        if let Some(options) = &self.options {
            write!(f, ":{options}")?;
        }
        Ok(())
    }
}

impl VolumeSpec {
    /// Anchor a relative source at `base`. Absolute sources are kept as-is.
    #[must_use]
    pub fn anchored_at(mut self, base: &Path) -> Self {
        if !Path::new(&self.source).is_absolute() {
            let joined = normalize(&base.join(&self.source));
            self.source = joined.to_string_lossy().into_owned();
        }
        self
    }
}

/// Parse `raw` and resolve its source against the project directory.
///
/// # Errors
///
/// Returns `ProjectError::MalformedVolume` if `raw` does not match the grammar.
pub fn resolve_volume(raw: &str, project_dir: &Path) -> Result<String, ProjectError> {
    Ok(raw.parse::<VolumeSpec>()?.anchored_at(project_dir).to_string())
}

/// Resolve every volume of a project, preserving order.
///
/// # Errors
///
/// Fails on the first malformed entry.
pub fn resolve_volumes(raw: &[String], project_dir: &Path) -> Result<Vec<String>, ProjectError> {
    raw.iter()
        .map(|v| resolve_volume(v, project_dir))
        .collect()
}

/// Lexically drop `.` components and fold `..` into their parent.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}
