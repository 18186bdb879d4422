//! Project persistence: the global index plus one record file per project.
//!
//! Layout under the data root:
//! - `config.json` holds the index (`id`, `name`, `path`)
//! - `projects/<id>/config.json` holds the record, without `path`

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::ports::{AppConfigStore, LocalFs};
use crate::domain::{Project, ProjectError};

const PROJECTS_DIR: &str = "projects";
const RECORD_FILE: &str = "config.json";

/// Owns all reads and writes of project records and their index entries.
pub struct ProjectStore<C, F> {
    config: C,
    fs: F,
}

impl<C: AppConfigStore, F: LocalFs> ProjectStore<C, F> {
    pub fn new(config: C, fs: F) -> Self {
        Self { config, fs }
    }

    /// The global configuration store backing the index.
    pub fn config(&self) -> &C {
        &self.config
    }

    /// Directory holding the record for `id`.
    pub fn project_dir(&self, id: &str) -> PathBuf {
        self.config.data_path(&[PROJECTS_DIR, id])
    }

    /// Persist `project`, fully overwriting its record and index entry.
    ///
    /// Defaults `id` to `name` when unset.
    ///
    /// # Errors
    ///
    /// Returns `ProjectError::Validation` when name or path is missing, or
    /// an I/O error from the filesystem or config store.
    pub async fn save(&self, project: &mut Project) -> Result<()> {
        validate(project)?;
        if project.id.is_empty() {
            project.id.clone_from(&project.name);
        }
        validate_id(&project.id)?;

        let dir = self.project_dir(&project.id);
        if !self.fs.exists(&dir) {
            self.fs.create_dir_all(&dir)?;
        }

        let record = serde_json::to_string_pretty(project).context("serializing project record")?;
        self.fs.write(&dir.join(RECORD_FILE), record)?;

        let mut config = self.config.load().await?;
        config.add_project(&project.id, &project.name, project.path.clone());
        self.config.save(&config).await?;

        tracing::info!(id = %project.id, path = %project.path.display(), "project saved");
        Ok(())
    }

    /// Read the record for `id`, or `None` if it has never been written.
    ///
    /// The returned project has an empty `path`; callers overlay it from
    /// the index.
    ///
    /// # Errors
    ///
    /// Returns an error if the record exists but cannot be read or parsed.
    pub async fn load_record(&self, id: &str) -> Result<Option<Project>> {
        let path = self.project_dir(id).join(RECORD_FILE);
        if !self.fs.exists(&path) {
            return Ok(None);
        }
        let content = self.fs.read_to_string(&path)?;
        let project = serde_json::from_str(&content)
            .with_context(|| format!("parsing project record {}", path.display()))?;
        Ok(Some(project))
    }
}

fn validate(project: &Project) -> Result<(), ProjectError> {
    if project.name.trim().is_empty() {
        return Err(ProjectError::Validation("project should have a name".into()));
    }
    if project.path.as_os_str().is_empty() {
        return Err(ProjectError::Validation("project should have a path".into()));
    }
    if !project.path.is_absolute() {
        return Err(ProjectError::Validation(format!(
            "project path must be absolute: {}",
            project.path.display()
        )));
    }
    Ok(())
}

/// The id becomes a directory name, so it must be a single path segment.
fn validate_id(id: &str) -> Result<(), ProjectError> {
    if id == "." || id == ".." || id.contains(['/', '\\']) {
        return Err(ProjectError::Validation(format!("invalid project id '{id}'")));
    }
    Ok(())
}
