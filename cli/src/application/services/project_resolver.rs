//! Project lookup against the index.
//!
//! The index answers "which ids exist and where do they live"; every other
//! field comes from the hydrated record.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::application::ports::{AppConfigStore, LocalFs};
use crate::application::services::project_store::ProjectStore;
use crate::domain::{AppConfig, Project, ProjectError};

/// Optional criteria for [`ProjectResolver::search`]. Unset fields match all.
#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
    pub id: Option<String>,
    pub name: Option<String>,
    pub path: Option<PathBuf>,
}

impl SearchFilter {
    #[must_use]
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn by_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }
}

pub struct ProjectResolver<'a, C, F> {
    store: &'a ProjectStore<C, F>,
}

impl<'a, C: AppConfigStore, F: LocalFs> ProjectResolver<'a, C, F> {
    pub fn new(store: &'a ProjectStore<C, F>) -> Self {
        Self { store }
    }

    /// The project rooted at `current_path`.
    ///
    /// # Errors
    ///
    /// Returns `ProjectError::NotFound` if no project lives there.
    pub async fn get(&self, current_path: &Path) -> Result<Project> {
        self.search_one(&SearchFilter::by_path(current_path))
            .await?
            .ok_or_else(|| {
                ProjectError::NotFound(format!("no project at {}", current_path.display())).into()
            })
    }

    /// The project with index id `id`.
    ///
    /// # Errors
    ///
    /// Returns `ProjectError::NotFound` if the index entry or the record is
    /// missing.
    pub async fn get_by_id(&self, id: &str) -> Result<Project> {
        let config = self.store.config().load().await?;
        self.hydrate(&config, id).await
    }

    /// Every indexed project matching `filter`, in index order.
    ///
    /// The name criterion is checked against the hydrated record because the
    /// index copy of the name can be stale.
    ///
    /// # Errors
    ///
    /// Returns an error if the index cannot be loaded or a candidate record
    /// cannot be hydrated.
    pub async fn search(&self, filter: &SearchFilter) -> Result<Vec<Project>> {
        let config = self.store.config().load().await?;
        let mut found = Vec::new();
        for entry in &config.projects {
            if filter.id.as_deref().is_some_and(|id| id != entry.id) {
                continue;
            }
            if filter.path.as_deref().is_some_and(|p| p != entry.path) {
                continue;
            }
            let project = self.hydrate(&config, &entry.id).await?;
            if filter.name.as_deref().is_some_and(|n| n != project.name) {
                continue;
            }
            found.push(project);
        }
        Ok(found)
    }

    /// First match of [`search`](Self::search), or `None`.
    ///
    /// # Errors
    ///
    /// Same as `search`.
    pub async fn search_one(&self, filter: &SearchFilter) -> Result<Option<Project>> {
        Ok(self.search(filter).await?.into_iter().next())
    }

    /// Host directory of the project named `name`.
    ///
    /// # Errors
    ///
    /// Returns `ProjectError::NotFound` if no project has that name.
    pub async fn path_of(&self, name: &str) -> Result<PathBuf> {
        Ok(self.by_name(name).await?.path)
    }

    /// The project named `name`.
    ///
    /// # Errors
    ///
    /// Returns `ProjectError::NotFound` if no project has that name.
    pub async fn by_name(&self, name: &str) -> Result<Project> {
        self.search_one(&SearchFilter::by_name(name))
            .await?
            .ok_or_else(|| ProjectError::NotFound(format!("no project named '{name}'")).into())
    }

    async fn hydrate(&self, config: &AppConfig, id: &str) -> Result<Project> {
        let entry = config
            .find_project(id)
            .ok_or_else(|| ProjectError::NotFound(format!("no project with id '{id}'")))?;
        let mut project = self
            .store
            .load_record(id)
            .await?
            .ok_or_else(|| ProjectError::NotFound(format!("record missing for project '{id}'")))?;
        project.id.clone_from(&entry.id);
        project.path.clone_from(&entry.path);
        Ok(project)
    }
}
