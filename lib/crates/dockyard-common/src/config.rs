use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Lightweight index entry kept in the global `config.json`.
///
/// `name` is a cached copy and may lag behind the full record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IndexEntry {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(alias = "src")]
    pub path: PathBuf,
}

/// Global configuration stored at `<dataDir>/config.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Environment applied to every project container.
    pub env: BTreeMap<String, String>,
    /// Project index.
    pub projects: Vec<IndexEntry>,
    /// Write diagnostics to `ws.log` and show full error chains.
    pub debug: bool,
}

impl AppConfig {
    /// Insert or replace the index entry for `id`.
    ///
    /// A directory holds at most one project, so entries with other ids at
    /// the same path are dropped.
    pub fn add_project(&mut self, id: &str, name: &str, path: impl Into<PathBuf>) {
        let entry = IndexEntry {
            id: id.to_owned(),
            name: name.to_owned(),
            path: path.into(),
        };
        self.projects
            .retain(|p| p.id == entry.id || p.path != entry.path);
        match self.projects.iter_mut().find(|p| p.id == id) {
            Some(existing) => *existing = entry,
            None => self.projects.push(entry),
        }
    }

    #[must_use]
    pub fn find_project(&self, id: &str) -> Option<&IndexEntry> {
        self.projects.iter().find(|p| p.id == id)
    }
}
