//! Infrastructure implementation of the `AppConfigStore` port.
//!
//! `JsonConfigStore` keeps `config.json` under the data root and provides
//! async load/save using `tokio::task::spawn_blocking` with atomic write
//! (temp file + rename).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::AppConfigStore;
use crate::domain::AppConfig;

/// Environment variable overriding the data root.
pub const DATA_DIR_ENV: &str = "DOCKYARD_DATA_DIR";

const CONFIG_FILE: &str = "config.json";

pub struct JsonConfigStore {
    root: PathBuf,
}

impl JsonConfigStore {
    /// Create a store rooted at `$DOCKYARD_DATA_DIR`, or `~/.dockyard`.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self> {
        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            if !dir.is_empty() {
                return Ok(Self::with_root(PathBuf::from(dir)));
            }
        }
        let home =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
        Ok(Self::with_root(home.join(".dockyard")))
    }

    /// Create a store with an explicit data root (used in tests).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self { root }
    }

    fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }
}

fn load_sync(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("parsing config file {}", path.display()))
}

fn save_sync(path: &Path, config: &AppConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }
    let content = serde_json::to_string_pretty(config).context("serializing config")?;

    let temp_path = path.with_extension("json.tmp");
    std::fs::write(&temp_path, &content)
        .with_context(|| format!("writing temp file {}", temp_path.display()))?;
    std::fs::rename(&temp_path, path)
        .with_context(|| format!("finalizing config file {}", path.display()))?;
    Ok(())
}

impl AppConfigStore for JsonConfigStore {
    fn data_path(&self, segments: &[&str]) -> PathBuf {
        segments
            .iter()
            .fold(self.root.clone(), |path, segment| path.join(segment))
    }

    async fn load(&self) -> Result<AppConfig> {
        let path = self.config_path();
        tokio::task::spawn_blocking(move || load_sync(&path))
            .await
            .context("config load task panicked")?
    }

    async fn save(&self, config: &AppConfig) -> Result<()> {
        let path = self.config_path();
        let config = config.clone();
        tokio::task::spawn_blocking(move || save_sync(&path, &config))
            .await
            .context("config save task panicked")?
    }
}
