//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::{Path, PathBuf};
use std::process::Output;

use anyhow::Result;

use crate::domain::{AppConfig, BuildSpec, ContainerRef, ContainerSpec, ContainerStatus};

// ── Docker Gateway Port ───────────────────────────────────────────────────────

/// Docker engine operations needed by the reconciler.
///
/// Every failure reported by the engine surfaces as an error carrying
/// `EngineError`; lookups that find nothing return `None` instead.
#[allow(async_fn_in_trait)]
pub trait DockerGateway {
    /// Look up a container by name.
    async fn get_container(&self, name: &str) -> Result<Option<ContainerRef>>;
    /// Create (but do not start) a container.
    async fn create_container(&self, spec: &ContainerSpec) -> Result<ContainerRef>;
    /// Report the engine status of an existing container.
    async fn inspect_container(&self, name: &str) -> Result<ContainerStatus>;
    /// Start an existing container.
    async fn start_container(&self, name: &str) -> Result<()>;
    /// Force-remove a container.
    async fn remove_container(&self, name: &str) -> Result<()>;
    /// List image ids carrying `tag`.
    async fn image_ls(&self, tag: &str) -> Result<Vec<String>>;
    /// Remove the image tagged `tag`. A missing image is not an error.
    async fn image_rm(&self, tag: &str) -> Result<()>;
    /// Build an image from a local context.
    async fn build_image(&self, spec: &BuildSpec) -> Result<()>;
}

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program and capture its output.
    ///
    /// Implementations should delegate to `run_with_timeout` using the
    /// instance's configured default timeout.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;
    /// Run a program with a custom timeout override.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds `timeout`.
    /// On timeout, the child process must be killed (not left orphaned).
    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: std::time::Duration,
    ) -> Result<Output>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait, no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}

// ── Config and Filesystem Ports ───────────────────────────────────────────────

/// Global configuration persistence and data-root layout.
#[allow(async_fn_in_trait)]
pub trait AppConfigStore {
    /// Absolute path under the data root built from `segments`.
    fn data_path(&self, segments: &[&str]) -> PathBuf;
    /// Load `config.json`, or the default config when it does not exist.
    async fn load(&self) -> Result<AppConfig>;
    /// Persist `config.json`.
    async fn save(&self, config: &AppConfig) -> Result<()>;
}

/// Raw filesystem operations used by the project store.
pub trait LocalFs {
    fn exists(&self, path: &Path) -> bool;
    fn create_dir_all(&self, path: &Path) -> Result<()>;
    fn write(&self, path: &Path, content: String) -> Result<()>;
    fn read_to_string(&self, path: &Path) -> Result<String>;
}
