//! Application context: unified state passed to every command handler.
//!
//! `AppContext` builds the production adapters once at startup and lends
//! them to command handlers by reference.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::application::events::{EventBus, LifecycleHook};
use crate::application::services::{ContainerReconciler, ProjectResolver, ProjectStore};
use crate::domain::Project;
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::config::JsonConfigStore;
use crate::infra::docker::DockerCli;
use crate::infra::fs::LocalFs;
use crate::infra::hooks::TracingHook;
use crate::output::{OutputContext, TerminalReporter};

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
}

/// Project store backed by the real filesystem.
pub type FsProjectStore = ProjectStore<JsonConfigStore, LocalFs>;

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Project records and index.
    pub store: FsProjectStore,
    /// Docker engine gateway.
    pub docker: DockerCli<TokioCommandRunner>,
    /// Lifecycle subscribers.
    pub events: EventBus,
    /// Directory the command was invoked from.
    pub cwd: PathBuf,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the data root or working directory cannot be
    /// determined.
    pub fn new(flags: &AppFlags) -> Result<Self> {
        let mut events = EventBus::new();
        let tracing_hook: Arc<dyn LifecycleHook> = Arc::new(TracingHook);
        events.subscribe_all(&tracing_hook);

        Ok(Self {
            output: OutputContext::new(flags.no_color, flags.quiet),
            store: ProjectStore::new(JsonConfigStore::new()?, LocalFs),
            docker: DockerCli::default_runner(),
            events,
            cwd: current_dir()?,
        })
    }

    #[must_use]
    pub fn resolver(&self) -> ProjectResolver<'_, JsonConfigStore, LocalFs> {
        ProjectResolver::new(&self.store)
    }

    /// The project named `name`, or the one rooted at the working directory.
    ///
    /// # Errors
    ///
    /// Returns `ProjectError::NotFound` when no project matches.
    pub async fn resolve_project(&self, name: Option<&str>) -> Result<Project> {
        let resolver = self.resolver();
        match name {
            Some(name) => resolver.by_name(name).await,
            None => resolver.get(&self.cwd).await,
        }
    }

    #[must_use]
    pub fn terminal_reporter(&self) -> TerminalReporter<'_> {
        TerminalReporter::new(&self.output)
    }

    #[must_use]
    pub fn reconciler<'a>(
        &'a self,
        reporter: &'a TerminalReporter<'a>,
    ) -> ContainerReconciler<'a, DockerCli<TokioCommandRunner>, JsonConfigStore, TerminalReporter<'a>>
    {
        ContainerReconciler::new(&self.docker, self.store.config(), &self.events, reporter)
    }
}

/// Working directory with symlinks resolved, matching how `init` records
/// project paths.
///
/// # Errors
///
/// Returns an error if the working directory is unavailable.
pub fn current_dir() -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    Ok(std::fs::canonicalize(&cwd).unwrap_or(cwd))
}
