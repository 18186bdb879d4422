//! Container reconciliation for start / restart / rebuild / stop.
//!
//! Each call recomputes the container name from the project, asks the
//! engine what exists, and issues only the operations still missing. A call
//! interrupted at any step can be re-run and resumes from the engine state.

use anyhow::Result;

use crate::application::events::EventBus;
use crate::application::ports::{AppConfigStore, DockerGateway, ProgressReporter};
use crate::domain::{
    BuildSpec, ContainerSpec, ContainerStatus, LifecycleEvent, Project, ProjectType,
};

/// Requested start variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StartOptions {
    /// Remove any existing container first.
    pub restart: bool,
    /// Remove the container and image, then rebuild.
    pub rebuild: bool,
}

/// What `start` ended up doing to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartOutcome {
    /// A container was created during this call.
    Created,
    /// An existing created/exited container was started.
    Started,
    /// The container was already running.
    AlreadyRunning,
    /// The container is in a state that is not started automatically.
    Untouched(ContainerStatus),
}

pub struct ContainerReconciler<'a, D, C, R> {
    docker: &'a D,
    config: &'a C,
    events: &'a EventBus,
    reporter: &'a R,
}

impl<'a, D, C, R> ContainerReconciler<'a, D, C, R>
where
    D: DockerGateway,
    C: AppConfigStore,
    R: ProgressReporter,
{
    pub fn new(docker: &'a D, config: &'a C, events: &'a EventBus, reporter: &'a R) -> Self {
        Self {
            docker,
            config,
            events,
            reporter,
        }
    }

    /// Bring the project container to the running state.
    ///
    /// `project.image_name` is updated in memory for Dockerfile projects but
    /// not persisted.
    ///
    /// # Errors
    ///
    /// The first failing collaborator aborts the call unchanged. Nothing
    /// is rolled back.
    pub async fn start(&self, project: &mut Project, opts: StartOptions) -> Result<StartOutcome> {
        let name = project.container_name();
        let mut existing = self.docker.get_container(&name).await?;

        if existing.is_some() && (opts.restart || opts.rebuild) {
            self.reporter.step(&format!("removing container {name}..."));
            self.events.emit(LifecycleEvent::Stop, project).await?;
            self.docker.remove_container(&name).await?;
            existing = None;
        }

        let created = match existing {
            Some(container) => {
                tracing::debug!(container = %container.name, id = %container.id, "container exists");
                false
            }
            None => {
                self.create(project, opts.rebuild).await?;
                true
            }
        };

        let status = self.docker.inspect_container(&name).await?;
        let outcome = if status.is_startable() {
            self.reporter.step(&format!("starting container {name}..."));
            self.docker.start_container(&name).await?;
            if created {
                StartOutcome::Created
            } else {
                StartOutcome::Started
            }
        } else if created {
            StartOutcome::Created
        } else if status == ContainerStatus::Running {
            StartOutcome::AlreadyRunning
        } else {
            self.reporter
                .warn(&format!("container {name} is {status:?}, leaving it as is"));
            StartOutcome::Untouched(status)
        };

        self.events.emit(LifecycleEvent::Start, project).await?;
        tracing::info!(project = %project.name, ?outcome, "project started");
        Ok(outcome)
    }

    /// Remove the project container if it exists.
    ///
    /// Returns `true` when a container was removed.
    ///
    /// # Errors
    ///
    /// Returns subscriber or engine errors unchanged.
    pub async fn stop(&self, project: &Project) -> Result<bool> {
        let name = project.container_name();
        if self.docker.get_container(&name).await?.is_none() {
            tracing::debug!(container = %name, "no container to stop");
            return Ok(false);
        }
        self.events.emit(LifecycleEvent::Stop, project).await?;
        self.reporter.step(&format!("removing container {name}..."));
        self.docker.remove_container(&name).await?;
        tracing::info!(project = %project.name, "project stopped");
        Ok(true)
    }

    /// Bring an absent container into existence.
    async fn create(&self, project: &mut Project, rebuild: bool) -> Result<()> {
        if project.kind == ProjectType::Dockerfile {
            self.ensure_image(project, rebuild).await?;
        }
        if rebuild {
            self.events.emit(LifecycleEvent::Rebuild, project).await?;
        }
        self.events.emit(LifecycleEvent::BeforeStart, project).await?;

        let config = self.config.load().await?;
        let spec = ContainerSpec::for_project(project, &config.env)?;
        self.reporter
            .step(&format!("creating container {} from {}...", spec.name, spec.image));
        let container = self.docker.create_container(&spec).await?;
        tracing::debug!(container = %container.name, id = %container.id, "container created");
        Ok(())
    }

    /// Build the project image unless one with the develop tag exists.
    async fn ensure_image(&self, project: &mut Project, rebuild: bool) -> Result<()> {
        let tag = project.dev_image_tag();
        project.image_name = Some(tag.clone());

        if rebuild {
            self.docker.image_rm(&tag).await?;
        }
        if self.docker.image_ls(&tag).await?.is_empty() {
            self.reporter.step(&format!("building image {tag}..."));
            self.docker
                .build_image(&BuildSpec::for_project(project, &tag))
                .await?;
            self.reporter.success(&format!("image {tag} built"));
        } else {
            tracing::debug!(%tag, "image exists, skipping build");
        }
        Ok(())
    }
}
