//! Built-in lifecycle subscribers.

use anyhow::Result;
use async_trait::async_trait;

use crate::application::events::LifecycleHook;
use crate::domain::{LifecycleEvent, Project};

/// Records every lifecycle event in the trace log.
pub struct TracingHook;

#[async_trait]
impl LifecycleHook for TracingHook {
    async fn on_event(&self, event: LifecycleEvent, project: &Project) -> Result<()> {
        tracing::info!(
            %event,
            project = %project.name,
            container = %project.container_name(),
            image = project.image_name.as_deref().unwrap_or("-"),
            "lifecycle event"
        );
        Ok(())
    }
}
