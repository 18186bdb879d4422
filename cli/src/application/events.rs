//! Lifecycle event bus.
//!
//! Subscribers are kept per event variant in registration order. `emit`
//! awaits each subscriber in turn; the first failure stops the fan-out and
//! is returned to the caller as-is.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::{LifecycleEvent, Project};

/// A subscriber notified at lifecycle transitions.
#[async_trait]
pub trait LifecycleHook: Send + Sync {
    async fn on_event(&self, event: LifecycleEvent, project: &Project) -> Result<()>;
}

/// Ordered subscriber registry keyed by event variant.
#[derive(Default)]
pub struct EventBus {
    listeners: HashMap<LifecycleEvent, Vec<Arc<dyn LifecycleHook>>>,
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `hook` for a single event.
    pub fn subscribe(&mut self, event: LifecycleEvent, hook: Arc<dyn LifecycleHook>) {
        self.listeners.entry(event).or_default().push(hook);
    }

    /// Register `hook` for every event variant.
    pub fn subscribe_all(&mut self, hook: &Arc<dyn LifecycleHook>) {
        for event in LifecycleEvent::ALL {
            self.subscribe(event, Arc::clone(hook));
        }
    }

    #[must_use]
    pub fn listener_count(&self, event: LifecycleEvent) -> usize {
        self.listeners.get(&event).map_or(0, Vec::len)
    }

    /// Notify every subscriber of `event`, in registration order.
    ///
    /// # Errors
    ///
    /// Returns the first subscriber error unchanged.
    pub async fn emit(&self, event: LifecycleEvent, project: &Project) -> Result<()> {
        tracing::debug!(%event, project = %project.name, "emitting lifecycle event");
        let Some(hooks) = self.listeners.get(&event) else {
            return Ok(());
        };
        for hook in hooks {
            hook.on_event(event, project).await?;
        }
        Ok(())
    }
}
