//! Lifecycle events emitted around container transitions.

use std::fmt;

/// Closed set of lifecycle events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    /// After any image build, before the container is created.
    BeforeStart,
    /// End of every successful start.
    Start,
    /// Before a container is removed.
    Stop,
    /// A rebuild was requested.
    Rebuild,
}

impl LifecycleEvent {
    pub const ALL: [Self; 4] = [Self::BeforeStart, Self::Start, Self::Stop, Self::Rebuild];

    /// Wire name used in logs and by external subscribers.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BeforeStart => "project:beforeStart",
            Self::Start => "project:start",
            Self::Stop => "project:stop",
            Self::Rebuild => "project:rebuild",
        }
    }
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
