pub mod config;
pub mod project;

pub use config::{AppConfig, IndexEntry};
pub use project::{CONTAINER_SUFFIX, Project, ProjectType};
