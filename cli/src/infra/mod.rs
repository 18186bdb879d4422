//! Infrastructure layer: concrete implementations of application port traits.
//!
//! All process execution and file I/O lives here.
//!
//! Imports from `crate::domain` and `crate::application` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod command_runner;
pub mod config;
pub mod docker;
pub mod fs;
pub mod hooks;
