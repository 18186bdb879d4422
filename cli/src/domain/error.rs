//! Typed domain error enums.
//!
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator. Callers that need to branch on the kind use
//! `anyhow::Error::downcast_ref`.

use thiserror::Error;

// ── Project errors ────────────────────────────────────────────────────────────

/// Errors raised while locating or validating a project.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProjectError {
    #[error("Project not found: {0}")]
    NotFound(String),

    #[error("Invalid project: {0}")]
    Validation(String),

    #[error("Malformed volume '{0}': expected SOURCE:DEST[:OPTIONS]")]
    MalformedVolume(String),
}

// ── Engine errors ─────────────────────────────────────────────────────────────

/// A Docker engine call that completed with a failure status.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("docker {operation} failed: {detail}")]
pub struct EngineError {
    pub operation: String,
    pub detail: String,
}

impl EngineError {
    #[must_use]
    pub fn new(operation: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            detail: detail.into(),
        }
    }
}
