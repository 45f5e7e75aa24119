//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Input record failed validation at the loading boundary.
    /// `field` is a path into the record, e.g. `gallery[1].width`.
    #[error("Invalid place data at `{field}`: {reason}")]
    Validation { field: String, reason: String },

    #[error("Place not found: {0}")]
    NotFound(String),

    #[error("Place source error: {0}")]
    Source(String),

    #[error("Page sink error: {0}")]
    Sink(String),

    /// The view produced no output (navigation still resolving).
    #[error("Page not rendered: {0}")]
    NotRendered(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DomainError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
