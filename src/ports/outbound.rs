//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, RawPlaceData};
use std::path::PathBuf;

/// Source of place records (the data-loading collaborator).
#[async_trait::async_trait]
pub trait PlaceSource: Send + Sync {
    /// Slugs of every available record, sorted.
    async fn list(&self) -> Result<Vec<String>, DomainError>;

    /// Load one unvalidated record. Unknown slug -> `DomainError::NotFound`.
    async fn load(&self, slug: &str) -> Result<RawPlaceData, DomainError>;
}

/// Destination for rendered pages.
#[async_trait::async_trait]
pub trait PageSink: Send + Sync {
    /// Store a full HTML document for `slug`. Returns where it was written.
    async fn store(&self, slug: &str, html: &str) -> Result<PathBuf, DomainError>;
}
