//! Implements PlaceSource. One JSON record per place: {data_dir}/{slug}.json.

use crate::domain::{DomainError, RawPlaceData, validate_slug};
use crate::ports::PlaceSource;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

pub struct JsonPlaceSource {
    base_dir: PathBuf,
}

impl JsonPlaceSource {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    fn record_path(&self, slug: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", slug))
    }
}

#[async_trait::async_trait]
impl PlaceSource for JsonPlaceSource {
    /// File stems of `*.json` entries with a safe slug; others are skipped.
    async fn list(&self) -> Result<Vec<String>, DomainError> {
        let mut dir = fs::read_dir(&self.base_dir)
            .await
            .map_err(|e| DomainError::Source(format!("{}: {}", self.base_dir.display(), e)))?;
        let mut slugs = Vec::new();
        while let Some(entry) = dir
            .next_entry()
            .await
            .map_err(|e| DomainError::Source(e.to_string()))?
        {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if validate_slug(stem).is_ok() {
                slugs.push(stem.to_string());
            } else {
                debug!(path = %path.display(), "skipping record with unsafe name");
            }
        }
        slugs.sort();
        Ok(slugs)
    }

    async fn load(&self, slug: &str) -> Result<RawPlaceData, DomainError> {
        validate_slug(slug)?;
        let path = self.record_path(slug);
        let body = match fs::read_to_string(&path).await {
            Ok(s) => s,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(DomainError::NotFound(slug.to_string()));
            }
            Err(e) => return Err(DomainError::Source(format!("{}: {}", path.display(), e))),
        };
        serde_json::from_str(&body)
            .map_err(|e| DomainError::Source(format!("{}: {}", path.display(), e)))
    }
}
