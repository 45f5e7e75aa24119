//! Implements PageSink. Writes {out_dir}/{slug}/index.html.

use crate::domain::{DomainError, validate_slug};
use crate::ports::PageSink;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::info;

pub struct FsPageSink {
    out_dir: PathBuf,
}

impl FsPageSink {
    pub fn new(out_dir: impl AsRef<Path>) -> Self {
        Self {
            out_dir: out_dir.as_ref().to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl PageSink for FsPageSink {
    /// Write-replace: temp file, sync, rename. A crash never leaves a half page.
    async fn store(&self, slug: &str, html: &str) -> Result<PathBuf, DomainError> {
        validate_slug(slug)?;
        let dir = self.out_dir.join(slug);
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| DomainError::Sink(format!("create {}: {}", dir.display(), e)))?;

        let path = dir.join("index.html");
        let temp_path = dir.join("index.html.tmp");
        let mut f = fs::File::create(&temp_path)
            .await
            .map_err(|e| DomainError::Sink(format!("create temp file: {}", e)))?;
        f.write_all(html.as_bytes())
            .await
            .map_err(|e| DomainError::Sink(format!("write temp file: {}", e)))?;
        f.sync_all()
            .await
            .map_err(|e| DomainError::Sink(format!("sync temp file: {}", e)))?;
        drop(f);

        fs::rename(&temp_path, &path)
            .await
            .map_err(|e| DomainError::Sink(format!("rename failed: {}", e)))?;

        info!(path = %path.display(), slug, bytes = html.len(), "wrote page");
        Ok(path)
    }
}
