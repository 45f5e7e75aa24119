//! Static publishing: load record -> validate -> render -> store page.
//!
//! - Validation happens once, here, before the view runs
//! - The view is rendered with resolved navigation; `None` is an error
//! - `publish_all` keeps going past failing slugs and reports counts

use crate::domain::{DateLocale, DomainError, NavigationState, PlaceData};
use crate::ports::{DocumentPort, PageSink, PlaceSource};
use crate::usecases::place_view::PlaceView;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

/// Publishing service. Renders pages with `R` and hands them to the sink.
pub struct PublishService<R> {
    source: Arc<dyn PlaceSource>,
    sink: Arc<dyn PageSink>,
    view: PlaceView,
    renderer: R,
    locale: DateLocale,
}

impl<R: DocumentPort> PublishService<R> {
    pub fn new(
        source: Arc<dyn PlaceSource>,
        sink: Arc<dyn PageSink>,
        view: PlaceView,
        renderer: R,
        locale: DateLocale,
    ) -> Self {
        Self {
            source,
            sink,
            view,
            renderer,
            locale,
        }
    }

    /// Render one record into a full document, without storing it.
    pub async fn render(&self, slug: &str) -> Result<String, DomainError> {
        let raw = self.source.load(slug).await?;
        let place = PlaceData::try_from_raw(raw, self.locale)?;
        let page = self
            .view
            .render(&place, NavigationState::Resolved, &self.renderer)
            .ok_or_else(|| DomainError::NotRendered(slug.to_string()))?;
        Ok(self
            .renderer
            .document(self.locale.lang(), &page.metadata, page.body))
    }

    pub async fn publish(&self, slug: &str) -> Result<PathBuf, DomainError> {
        let html = self.render(slug).await?;
        let path = self.sink.store(slug, &html).await?;
        info!(slug, path = %path.display(), "published page");
        Ok(path)
    }

    /// Publish the given slugs sequentially. Failures are logged and counted.
    pub async fn publish_many(&self, slugs: &[String]) -> PublishStats {
        let mut stats = PublishStats::default();
        for slug in slugs {
            match self.publish(slug).await {
                Ok(_) => stats.published += 1,
                Err(e) => {
                    warn!(slug = %slug, error = %e, "failed to publish page");
                    stats.failed.push(slug.clone());
                }
            }
        }
        info!(
            published = stats.published,
            failed = stats.failed.len(),
            "publish finished"
        );
        stats
    }

    /// Publish every record the source knows about.
    pub async fn publish_all(&self) -> Result<PublishStats, DomainError> {
        let slugs = self.source.list().await?;
        if slugs.is_empty() {
            warn!("no place records found");
        }
        Ok(self.publish_many(&slugs).await)
    }
}

/// Result of a publish run.
#[derive(Debug, Default)]
pub struct PublishStats {
    pub published: usize,
    pub failed: Vec<String>,
}

impl PublishStats {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}
