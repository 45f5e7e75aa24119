//! Wiring & DI. Entry point: load config, bootstrap adapters, publish pages.
//! No rendering logic here; the view and pipeline live in usecases.
//!
//! Usage: `place-render [slug...]`. Without slugs every record in the data
//! directory is published.

use dotenv::dotenv;
use place_render::adapters::persistence::{FsPageSink, JsonPlaceSource};
use place_render::adapters::render::HtmlRenderer;
use place_render::ports::{PageSink, PlaceSource};
use place_render::shared::config::AppConfig;
use place_render::usecases::{PlaceView, PublishService};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load()?;
    let locale = cfg.date_locale()?;
    let image_quality = cfg.image_quality()?;
    let data_dir = cfg.data_dir_or_default();
    let out_dir = cfg.out_dir_or_default();
    info!(
        data_dir = %data_dir,
        out_dir = %out_dir,
        locale = %locale,
        "publishing place pages"
    );

    // --- Adapters ---
    let source: Arc<dyn PlaceSource> = Arc::new(JsonPlaceSource::new(&data_dir));
    let sink: Arc<dyn PageSink> = Arc::new(FsPageSink::new(&out_dir));
    let renderer = HtmlRenderer::new(cfg.product_name_or_default(), image_quality);

    // --- Service ---
    let service = PublishService::new(
        source,
        sink,
        PlaceView::new(cfg.seo_settings()),
        renderer,
        locale,
    );

    let slugs: Vec<String> = std::env::args().skip(1).collect();
    let stats = if slugs.is_empty() {
        service.publish_all().await?
    } else {
        service.publish_many(&slugs).await
    };

    if !stats.is_success() {
        anyhow::bail!(
            "{} page(s) failed: {}",
            stats.failed.len(),
            stats.failed.join(", ")
        );
    }
    Ok(())
}
