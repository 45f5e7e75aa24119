//! Application configuration. Paths, site identity, rendering knobs.

use crate::domain::{DateLocale, DomainError};
use crate::usecases::seo::{DEFAULT_CANONICAL_URL, DEFAULT_PRODUCT_NAME, SeoSettings};
use serde::Deserialize;

/// Default `q=` hint for gallery images.
pub const DEFAULT_IMAGE_QUALITY: u8 = 75;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Directory of `{slug}.json` place records. Read from PLACE_RENDER_DATA_DIR.
    #[serde(default)]
    pub data_dir: Option<String>,

    /// Output directory for `{slug}/index.html`. Read from PLACE_RENDER_OUT_DIR.
    #[serde(default)]
    pub out_dir: Option<String>,

    /// Product name used in page titles and the logo. Read from PLACE_RENDER_PRODUCT_NAME.
    #[serde(default)]
    pub product_name: Option<String>,

    /// Canonical / og:url of the site. Read from PLACE_RENDER_CANONICAL_URL.
    #[serde(default)]
    pub canonical_url: Option<String>,

    /// `pt-BR`, `en-US` or `iso`. Read from PLACE_RENDER_DATE_LOCALE.
    #[serde(default)]
    pub date_locale: Option<String>,

    /// 1..=100; 0 disables the hint. Read from PLACE_RENDER_IMAGE_QUALITY.
    #[serde(default)]
    pub image_quality: Option<u32>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var("PLACE_RENDER_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        // Environment wins over the file.
        c = c.add_source(config::Environment::with_prefix("PLACE_RENDER").try_parsing(true));
        c.build()?.try_deserialize()
    }

    /// Returns the data directory. Defaults to `./data`.
    pub fn data_dir_or_default(&self) -> String {
        self.data_dir.clone().unwrap_or_else(|| "./data".to_string())
    }

    /// Returns the output directory. Defaults to `./dist`.
    pub fn out_dir_or_default(&self) -> String {
        self.out_dir.clone().unwrap_or_else(|| "./dist".to_string())
    }

    pub fn product_name_or_default(&self) -> String {
        self.product_name
            .clone()
            .unwrap_or_else(|| DEFAULT_PRODUCT_NAME.to_string())
    }

    pub fn canonical_url_or_default(&self) -> String {
        self.canonical_url
            .clone()
            .unwrap_or_else(|| DEFAULT_CANONICAL_URL.to_string())
    }

    /// Returns the configured date locale. Defaults to pt-BR.
    pub fn date_locale(&self) -> Result<DateLocale, DomainError> {
        match &self.date_locale {
            Some(s) => s.parse(),
            None => Ok(DateLocale::default()),
        }
    }

    /// Returns the image quality hint, `None` when disabled with 0.
    pub fn image_quality(&self) -> Result<Option<u8>, DomainError> {
        match self.image_quality {
            None => Ok(Some(DEFAULT_IMAGE_QUALITY)),
            Some(0) => Ok(None),
            Some(q @ 1..=100) => Ok(Some(q as u8)),
            Some(q) => Err(DomainError::Config(format!(
                "image_quality must be within 0..=100, got {q}"
            ))),
        }
    }

    pub fn seo_settings(&self) -> SeoSettings {
        SeoSettings {
            product_name: self.product_name_or_default(),
            canonical_url: self.canonical_url_or_default(),
        }
    }
}
