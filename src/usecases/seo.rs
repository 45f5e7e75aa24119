//! Social-preview / SEO metadata for a Place page.

use crate::domain::{OpenGraph, OpenGraphImage, PageMetadata, PlaceData};

pub const DEFAULT_PRODUCT_NAME: &str = "Workout";
pub const DEFAULT_CANONICAL_URL: &str = "https://workout-tech.vercel.app/";

/// Site-wide values that feed every page's metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeoSettings {
    pub product_name: String,
    pub canonical_url: String,
}

impl Default for SeoSettings {
    fn default() -> Self {
        Self {
            product_name: DEFAULT_PRODUCT_NAME.to_string(),
            canonical_url: DEFAULT_CANONICAL_URL.to_string(),
        }
    }
}

/// Title is `"<name> | <product>"`; the preview image is the first gallery
/// entry, if any.
pub fn page_metadata(place: &PlaceData, settings: &SeoSettings) -> PageMetadata {
    let title = format!("{} | {}", place.name, settings.product_name);
    let image = place.gallery.first().map(|img| OpenGraphImage {
        url: img.url.clone(),
        width: img.width,
        height: img.height,
        alt: place.name.clone(),
    });

    PageMetadata {
        title: title.clone(),
        description: place.description.clone(),
        canonical_url: settings.canonical_url.clone(),
        open_graph: OpenGraph {
            url: settings.canonical_url.clone(),
            title,
            description: place.description.clone(),
            image,
        },
    }
}
