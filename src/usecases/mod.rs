//! Application use cases. Orchestrate domain logic via ports.

pub mod place_view;
pub mod publish_service;
pub mod seo;

pub use place_view::{PlacePage, PlaceView};
pub use publish_service::{PublishService, PublishStats};
pub use seo::SeoSettings;
