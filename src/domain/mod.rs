//! Core domain layer. No external I/O dependencies.
//!
//! Entities, validation and the host-independent render tree live here.

pub mod date;
pub mod entities;
pub mod errors;
pub mod metadata;
pub mod validation;
pub mod view;

pub use date::DateLocale;
pub use entities::{
    GalleryImage, NavigationState, PlaceData, RawGalleryImage, RawPlaceData, RawStack, Stack,
};
pub use errors::DomainError;
pub use metadata::{OpenGraph, OpenGraphImage, PageMetadata};
pub use validation::validate_slug;
pub use view::{Block, Icon, ImageHint, Node, Slot};
