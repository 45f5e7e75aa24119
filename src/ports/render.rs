//! Rendering capability port. The view composes a page only through this
//! trait, so any host (tree for tests, HTML, ...) can supply the primitives.

use crate::domain::{Block, Icon, ImageHint, PageMetadata, Slot};

/// Opaque rendering primitives. Implemented by adapters.
pub trait RenderPort {
    type Node;

    /// Text filling a visual role.
    fn text(&self, slot: Slot, content: &str) -> Self::Node;

    /// Grouping element for a visual role.
    fn block(&self, block: Block, children: Vec<Self::Node>) -> Self::Node;

    /// Layout container (max width, horizontal padding).
    fn container(&self, children: Vec<Self::Node>) -> Self::Node;

    /// Navigational link around `children`.
    fn link(&self, href: &str, aria_label: Option<&str>, children: Vec<Self::Node>) -> Self::Node;

    /// Image with explicit width/height so layout space is reserved.
    fn image(&self, hint: &ImageHint) -> Self::Node;

    fn icon(&self, icon: Icon) -> Self::Node;

    /// Product logo mark.
    fn logo(&self) -> Self::Node;
}

/// Host that can serialize a rendered body into a complete document,
/// injecting `metadata` into the document head.
pub trait DocumentPort: RenderPort {
    fn document(&self, lang: &str, metadata: &PageMetadata, body: Self::Node) -> String;
}
