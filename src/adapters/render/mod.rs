//! Render adapters. Implement RenderPort for concrete hosts.
//!
//! `TreeRenderer` builds the host-independent `Node` tree; `HtmlRenderer`
//! builds maud markup and `document` wraps it into a full HTML page.

pub mod html;
pub mod tree;

pub use html::{HtmlRenderer, document};
pub use tree::TreeRenderer;
