//! Port traits. API boundaries for the hexagon.
//!
//! - Render: called by the view to build output for a host
//! - Outbound: called by the publishing pipeline into infrastructure

pub mod outbound;
pub mod render;

pub use outbound::{PageSink, PlaceSource};
pub use render::{DocumentPort, RenderPort};
