//! Filesystem adapters for place records and rendered pages.

pub mod fs_sink;
pub mod json_source;

pub use fs_sink::FsPageSink;
pub use json_source::JsonPlaceSource;
