//! Domain entities. Pure data structures for the core business.
//!
//! `Raw*` records mirror the JSON produced by the data-loading side and may be
//! incomplete; the validated records are built by `validation`.

use serde::{Deserialize, Serialize};

/// A validated place, ready to render. `date` is already the display string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceData {
    pub date: String,
    pub name: String,
    pub description: String,
    pub population: String,
    pub average_salary: String,
    pub stacks: Vec<Stack>,
    pub gallery: Vec<GalleryImage>,
}

impl PlaceData {
    /// Text before the first comma of `name`, or all of it when there is none.
    pub fn short_label(&self) -> &str {
        short_label(&self.name)
    }
}

pub(crate) fn short_label(name: &str) -> &str {
    name.split(',').next().unwrap_or(name)
}

/// Technology stack with its hiring statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stack {
    pub name: String,
    pub open_positions: String,
    pub annual_average_salary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub description: String,
}

/// Unvalidated place record as read from a source.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPlaceData {
    pub date: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub population: Option<String>,
    pub average_salary: Option<String>,
    pub stacks: Option<Vec<RawStack>>,
    pub gallery: Option<Vec<RawGalleryImage>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStack {
    pub name: Option<String>,
    pub open_positions: Option<String>,
    pub annual_average_salary: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawGalleryImage {
    pub url: Option<String>,
    pub width: Option<i64>,
    pub height: Option<i64>,
    #[serde(alias = "imageDescription")]
    pub description: Option<String>,
}

/// Whether the hosting navigation has resolved this page's data yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationState {
    /// Data still being generated/fetched; render nothing.
    Resolving,
    #[default]
    Resolved,
}

impl NavigationState {
    pub fn is_resolving(self) -> bool {
        matches!(self, NavigationState::Resolving)
    }
}
