//! Output types produced by a scoring call.
#![forbid(unsafe_code)]

use livability_core::AmenityCategory;
use serde::{Deserialize, Serialize};

/// Density band derived from the urban index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UrbanLabel {
    /// At or above the urban threshold.
    Urban,
    /// At or above the suburban threshold but below the urban one.
    Suburban,
    /// Below both thresholds.
    Rural,
}

impl UrbanLabel {
    /// Return the label as displayed.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Urban => "Urban",
            Self::Suburban => "Suburban",
            Self::Rural => "Rural",
        }
    }
}

impl std::fmt::Display for UrbanLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of amenities of one category inside a radius.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    /// Category counted.
    pub category: AmenityCategory,
    /// Registry label for display.
    pub label: String,
    /// Amenities found.
    pub count: usize,
    /// Registry icon for display.
    pub icon: String,
}

impl CategoryCount {
    pub(crate) fn new(category: AmenityCategory, count: usize) -> Self {
        let config = category.config();
        Self {
            category,
            label: config.label.to_owned(),
            count,
            icon: config.icon.to_owned(),
        }
    }
}

/// Walking score, driving score and urban classification for one location.
///
/// Recomputed on every call; nothing is cached. Serialises with camelCase
/// keys (`walkingScore`, `urbanLabel`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    /// Walking score in `0..=100`.
    pub walking_score: u8,
    /// Driving score in `0..=100`.
    pub driving_score: u8,
    /// Non-park amenities inside the urban radius.
    pub urban_index: usize,
    /// Band the urban index falls in.
    pub urban_label: UrbanLabel,
    /// Per-category counts inside the walking radius, largest first.
    pub walking_breakdown: Vec<CategoryCount>,
    /// Per-category counts inside the driving radius, largest first.
    pub driving_breakdown: Vec<CategoryCount>,
}
