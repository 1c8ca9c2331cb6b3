//! Static per-category configuration.
//!
//! Every category carries a display label, a walking and a driving weight,
//! a marker colour and an icon. Weights are relative: the scorer divides by
//! the sum of the weights it used, so they need not add up to anything.
//!
//! # Examples
//! ```
//! use livability_core::{AmenityCategory, TravelMode};
//!
//! let config = AmenityCategory::Transit.config();
//! assert_eq!(config.label, "Public Transit");
//! assert_eq!(config.weight(TravelMode::Walking), 3.0);
//! assert_eq!(config.weight(TravelMode::Driving), 1.0);
//! ```

use crate::AmenityCategory;

/// Which score a weight or target table applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TravelMode {
    /// Short radius, on foot.
    Walking,
    /// Long radius, by car.
    Driving,
}

impl TravelMode {
    /// Return the mode as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Walking => "walking",
            Self::Driving => "driving",
        }
    }
}

impl std::fmt::Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation and weighting data for one category.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CategoryConfig {
    /// Human-readable name.
    pub label: &'static str,
    /// Influence on the walking score.
    pub walking_weight: f64,
    /// Influence on the driving score.
    pub driving_weight: f64,
    /// Map marker colour as a CSS hex string.
    pub color: &'static str,
    /// Emoji shown on markers and breakdowns.
    pub icon: &'static str,
}

impl CategoryConfig {
    /// Return the weight used for `mode`.
    #[must_use]
    pub const fn weight(&self, mode: TravelMode) -> f64 {
        match mode {
            TravelMode::Walking => self.walking_weight,
            TravelMode::Driving => self.driving_weight,
        }
    }
}

static GROCERY: CategoryConfig = CategoryConfig {
    label: "Grocery & Supermarket",
    walking_weight: 3.0,
    driving_weight: 2.0,
    color: "#4caf50",
    icon: "\u{1F6D2}",
};

static RESTAURANT: CategoryConfig = CategoryConfig {
    label: "Restaurant",
    walking_weight: 2.0,
    driving_weight: 1.5,
    color: "#ff9800",
    icon: "\u{1F37D}\u{FE0F}",
};

static CAFE: CategoryConfig = CategoryConfig {
    label: "Cafe & Coffee",
    walking_weight: 1.5,
    driving_weight: 1.0,
    color: "#795548",
    icon: "\u{2615}",
};

static PARK: CategoryConfig = CategoryConfig {
    label: "Park & Recreation",
    walking_weight: 2.0,
    driving_weight: 1.5,
    color: "#66bb6a",
    icon: "\u{1F333}",
};

static SCHOOL: CategoryConfig = CategoryConfig {
    label: "Education",
    walking_weight: 2.0,
    driving_weight: 2.0,
    color: "#42a5f5",
    icon: "\u{1F393}",
};

// Transit matters far more on foot than behind the wheel.
static TRANSIT: CategoryConfig = CategoryConfig {
    label: "Public Transit",
    walking_weight: 3.0,
    driving_weight: 1.0,
    color: "#7e57c2",
    icon: "\u{1F68C}",
};

static HEALTHCARE: CategoryConfig = CategoryConfig {
    label: "Healthcare",
    walking_weight: 2.0,
    driving_weight: 2.5,
    color: "#ef5350",
    icon: "\u{1F3E5}",
};

static SHOPPING: CategoryConfig = CategoryConfig {
    label: "Shopping",
    walking_weight: 1.0,
    driving_weight: 1.5,
    color: "#ec407a",
    icon: "\u{1F6CD}\u{FE0F}",
};

static ENTERTAINMENT: CategoryConfig = CategoryConfig {
    label: "Entertainment",
    walking_weight: 1.0,
    driving_weight: 1.5,
    color: "#ffa726",
    icon: "\u{1F3AD}",
};

// Weights are present for completeness; the scorer skips `other`.
static OTHER: CategoryConfig = CategoryConfig {
    label: "Other",
    walking_weight: 0.5,
    driving_weight: 0.5,
    color: "#78909c",
    icon: "\u{1F4CD}",
};

impl AmenityCategory {
    /// Return the static configuration for this category.
    #[must_use]
    pub fn config(self) -> &'static CategoryConfig {
        match self {
            Self::Grocery => &GROCERY,
            Self::Restaurant => &RESTAURANT,
            Self::Cafe => &CAFE,
            Self::Park => &PARK,
            Self::School => &SCHOOL,
            Self::Transit => &TRANSIT,
            Self::Healthcare => &HEALTHCARE,
            Self::Shopping => &SHOPPING,
            Self::Entertainment => &ENTERTAINMENT,
            Self::Other => &OTHER,
        }
    }
}

/// Iterate over every registry entry in declared order.
///
/// Settings screens use this to enumerate the categories they expose.
///
/// # Examples
/// ```
/// use livability_core::{AmenityCategory, registry};
///
/// let first = registry().next();
/// assert_eq!(first.map(|(category, _)| category), Some(AmenityCategory::Grocery));
/// assert_eq!(registry().count(), 10);
/// ```
pub fn registry() -> impl Iterator<Item = (AmenityCategory, &'static CategoryConfig)> {
    AmenityCategory::ALL
        .into_iter()
        .map(|category| (category, category.config()))
}
