//! Per-category "perfect score" targets.
#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use livability_core::{AmenityCategory, TravelMode};
use serde::{Deserialize, Serialize};

const WALKING_DEFAULTS: [(AmenityCategory, u32); 10] = [
    (AmenityCategory::Grocery, 3),
    (AmenityCategory::Restaurant, 5),
    (AmenityCategory::Cafe, 3),
    (AmenityCategory::Park, 2),
    (AmenityCategory::School, 2),
    (AmenityCategory::Transit, 3),
    (AmenityCategory::Healthcare, 2),
    (AmenityCategory::Shopping, 2),
    (AmenityCategory::Entertainment, 2),
    (AmenityCategory::Other, 0),
];

const DRIVING_DEFAULTS: [(AmenityCategory, u32); 10] = [
    (AmenityCategory::Grocery, 8),
    (AmenityCategory::Restaurant, 15),
    (AmenityCategory::Cafe, 10),
    (AmenityCategory::Park, 5),
    (AmenityCategory::School, 5),
    (AmenityCategory::Transit, 5),
    (AmenityCategory::Healthcare, 5),
    (AmenityCategory::Shopping, 8),
    (AmenityCategory::Entertainment, 5),
    (AmenityCategory::Other, 0),
];

/// Count of amenities per category that earns that category full credit.
///
/// Having more than the target still counts as full credit. A target of `0`
/// means the category is satisfied regardless of its count; categories
/// missing from the table read as `0`.
///
/// Serialises as a plain map, e.g. `{"grocery": 3, "transit": 2}`.
///
/// # Examples
/// ```
/// use livability_core::AmenityCategory;
/// use livability_scorer::PerfectTargets;
///
/// let targets = PerfectTargets::walking_defaults().with_target(AmenityCategory::Grocery, 1);
/// assert_eq!(targets.get(AmenityCategory::Grocery), 1);
/// assert_eq!(targets.get(AmenityCategory::Restaurant), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PerfectTargets {
    targets: BTreeMap<AmenityCategory, u32>,
}

impl PerfectTargets {
    /// Default targets for the walking score.
    #[must_use]
    pub fn walking_defaults() -> Self {
        WALKING_DEFAULTS.into_iter().collect()
    }

    /// Default targets for the driving score.
    #[must_use]
    pub fn driving_defaults() -> Self {
        DRIVING_DEFAULTS.into_iter().collect()
    }

    /// Default targets for `mode`.
    #[must_use]
    pub fn defaults_for(mode: TravelMode) -> Self {
        match mode {
            TravelMode::Walking => Self::walking_defaults(),
            TravelMode::Driving => Self::driving_defaults(),
        }
    }

    /// Return the target for `category`, or `0` when absent.
    #[must_use]
    pub fn get(&self, category: AmenityCategory) -> u32 {
        self.targets.get(&category).copied().unwrap_or(0)
    }

    /// Set the target for `category`.
    pub fn set_target(&mut self, category: AmenityCategory, target: u32) {
        self.targets.insert(category, target);
    }

    /// Return the table with the target for `category` replaced.
    #[must_use]
    pub fn with_target(mut self, category: AmenityCategory, target: u32) -> Self {
        self.set_target(category, target);
        self
    }

    /// Return the table with every entry of `overrides` applied on top.
    ///
    /// Categories absent from `overrides` keep their current target.
    #[must_use]
    pub fn overlay(mut self, overrides: &BTreeMap<AmenityCategory, u32>) -> Self {
        self.targets
            .extend(overrides.iter().map(|(category, target)| (*category, *target)));
        self
    }

    /// Iterate over the explicit entries in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (AmenityCategory, u32)> + '_ {
        self.targets
            .iter()
            .map(|(category, target)| (*category, *target))
    }
}

impl FromIterator<(AmenityCategory, u32)> for PerfectTargets {
    fn from_iter<I: IntoIterator<Item = (AmenityCategory, u32)>>(iter: I) -> Self {
        Self {
            targets: iter.into_iter().collect(),
        }
    }
}
