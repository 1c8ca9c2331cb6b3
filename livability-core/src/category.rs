//! The closed set of amenity categories.
//!
//! Variants are declared in registry order. That order is the tie-break for
//! breakdown sorting, so reordering variants is a behavioural change.
//!
//! # Examples
//! ```
//! use livability_core::AmenityCategory;
//!
//! assert_eq!(AmenityCategory::Grocery.as_str(), "grocery");
//! assert_eq!(AmenityCategory::Cafe.to_string(), "cafe");
//! assert!(!AmenityCategory::Other.is_scorable());
//! ```

use thiserror::Error;

/// Classification tag for a point of interest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AmenityCategory {
    /// Supermarkets and convenience stores.
    Grocery,
    /// Restaurants and fast food.
    Restaurant,
    /// Cafes and coffee shops.
    Cafe,
    /// Parks and playgrounds.
    Park,
    /// Schools, universities and libraries.
    School,
    /// Public transport stops and stations.
    Transit,
    /// Hospitals, pharmacies and clinics.
    Healthcare,
    /// Malls and clothing stores.
    Shopping,
    /// Cinemas, cultural venues and sports centres.
    Entertainment,
    /// Anything else. Displayed but never scored.
    ///
    /// Unrecognised category strings deserialise to this variant.
    #[cfg_attr(feature = "serde", serde(other))]
    Other,
}

/// Error returned when parsing an unrecognised category name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown amenity category '{name}'")]
pub struct UnknownCategoryError {
    /// The rejected input.
    pub name: String,
}

impl AmenityCategory {
    /// Every category in registry order.
    pub const ALL: [Self; 10] = [
        Self::Grocery,
        Self::Restaurant,
        Self::Cafe,
        Self::Park,
        Self::School,
        Self::Transit,
        Self::Healthcare,
        Self::Shopping,
        Self::Entertainment,
        Self::Other,
    ];

    /// Return the category as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use livability_core::AmenityCategory;
    ///
    /// assert_eq!(AmenityCategory::Healthcare.as_str(), "healthcare");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Grocery => "grocery",
            Self::Restaurant => "restaurant",
            Self::Cafe => "cafe",
            Self::Park => "park",
            Self::School => "school",
            Self::Transit => "transit",
            Self::Healthcare => "healthcare",
            Self::Shopping => "shopping",
            Self::Entertainment => "entertainment",
            Self::Other => "other",
        }
    }

    /// Report whether the category takes part in score computation.
    #[must_use]
    pub const fn is_scorable(self) -> bool {
        !matches!(self, Self::Other)
    }

    /// Iterate over the categories that contribute to scores, in registry
    /// order.
    pub fn scorable() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().filter(|category| category.is_scorable())
    }
}

impl std::fmt::Display for AmenityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AmenityCategory {
    type Err = UnknownCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == wanted)
            .ok_or_else(|| UnknownCategoryError { name: s.to_owned() })
    }
}
