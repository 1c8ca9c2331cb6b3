//! Facade crate for the livability engine.
//!
//! This crate re-exports the amenity model from `livability-core` and the
//! scoring entry points from `livability-scorer`, so callers can depend on a
//! single crate.
//!
//! # Examples
//!
//! ```
//! use livability_engine::{
//!     AmenityCategory, DEFAULT_SUBURBAN_THRESHOLD, DEFAULT_URBAN_THRESHOLD, UrbanLabel,
//!     classify_urban,
//! };
//!
//! let label = classify_urban(12, DEFAULT_URBAN_THRESHOLD, DEFAULT_SUBURBAN_THRESHOLD);
//! assert_eq!(label, UrbanLabel::Suburban);
//! assert_eq!(
//!     AmenityCategory::from_place_category("catering.cafe"),
//!     Some(AmenityCategory::Cafe)
//! );
//! ```

#![forbid(unsafe_code)]

pub use livability_core::{
    Amenity, AmenityCategory, CategoryConfig, EARTH_RADIUS_KM, PLACE_CATEGORY_GROUPS, Tags,
    TravelMode, UnknownCategoryError, distance_km, filter_by_radius, haversine_distance,
    is_within_radius, registry,
};
pub use livability_scorer::{
    CategoryCount, DEFAULT_DRIVING_RADIUS_KM, DEFAULT_SUBURBAN_THRESHOLD, DEFAULT_URBAN_RADIUS_KM,
    DEFAULT_URBAN_THRESHOLD, DEFAULT_WALKING_RADIUS_KM, PerfectTargets, ScoreResult,
    ScoringOptions, ScoringOptionsError, UrbanLabel, category_counts, classify_urban,
    compute_score, compute_scores, urban_index,
};
