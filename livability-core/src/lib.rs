//! Core domain types for the livability engine.
//!
//! The crate holds everything the scorer reads: the closed set of amenity
//! categories and their static configuration, the [`Amenity`] value object,
//! and great-circle distance helpers for radius filtering. Nothing here
//! performs I/O or holds mutable state, so every item is safe to share
//! across threads.
//!
//! # Examples
//!
//! ```
//! use livability_core::{Amenity, AmenityCategory, filter_by_radius};
//!
//! let amenities = vec![Amenity::new("1", 51.501, -0.142, "Bus stop", AmenityCategory::Transit)];
//! let nearby = filter_by_radius(&amenities, 51.5014, -0.1419, 1.0);
//! assert_eq!(nearby.len(), 1);
//! assert_eq!(nearby[0].category.config().label, "Public Transit");
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod amenity;
mod category;
mod distance;
mod places;
mod registry;

pub use amenity::{Amenity, Tags};
pub use category::{AmenityCategory, UnknownCategoryError};
pub use distance::{
    EARTH_RADIUS_KM, distance_km, filter_by_radius, haversine_distance, is_within_radius,
};
pub use places::PLACE_CATEGORY_GROUPS;
pub use registry::{CategoryConfig, TravelMode, registry};
