//! Great-circle distance and radius filtering.
//!
//! Straight-line distance stands in for travel distance; there is no road
//! network here.

use geo::Coord;

use crate::Amenity;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometres between two points given in decimal
/// degrees, using the haversine formula.
///
/// Inputs are not range-checked. The result is zero for identical points and
/// symmetric in its two points.
///
/// # Examples
/// ```
/// use livability_core::haversine_distance;
///
/// let nyc_to_la = haversine_distance(40.7128, -74.0060, 34.0522, -118.2437);
/// assert!((3935.0..3945.0).contains(&nyc_to_la));
/// assert_eq!(haversine_distance(10.0, 20.0, 10.0, 20.0), 0.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the haversine formula is floating-point trigonometry"
)]
pub fn haversine_distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();

    let half_lat = (d_lat / 2.0).sin();
    let half_lng = (d_lng / 2.0).sin();
    let a = half_lat * half_lat
        + lat1.to_radians().cos() * lat2.to_radians().cos() * half_lng * half_lng;
    // Rounding can push `a` a hair past 1 for near-antipodal points.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Great-circle distance in kilometres between two `x = lng, y = lat`
/// coordinates.
#[must_use]
pub fn distance_km(from: Coord<f64>, to: Coord<f64>) -> f64 {
    haversine_distance(from.y, from.x, to.y, to.x)
}

/// Report whether `amenity` lies within `radius_km` of the centre.
///
/// The boundary is inclusive. A distance that is not finite (NaN or
/// infinite coordinates) never matches, and neither does a NaN radius.
#[must_use]
pub fn is_within_radius(amenity: &Amenity, center: Coord<f64>, radius_km: f64) -> bool {
    let distance = distance_km(center, amenity.location);
    distance.is_finite() && distance <= radius_km
}

/// Return the amenities within `radius_km` of the centre, in input order.
///
/// # Examples
/// ```
/// use livability_core::{Amenity, AmenityCategory, filter_by_radius};
///
/// let amenities = vec![
///     Amenity::new("near", 40.7138, -74.006, "Near", AmenityCategory::Cafe),
///     Amenity::new("far", 40.8128, -74.006, "Far", AmenityCategory::Cafe),
/// ];
/// let nearby = filter_by_radius(&amenities, 40.7128, -74.006, 1.0);
/// assert_eq!(nearby.len(), 1);
/// assert_eq!(nearby[0].id, "near");
/// ```
#[must_use]
pub fn filter_by_radius(
    amenities: &[Amenity],
    center_lat: f64,
    center_lng: f64,
    radius_km: f64,
) -> Vec<&Amenity> {
    let center = Coord {
        x: center_lng,
        y: center_lat,
    };
    amenities
        .iter()
        .filter(|amenity| is_within_radius(amenity, center, radius_km))
        .collect()
}
