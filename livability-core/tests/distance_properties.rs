//! Property-based tests for great-circle distance and radius filtering.
//!
//! # Invariants tested
//!
//! - **Identity:** a point is zero kilometres from itself.
//! - **Symmetry:** swapping the two points does not change the distance.
//! - **Bounds:** distances are finite, non-negative and at most half the
//!   Earth's circumference.
//! - **Radius monotonicity:** growing the radius never drops an amenity.
#![expect(
    clippy::float_arithmetic,
    reason = "property assertions compare floating-point distances"
)]

use livability_core::{
    Amenity, AmenityCategory, EARTH_RADIUS_KM, filter_by_radius, haversine_distance,
};
use proptest::prelude::*;

fn latitude() -> impl Strategy<Value = f64> {
    -90.0_f64..=90.0_f64
}

fn longitude() -> impl Strategy<Value = f64> {
    -180.0_f64..=180.0_f64
}

/// Amenities scattered within roughly ten kilometres of the centre.
fn amenities_around(center_lat: f64, center_lng: f64) -> impl Strategy<Value = Vec<Amenity>> {
    prop::collection::vec((-0.1_f64..0.1_f64, -0.1_f64..0.1_f64), 0..40).prop_map(
        move |offsets| {
            offsets
                .into_iter()
                .enumerate()
                .map(|(index, (d_lat, d_lng))| {
                    Amenity::new(
                        index.to_string(),
                        center_lat + d_lat,
                        center_lng + d_lng,
                        format!("Amenity {index}"),
                        AmenityCategory::Grocery,
                    )
                })
                .collect()
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn distance_to_self_is_zero(lat in latitude(), lng in longitude()) {
        prop_assert_eq!(haversine_distance(lat, lng, lat, lng), 0.0);
    }

    #[test]
    fn distance_is_symmetric(
        lat1 in latitude(),
        lng1 in longitude(),
        lat2 in latitude(),
        lng2 in longitude(),
    ) {
        let there = haversine_distance(lat1, lng1, lat2, lng2);
        let back = haversine_distance(lat2, lng2, lat1, lng1);
        prop_assert!((there - back).abs() <= 1e-9 * there.max(1.0), "{there} vs {back}");
    }

    #[test]
    fn distance_is_bounded(
        lat1 in latitude(),
        lng1 in longitude(),
        lat2 in latitude(),
        lng2 in longitude(),
    ) {
        let distance = haversine_distance(lat1, lng1, lat2, lng2);
        prop_assert!(distance.is_finite());
        prop_assert!(distance >= 0.0);
        prop_assert!(distance <= std::f64::consts::PI * EARTH_RADIUS_KM + 1e-6);
    }

    #[test]
    fn growing_the_radius_never_drops_amenities(
        amenities in amenities_around(48.8566, 2.3522),
        small in 0.0_f64..5.0_f64,
        extra in 0.0_f64..5.0_f64,
    ) {
        let inner: Vec<&str> = filter_by_radius(&amenities, 48.8566, 2.3522, small)
            .iter()
            .map(|amenity| amenity.id.as_str())
            .collect();
        let outer: Vec<&str> = filter_by_radius(&amenities, 48.8566, 2.3522, small + extra)
            .iter()
            .map(|amenity| amenity.id.as_str())
            .collect();
        for id in &inner {
            prop_assert!(outer.contains(id), "{id} fell out of the larger radius");
        }
    }
}
