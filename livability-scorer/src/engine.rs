//! Weighted-target scoring and urban classification.
#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use livability_core::{Amenity, AmenityCategory, TravelMode, filter_by_radius};
use log::{debug, warn};

use crate::{CategoryCount, PerfectTargets, ScoreResult, ScoringOptions, UrbanLabel};

fn tally<'a, I>(amenities: I) -> BTreeMap<AmenityCategory, usize>
where
    I: IntoIterator<Item = &'a Amenity>,
{
    let mut counts = BTreeMap::new();
    for amenity in amenities {
        *counts.entry(amenity.category).or_insert(0) += 1;
    }
    counts
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "ratios are bounded floating-point divisions of small counts"
)]
fn target_ratio(count: usize, target: u32) -> f64 {
    if target == 0 {
        return 1.0;
    }
    (count as f64 / f64::from(target)).min(1.0)
}

/// Score `amenities` for `mode` against `targets`.
///
/// Each scorable category contributes `min(count / target, 1)` weighted by
/// its registry weight for `mode`; the weighted average is scaled to
/// `0..=100` and rounded. A target of `0` gives that category full credit
/// whatever its count. `other` amenities count towards nothing.
///
/// The caller is expected to have filtered `amenities` to the radius of
/// interest already.
///
/// # Examples
/// ```
/// use livability_core::{Amenity, AmenityCategory, TravelMode};
/// use livability_scorer::{PerfectTargets, compute_score};
///
/// let amenities: Vec<Amenity> = Vec::new();
/// let targets = PerfectTargets::walking_defaults();
/// assert_eq!(compute_score(&amenities, TravelMode::Walking, &targets), 0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the weighted average is clamped to 0..=100 before narrowing"
)]
pub fn compute_score<'a, I>(amenities: I, mode: TravelMode, targets: &PerfectTargets) -> u8
where
    I: IntoIterator<Item = &'a Amenity>,
{
    let counts = tally(amenities);

    let mut weighted_sum = 0.0_f64;
    let mut weight_total = 0.0_f64;
    for category in AmenityCategory::scorable() {
        let weight = category.config().weight(mode);
        let count = counts.get(&category).copied().unwrap_or(0);
        weighted_sum += target_ratio(count, targets.get(category)) * weight;
        weight_total += weight;
    }

    if weight_total <= 0.0 {
        return 0;
    }
    let score = (weighted_sum / weight_total * 100.0).round();
    score.clamp(0.0, 100.0) as u8
}

/// Count amenities per scorable category, largest count first.
///
/// Categories with no amenities and `other` are left out. Equal counts keep
/// registry order.
///
/// # Examples
/// ```
/// use livability_core::{Amenity, AmenityCategory};
/// use livability_scorer::category_counts;
///
/// let amenities = vec![
///     Amenity::new("1", 0.0, 0.0, "Cafe", AmenityCategory::Cafe),
///     Amenity::new("2", 0.0, 0.0, "Shop", AmenityCategory::Grocery),
///     Amenity::new("3", 0.0, 0.0, "Bar", AmenityCategory::Other),
/// ];
/// let counts = category_counts(&amenities);
/// let order: Vec<_> = counts.iter().map(|entry| entry.category).collect();
/// assert_eq!(order, vec![AmenityCategory::Grocery, AmenityCategory::Cafe]);
/// ```
#[must_use]
pub fn category_counts<'a, I>(amenities: I) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = &'a Amenity>,
{
    let counts = tally(amenities);
    let mut breakdown: Vec<CategoryCount> = AmenityCategory::scorable()
        .filter_map(|category| {
            counts
                .get(&category)
                .copied()
                .filter(|count| *count > 0)
                .map(|count| CategoryCount::new(category, count))
        })
        .collect();
    // `sort_by` is stable, so ties stay in registry order.
    breakdown.sort_by(|a, b| b.count.cmp(&a.count));
    breakdown
}

/// Count the amenities that make up the urban index: everything but parks.
#[must_use]
pub fn urban_index<'a, I>(amenities: I) -> usize
where
    I: IntoIterator<Item = &'a Amenity>,
{
    amenities
        .into_iter()
        .filter(|amenity| amenity.category != AmenityCategory::Park)
        .count()
}

/// Place `index` in a density band.
///
/// Both thresholds are inclusive lower bounds and are checked independently,
/// urban first, so inverted thresholds still produce a label.
///
/// # Examples
/// ```
/// use livability_scorer::{UrbanLabel, classify_urban};
///
/// assert_eq!(classify_urban(20, 20, 10), UrbanLabel::Urban);
/// assert_eq!(classify_urban(10, 20, 10), UrbanLabel::Suburban);
/// assert_eq!(classify_urban(9, 20, 10), UrbanLabel::Rural);
/// ```
#[must_use]
pub const fn classify_urban(
    index: usize,
    urban_threshold: usize,
    suburban_threshold: usize,
) -> UrbanLabel {
    if index >= urban_threshold {
        UrbanLabel::Urban
    } else if index >= suburban_threshold {
        UrbanLabel::Suburban
    } else {
        UrbanLabel::Rural
    }
}

/// Compute every score for the amenities around a centre point.
///
/// The walking, driving and urban subsets are filtered independently, so
/// the radii need not be nested. Malformed input degrades to low scores
/// instead of failing: an empty list, a negative or NaN radius, or a
/// non-finite centre all yield zero scores, an urban index of zero and
/// [`UrbanLabel::Rural`].
///
/// # Examples
/// ```
/// use livability_core::{Amenity, AmenityCategory};
/// use livability_scorer::{ScoringOptions, UrbanLabel, compute_scores};
///
/// let amenities = vec![
///     Amenity::new("1", 40.7148, -74.006, "Market", AmenityCategory::Grocery),
///     Amenity::new("2", 40.7138, -74.006, "Stop", AmenityCategory::Transit),
/// ];
/// let result = compute_scores(&amenities, 40.7128, -74.006, &ScoringOptions::default());
/// assert!(result.walking_score > 0);
/// assert_eq!(result.urban_index, 2);
/// assert_eq!(result.urban_label, UrbanLabel::Rural);
/// ```
#[must_use]
pub fn compute_scores(
    amenities: &[Amenity],
    center_lat: f64,
    center_lng: f64,
    options: &ScoringOptions,
) -> ScoreResult {
    let walking = filter_by_radius(amenities, center_lat, center_lng, options.walking_radius_km);
    let driving = filter_by_radius(amenities, center_lat, center_lng, options.driving_radius_km);
    let urban = filter_by_radius(amenities, center_lat, center_lng, options.urban_radius_km);
    debug!(
        "scoring {} amenities around ({center_lat}, {center_lng}): {} walking, {} driving, {} urban",
        amenities.len(),
        walking.len(),
        driving.len(),
        urban.len()
    );

    if !options.thresholds_ordered() {
        warn!(
            "suburban threshold {} is not below urban threshold {}; the suburban band is empty",
            options.suburban_threshold, options.urban_threshold
        );
    }
    let index = urban_index(urban.iter().copied());
    let urban_label = classify_urban(index, options.urban_threshold, options.suburban_threshold);

    let walking_targets = options.targets_for(TravelMode::Walking);
    let driving_targets = options.targets_for(TravelMode::Driving);

    ScoreResult {
        walking_score: compute_score(walking.iter().copied(), TravelMode::Walking, &walking_targets),
        driving_score: compute_score(driving.iter().copied(), TravelMode::Driving, &driving_targets),
        urban_index: index,
        urban_label,
        walking_breakdown: category_counts(walking.iter().copied()),
        driving_breakdown: category_counts(driving.iter().copied()),
    }
}
