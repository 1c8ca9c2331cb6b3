//! Tunable radii, thresholds and target tables for a scoring call.
#![forbid(unsafe_code)]

use std::borrow::Cow;

use livability_core::TravelMode;
use serde::{Deserialize, Serialize};

use crate::{PerfectTargets, ScoringOptionsError};

/// Default walking radius; roughly a fifteen-minute walk.
pub const DEFAULT_WALKING_RADIUS_KM: f64 = 1.0;
/// Default driving radius; roughly a ten-minute drive.
pub const DEFAULT_DRIVING_RADIUS_KM: f64 = 5.0;
/// Default radius for the urban density count.
pub const DEFAULT_URBAN_RADIUS_KM: f64 = 3.0;
/// Default minimum urban index classified as `Urban`.
pub const DEFAULT_URBAN_THRESHOLD: usize = 20;
/// Default minimum urban index classified as `Suburban`.
pub const DEFAULT_SUBURBAN_THRESHOLD: usize = 10;

/// Settings for [`compute_scores`](crate::compute_scores).
///
/// Every field has a default, and deserialisation fills in whatever a
/// document leaves out. Target tables left as `None` fall back to
/// [`PerfectTargets::defaults_for`] the matching mode.
///
/// # Examples
/// ```
/// use livability_scorer::ScoringOptions;
///
/// let options: ScoringOptions = serde_json::from_str(r#"{"walkingRadiusKm": 0.5}"#).unwrap();
/// assert_eq!(options.walking_radius_km, 0.5);
/// assert_eq!(options.driving_radius_km, 5.0);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoringOptions {
    /// Radius for the walking score, in kilometres.
    pub walking_radius_km: f64,
    /// Radius for the driving score, in kilometres.
    pub driving_radius_km: f64,
    /// Radius for the urban density count, in kilometres.
    pub urban_radius_km: f64,
    /// Inclusive lower bound of the `Urban` band.
    pub urban_threshold: usize,
    /// Inclusive lower bound of the `Suburban` band.
    pub suburban_threshold: usize,
    /// Walking target overrides.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub walking_targets: Option<PerfectTargets>,
    /// Driving target overrides.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driving_targets: Option<PerfectTargets>,
}

impl Default for ScoringOptions {
    fn default() -> Self {
        Self {
            walking_radius_km: DEFAULT_WALKING_RADIUS_KM,
            driving_radius_km: DEFAULT_DRIVING_RADIUS_KM,
            urban_radius_km: DEFAULT_URBAN_RADIUS_KM,
            urban_threshold: DEFAULT_URBAN_THRESHOLD,
            suburban_threshold: DEFAULT_SUBURBAN_THRESHOLD,
            walking_targets: None,
            driving_targets: None,
        }
    }
}

impl ScoringOptions {
    /// Return the options with the target table for `mode` replaced.
    #[must_use]
    pub fn with_targets(mut self, mode: TravelMode, targets: PerfectTargets) -> Self {
        match mode {
            TravelMode::Walking => self.walking_targets = Some(targets),
            TravelMode::Driving => self.driving_targets = Some(targets),
        }
        self
    }

    /// Return the target table in effect for `mode`.
    #[must_use]
    pub fn targets_for(&self, mode: TravelMode) -> Cow<'_, PerfectTargets> {
        let overrides = match mode {
            TravelMode::Walking => self.walking_targets.as_ref(),
            TravelMode::Driving => self.driving_targets.as_ref(),
        };
        overrides.map_or_else(
            || Cow::Owned(PerfectTargets::defaults_for(mode)),
            Cow::Borrowed,
        )
    }

    /// Report whether the thresholds leave a non-empty `Suburban` band.
    #[must_use]
    pub const fn thresholds_ordered(&self) -> bool {
        self.suburban_threshold < self.urban_threshold
    }

    /// Check the options for values that would score oddly.
    ///
    /// Scoring accepts anything; call this at an input boundary to reject
    /// non-finite or negative radii and a suburban threshold that is not
    /// below the urban threshold.
    ///
    /// # Errors
    /// Returns the first [`ScoringOptionsError`] found.
    pub fn validate(&self) -> Result<(), ScoringOptionsError> {
        for (field, value) in [
            ("walking radius", self.walking_radius_km),
            ("driving radius", self.driving_radius_km),
            ("urban radius", self.urban_radius_km),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ScoringOptionsError::InvalidRadius { field, value });
            }
        }
        if !self.thresholds_ordered() {
            return Err(ScoringOptionsError::InvertedThresholds {
                urban: self.urban_threshold,
                suburban: self.suburban_threshold,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use livability_core::AmenityCategory;
    use rstest::rstest;

    #[rstest]
    fn defaults_validate() {
        assert_eq!(ScoringOptions::default().validate(), Ok(()));
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    #[case(-0.5)]
    fn rejects_unusable_radii(#[case] radius: f64) {
        let options = ScoringOptions {
            driving_radius_km: radius,
            ..ScoringOptions::default()
        };
        match options.validate() {
            Err(ScoringOptionsError::InvalidRadius { field, .. }) => {
                assert_eq!(field, "driving radius");
            }
            other => panic!("expected InvalidRadius, found {other:?}"),
        }
    }

    #[rstest]
    #[case(10, 10)]
    #[case(5, 10)]
    fn rejects_inverted_thresholds(#[case] urban: usize, #[case] suburban: usize) {
        let options = ScoringOptions {
            urban_threshold: urban,
            suburban_threshold: suburban,
            ..ScoringOptions::default()
        };
        assert_eq!(
            options.validate(),
            Err(ScoringOptionsError::InvertedThresholds { urban, suburban })
        );
    }

    #[rstest]
    fn targets_fall_back_to_mode_defaults() {
        let options = ScoringOptions::default();
        assert_eq!(
            *options.targets_for(TravelMode::Driving),
            PerfectTargets::driving_defaults()
        );
    }

    #[rstest]
    fn overrides_are_borrowed() {
        let custom = PerfectTargets::walking_defaults().with_target(AmenityCategory::Grocery, 0);
        let options = ScoringOptions::default().with_targets(TravelMode::Walking, custom.clone());
        let effective = options.targets_for(TravelMode::Walking);
        assert!(matches!(effective, Cow::Borrowed(_)));
        assert_eq!(*effective, custom);
    }

    #[rstest]
    fn partial_documents_keep_defaults() {
        let options: ScoringOptions =
            serde_json::from_str(r#"{"urbanThreshold": 30, "walkingTargets": {"grocery": 1}}"#)
                .unwrap();
        assert_eq!(options.urban_threshold, 30);
        assert_eq!(options.suburban_threshold, DEFAULT_SUBURBAN_THRESHOLD);
        let walking = options.targets_for(TravelMode::Walking);
        assert_eq!(walking.get(AmenityCategory::Grocery), 1);
        assert_eq!(walking.get(AmenityCategory::Transit), 0);
    }
}
