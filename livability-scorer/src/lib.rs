//! Livability scoring for a geographic point.
//!
//! Given the amenities around a location, the crate derives three metrics:
//! - a **walking score** from the amenities within a short radius,
//! - a **driving score** from the amenities within a longer radius,
//! - an **urban index**, the number of non-park amenities within a third
//!   radius, banded into `Urban`, `Suburban` or `Rural`.
//!
//! Scores are weighted averages of how close each category comes to its
//! [`PerfectTargets`] entry, using the registry weights from
//! [`livability_core`]. Every function is pure: calls share nothing but the
//! read-only category registry and may run concurrently.
//!
//! # Examples
//!
//! ```
//! use livability_scorer::{ScoringOptions, UrbanLabel, compute_scores};
//!
//! let result = compute_scores(&[], 40.7128, -74.006, &ScoringOptions::default());
//! assert_eq!(result.walking_score, 0);
//! assert_eq!(result.driving_score, 0);
//! assert_eq!(result.urban_label, UrbanLabel::Rural);
//! assert!(result.walking_breakdown.is_empty());
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod engine;
mod error;
mod options;
mod targets;
mod types;

pub use engine::{category_counts, classify_urban, compute_score, compute_scores, urban_index};
pub use error::ScoringOptionsError;
pub use options::{
    DEFAULT_DRIVING_RADIUS_KM, DEFAULT_SUBURBAN_THRESHOLD, DEFAULT_URBAN_RADIUS_KM,
    DEFAULT_URBAN_THRESHOLD, DEFAULT_WALKING_RADIUS_KM, ScoringOptions,
};
pub use targets::PerfectTargets;
pub use types::{CategoryCount, ScoreResult, UrbanLabel};
