use std::collections::BTreeMap;

use geo::Coord;

use crate::AmenityCategory;

/// Free-form provider metadata attached to an amenity.
pub type Tags = BTreeMap<String, String>;

/// A point of interest near a scored location.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`. Amenities
/// are plain values: the scorer only ever reads them.
///
/// With the `serde` feature the record uses the flat wire shape
/// `{id, lat, lng, name, type, category, tags}`. Numeric identifiers are
/// accepted and stored as strings.
///
/// # Examples
/// ```
/// use livability_core::{Amenity, AmenityCategory};
///
/// let amenity = Amenity::new("42", 40.7128, -74.006, "Corner Shop", AmenityCategory::Grocery)
///     .with_kind("supermarket");
///
/// assert_eq!(amenity.lat(), 40.7128);
/// assert_eq!(amenity.kind.as_deref(), Some("supermarket"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "wire::AmenityRecord", into = "wire::AmenityRecord")
)]
pub struct Amenity {
    /// Opaque identifier, unique within one result set.
    pub id: String,
    /// Geospatial position.
    pub location: Coord<f64>,
    /// Display name.
    pub name: String,
    /// Provider-specific type, e.g. `supermarket` or `bus_stop`.
    pub kind: Option<String>,
    /// Scoring category.
    pub category: AmenityCategory,
    /// Provider metadata.
    pub tags: Tags,
}

impl Amenity {
    /// Construct an amenity from decimal-degree coordinates.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        lat: f64,
        lng: f64,
        name: impl Into<String>,
        category: AmenityCategory,
    ) -> Self {
        Self {
            id: id.into(),
            location: Coord { x: lng, y: lat },
            name: name.into(),
            kind: None,
            category,
            tags: Tags::new(),
        }
    }

    /// Attach a provider-specific type.
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Attach a metadata tag, replacing any existing value for `key`.
    #[must_use]
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    /// Latitude in decimal degrees.
    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.location.y
    }

    /// Longitude in decimal degrees.
    #[must_use]
    pub const fn lng(&self) -> f64 {
        self.location.x
    }
}

#[cfg(feature = "serde")]
mod wire {
    use geo::Coord;
    use serde::{Deserialize, Serialize};

    use super::{Amenity, Tags};
    use crate::AmenityCategory;

    #[derive(Debug, Clone, Serialize, Deserialize)]
    #[serde(untagged)]
    pub(super) enum RawId {
        Number(u64),
        Text(String),
    }

    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub(super) struct AmenityRecord {
        id: RawId,
        lat: f64,
        lng: f64,
        #[serde(default)]
        name: String,
        #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
        kind: Option<String>,
        #[serde(default = "unclassified")]
        category: AmenityCategory,
        #[serde(default, skip_serializing_if = "Tags::is_empty")]
        tags: Tags,
    }

    // Records without a category are kept but never scored.
    const fn unclassified() -> AmenityCategory {
        AmenityCategory::Other
    }

    impl From<AmenityRecord> for Amenity {
        fn from(record: AmenityRecord) -> Self {
            let id = match record.id {
                RawId::Number(value) => value.to_string(),
                RawId::Text(value) => value,
            };
            Self {
                id,
                location: Coord {
                    x: record.lng,
                    y: record.lat,
                },
                name: record.name,
                kind: record.kind,
                category: record.category,
                tags: record.tags,
            }
        }
    }

    impl From<Amenity> for AmenityRecord {
        fn from(amenity: Amenity) -> Self {
            Self {
                id: RawId::Text(amenity.id),
                lat: amenity.location.y,
                lng: amenity.location.x,
                name: amenity.name,
                kind: amenity.kind,
                category: amenity.category,
                tags: amenity.tags,
            }
        }
    }
}
