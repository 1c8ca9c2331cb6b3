//! Map place-provider category identifiers onto amenity categories.
//!
//! Providers such as Geoapify tag places with dotted identifiers
//! (`catering.cafe`, `public_transport.bus`). Each amenity category is fed by
//! a fixed group of those identifiers; a more specific child identifier maps
//! like its closest listed ancestor.

use crate::AmenityCategory;

/// Provider identifiers grouped by the category they feed.
pub static PLACE_CATEGORY_GROUPS: [(AmenityCategory, &[&str]); 9] = [
    (
        AmenityCategory::Grocery,
        &["commercial.supermarket", "commercial.convenience"],
    ),
    (
        AmenityCategory::Restaurant,
        &["catering.restaurant", "catering.fast_food"],
    ),
    (AmenityCategory::Cafe, &["catering.cafe"]),
    (
        AmenityCategory::Park,
        &["leisure.park", "leisure.playground"],
    ),
    (
        AmenityCategory::School,
        &[
            "education.school",
            "education.university",
            "education.library",
        ],
    ),
    (AmenityCategory::Transit, &["public_transport"]),
    (
        AmenityCategory::Healthcare,
        &[
            "healthcare.hospital",
            "healthcare.pharmacy",
            "healthcare.clinic_or_praxis",
        ],
    ),
    (
        AmenityCategory::Shopping,
        &["commercial.shopping_mall", "commercial.clothing"],
    ),
    (
        AmenityCategory::Entertainment,
        &[
            "entertainment.cinema",
            "entertainment.culture",
            "sport.fitness",
            "sport.sports_centre",
        ],
    ),
];

fn covers(group_id: &str, place_id: &str) -> bool {
    place_id
        .strip_prefix(group_id)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('.'))
}

impl AmenityCategory {
    /// Resolve a provider category identifier.
    ///
    /// Returns `None` for identifiers outside every group; callers decide
    /// whether such places become [`AmenityCategory::Other`] or are dropped.
    ///
    /// # Examples
    /// ```
    /// use livability_core::AmenityCategory;
    ///
    /// assert_eq!(
    ///     AmenityCategory::from_place_category("catering.cafe.coffee_shop"),
    ///     Some(AmenityCategory::Cafe)
    /// );
    /// assert_eq!(AmenityCategory::from_place_category("catering.bar"), None);
    /// ```
    #[must_use]
    pub fn from_place_category(place_id: &str) -> Option<Self> {
        let place_id = place_id.trim();
        PLACE_CATEGORY_GROUPS
            .iter()
            .flat_map(|(category, ids)| ids.iter().map(move |id| (*category, *id)))
            .filter(|(_, id)| covers(id, place_id))
            .max_by_key(|(_, id)| id.len())
            .map(|(category, _)| category)
    }

    /// Provider identifiers that feed this category. Empty for `other`.
    #[must_use]
    pub fn place_categories(self) -> &'static [&'static str] {
        PLACE_CATEGORY_GROUPS
            .iter()
            .find(|(category, _)| *category == self)
            .map(|(_, ids)| *ids)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("commercial.supermarket", Some(AmenityCategory::Grocery))]
    #[case("catering.fast_food", Some(AmenityCategory::Restaurant))]
    #[case("public_transport.bus", Some(AmenityCategory::Transit))]
    #[case("public_transport", Some(AmenityCategory::Transit))]
    #[case("healthcare.clinic_or_praxis.dentist", Some(AmenityCategory::Healthcare))]
    #[case("sport.sports_centre", Some(AmenityCategory::Entertainment))]
    #[case("leisure.playground", Some(AmenityCategory::Park))]
    #[case("commercial", None)]
    #[case("catering.cafeteria", None)]
    #[case("public_transportation", None)]
    #[case("", None)]
    fn resolves_provider_identifiers(
        #[case] place_id: &str,
        #[case] expected: Option<AmenityCategory>,
    ) {
        assert_eq!(AmenityCategory::from_place_category(place_id), expected);
    }

    #[rstest]
    fn every_scorable_category_has_a_group() {
        for category in AmenityCategory::scorable() {
            assert!(
                !category.place_categories().is_empty(),
                "{category} has no provider group"
            );
        }
        assert!(AmenityCategory::Other.place_categories().is_empty());
    }
}
