//! Categories command: dump the registry with its default targets.

use std::io::Write;

use livability_core::{AmenityCategory, registry};
use livability_scorer::PerfectTargets;
use serde::Serialize;

use crate::CliError;
use crate::score::write_json;

/// One registry row as printed by `livability categories`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CategoryEntry {
    pub(crate) category: AmenityCategory,
    pub(crate) label: &'static str,
    pub(crate) walking_weight: f64,
    pub(crate) driving_weight: f64,
    pub(crate) walking_target: u32,
    pub(crate) driving_target: u32,
    pub(crate) color: &'static str,
    pub(crate) icon: &'static str,
    pub(crate) place_categories: &'static [&'static str],
}

pub(crate) fn category_entries() -> Vec<CategoryEntry> {
    let walking = PerfectTargets::walking_defaults();
    let driving = PerfectTargets::driving_defaults();
    registry()
        .map(|(category, config)| CategoryEntry {
            category,
            label: config.label,
            walking_weight: config.walking_weight,
            driving_weight: config.driving_weight,
            walking_target: walking.get(category),
            driving_target: driving.get(category),
            color: config.color,
            icon: config.icon,
            place_categories: category.place_categories(),
        })
        .collect()
}

pub(crate) fn run_categories() -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_categories_with(&mut stdout)
}

pub(crate) fn run_categories_with(writer: &mut dyn Write) -> Result<(), CliError> {
    write_json(writer, &category_entries())
}
