//! Sorting the catalog for display.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Sort order offered by the grid's segmented picker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortCriterion {
    /// Ascending by name, case-sensitive.
    #[default]
    #[serde(rename = "name")]
    ByName,
    /// Ascending by collector number as text; absent sorts as `""`.
    #[serde(rename = "collector_number")]
    ByCollectorNumber,
}

impl SortCriterion {
    /// Picker order.
    pub const ALL: [SortCriterion; 2] = [SortCriterion::ByName, SortCriterion::ByCollectorNumber];

    /// Label shown on the picker segment.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SortCriterion::ByName => "Name",
            SortCriterion::ByCollectorNumber => "Collector Number",
        }
    }

    #[must_use]
    pub fn as_config_key(self) -> &'static str {
        match self {
            SortCriterion::ByName => "name",
            SortCriterion::ByCollectorNumber => "collector_number",
        }
    }

    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "name" | "by_name" => Some(SortCriterion::ByName),
            "collector_number" | "collector number" | "number" => {
                Some(SortCriterion::ByCollectorNumber)
            }
            _ => None,
        }
    }
}

/// Order cards by `criterion`.
///
/// Stable: cards that compare equal keep their input order. The input is
/// only borrowed; the result is a new sequence.
pub fn sort_by<'a, I>(cards: I, criterion: SortCriterion) -> Vec<&'a Card>
where
    I: IntoIterator<Item = &'a Card>,
{
    let mut sorted: Vec<&Card> = cards.into_iter().collect();
    match criterion {
        SortCriterion::ByName => sorted.sort_by(|a, b| a.name.cmp(&b.name)),
        SortCriterion::ByCollectorNumber => {
            sorted.sort_by(|a, b| a.collector_number_or_empty().cmp(b.collector_number_or_empty()))
        }
    }
    sorted
}
