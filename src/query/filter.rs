//! Search-box filtering.

use crate::cards::{Card, CardCatalog};

use super::sort::{sort_by, SortCriterion};

/// Case-folded substring match on name or collector number.
///
/// An empty `search_text` matches everything. No diacritic or whitespace
/// normalization.
#[must_use]
pub fn matches_search(card: &Card, search_text: &str) -> bool {
    search_text.is_empty() || matches_lowered(card, &search_text.to_lowercase())
}

fn matches_lowered(card: &Card, needle: &str) -> bool {
    card.name.to_lowercase().contains(needle)
        || card
            .collector_number
            .as_ref()
            .is_some_and(|number| number.to_lowercase().contains(needle))
}

/// Keep the cards matching `search_text`, preserving their order.
///
/// Empty text returns the input unchanged.
pub fn filter<'a, I>(cards: I, search_text: &str) -> Vec<&'a Card>
where
    I: IntoIterator<Item = &'a Card>,
{
    if search_text.is_empty() {
        return cards.into_iter().collect();
    }

    let needle = search_text.to_lowercase();
    cards
        .into_iter()
        .filter(|card| matches_lowered(card, &needle))
        .collect()
}

/// The list the grid shows: sorted first, then filtered, so editing the
/// search text never reorders cards already on screen.
pub fn visible<'a>(
    catalog: &'a CardCatalog,
    criterion: SortCriterion,
    search_text: &str,
) -> Vec<&'a Card> {
    filter(sort_by(catalog, criterion), search_text)
}
