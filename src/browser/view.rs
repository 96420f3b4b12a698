//! View models handed to the rendering layer.
//!
//! These are owned snapshots: the renderer can keep them across frames
//! without borrowing the browser.

use serde::Serialize;

use crate::cards::{Card, CardId, ImageKind};
use crate::query::{classify, BadgeColor, LegalityStatus};

/// What an image slot points at.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ImageSlot {
    /// The card has no URL for this rendition.
    Placeholder,
    /// Fetched by the shell.
    Remote { url: String },
}

/// Fetch outcome for a remote slot, owned and reported by the shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageLoad {
    Loading,
    Loaded,
    Failed,
}

/// What to draw in a slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotDisplay {
    /// Generic photo icon.
    PlaceholderIcon,
    Spinner,
    Image,
    /// Warning triangle.
    ErrorIcon,
}

impl ImageSlot {
    /// Slot for one rendition of `card`.
    #[must_use]
    pub fn for_card(card: &Card, kind: ImageKind) -> Self {
        match card.image_url(kind) {
            Some(url) => ImageSlot::Remote { url: url.to_owned() },
            None => ImageSlot::Placeholder,
        }
    }

    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            ImageSlot::Remote { url } => Some(url),
            ImageSlot::Placeholder => None,
        }
    }

    /// Resolve the slot against the shell's fetch state.
    #[must_use]
    pub fn display(&self, load: ImageLoad) -> SlotDisplay {
        match (self, load) {
            (ImageSlot::Placeholder, _) => SlotDisplay::PlaceholderIcon,
            (ImageSlot::Remote { .. }, ImageLoad::Loading) => SlotDisplay::Spinner,
            (ImageSlot::Remote { .. }, ImageLoad::Loaded) => SlotDisplay::Image,
            (ImageSlot::Remote { .. }, ImageLoad::Failed) => SlotDisplay::ErrorIcon,
        }
    }
}

/// One cell of the card grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CardTile {
    pub id: CardId,
    pub name: String,
    pub thumbnail: ImageSlot,
}

impl CardTile {
    #[must_use]
    pub fn new(card: &Card, thumbnail: ImageKind) -> Self {
        Self {
            id: card.id.clone(),
            name: card.name.clone(),
            thumbnail: ImageSlot::for_card(card, thumbnail),
        }
    }
}

/// One badge row in the legalities section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LegalityRow {
    pub format: String,
    /// Status text exactly as stored in the dataset.
    pub status: String,
    pub classification: LegalityStatus,
    pub color: BadgeColor,
}

impl LegalityRow {
    #[must_use]
    pub fn new(format: &str, status: &str) -> Self {
        let classification = classify(status);
        Self {
            format: format.to_owned(),
            status: status.to_owned(),
            classification,
            color: classification.badge_color(),
        }
    }
}

/// Detail screen for the selected card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CardDetail {
    pub id: CardId,
    /// Also used as the navigation title.
    pub name: String,
    /// `"Collector Number: N"`, absent when the card has none.
    pub collector_number_line: Option<String>,
    pub type_line: String,
    pub oracle_text: String,
    pub art: ImageSlot,
    /// Enlarged image, present only while the overlay is shown. A
    /// `Placeholder` here means a backdrop with no image.
    pub overlay: Option<ImageSlot>,
    /// Rows sorted by format name; `None` hides the section.
    pub legalities: Option<Vec<LegalityRow>>,
}

impl CardDetail {
    #[must_use]
    pub fn new(card: &Card, art: ImageKind, overlay: Option<ImageKind>) -> Self {
        let rows: Vec<LegalityRow> = card
            .sorted_legalities()
            .into_iter()
            .map(|(format, status)| LegalityRow::new(format, status))
            .collect();

        Self {
            id: card.id.clone(),
            name: card.name.clone(),
            collector_number_line: card
                .collector_number
                .as_ref()
                .map(|number| format!("Collector Number: {number}")),
            type_line: card.type_line.clone(),
            oracle_text: card.oracle_text.clone(),
            art: ImageSlot::for_card(card, art),
            overlay: overlay.map(|kind| ImageSlot::for_card(card, kind)),
            legalities: (!rows.is_empty()).then_some(rows),
        }
    }
}
