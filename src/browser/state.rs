//! Browser state and the events that change it.
//!
//! `Browser` is the single source of truth for the shell. Events update a
//! handful of fields; the grid and detail view are recomputed from the
//! catalog on every read.

use tracing::{trace, warn};

use super::config::BrowserConfig;
use super::view::{CardDetail, CardTile};
use crate::cards::{Card, CardCatalog, CardId};
use crate::query::{visible, SortCriterion};

/// User interaction reported by the shell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BrowserEvent {
    /// Search field edited.
    SearchChanged(String),
    /// Clear button tapped.
    SearchCleared,
    /// Sort picker changed.
    SortChanged(SortCriterion),
    /// Grid tile tapped.
    CardSelected(CardId),
    /// Navigated back from the detail view.
    Back,
    /// Detail art tapped: show the enlarged overlay.
    ArtTapped,
    /// Overlay backdrop tapped.
    OverlayDismissed,
}

/// Catalog browser state.
///
/// ## Example
///
/// ```
/// use mtg_catalog::browser::{Browser, BrowserConfig, BrowserEvent};
/// use mtg_catalog::cards::{Card, CardCatalog, CardId};
///
/// let catalog = CardCatalog::from_cards(vec![
///     Card::new(CardId::new("1"), "Zebra", "", ""),
///     Card::new(CardId::new("2"), "Apple", "", ""),
/// ])
/// .unwrap();
///
/// let mut browser = Browser::new(catalog, BrowserConfig::default());
/// browser.apply(BrowserEvent::SearchChanged("app".into()));
///
/// let names: Vec<_> = browser.visible().iter().map(|c| c.name.as_str()).collect();
/// assert_eq!(names, vec!["Apple"]);
/// ```
#[derive(Clone, Debug)]
pub struct Browser {
    catalog: CardCatalog,
    config: BrowserConfig,
    sort: SortCriterion,
    search_text: String,
    selected: Option<CardId>,
    overlay_shown: bool,
}

impl Browser {
    /// Create a browser over a loaded catalog.
    #[must_use]
    pub fn new(catalog: CardCatalog, config: BrowserConfig) -> Self {
        Self {
            catalog,
            sort: config.default_sort,
            config,
            search_text: String::new(),
            selected: None,
            overlay_shown: false,
        }
    }

    /// Apply one user interaction.
    pub fn apply(&mut self, event: BrowserEvent) {
        trace!(?event, "browser event");

        match event {
            BrowserEvent::SearchChanged(text) => self.search_text = text,
            BrowserEvent::SearchCleared => self.search_text.clear(),
            BrowserEvent::SortChanged(criterion) => self.sort = criterion,
            BrowserEvent::CardSelected(id) => {
                if self.catalog.contains(&id) {
                    self.selected = Some(id);
                    self.overlay_shown = false;
                } else {
                    warn!(card_id = %id, "ignoring selection of a card not in the catalog");
                }
            }
            BrowserEvent::Back => {
                self.selected = None;
                self.overlay_shown = false;
            }
            BrowserEvent::ArtTapped => {
                if self.selected.is_some() {
                    self.overlay_shown = true;
                }
            }
            BrowserEvent::OverlayDismissed => self.overlay_shown = false,
        }
    }

    /// Cards currently shown in the grid, in display order.
    #[must_use]
    pub fn visible(&self) -> Vec<&Card> {
        visible(&self.catalog, self.sort, &self.search_text)
    }

    /// Grid tiles for `visible()`.
    #[must_use]
    pub fn tiles(&self) -> Vec<CardTile> {
        self.visible()
            .into_iter()
            .map(|card| CardTile::new(card, self.config.thumbnail_image))
            .collect()
    }

    /// `tiles()` split into grid rows.
    #[must_use]
    pub fn tile_rows(&self) -> Vec<Vec<CardTile>> {
        self.tiles()
            .chunks(self.config.grid_columns.max(1))
            .map(<[CardTile]>::to_vec)
            .collect()
    }

    /// Detail view for the selected card, if any.
    #[must_use]
    pub fn detail(&self) -> Option<CardDetail> {
        let card = self.selected_card()?;
        let overlay = self.overlay_shown.then_some(self.config.overlay_image);
        Some(CardDetail::new(card, self.config.detail_image, overlay))
    }

    #[must_use]
    pub fn selected_card(&self) -> Option<&Card> {
        self.selected.as_ref().and_then(|id| self.catalog.get(id))
    }

    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn config(&self) -> &BrowserConfig {
        &self.config
    }

    #[must_use]
    pub fn sort(&self) -> SortCriterion {
        self.sort
    }

    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// The clear button is only shown while there is text to clear.
    #[must_use]
    pub fn search_clear_visible(&self) -> bool {
        !self.search_text.is_empty()
    }

    #[must_use]
    pub fn overlay_shown(&self) -> bool {
        self.overlay_shown
    }
}
