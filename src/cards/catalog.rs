//! The loaded catalog: an immutable, ordered list of cards.
//!
//! Built once per process from the bundled dataset and never mutated.
//! Uses `im` persistent structures so handing the catalog to views and
//! bindings is an O(1) clone.

use im::{HashMap as ImHashMap, Vector};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::card::{Card, CardId};
use crate::error::{DecodeError, Result};

/// Informational header fields of the dataset.
///
/// Never used for pagination: the whole list is always loaded.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_cards: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_more: Option<bool>,
}

#[derive(Deserialize)]
struct CardListIn {
    #[serde(flatten)]
    metadata: CatalogMetadata,
    data: Vec<Card>,
}

#[derive(Serialize)]
struct CardListOut<'a> {
    #[serde(flatten)]
    metadata: &'a CatalogMetadata,
    data: &'a Vector<Card>,
}

/// Immutable ordered sequence of cards.
///
/// ## Example
///
/// ```
/// use mtg_catalog::cards::{CardCatalog, CardId};
///
/// let json = br#"{"object":"list","total_cards":1,"has_more":false,"data":[
///     {"id":"a1","name":"Lightning Bolt","type_line":"Instant","oracle_text":"3 damage"}
/// ]}"#;
///
/// let catalog = CardCatalog::decode(json).unwrap();
/// assert_eq!(catalog.len(), 1);
/// assert_eq!(catalog.get(&CardId::new("a1")).unwrap().name, "Lightning Bolt");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: Vector<Card>,
    /// id -> position in `cards`
    index: ImHashMap<CardId, usize>,
    metadata: CatalogMetadata,
}

impl CardCatalog {
    /// Decode the bundled dataset.
    ///
    /// Fails on malformed JSON, a missing `data` list, a card missing any of
    /// `id`/`name`/`type_line`/`oracle_text`, or a repeated id. A card whose
    /// `name` is present but empty is also rejected (`DecodeError::EmptyName`),
    /// so one blank-named record makes the whole dataset unavailable.
    /// Unknown fields are ignored.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let list: CardListIn = serde_json::from_slice(bytes)?;
        let catalog = Self::from_parts(list.data, list.metadata)?;

        debug!(
            cards = catalog.len(),
            total_cards = ?catalog.metadata.total_cards,
            "card catalog decoded"
        );
        Ok(catalog)
    }

    /// Decode, falling back to an empty catalog when the dataset is unusable.
    pub fn decode_or_empty(bytes: &[u8]) -> Self {
        match Self::decode(bytes) {
            Ok(catalog) => catalog,
            Err(error) => {
                warn!(%error, "card catalog unavailable, presenting an empty list");
                Self::default()
            }
        }
    }

    /// Build a catalog from already-constructed cards, keeping their order.
    ///
    /// Applies the same checks as `decode`. An empty legalities map is
    /// stored as `None`.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Result<Self> {
        Self::from_parts(cards, CatalogMetadata::default())
    }

    fn from_parts(cards: impl IntoIterator<Item = Card>, metadata: CatalogMetadata) -> Result<Self> {
        let mut catalog = Self {
            metadata,
            ..Self::default()
        };

        for mut card in cards {
            card.legalities = card.legalities.take().filter(|map| !map.is_empty());
            if card.name.is_empty() {
                return Err(DecodeError::EmptyName { id: card.id });
            }
            if catalog.index.contains_key(&card.id) {
                return Err(DecodeError::DuplicateId { id: card.id });
            }
            catalog.index.insert(card.id.clone(), catalog.cards.len());
            catalog.cards.push_back(card);
        }

        Ok(catalog)
    }

    /// Serialize back to the dataset layout.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let list = CardListOut {
            metadata: &self.metadata,
            data: &self.cards,
        };
        Ok(serde_json::to_vec(&list)?)
    }

    /// Look up a card by id.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&Card> {
        self.index.get(id).and_then(|&pos| self.cards.get(pos))
    }

    /// Check if an id is in the catalog.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.index.contains_key(id)
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over cards in dataset order.
    pub fn iter(&self) -> im::vector::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Header fields from the dataset.
    #[must_use]
    pub fn metadata(&self) -> &CatalogMetadata {
        &self.metadata
    }
}

impl PartialEq for CardCatalog {
    fn eq(&self, other: &Self) -> bool {
        self.metadata == other.metadata && self.cards == other.cards
    }
}

impl<'a> IntoIterator for &'a CardCatalog {
    type Item = &'a Card;
    type IntoIter = im::vector::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
