//! Card records as they appear in the bundled dataset.
//!
//! Field names follow the Scryfall JSON layout (`type_line`,
//! `collector_number`, `image_uris`, ...). Only `id`, `name`, `type_line`
//! and `oracle_text` are required; everything else decodes to `None` when
//! missing or `null`.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Deserializer, Serialize};
use smallvec::SmallVec;

/// Unique identifier for a card record.
///
/// Scryfall ids are UUIDs, but the catalog only relies on equality, so the
/// raw text is kept as-is.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// The four image renditions a record may link to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageKind {
    Small,
    Normal,
    Large,
    ArtCrop,
}

impl ImageKind {
    pub const ALL: [ImageKind; 4] = [
        ImageKind::Small,
        ImageKind::Normal,
        ImageKind::Large,
        ImageKind::ArtCrop,
    ];

    /// Dataset field name (`"art_crop"`, ...).
    #[must_use]
    pub fn as_key(self) -> &'static str {
        match self {
            ImageKind::Small => "small",
            ImageKind::Normal => "normal",
            ImageKind::Large => "large",
            ImageKind::ArtCrop => "art_crop",
        }
    }

    #[must_use]
    pub fn from_key(s: &str) -> Option<Self> {
        ImageKind::ALL.into_iter().find(|kind| kind.as_key() == s)
    }
}

/// Remote artwork URLs. Each rendition is independently optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUris {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub art_crop: Option<String>,
}

impl ImageUris {
    /// URL for one rendition, if the record has it.
    #[must_use]
    pub fn get(&self, kind: ImageKind) -> Option<&str> {
        match kind {
            ImageKind::Small => self.small.as_deref(),
            ImageKind::Normal => self.normal.as_deref(),
            ImageKind::Large => self.large.as_deref(),
            ImageKind::ArtCrop => self.art_crop.as_deref(),
        }
    }

    /// Set one rendition (builder pattern).
    #[must_use]
    pub fn with(mut self, kind: ImageKind, url: impl Into<String>) -> Self {
        let slot = match kind {
            ImageKind::Small => &mut self.small,
            ImageKind::Normal => &mut self.normal,
            ImageKind::Large => &mut self.large,
            ImageKind::ArtCrop => &mut self.art_crop,
        };
        *slot = Some(url.into());
        self
    }

    /// All renditions present on this record, in `ImageKind::ALL` order.
    #[must_use]
    pub fn available(&self) -> SmallVec<[(ImageKind, &str); 4]> {
        ImageKind::ALL
            .iter()
            .filter_map(|&kind| self.get(kind).map(|url| (kind, url)))
            .collect()
    }
}

/// Format name -> legality status text (`"legal"`, `"banned"`, ...).
///
/// Iteration order is unspecified; use `Card::sorted_legalities` for display.
pub type Legalities = FxHashMap<String, String>;

/// One catalog entry.
///
/// ## Example
///
/// ```
/// use mtg_catalog::cards::{Card, CardId};
///
/// let bolt = Card::new(CardId::new("e3285e6b"), "Lightning Bolt", "Instant", "Deal 3 damage.")
///     .with_legality("modern", "legal")
///     .with_legality("legacy", "legal");
///
/// assert_eq!(bolt.collector_number_or_empty(), "");
/// assert_eq!(bolt.sorted_legalities()[0].0, "legacy");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier, also the render-list key.
    pub id: CardId,

    /// Display name. Never empty in a decoded catalog.
    pub name: String,

    /// Free-text type classification ("Legendary Creature — Elf").
    pub type_line: String,

    /// Rules text.
    pub oracle_text: String,

    /// Printed collector number; text, not a number ("12a", "★3").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collector_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_uris: Option<ImageUris>,

    /// Per-format legality. Never `Some` of an empty map.
    #[serde(
        default,
        deserialize_with = "empty_legalities_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub legalities: Option<Legalities>,
}

fn empty_legalities_as_none<'de, D>(deserializer: D) -> Result<Option<Legalities>, D::Error>
where
    D: Deserializer<'de>,
{
    let legalities = Option::<Legalities>::deserialize(deserializer)?;
    Ok(legalities.filter(|map| !map.is_empty()))
}

impl Card {
    /// Create a card with only the required fields set.
    #[must_use]
    pub fn new(
        id: CardId,
        name: impl Into<String>,
        type_line: impl Into<String>,
        oracle_text: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            type_line: type_line.into(),
            oracle_text: oracle_text.into(),
            collector_number: None,
            image_uris: None,
            legalities: None,
        }
    }

    /// Set the collector number (builder pattern).
    #[must_use]
    pub fn with_collector_number(mut self, number: impl Into<String>) -> Self {
        self.collector_number = Some(number.into());
        self
    }

    /// Set the image URLs (builder pattern).
    #[must_use]
    pub fn with_image_uris(mut self, uris: ImageUris) -> Self {
        self.image_uris = Some(uris);
        self
    }

    /// Add one format legality (builder pattern).
    #[must_use]
    pub fn with_legality(mut self, format: impl Into<String>, status: impl Into<String>) -> Self {
        self.legalities
            .get_or_insert_with(Legalities::default)
            .insert(format.into(), status.into());
        self
    }

    /// Collector number, or `""` when the record has none.
    #[must_use]
    pub fn collector_number_or_empty(&self) -> &str {
        self.collector_number.as_deref().unwrap_or("")
    }

    /// URL of one image rendition, if present.
    #[must_use]
    pub fn image_url(&self, kind: ImageKind) -> Option<&str> {
        self.image_uris.as_ref().and_then(|uris| uris.get(kind))
    }

    /// Legality entries ordered by format name. Empty when absent.
    #[must_use]
    pub fn sorted_legalities(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .legalities
            .iter()
            .flatten()
            .map(|(format, status)| (format.as_str(), status.as_str()))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}
