//! # mtg-catalog
//!
//! In-memory query model for a trading-card catalog browser.
//!
//! ## Design Principles
//!
//! 1. **Load Once**: The bundled dataset is decoded a single time into an
//!    immutable `CardCatalog`. Nothing mutates it afterwards.
//!
//! 2. **Pure Queries**: Sorting, searching and legality classification are
//!    side-effect-free functions over borrowed cards.
//!
//! 3. **Unidirectional Flow**: `Browser` holds the only mutable state
//!    (sort, search text, selection, overlay). Views are recomputed from it.
//!
//! ## Modules
//!
//! - `cards`: Card records, image URLs, legalities, catalog decode/encode
//! - `query`: `sort_by`, `filter`, `visible`, `classify`
//! - `browser`: Browser state, events, config and view models
//! - `error`: `DecodeError`
//!
//! Enable the `python` feature for PyO3 bindings.

pub mod browser;
pub mod cards;
pub mod error;
pub mod query;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::cards::{Card, CardCatalog, CardId, CatalogMetadata, ImageKind, ImageUris, Legalities};

pub use crate::query::{
    classify, filter, sort_by, visible,
    BadgeColor, LegalityStatus, SortCriterion,
};

pub use crate::browser::{
    Browser, BrowserConfig, BrowserEvent,
    CardDetail, CardTile, ImageLoad, ImageSlot, LegalityRow, SlotDisplay,
};

pub use crate::error::{DecodeError, Result};
