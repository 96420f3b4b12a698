//! Card catalog model: records and the immutable catalog that holds them.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for a card record
//! - `Card`: One dataset entry with optional images and legalities
//! - `ImageUris` / `ImageKind`: Remote artwork renditions
//! - `CardCatalog`: Ordered, read-only list decoded from the dataset
//!
//! Decoding takes bytes the caller already read; nothing here touches the
//! filesystem or network.

pub mod card;
pub mod catalog;

pub use card::{Card, CardId, ImageKind, ImageUris, Legalities};
pub use catalog::{CardCatalog, CatalogMetadata};
