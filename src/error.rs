//! Errors raised while loading the bundled card dataset.

use thiserror::Error;

use crate::cards::CardId;

/// Failure to turn dataset bytes into a `CardCatalog`.
///
/// Reported once at load time. There is no partial recovery: a shell that
/// receives this should present an empty catalog (see
/// `CardCatalog::decode_or_empty`).
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Bytes are not well-formed JSON, or a required field is missing or
    /// has the wrong type.
    #[error("malformed card dataset: {0}")]
    Json(#[from] serde_json::Error),

    /// A card decoded with an empty `name`.
    #[error("card {id} has an empty name")]
    EmptyName { id: CardId },

    /// Two records share the same `id`.
    #[error("duplicate card id {id}")]
    DuplicateId { id: CardId },
}

pub type Result<T> = std::result::Result<T, DecodeError>;
