//! Catalog query engine: pure functions over borrowed cards.
//!
//! - `sort_by`: stable sort by name or collector number
//! - `filter`: case-folded substring search
//! - `visible`: `filter(sort_by(..), ..)`, the list the grid shows
//! - `classify`: legality text to badge status
//!
//! Nothing is cached; every call recomputes over the whole catalog.

pub mod filter;
pub mod legality;
pub mod sort;

pub use filter::{filter, matches_search, visible};
pub use legality::{classify, BadgeColor, LegalityStatus};
pub use sort::{sort_by, SortCriterion};
