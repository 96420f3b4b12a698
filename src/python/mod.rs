//! Python bindings for the card catalog.
//!
//! # Quick Start
//!
//! ```python
//! import mtg_catalog as mc
//!
//! with open("WOT-Scryfall.json", "rb") as f:
//!     catalog = mc.CardCatalog.decode_or_empty(f.read())
//!
//! for card in catalog.visible("name", "bolt"):
//!     print(card.name, [(fmt, mc.classify(s)) for fmt, s in card.legalities()])
//! ```

use pyo3::prelude::*;

mod py_cards;

pub use py_cards::*;

/// mtg_catalog: card catalog decoding, sorting and search.
#[pymodule]
fn mtg_catalog(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCard>()?;
    m.add_class::<PyCardCatalog>()?;

    m.add_function(wrap_pyfunction!(filter, m)?)?;
    m.add_function(wrap_pyfunction!(classify, m)?)?;

    Ok(())
}
