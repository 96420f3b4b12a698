//! Card and catalog bindings for Python.

use pyo3::prelude::*;

use crate::cards::{Card, CardCatalog, CardId, ImageKind};
use crate::query::{self, SortCriterion};

fn parse_criterion(key: &str) -> PyResult<SortCriterion> {
    SortCriterion::from_config_key(key).ok_or_else(|| {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("unknown sort criterion: {key}"))
    })
}

fn parse_image_kind(key: &str) -> PyResult<ImageKind> {
    ImageKind::from_key(key).ok_or_else(|| {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("unknown image kind: {key}"))
    })
}

/// Python wrapper for Card.
#[pyclass(name = "Card")]
#[derive(Clone)]
pub struct PyCard(pub Card);

#[pymethods]
impl PyCard {
    #[getter]
    fn id(&self) -> &str {
        self.0.id.as_str()
    }

    #[getter]
    fn name(&self) -> &str {
        &self.0.name
    }

    #[getter]
    fn type_line(&self) -> &str {
        &self.0.type_line
    }

    #[getter]
    fn oracle_text(&self) -> &str {
        &self.0.oracle_text
    }

    #[getter]
    fn collector_number(&self) -> Option<&str> {
        self.0.collector_number.as_deref()
    }

    /// Image URL for `small`, `normal`, `large` or `art_crop`.
    ///
    /// Raises ValueError for any other kind; returns None when the card has
    /// no URL for that rendition.
    fn image_url(&self, kind: &str) -> PyResult<Option<&str>> {
        let kind = parse_image_kind(kind)?;
        Ok(self.0.image_url(kind))
    }

    /// Legalities as `(format, status)` pairs sorted by format.
    fn legalities(&self) -> Vec<(String, String)> {
        self.0
            .sorted_legalities()
            .into_iter()
            .map(|(format, status)| (format.to_owned(), status.to_owned()))
            .collect()
    }

    fn __repr__(&self) -> String {
        format!("Card(id={}, name={:?})", self.0.id, self.0.name)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Python wrapper for CardCatalog.
#[pyclass(name = "CardCatalog")]
#[derive(Clone)]
pub struct PyCardCatalog(pub CardCatalog);

#[pymethods]
impl PyCardCatalog {
    /// Decode the bundled dataset bytes. Raises ValueError when malformed.
    #[staticmethod]
    fn decode(data: &[u8]) -> PyResult<Self> {
        CardCatalog::decode(data)
            .map(Self)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))
    }

    /// Decode, or an empty catalog when the dataset is unusable.
    #[staticmethod]
    fn decode_or_empty(data: &[u8]) -> Self {
        Self(CardCatalog::decode_or_empty(data))
    }

    fn get(&self, id: &str) -> Option<PyCard> {
        self.0.get(&CardId::new(id)).cloned().map(PyCard)
    }

    fn cards(&self) -> Vec<PyCard> {
        self.0.iter().cloned().map(PyCard).collect()
    }

    /// Sort by `"name"` or `"collector_number"`.
    fn sort_by(&self, criterion: &str) -> PyResult<Vec<PyCard>> {
        let criterion = parse_criterion(criterion)?;
        Ok(query::sort_by(&self.0, criterion)
            .into_iter()
            .cloned()
            .map(PyCard)
            .collect())
    }

    /// Sorted then filtered, as the grid shows it.
    fn visible(&self, criterion: &str, search_text: &str) -> PyResult<Vec<PyCard>> {
        let criterion = parse_criterion(criterion)?;
        Ok(query::visible(&self.0, criterion, search_text)
            .into_iter()
            .cloned()
            .map(PyCard)
            .collect())
    }

    fn __len__(&self) -> usize {
        self.0.len()
    }

    fn __repr__(&self) -> String {
        format!("CardCatalog(len={})", self.0.len())
    }
}

/// Keep the cards matching `search_text`, preserving order.
#[pyfunction]
pub fn filter(cards: Vec<PyCard>, search_text: &str) -> Vec<PyCard> {
    cards
        .into_iter()
        .filter(|card| query::matches_search(&card.0, search_text))
        .collect()
}

/// Classify a legality status string: `"legal"`, `"not legal"`,
/// `"restricted"`, `"banned"` or `"unknown"`.
#[pyfunction]
pub fn classify(status: &str) -> &'static str {
    query::classify(status).as_str()
}
