//! Browser configuration parameters.

use serde::{Deserialize, Serialize};

use crate::cards::ImageKind;
use crate::query::SortCriterion;

/// Browser configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Sort order selected when the browser opens.
    pub default_sort: SortCriterion,

    /// Columns in the card grid.
    pub grid_columns: usize,

    /// Rendition used for grid thumbnails.
    pub thumbnail_image: ImageKind,

    /// Rendition shown at the top of the detail view.
    pub detail_image: ImageKind,

    /// Rendition shown in the tap-to-enlarge overlay.
    pub overlay_image: ImageKind,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            default_sort: SortCriterion::ByName,
            grid_columns: 3,
            thumbnail_image: ImageKind::Large,
            detail_image: ImageKind::ArtCrop,
            overlay_image: ImageKind::Large,
        }
    }
}

impl BrowserConfig {
    /// Create a new config with a different initial sort.
    #[must_use]
    pub fn with_default_sort(mut self, criterion: SortCriterion) -> Self {
        self.default_sort = criterion;
        self
    }

    /// Create a new config with a different grid width. Clamped to at least 1.
    #[must_use]
    pub fn with_grid_columns(mut self, columns: usize) -> Self {
        self.grid_columns = columns.max(1);
        self
    }

    /// Create a new config with a different thumbnail rendition.
    #[must_use]
    pub fn with_thumbnail_image(mut self, kind: ImageKind) -> Self {
        self.thumbnail_image = kind;
        self
    }

    /// Create a new config with a different detail rendition.
    #[must_use]
    pub fn with_detail_image(mut self, kind: ImageKind) -> Self {
        self.detail_image = kind;
        self
    }

    /// Create a new config with a different overlay rendition.
    #[must_use]
    pub fn with_overlay_image(mut self, kind: ImageKind) -> Self {
        self.overlay_image = kind;
        self
    }
}
