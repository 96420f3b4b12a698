//! Presentation-agnostic browser: state, events and view models.
//!
//! The shell owns rendering and image fetching. It forwards interactions
//! as `BrowserEvent`s and draws whatever `Browser::tiles` and
//! `Browser::detail` return. Remote images are reported back per slot as
//! an `ImageLoad` and resolved with `ImageSlot::display`.

pub mod config;
pub mod state;
pub mod view;

pub use config::BrowserConfig;
pub use state::{Browser, BrowserEvent};
pub use view::{CardDetail, CardTile, ImageLoad, ImageSlot, LegalityRow, SlotDisplay};
