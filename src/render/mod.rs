//! Rendering: a pure view model and the surfaces that format it.
//!
//! [`ViewModel::from_state`] is the only place that reads catalog state for
//! display. The [`html`] and [`terminal`] surfaces take the resulting
//! [`ViewModel`] and produce markup or styled text.

pub mod html;
pub mod terminal;
mod view_model;

pub use view_model::{
    PageControl, PaginationStrip, ProductRow, ViewModel, COLUMN_COUNT, COLUMN_TITLES, NO_RESULTS,
};
