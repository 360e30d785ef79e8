//! Event dispatch for the catalog view.

use super::types::Event;
use super::Model;
use tracing::debug;

impl Model {
    /// Applies one user interaction to the state.
    ///
    /// Returns `false` only for page navigation requests that were rejected;
    /// every other event always changes the state.
    pub fn dispatch(&mut self, event: Event) -> bool {
        debug!(?event, "dispatching catalog event");
        match event {
            Event::Search(term) => {
                self.apply_search(&term);
                true
            }
            Event::SetPageSize(size) => {
                self.set_page_size(size);
                true
            }
            Event::Sort(field, order) => {
                self.apply_sort(field, order);
                true
            }
            Event::GoToPage(n) => self.go_to_page(n),
        }
    }
}

/// By-value form of [`Model::dispatch`] that returns the updated state.
///
/// ```
/// use catalog_view::catalog::{dispatch, Event, Model};
/// use catalog_view::product::Product;
///
/// let state = Model::new((1..=15).map(|i| Product::new(i, format!("Item {i}"), 1.0)).collect(), 10);
/// let state = dispatch(state, Event::GoToPage(2));
/// assert_eq!(state.current_slice().len(), 5);
/// ```
pub fn dispatch(mut state: Model, event: Event) -> Model {
    state.dispatch(event);
    state
}
