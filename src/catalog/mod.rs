//! Client-side list view state over the fetched product list.
//!
//! The state holds an immutable `source` list, a derived `view` (the source
//! after search and sort) and a pagination cursor over the view. Every
//! interaction recomputes what it needs and returns to page 1, except page
//! navigation itself.
//!
//! ## Operations
//!
//! - [`Model::apply_search`]: case-insensitive substring match on titles
//! - [`Model::apply_sort`]: stable sort by price or title, either direction
//! - [`Model::set_page_size`]: change the page size
//! - [`Model::go_to_page`]: navigate, ignoring out-of-range requests
//! - [`Model::current_slice`]: the products on the current page
//! - [`Model::dispatch`]: apply an [`Event`]
//!
//! ## Example
//!
//! ```
//! use catalog_view::catalog::{Event, Model, SortField, SortOrder};
//! use catalog_view::product::Product;
//!
//! let products = (1..=15).map(|i| Product::new(i, format!("Product {i}"), i as f64)).collect();
//! let mut catalog = Model::new(products, 10);
//!
//! catalog.dispatch(Event::Sort(SortField::Price, SortOrder::Descending));
//! catalog.dispatch(Event::GoToPage(2));
//!
//! assert_eq!(catalog.page(), 2);
//! assert_eq!(catalog.current_slice().len(), 5);
//! assert_eq!(catalog.current_slice()[0].id, 5);
//! ```

mod dispatch;
mod filtering;
mod model;
mod sorting;
mod types;

#[cfg(test)]
mod tests;

pub use dispatch::dispatch;
pub use filtering::normalize_term;
pub use model::{Model, DEFAULT_PAGE_SIZE};
pub use types::{Event, SortField, SortOrder, SortSpec};
