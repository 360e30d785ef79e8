//! Main Model struct and core functionality for the catalog view.
//!
//! This module contains the state object that holds the fetched products,
//! the derived view and the pagination cursor, along with construction,
//! page navigation and accessor methods. Search and sort live in their own
//! modules.

use super::types::SortSpec;
use crate::paginator;
use crate::product::Product;

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Client-side list view over a fetched product list.
///
/// `source` is fixed at construction. The `view` is a list of indices into
/// `source` that reflects the active search term and sort spec; every page
/// operation works over the view.
///
/// # Examples
///
/// ```
/// use catalog_view::catalog::{Model, SortField, SortOrder};
/// use catalog_view::product::Product;
///
/// let products = vec![
///     Product::new(1, "Smartphone X", 699.0),
///     Product::new(2, "Laptop", 1299.0),
///     Product::new(3, "Phone Case", 19.0),
/// ];
/// let mut catalog = Model::new(products, 10);
///
/// catalog.apply_search("phone");
/// catalog.apply_sort(SortField::Price, SortOrder::Ascending);
///
/// let titles: Vec<&str> = catalog.current_slice().iter().map(|p| p.title()).collect();
/// assert_eq!(titles, ["Phone Case", "Smartphone X"]);
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    pub(super) source: Vec<Product>,
    pub(super) view: Vec<usize>,
    pub(super) search_term: String,
    pub(super) sort_spec: Option<SortSpec>,
    pub(super) paginator: paginator::Model,
}

impl Default for Model {
    fn default() -> Self {
        Self::new(Vec::new(), DEFAULT_PAGE_SIZE)
    }
}

impl Model {
    /// Creates a view over `source` in insertion order, on page 1.
    pub fn new(source: Vec<Product>, page_size: usize) -> Self {
        let view = (0..source.len()).collect();
        let paginator = paginator::Model::new()
            .with_per_page(page_size)
            .with_total_items(source.len());

        Self {
            source,
            view,
            search_term: String::new(),
            sort_spec: None,
            paginator,
        }
    }

    /// Sets the page size and returns to page 1.
    ///
    /// Values less than 1 are clamped to 1.
    pub fn set_page_size(&mut self, size: usize) {
        self.paginator.set_per_page(size);
    }

    /// Navigates to page `n`.
    ///
    /// Requests outside `[1, total_pages]` leave the state unchanged and
    /// return `false`.
    pub fn go_to_page(&mut self, n: usize) -> bool {
        self.paginator.go_to_page(n)
    }

    /// Navigates to the next page, if any.
    pub fn next_page(&mut self) -> bool {
        self.paginator.next_page()
    }

    /// Navigates to the previous page, if any.
    pub fn prev_page(&mut self) -> bool {
        self.paginator.prev_page()
    }

    /// Navigates to page 1.
    pub fn first_page(&mut self) -> bool {
        self.go_to_page(1)
    }

    /// Navigates to the last page.
    pub fn last_page(&mut self) -> bool {
        self.go_to_page(self.total_pages())
    }

    /// Products on the current page, in view order.
    pub fn current_slice(&self) -> Vec<&Product> {
        let (start, end) = self.paginator.slice_bounds();
        self.view[start..end]
            .iter()
            .map(|&index| &self.source[index])
            .collect()
    }

    /// All products in the view, in view order.
    pub fn visible_items(&self) -> Vec<&Product> {
        self.view.iter().map(|&index| &self.source[index]).collect()
    }

    /// The full fetched list.
    pub fn source(&self) -> &[Product] {
        &self.source
    }

    /// Number of products in the view.
    pub fn len(&self) -> usize {
        self.view.len()
    }

    /// Whether the view is empty.
    pub fn is_empty(&self) -> bool {
        self.view.is_empty()
    }

    /// Normalized search term, empty when no search is active.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Active sort spec, `None` for insertion order.
    pub fn sort_spec(&self) -> Option<SortSpec> {
        self.sort_spec
    }

    /// Current page, 1-indexed.
    pub fn page(&self) -> usize {
        self.paginator.page()
    }

    /// Items per page.
    pub fn page_size(&self) -> usize {
        self.paginator.per_page()
    }

    /// Total number of pages over the view, never less than 1.
    pub fn total_pages(&self) -> usize {
        self.paginator.total_pages()
    }

    /// Pagination cursor backing this view.
    pub fn paginator(&self) -> &paginator::Model {
        &self.paginator
    }

    /// Recounts the paginator after the view changed, returning to page 1.
    pub(super) fn update_pagination(&mut self) {
        self.paginator.set_total_items(self.view.len());
    }
}
