//! Search over product titles.
//!
//! Matching is a case-insensitive substring test on `title` only. An absent
//! title never matches a non-empty term.

use super::Model;
use tracing::debug;

/// Trims and lower-cases a raw search box value.
pub fn normalize_term(raw: &str) -> String {
    raw.trim().to_lowercase()
}

impl Model {
    /// Filters the view by `term` and returns to page 1.
    ///
    /// The term is trimmed and lower-cased first. An empty term restores the
    /// full source list in insertion order. The active sort spec, if any, is
    /// re-applied to the new view.
    ///
    /// # Examples
    ///
    /// ```
    /// use catalog_view::catalog::Model;
    /// use catalog_view::product::Product;
    ///
    /// let mut catalog = Model::new(
    ///     vec![Product::new(1, "Smartphone X", 699.0), Product::new(2, "Laptop", 999.0)],
    ///     10,
    /// );
    ///
    /// catalog.apply_search("  PHONE ");
    /// assert_eq!(catalog.search_term(), "phone");
    /// assert_eq!(catalog.len(), 1);
    ///
    /// catalog.apply_search("   ");
    /// assert_eq!(catalog.len(), 2);
    /// ```
    pub fn apply_search(&mut self, term: &str) {
        let term = normalize_term(term);

        self.view = if term.is_empty() {
            (0..self.source.len()).collect()
        } else {
            self.source
                .iter()
                .enumerate()
                .filter(|(_, product)| {
                    product
                        .title
                        .as_deref()
                        .is_some_and(|title| title.to_lowercase().contains(&term))
                })
                .map(|(index, _)| index)
                .collect()
        };

        debug!(term = %term, matches = self.view.len(), "applied search");
        self.search_term = term;

        if let Some(spec) = self.sort_spec {
            self.sort_view(spec);
        }

        self.update_pagination();
    }
}
