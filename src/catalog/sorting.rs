//! Stable field sorting of the view.
//!
//! Descending order inverts the comparator instead of reversing the sorted
//! result, so products with equal keys keep their relative order in both
//! directions.

use super::types::{SortField, SortOrder, SortSpec};
use super::Model;
use std::cmp::Ordering;
use tracing::debug;

fn directed(ordering: Ordering, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Ascending => ordering,
        SortOrder::Descending => ordering.reverse(),
    }
}

impl Model {
    /// Sorts the view by `field` in `order` and returns to page 1.
    ///
    /// The spec is remembered so later searches re-apply it.
    ///
    /// # Examples
    ///
    /// ```
    /// use catalog_view::catalog::{Model, SortField, SortOrder};
    /// use catalog_view::product::Product;
    ///
    /// let mut catalog = Model::new(
    ///     vec![
    ///         Product::new(1, "banana", 3.0),
    ///         Product::new(2, "Apple", 5.0),
    ///         Product::new(3, "cherry", 1.0),
    ///     ],
    ///     10,
    /// );
    ///
    /// catalog.apply_sort(SortField::Title, SortOrder::Ascending);
    /// let ids: Vec<i64> = catalog.visible_items().iter().map(|p| p.id).collect();
    /// assert_eq!(ids, [2, 1, 3]);
    ///
    /// catalog.apply_sort(SortField::Price, SortOrder::Descending);
    /// let ids: Vec<i64> = catalog.visible_items().iter().map(|p| p.id).collect();
    /// assert_eq!(ids, [2, 1, 3]);
    /// ```
    pub fn apply_sort(&mut self, field: SortField, order: SortOrder) {
        let spec = SortSpec::new(field, order);
        self.sort_spec = Some(spec);
        self.sort_view(spec);
        debug!(%field, %order, "applied sort");
        self.paginator.reset();
    }

    pub(super) fn sort_view(&mut self, spec: SortSpec) {
        let source = &self.source;
        match spec.field {
            SortField::Price => self.view.sort_by(|&a, &b| {
                directed(source[a].price.total_cmp(&source[b].price), spec.order)
            }),
            SortField::Title => {
                // Titles are lowercased once per sort, not once per comparison.
                let mut keyed: Vec<(String, usize)> = self
                    .view
                    .iter()
                    .map(|&index| (source[index].title().to_lowercase(), index))
                    .collect();
                keyed.sort_by(|a, b| directed(a.0.cmp(&b.0), spec.order));
                self.view = keyed.into_iter().map(|(_, index)| index).collect();
            }
        }
    }
}
