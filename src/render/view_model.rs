//! Pure projection of the catalog state into display data.
//!
//! [`ViewModel::from_state`] reads a [`catalog::Model`](crate::catalog::Model)
//! and produces everything a surface needs to draw: the results caption, one
//! row per product on the current page and the pagination strip. Surfaces
//! only format this data; they never look at the state directly.

use crate::catalog::Model as Catalog;
use crate::paginator::Model as Paginator;
use crate::product::Product;

/// Message shown in place of data rows when the current page is empty.
pub const NO_RESULTS: &str = "No products found!";

/// Number of columns in the product table.
pub const COLUMN_COUNT: usize = 6;

/// Column headers in display order.
pub const COLUMN_TITLES: [&str; COLUMN_COUNT] =
    ["ID", "Image", "Title", "Price", "Description", "Category"];

/// One table row, already formatted for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRow {
    /// Product id.
    pub id: i64,
    /// First image URL, sanitized, or the placeholder.
    pub image: String,
    /// Title, empty when absent.
    pub title: String,
    /// Price with currency prefix.
    pub price: String,
    /// Truncated description or "N/A".
    pub description: String,
    /// Category name or "N/A".
    pub category: String,
}

impl ProductRow {
    /// Formats a product for display.
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            image: product.image_url(),
            title: product.title().to_string(),
            price: product.display_price(),
            description: product.display_description(),
            category: product.category_name().to_string(),
        }
    }

    /// Cell values in column order.
    pub fn cells(&self) -> [String; COLUMN_COUNT] {
        [
            self.id.to_string(),
            self.image.clone(),
            self.title.clone(),
            self.price.clone(),
            self.description.clone(),
            self.category.clone(),
        ]
    }
}

/// One entry of the pagination strip, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    /// "Previous" button targeting `target`, disabled on the first page.
    Previous {
        /// Page the button navigates to.
        target: usize,
        /// Whether the button is disabled.
        disabled: bool,
    },
    /// A page-number button.
    Page {
        /// Page number.
        number: usize,
        /// Whether this is the current page.
        active: bool,
    },
    /// Gap marker between a boundary shortcut and the window.
    Ellipsis,
    /// "Next" button targeting `target`, disabled on the last page.
    Next {
        /// Page the button navigates to.
        target: usize,
        /// Whether the button is disabled.
        disabled: bool,
    },
}

/// Pagination controls plus the "page X of Y" caption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationStrip {
    /// Controls in display order.
    pub controls: Vec<PageControl>,
    /// Current page, 1-indexed.
    pub page: usize,
    /// Total number of pages.
    pub total_pages: usize,
}

impl PaginationStrip {
    /// Builds the strip for the paginator's current page.
    ///
    /// Returns `None` when there is at most one page.
    pub fn new(paginator: &Paginator) -> Option<Self> {
        let page = paginator.page();
        let total_pages = paginator.total_pages();
        if total_pages <= 1 {
            return None;
        }
        let window = paginator.window();

        let mut controls = vec![PageControl::Previous {
            target: page.saturating_sub(1),
            disabled: paginator.on_first_page(),
        }];

        if window.shows_first() {
            controls.push(PageControl::Page {
                number: 1,
                active: false,
            });
            if window.leading_gap() {
                controls.push(PageControl::Ellipsis);
            }
        }

        controls.extend(window.pages().map(|number| PageControl::Page {
            number,
            active: number == page,
        }));

        if window.shows_last() {
            if window.trailing_gap() {
                controls.push(PageControl::Ellipsis);
            }
            controls.push(PageControl::Page {
                number: total_pages,
                active: false,
            });
        }

        controls.push(PageControl::Next {
            target: page + 1,
            disabled: paginator.on_last_page(),
        });

        Some(Self {
            controls,
            page,
            total_pages,
        })
    }

    /// "Page X of Y" caption.
    pub fn info(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }

    /// Page numbers shown as buttons, shortcuts included.
    pub fn page_numbers(&self) -> Vec<usize> {
        self.controls
            .iter()
            .filter_map(|control| match control {
                PageControl::Page { number, .. } => Some(*number),
                _ => None,
            })
            .collect()
    }
}

/// Everything a surface needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    /// "Showing X-Y of N products" caption.
    pub caption: String,
    /// Rows for the current page. Empty when `no_results` is set.
    pub rows: Vec<ProductRow>,
    /// Whether the "no results" row replaces the data rows.
    pub no_results: bool,
    /// Pagination controls, `None` when there is at most one page.
    pub pagination: Option<PaginationStrip>,
}

impl ViewModel {
    /// Projects the catalog state.
    pub fn from_state(catalog: &Catalog) -> Self {
        let paginator = catalog.paginator();
        let slice = catalog.current_slice();
        let (start, _) = paginator.slice_bounds();
        let total = paginator.total_items();

        let caption = match paginator.items_on_page() {
            0 => format!("Showing 0-0 of {total} products"),
            count => format!("Showing {}-{} of {} products", start + 1, start + count, total),
        };

        let rows: Vec<ProductRow> = slice.into_iter().map(ProductRow::from_product).collect();
        let no_results = rows.is_empty();

        let pagination = PaginationStrip::new(paginator);

        Self {
            caption,
            rows,
            no_results,
            pagination,
        }
    }
}
