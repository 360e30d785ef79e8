//! Pagination cursor for the catalog view.
//!
//! This component tracks the current page, the page size and the number of
//! items being paginated, and computes slice bounds plus the sliding window of
//! page-number buttons. It does not hold the items themselves.
//!
//! Pages are 1-indexed. Navigation requests outside `[1, total_pages]` are
//! rejected and leave the paginator unchanged.

/// Number of page-number buttons shown at once.
pub const MAX_VISIBLE_PAGES: usize = 5;

/// A pagination model over a known number of items.
///
/// # Examples
///
/// ```rust
/// use catalog_view::paginator::Model;
///
/// let mut paginator = Model::new().with_per_page(10).with_total_items(15);
///
/// assert_eq!(paginator.total_pages(), 2);
/// assert_eq!(paginator.slice_bounds(), (0, 10));
///
/// assert!(paginator.go_to_page(2));
/// assert_eq!(paginator.slice_bounds(), (10, 15));
///
/// // Out of range requests are ignored
/// assert!(!paginator.go_to_page(3));
/// assert_eq!(paginator.page(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    page: usize,
    per_page: usize,
    total_items: usize,
}

impl Default for Model {
    /// Creates a paginator on page 1 with 10 items per page and no items.
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 10,
            total_items: 0,
        }
    }
}

impl Model {
    /// Creates a new paginator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of items per page (builder pattern).
    ///
    /// Values less than 1 are clamped to 1.
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.set_per_page(per_page);
        self
    }

    /// Sets the total number of items (builder pattern).
    pub fn with_total_items(mut self, items: usize) -> Self {
        self.set_total_items(items);
        self
    }

    /// Sets the number of items per page and returns to page 1.
    ///
    /// Values less than 1 are clamped to 1.
    ///
    /// ```rust
    /// use catalog_view::paginator::Model;
    ///
    /// let mut paginator = Model::new().with_total_items(100);
    /// paginator.go_to_page(4);
    /// paginator.set_per_page(20);
    /// assert_eq!(paginator.page(), 1);
    /// assert_eq!(paginator.total_pages(), 5);
    /// ```
    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page.max(1);
        self.page = 1;
    }

    /// Sets the number of items being paginated and returns to page 1.
    pub fn set_total_items(&mut self, items: usize) {
        self.total_items = items;
        self.page = 1;
    }

    /// Returns to page 1 without changing anything else.
    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Current page, 1-indexed.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Items per page.
    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Number of items being paginated.
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Total number of pages, never less than 1.
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.per_page).max(1)
    }

    /// Moves to page `n` when it lies in `[1, total_pages]`.
    ///
    /// Returns `true` when the request was accepted.
    pub fn go_to_page(&mut self, n: usize) -> bool {
        if n < 1 || n > self.total_pages() {
            return false;
        }
        self.page = n;
        true
    }

    /// Moves to the next page. Returns `false` on the last page.
    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.page + 1)
    }

    /// Moves to the previous page. Returns `false` on the first page.
    pub fn prev_page(&mut self) -> bool {
        self.go_to_page(self.page.saturating_sub(1))
    }

    /// Returns true on page 1.
    pub fn on_first_page(&self) -> bool {
        self.page == 1
    }

    /// Returns true on the last page.
    pub fn on_last_page(&self) -> bool {
        self.page == self.total_pages()
    }

    /// Start (inclusive) and end (exclusive) item indices of the current page.
    ///
    /// Both bounds are clamped to the item count, so an empty item set yields
    /// `(0, 0)`.
    pub fn slice_bounds(&self) -> (usize, usize) {
        let start = ((self.page - 1) * self.per_page).min(self.total_items);
        let end = (start + self.per_page).min(self.total_items);
        (start, end)
    }

    /// Number of items on the current page.
    pub fn items_on_page(&self) -> usize {
        let (start, end) = self.slice_bounds();
        end - start
    }

    /// Range of page-number buttons to show around the current page.
    pub fn window(&self) -> PageWindow {
        PageWindow::around(self.page, self.total_pages(), MAX_VISIBLE_PAGES)
    }
}

/// Sliding range of page-number buttons.
///
/// The window holds at most `size` pages and is centered on the current page
/// as evenly as possible. When it is cut short at one boundary it is shifted
/// toward the other so it stays full whenever enough pages exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// First page in the window.
    pub start: usize,
    /// Last page in the window, inclusive.
    pub end: usize,
    /// Total number of pages.
    pub total: usize,
}

impl PageWindow {
    /// Computes the window for `page` out of `total` pages.
    ///
    /// ```rust
    /// use catalog_view::paginator::PageWindow;
    ///
    /// let window = PageWindow::around(1, 10, 5);
    /// assert_eq!((window.start, window.end), (1, 5));
    ///
    /// let window = PageWindow::around(6, 10, 5);
    /// assert_eq!((window.start, window.end), (4, 8));
    ///
    /// let window = PageWindow::around(10, 10, 5);
    /// assert_eq!((window.start, window.end), (6, 10));
    /// ```
    pub fn around(page: usize, total: usize, size: usize) -> Self {
        let total = total.max(1);
        let size = size.max(1);
        let mut start = page.saturating_sub(size / 2).max(1);
        let end = (start + size - 1).min(total);
        if end + 1 - start < size {
            start = (end + 1).saturating_sub(size).max(1);
        }
        Self { start, end, total }
    }

    /// Pages inside the window.
    pub fn pages(&self) -> std::ops::RangeInclusive<usize> {
        self.start..=self.end
    }

    /// Whether a separate shortcut to page 1 is needed.
    pub fn shows_first(&self) -> bool {
        self.start > 1
    }

    /// Whether an ellipsis separates the first-page shortcut from the window.
    pub fn leading_gap(&self) -> bool {
        self.start > 2
    }

    /// Whether an ellipsis separates the window from the last-page shortcut.
    pub fn trailing_gap(&self) -> bool {
        self.end + 1 < self.total
    }

    /// Whether a separate shortcut to the last page is needed.
    pub fn shows_last(&self) -> bool {
        self.end < self.total
    }
}
