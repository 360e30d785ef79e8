//! Input handlers.
//!
//! Each handler takes one raw UI input (search box text, page size selector
//! value, sort button, page button), turns it into an [`Event`] and
//! dispatches it into the catalog state. Handlers return whether the state
//! changed so the caller knows to redraw.

use crate::catalog::{Event, Model as Catalog, SortField, SortOrder};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Page sizes offered when none are configured.
pub const DEFAULT_PAGE_SIZE_CHOICES: [usize; 4] = [5, 10, 20, 50];

/// A sort button, keyed by field and order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortControl {
    /// Price, lowest first.
    PriceAsc,
    /// Price, highest first.
    PriceDesc,
    /// Title, A to Z.
    NameAsc,
    /// Title, Z to A.
    NameDesc,
}

impl SortControl {
    /// Every control in display order.
    pub const ALL: [SortControl; 4] = [
        SortControl::PriceAsc,
        SortControl::PriceDesc,
        SortControl::NameAsc,
        SortControl::NameDesc,
    ];

    /// The control bound to `field` and `order`.
    pub fn new(field: SortField, order: SortOrder) -> Self {
        match (field, order) {
            (SortField::Price, SortOrder::Ascending) => SortControl::PriceAsc,
            (SortField::Price, SortOrder::Descending) => SortControl::PriceDesc,
            (SortField::Title, SortOrder::Ascending) => SortControl::NameAsc,
            (SortField::Title, SortOrder::Descending) => SortControl::NameDesc,
        }
    }

    /// Field this control sorts by.
    pub fn field(self) -> SortField {
        match self {
            SortControl::PriceAsc | SortControl::PriceDesc => SortField::Price,
            SortControl::NameAsc | SortControl::NameDesc => SortField::Title,
        }
    }

    /// Order this control sorts in.
    pub fn order(self) -> SortOrder {
        match self {
            SortControl::PriceAsc | SortControl::NameAsc => SortOrder::Ascending,
            SortControl::PriceDesc | SortControl::NameDesc => SortOrder::Descending,
        }
    }

    /// Stable identifier, also used as the button's class name.
    pub fn id(self) -> &'static str {
        match self {
            SortControl::PriceAsc => "price-asc",
            SortControl::PriceDesc => "price-desc",
            SortControl::NameAsc => "name-asc",
            SortControl::NameDesc => "name-desc",
        }
    }

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            SortControl::PriceAsc => "Price ↑",
            SortControl::PriceDesc => "Price ↓",
            SortControl::NameAsc => "Name A-Z",
            SortControl::NameDesc => "Name Z-A",
        }
    }
}

impl fmt::Display for SortControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SortControl {
    type Err = String;

    /// Parses `<field>-<order>`, e.g. `price-asc` or `name-desc`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, order) = s
            .split_once('-')
            .ok_or_else(|| format!("unknown sort control: {s}"))?;
        Ok(SortControl::new(field.parse()?, order.parse()?))
    }
}

/// Translates UI inputs into catalog events.
///
/// # Examples
///
/// ```
/// use catalog_view::catalog::Model;
/// use catalog_view::handlers::{InputHandlers, SortControl};
/// use catalog_view::product::Product;
///
/// let mut catalog = Model::new(vec![Product::new(1, "Mug", 8.0), Product::new(2, "Bowl", 5.0)], 10);
/// let mut handlers = InputHandlers::default();
///
/// handlers.on_sort(&mut catalog, SortControl::PriceAsc);
/// assert_eq!(handlers.active_sort(), Some(SortControl::PriceAsc));
/// assert_eq!(catalog.current_slice()[0].id, 2);
///
/// // Values outside the selector's choices are ignored
/// assert!(!handlers.on_page_size(&mut catalog, "7"));
/// assert!(handlers.on_page_size(&mut catalog, "20"));
/// assert_eq!(catalog.page_size(), 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputHandlers {
    page_size_choices: Vec<usize>,
    active_sort: Option<SortControl>,
}

impl Default for InputHandlers {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE_CHOICES.to_vec())
    }
}

impl InputHandlers {
    /// Creates handlers that accept the given page sizes.
    pub fn new(page_size_choices: Vec<usize>) -> Self {
        Self {
            page_size_choices,
            active_sort: None,
        }
    }

    /// Page sizes the selector offers.
    pub fn page_size_choices(&self) -> &[usize] {
        &self.page_size_choices
    }

    /// Sort control currently marked active.
    pub fn active_sort(&self) -> Option<SortControl> {
        self.active_sort
    }

    /// Search box changed.
    pub fn on_search(&mut self, catalog: &mut Catalog, raw: &str) -> bool {
        catalog.dispatch(Event::Search(raw.to_string()))
    }

    /// Page size selector changed.
    ///
    /// Values that do not parse, or are not among the choices, are ignored.
    pub fn on_page_size(&mut self, catalog: &mut Catalog, raw: &str) -> bool {
        match raw.trim().parse::<usize>() {
            Ok(size) if self.page_size_choices.contains(&size) => {
                catalog.dispatch(Event::SetPageSize(size))
            }
            _ => {
                warn!(value = raw, choices = ?self.page_size_choices, "ignoring invalid page size");
                false
            }
        }
    }

    /// Steps the page size to the neighbouring choice.
    ///
    /// `forward` picks the next larger choice, otherwise the next smaller.
    /// Returns `false` when already at the end of the choices.
    pub fn step_page_size(&mut self, catalog: &mut Catalog, forward: bool) -> bool {
        let current = catalog.page_size();
        let next = if forward {
            self.page_size_choices.iter().copied().filter(|&c| c > current).min()
        } else {
            self.page_size_choices.iter().copied().filter(|&c| c < current).max()
        };
        match next {
            Some(size) => catalog.dispatch(Event::SetPageSize(size)),
            None => false,
        }
    }

    /// Sort button pressed. Marks it active and sorts.
    pub fn on_sort(&mut self, catalog: &mut Catalog, control: SortControl) -> bool {
        self.active_sort = Some(control);
        catalog.dispatch(Event::Sort(control.field(), control.order()))
    }

    /// Page button pressed.
    pub fn on_page(&mut self, catalog: &mut Catalog, page: usize) -> bool {
        catalog.dispatch(Event::GoToPage(page))
    }
}

/// Interaction applied once the products arrive, before the first render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitialInput {
    pub search: Option<String>,
    pub sort: Option<SortControl>,
}

impl InitialInput {
    pub fn apply(&self, handlers: &mut InputHandlers, catalog: &mut Catalog) {
        if let Some(term) = &self.search {
            handlers.on_search(catalog, term);
        }
        if let Some(control) = self.sort {
            handlers.on_sort(catalog, control);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::Product;

    fn catalog() -> Catalog {
        Catalog::new(
            (1..=25)
                .map(|i| Product::new(i, format!("Item {i}"), (100 - i) as f64))
                .collect(),
            10,
        )
    }

    #[test]
    fn test_sort_control_round_trip_ids() {
        for control in SortControl::ALL {
            assert_eq!(control.id().parse::<SortControl>(), Ok(control));
            assert_eq!(SortControl::new(control.field(), control.order()), control);
        }
        assert_eq!("title-desc".parse::<SortControl>(), Ok(SortControl::NameDesc));
        assert!("price-up".parse::<SortControl>().is_err());
        assert!("size-asc".parse::<SortControl>().is_err());
        assert!("price".parse::<SortControl>().is_err());
    }

    #[test]
    fn test_on_search_resets_page() {
        let mut state = catalog();
        let mut handlers = InputHandlers::default();
        handlers.on_page(&mut state, 3);
        assert!(handlers.on_search(&mut state, " ITEM 2"));
        assert_eq!(state.page(), 1);
        // "item 2" and "item 20".."item 25"
        assert_eq!(state.len(), 7);
    }

    #[test]
    fn test_on_page_size_rejects_unknown_values() {
        let mut state = catalog();
        let mut handlers = InputHandlers::new(vec![5, 10, 20, 50]);
        state.go_to_page(2);

        assert!(!handlers.on_page_size(&mut state, "7"));
        assert!(!handlers.on_page_size(&mut state, "abc"));
        assert!(!handlers.on_page_size(&mut state, ""));
        assert_eq!(state.page_size(), 10);
        assert_eq!(state.page(), 2);

        assert!(handlers.on_page_size(&mut state, "5"));
        assert_eq!(state.page_size(), 5);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_step_page_size() {
        let mut state = catalog();
        let mut handlers = InputHandlers::new(vec![5, 10, 20]);

        assert!(handlers.step_page_size(&mut state, true));
        assert_eq!(state.page_size(), 20);
        assert!(!handlers.step_page_size(&mut state, true));

        assert!(handlers.step_page_size(&mut state, false));
        assert!(handlers.step_page_size(&mut state, false));
        assert_eq!(state.page_size(), 5);
        assert!(!handlers.step_page_size(&mut state, false));
    }

    #[test]
    fn test_on_sort_tracks_active_control() {
        let mut state = catalog();
        let mut handlers = InputHandlers::default();
        assert_eq!(handlers.active_sort(), None);

        handlers.on_sort(&mut state, SortControl::PriceAsc);
        assert_eq!(handlers.active_sort(), Some(SortControl::PriceAsc));
        assert_eq!(state.current_slice()[0].id, 25);

        handlers.on_sort(&mut state, SortControl::NameAsc);
        assert_eq!(handlers.active_sort(), Some(SortControl::NameAsc));
        assert_eq!(state.current_slice()[0].title(), "Item 1");
    }

    #[test]
    fn test_on_page_rejects_out_of_range() {
        let mut state = catalog();
        let mut handlers = InputHandlers::default();
        assert!(handlers.on_page(&mut state, 3));
        assert!(!handlers.on_page(&mut state, 4));
        assert!(!handlers.on_page(&mut state, 0));
        assert_eq!(state.page(), 3);
    }

    #[test]
    fn test_initial_input() {
        let mut state = catalog();
        let mut handlers = InputHandlers::default();
        InitialInput {
            search: Some("item 1".into()),
            sort: Some(SortControl::NameDesc),
        }
        .apply(&mut handlers, &mut state);

        assert_eq!(state.search_term(), "item 1");
        assert_eq!(handlers.active_sort(), Some(SortControl::NameDesc));
        // "item 1" and "item 10".."item 19", title descending
        assert_eq!(state.len(), 11);
        assert_eq!(state.current_slice()[0].title(), "Item 19");
    }
}
