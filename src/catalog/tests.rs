//! Tests for the catalog view state.

use super::*;
use crate::product::Product;

fn products(n: i64) -> Vec<Product> {
    (1..=n)
        .map(|i| Product::new(i, format!("Product {i}"), i as f64))
        .collect()
}

fn ids(catalog: &Model) -> Vec<i64> {
    catalog.visible_items().iter().map(|p| p.id).collect()
}

fn slice_ids(catalog: &Model) -> Vec<i64> {
    catalog.current_slice().iter().map(|p| p.id).collect()
}

fn mixed_catalog() -> Model {
    Model::new(
        vec![
            Product::new(1, "Smartphone X", 699.0),
            Product::new(2, "Laptop", 1299.0),
            Product::new(3, "phone charger", 25.0),
            Product::new(4, "Headphones", 25.0),
            Product::new(5, "Desk", 150.0),
            Product::new(6, "laptop stand", 25.0),
        ],
        10,
    )
}

#[test]
fn test_new_starts_in_insertion_order() {
    let catalog = mixed_catalog();
    assert_eq!(ids(&catalog), [1, 2, 3, 4, 5, 6]);
    assert_eq!(catalog.page(), 1);
    assert_eq!(catalog.page_size(), 10);
    assert_eq!(catalog.sort_spec(), None);
    assert_eq!(catalog.search_term(), "");
}

#[test]
fn test_search_matches_title_substring_case_insensitively() {
    let mut catalog = mixed_catalog();
    catalog.apply_search("PHONE");
    assert_eq!(ids(&catalog), [1, 3, 4]);
    assert!(catalog
        .visible_items()
        .iter()
        .all(|p| p.title().to_lowercase().contains("phone")));
}

#[test]
fn test_search_phone_excludes_laptop() {
    let mut catalog = mixed_catalog();
    catalog.apply_search("phone");
    let titles: Vec<&str> = catalog.visible_items().iter().map(|p| p.title()).collect();
    assert!(titles.contains(&"Smartphone X"));
    assert!(!titles.contains(&"Laptop"));
}

#[test]
fn test_search_trims_term() {
    let mut catalog = mixed_catalog();
    catalog.apply_search("   laptop  ");
    assert_eq!(catalog.search_term(), "laptop");
    assert_eq!(ids(&catalog), [2, 6]);
}

#[test]
fn test_empty_or_whitespace_search_restores_source_order() {
    let mut catalog = mixed_catalog();
    catalog.apply_search("desk");
    assert_eq!(ids(&catalog), [5]);

    catalog.apply_search("   ");
    assert_eq!(ids(&catalog), [1, 2, 3, 4, 5, 6]);

    catalog.apply_search("");
    assert_eq!(ids(&catalog), [1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_search_without_matches_yields_empty_view() {
    let mut catalog = mixed_catalog();
    catalog.apply_search("tractor");
    assert!(catalog.is_empty());
    assert!(catalog.current_slice().is_empty());
    assert_eq!(catalog.total_pages(), 1);
}

#[test]
fn test_absent_title_never_matches() {
    let mut untitled = Product::new(9, "", 5.0);
    untitled.title = None;
    let mut catalog = Model::new(vec![untitled, Product::new(1, "Lamp", 3.0)], 10);

    catalog.apply_search("a");
    assert_eq!(ids(&catalog), [1]);

    catalog.apply_search("");
    assert_eq!(ids(&catalog), [9, 1]);
}

#[test]
fn test_search_does_not_touch_source() {
    let mut catalog = mixed_catalog();
    let before = catalog.source().to_vec();
    catalog.apply_search("phone");
    catalog.apply_sort(SortField::Price, SortOrder::Descending);
    assert_eq!(catalog.source(), before.as_slice());
}

#[test]
fn test_sort_price_ascending_is_stable() {
    let mut catalog = mixed_catalog();
    catalog.apply_sort(SortField::Price, SortOrder::Ascending);
    // 3, 4 and 6 share price 25 and keep insertion order
    assert_eq!(ids(&catalog), [3, 4, 6, 5, 1, 2]);
}

#[test]
fn test_sort_price_descending_keeps_tie_order() {
    let mut catalog = mixed_catalog();
    catalog.apply_sort(SortField::Price, SortOrder::Descending);
    assert_eq!(ids(&catalog), [2, 1, 5, 3, 4, 6]);
}

#[test]
fn test_sort_order_is_monotonic() {
    let mut catalog = mixed_catalog();

    catalog.apply_sort(SortField::Price, SortOrder::Ascending);
    let prices: Vec<f64> = catalog.visible_items().iter().map(|p| p.price).collect();
    assert!(prices.windows(2).all(|w| w[0] <= w[1]));

    catalog.apply_sort(SortField::Title, SortOrder::Descending);
    let titles: Vec<String> = catalog
        .visible_items()
        .iter()
        .map(|p| p.title().to_lowercase())
        .collect();
    assert!(titles.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_sort_title_is_case_insensitive() {
    let mut catalog = mixed_catalog();
    catalog.apply_sort(SortField::Title, SortOrder::Ascending);
    let titles: Vec<&str> = catalog.visible_items().iter().map(|p| p.title()).collect();
    assert_eq!(
        titles,
        [
            "Desk",
            "Headphones",
            "Laptop",
            "laptop stand",
            "phone charger",
            "Smartphone X"
        ]
    );
}

#[test]
fn test_sort_title_ties_keep_prior_order() {
    let mut catalog = Model::new(
        vec![
            Product::new(1, "Mug", 1.0),
            Product::new(2, "mug", 2.0),
            Product::new(3, "Bowl", 3.0),
            Product::new(4, "MUG", 4.0),
        ],
        10,
    );
    catalog.apply_sort(SortField::Title, SortOrder::Ascending);
    assert_eq!(ids(&catalog), [3, 1, 2, 4]);

    catalog.apply_sort(SortField::Title, SortOrder::Descending);
    assert_eq!(ids(&catalog), [1, 2, 4, 3]);
}

#[test]
fn test_sort_title_within_search_results() {
    let mut catalog = mixed_catalog();
    catalog.apply_search("LAPTOP");
    catalog.apply_sort(SortField::Title, SortOrder::Descending);
    assert_eq!(ids(&catalog), [6, 2]);

    catalog.apply_search("");
    assert_eq!(ids(&catalog), [1, 3, 6, 2, 4, 5]);
}

#[test]
fn test_ascending_then_descending_reverses_distinct_keys() {
    let mut catalog = Model::new(products(12), 5);
    catalog.apply_sort(SortField::Price, SortOrder::Ascending);
    let mut ascending = ids(&catalog);
    catalog.apply_sort(SortField::Price, SortOrder::Descending);
    ascending.reverse();
    assert_eq!(ids(&catalog), ascending);
}

#[test]
fn test_search_reapplies_active_sort() {
    let mut catalog = mixed_catalog();
    catalog.apply_sort(SortField::Price, SortOrder::Descending);
    catalog.apply_search("phone");
    assert_eq!(ids(&catalog), [1, 3, 4]);

    catalog.apply_search("");
    assert_eq!(ids(&catalog), [2, 1, 5, 3, 4, 6]);
    assert_eq!(
        catalog.sort_spec(),
        Some(SortSpec::new(SortField::Price, SortOrder::Descending))
    );
}

#[test]
fn test_fifteen_items_over_two_pages() {
    let mut catalog = Model::new(products(15), 10);
    assert_eq!(catalog.total_pages(), 2);
    assert_eq!(slice_ids(&catalog), (1..=10).collect::<Vec<_>>());

    assert!(catalog.go_to_page(2));
    assert_eq!(slice_ids(&catalog), (11..=15).collect::<Vec<_>>());

    assert!(!catalog.go_to_page(3));
    assert_eq!(catalog.page(), 2);
    assert!(!catalog.go_to_page(0));
    assert_eq!(catalog.page(), 2);
}

#[test]
fn test_slice_length_matches_remaining_items() {
    for page_size in [1, 3, 5, 10, 20] {
        let mut catalog = Model::new(products(23), page_size);
        for page in 1..=catalog.total_pages() {
            assert!(catalog.go_to_page(page));
            let expected = page_size.min(23 - (page - 1) * page_size);
            assert_eq!(catalog.current_slice().len(), expected);
        }
    }
}

#[test]
fn test_interactions_reset_page() {
    let mut catalog = Model::new(products(50), 10);

    catalog.go_to_page(3);
    catalog.apply_search("product");
    assert_eq!(catalog.page(), 1);

    catalog.go_to_page(4);
    catalog.apply_sort(SortField::Title, SortOrder::Ascending);
    assert_eq!(catalog.page(), 1);

    catalog.go_to_page(5);
    catalog.set_page_size(20);
    assert_eq!(catalog.page(), 1);
    assert_eq!(catalog.total_pages(), 3);
}

#[test]
fn test_page_navigation_helpers() {
    let mut catalog = Model::new(products(25), 10);
    assert!(!catalog.prev_page());
    assert!(catalog.next_page());
    assert!(catalog.last_page());
    assert_eq!(catalog.page(), 3);
    assert!(!catalog.next_page());
    assert!(catalog.first_page());
    assert_eq!(catalog.page(), 1);
}

#[test]
fn test_empty_source() {
    let mut catalog = Model::new(Vec::new(), 10);
    assert!(catalog.is_empty());
    assert!(catalog.current_slice().is_empty());
    assert_eq!(catalog.total_pages(), 1);
    assert!(!catalog.go_to_page(2));
    catalog.apply_sort(SortField::Price, SortOrder::Ascending);
    catalog.apply_search("x");
    assert!(catalog.current_slice().is_empty());
}

#[test]
fn test_dispatch_applies_events() {
    let mut catalog = Model::new(products(30), 10);

    assert!(catalog.dispatch(Event::GoToPage(3)));
    assert_eq!(catalog.page(), 3);
    assert!(!catalog.dispatch(Event::GoToPage(4)));
    assert_eq!(catalog.page(), 3);

    assert!(catalog.dispatch(Event::SetPageSize(5)));
    assert_eq!(catalog.page_size(), 5);
    assert_eq!(catalog.page(), 1);

    assert!(catalog.dispatch(Event::Sort(SortField::Price, SortOrder::Descending)));
    assert_eq!(slice_ids(&catalog), [30, 29, 28, 27, 26]);

    assert!(catalog.dispatch(Event::Search("Product 1".to_string())));
    // "product 1", "product 10".."product 19" in descending price order
    assert_eq!(catalog.len(), 11);
    assert_eq!(slice_ids(&catalog), [19, 18, 17, 16, 15]);
}

#[test]
fn test_dispatch_by_value() {
    let state = Model::new(products(15), 10);
    let state = dispatch(state, Event::GoToPage(2));
    let state = dispatch(state, Event::GoToPage(3));
    assert_eq!(state.page(), 2);
}

#[test]
fn test_sort_spec_parsing() {
    assert_eq!("price".parse::<SortField>(), Ok(SortField::Price));
    assert_eq!("name".parse::<SortField>(), Ok(SortField::Title));
    assert_eq!("title".parse::<SortField>(), Ok(SortField::Title));
    assert_eq!("desc".parse::<SortOrder>(), Ok(SortOrder::Descending));
    assert!("size".parse::<SortField>().is_err());
    assert!("up".parse::<SortOrder>().is_err());
}
