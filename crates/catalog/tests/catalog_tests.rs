use std::collections::HashSet;

use menuboard_catalog::{
    MenuCatalog, NewMenuItemInput, aggregate_by_category, apply_filters, seed_items,
};
use menuboard_shared::{Filters, MenuItem};

fn tiramisu() -> NewMenuItemInput {
    NewMenuItemInput::new("Tiramisu", "dessert", "7.50", "Dessert")
}

fn mixed_menu() -> Vec<MenuItem> {
    let mut catalog = MenuCatalog::seeded();
    catalog.add_item(tiramisu()).unwrap();
    catalog
        .add_item(NewMenuItemInput::new("Iced Tea", "Lemon", "3", "Drink"))
        .unwrap();
    catalog
        .add_item(NewMenuItemInput::new("Ribeye", "Aged 28 days", "29.90", "Main"))
        .unwrap();

    let mut items: Vec<MenuItem> = catalog.into();
    items[4].is_available = false;

    items
}

#[test]
fn test_add_item_appends_available_item_with_fresh_id() {
    let mut catalog = MenuCatalog::seeded();
    let before = catalog
        .iter()
        .map(|item| item.id.clone())
        .collect::<HashSet<_>>();

    let item = catalog.add_item(tiramisu()).unwrap();

    assert_eq!(catalog.len(), 3);
    assert!(item.is_available);
    assert!(!before.contains(&item.id));
    assert_eq!(item.title, "Tiramisu");
    assert_eq!(item.price, 7.50);
    assert_eq!(catalog.items().last(), Some(&item));
}

#[test]
fn test_add_item_keeps_existing_items_untouched() {
    let mut catalog = MenuCatalog::seeded();

    catalog.add_item(tiramisu()).unwrap();

    assert_eq!(&catalog.items()[..2], seed_items().as_slice());
}

#[test]
fn test_add_item_rejects_non_numeric_price() {
    let mut catalog = MenuCatalog::seeded();

    let err = catalog
        .add_item(NewMenuItemInput::new("Tiramisu", "dessert", "abc", "Dessert"))
        .unwrap_err();

    assert!(err.is_validation());
    assert_eq!(err.fields(), vec!["price"]);
    assert_eq!(catalog.len(), 2);
}

#[test]
fn test_add_item_rejects_empty_title() {
    let mut catalog = MenuCatalog::seeded();

    let err = catalog
        .add_item(NewMenuItemInput::new("", "dessert", "7.50", "Dessert"))
        .unwrap_err();

    assert_eq!(err.fields(), vec!["title"]);
    assert_eq!(catalog.items(), seed_items().as_slice());
}

#[test]
fn test_add_item_reports_all_failing_fields() {
    let mut catalog = MenuCatalog::new();

    let err = catalog
        .add_item(NewMenuItemInput::new("", "", "-4", ""))
        .unwrap_err();

    assert_eq!(
        err.fields(),
        vec!["category", "description", "price", "title"]
    );
    assert!(catalog.is_empty());
}

#[test]
fn test_filter_by_price_range_against_seed() {
    let items = seed_items();

    let filtered =
        apply_filters(&items, &Filters::default().min_price(10.0).max_price(20.0)).unwrap();

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].title, "Classic Burger");
}

#[test]
fn test_filter_inverted_range_is_validation_error() {
    let items = seed_items();

    let err = apply_filters(&items, &Filters::default().min_price(20.0).max_price(10.0))
        .unwrap_err();

    assert!(err.is_validation());
    assert_eq!(err.fields(), vec!["__all__"]);
}

#[test]
fn test_filter_without_constraints_returns_everything_in_order() {
    let items = mixed_menu();

    assert_eq!(apply_filters(&items, &Filters::default()).unwrap(), items);
    assert_eq!(
        apply_filters(&items, &Filters::default().category("All")).unwrap(),
        items
    );
}

#[test]
fn test_filter_is_idempotent() {
    let items = mixed_menu();
    let filters = Filters::default().category("Main").available(true);

    let once = apply_filters(&items, &filters).unwrap();
    let twice = apply_filters(&once, &filters).unwrap();

    assert_eq!(once, twice);
    assert_eq!(once.len(), 1);
    assert_eq!(once[0].title, "Classic Burger");
}

#[test]
fn test_filter_preserves_relative_order() {
    let items = mixed_menu();

    let cheap = apply_filters(&items, &Filters::default().max_price(10.0)).unwrap();
    let titles = cheap.iter().map(|i| i.title.as_str()).collect::<Vec<_>>();

    assert_eq!(titles, vec!["Caesar Salad", "Tiramisu", "Iced Tea"]);
}

#[test]
fn test_filter_with_no_match_is_empty_not_error() {
    let items = mixed_menu();

    let filtered = apply_filters(&items, &Filters::default().category("Pasta")).unwrap();

    assert!(filtered.is_empty());
}

#[test]
fn test_filter_does_not_mutate_catalog() {
    let catalog = MenuCatalog::seeded();

    let filtered = catalog.filter(&Filters::default().category("Main")).unwrap();

    assert_eq!(filtered.len(), 1);
    assert_eq!(catalog.len(), 2);
}

#[test]
fn test_aggregate_counts_sum_to_total() {
    let items = mixed_menu();

    let breakdown = aggregate_by_category(&items);
    let sum = breakdown.groups.values().map(|s| s.count).sum::<usize>();

    assert_eq!(sum, breakdown.total_items);
    assert_eq!(breakdown.total_items, items.len());
    assert_eq!(breakdown.get("Main").unwrap().count, 2);
    assert!((breakdown.get("Main").unwrap().average - 21.20).abs() < 1e-9);
}

#[test]
fn test_breakdown_of_large_valid_prices_stays_finite() {
    let mut catalog = MenuCatalog::new();
    catalog
        .add_item(NewMenuItemInput::new("Gold Leaf Steak", "Gilded", "1e308", "Main"))
        .unwrap();
    catalog
        .add_item(NewMenuItemInput::new("Diamond Dumplings", "Rare", "1e308", "Main"))
        .unwrap();

    let average = catalog.breakdown().get("Main").unwrap().average;

    assert_eq!(average, 1e308);
}

#[test]
fn test_from_items_enforces_item_invariants() {
    let mut items = seed_items();
    items[0].title = String::new();
    items[0].price = -5.0;

    let err = MenuCatalog::from_items(items).unwrap_err();

    assert!(err.is_validation());
    assert_eq!(err.fields(), vec!["price", "title"]);
}

#[test]
fn test_catalog_breakdown_matches_seed_scenario() {
    let breakdown = MenuCatalog::seeded().breakdown();

    assert_eq!(breakdown.total_items, 2);
    assert_eq!(breakdown.get("Main").unwrap().average, 12.50);
    assert_eq!(breakdown.get("Appetizer").unwrap().average, 9.00);
}
