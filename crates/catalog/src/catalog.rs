use std::collections::HashSet;

use menuboard_shared::{Filters, MenuItem, Result, field_error};
use tracing::{debug, warn};
use ulid::Ulid;
use validator::Validate;

use crate::aggregation::{CategoryBreakdown, aggregate_by_category};
use crate::command::{NewMenuItemInput, parse_price};
use crate::seed::seed_items;

/// Returns the items satisfying every present constraint, in their original order.
///
/// Filters are validated first; an inverted price range is an error, not an empty result.
pub fn apply_filters(items: &[MenuItem], filters: &Filters) -> Result<Vec<MenuItem>> {
    if let Err(errors) = filters.validate() {
        warn!(?filters, "rejected menu filters");
        return Err(errors.into());
    }

    Ok(items
        .iter()
        .filter(|item| item.matches(filters))
        .cloned()
        .collect())
}

/// Append-only, insertion-ordered collection of menu items.
#[derive(Debug, Clone, Default)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
}

impl MenuCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        Self { items: seed_items() }
    }

    /// Builds a catalog from existing items, rejecting invalid items and duplicate ids.
    ///
    /// Reports the fields of the first invalid item.
    pub fn from_items(items: Vec<MenuItem>) -> Result<Self> {
        {
            let mut seen = HashSet::with_capacity(items.len());
            for item in &items {
                if let Err(errors) = item.validate() {
                    warn!(id = %item.id, "rejected stored menu item");
                    return Err(errors.into());
                }

                if !seen.insert(item.id.as_str()) {
                    menuboard_shared::bail!("duplicate menu item id '{}'", item.id);
                }
            }
        }

        Ok(Self { items })
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &MenuItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Validates the draft and appends it as a new, available item.
    ///
    /// The catalog is left untouched when validation fails.
    pub fn add_item(&mut self, input: NewMenuItemInput) -> Result<MenuItem> {
        if let Err(errors) = input.validate() {
            warn!(title = %input.title, "rejected new menu item");
            return Err(errors.into());
        }

        let price = parse_price(&input.price).map_err(|err| field_error("price", err))?;

        let item = MenuItem {
            id: self.next_id(),
            title: input.title,
            description: input.description,
            price,
            category: input.category,
            is_available: true,
            image_url: None,
        };

        debug!(id = %item.id, title = %item.title, category = %item.category, "menu item added");
        self.items.push(item.clone());

        Ok(item)
    }

    pub fn filter(&self, filters: &Filters) -> Result<Vec<MenuItem>> {
        apply_filters(&self.items, filters)
    }

    pub fn breakdown(&self) -> CategoryBreakdown {
        aggregate_by_category(&self.items)
    }

    fn next_id(&self) -> String {
        loop {
            let id = Ulid::new().to_string();
            if !self.contains(&id) {
                return id;
            }
        }
    }
}

impl From<MenuCatalog> for Vec<MenuItem> {
    fn from(catalog: MenuCatalog) -> Self {
        catalog.items
    }
}

impl<'a> IntoIterator for &'a MenuCatalog {
    type Item = &'a MenuItem;
    type IntoIter = std::slice::Iter<'a, MenuItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_catalog_has_fixed_ids() {
        let catalog = MenuCatalog::seeded();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("1").unwrap().title, "Classic Burger");
        assert_eq!(catalog.get("2").unwrap().title, "Caesar Salad");
    }

    #[test]
    fn test_from_items_rejects_duplicate_ids() {
        let mut items = seed_items();
        items[1].id = "1".to_owned();

        let err = MenuCatalog::from_items(items).unwrap_err();

        assert!(!err.is_validation());
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_from_items_rejects_blank_title_and_negative_price() {
        let mut items = seed_items();
        items[0].title = String::new();
        items[0].price = -5.0;

        let err = MenuCatalog::from_items(items).unwrap_err();

        assert!(err.is_validation());
        assert_eq!(err.fields(), vec!["price", "title"]);
    }

    #[test]
    fn test_from_items_rejects_nan_price() {
        let mut items = seed_items();
        items[1].price = f64::NAN;

        let err = MenuCatalog::from_items(items).unwrap_err();

        assert_eq!(err.fields(), vec!["price"]);
    }

    #[test]
    fn test_from_items_accepts_seed() {
        let catalog = MenuCatalog::from_items(seed_items()).unwrap();

        assert_eq!(catalog.items(), seed_items().as_slice());
    }

    #[test]
    fn test_add_item_stores_parsed_price() {
        let mut catalog = MenuCatalog::new();
        let item = catalog
            .add_item(NewMenuItemInput::new("Lemonade", "Fresh", " 3.25", "Drink"))
            .unwrap();

        assert_eq!(item.price, 3.25);
        assert_eq!(catalog.items(), std::slice::from_ref(&item));
    }

    #[test]
    fn test_next_id_is_unique() {
        let mut catalog = MenuCatalog::seeded();
        for n in 0..50 {
            catalog
                .add_item(NewMenuItemInput::new(format!("Dish {n}"), "d", "1", "Main"))
                .unwrap();
        }

        let ids = catalog.iter().map(|i| i.id.as_str()).collect::<HashSet<_>>();
        assert_eq!(ids.len(), catalog.len());
    }
}
