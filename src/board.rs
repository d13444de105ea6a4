use menuboard_catalog::{CategoryBreakdown, MenuCatalog, NewMenuItemInput, apply_filters};
use menuboard_shared::{Filters, MenuItem};
use parking_lot::RwLock;
use tracing::info;
use validator::Validate;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::forms::{AddItemForm, FilterForm, FilterSummary};
use crate::view::{MenuRow, menu_rows, render_menu};

/// Owns the catalog and the filters driving the visible menu.
///
/// All mutation goes through this type; readers receive owned snapshots.
#[derive(Debug)]
pub struct MenuBoard {
    catalog: RwLock<MenuCatalog>,
    filters: RwLock<Filters>,
    currency_symbol: String,
}

impl MenuBoard {
    pub fn new(config: &Config) -> AppResult<Self> {
        config.validate().map_err(AppError::InvalidConfig)?;

        let catalog = if config.catalog.seed {
            MenuCatalog::seeded()
        } else {
            MenuCatalog::new()
        };

        Ok(Self::with_catalog(
            catalog,
            config.display.currency_symbol.to_owned(),
        ))
    }

    pub fn with_catalog(catalog: MenuCatalog, currency_symbol: impl Into<String>) -> Self {
        Self {
            catalog: RwLock::new(catalog),
            filters: RwLock::new(Filters::default()),
            currency_symbol: currency_symbol.into(),
        }
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    pub fn len(&self) -> usize {
        self.catalog.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.read().is_empty()
    }

    pub fn add_item(&self, input: NewMenuItemInput) -> AppResult<MenuItem> {
        let item = self.catalog.write().add_item(input)?;
        info!(id = %item.id, title = %item.title, price = item.price, "New menu item added");

        Ok(item)
    }

    /// Submits the add form. The form is cleared only when the item was added.
    pub fn submit(&self, form: &mut AddItemForm) -> AppResult<MenuItem> {
        let item = self.add_item(form.to_input())?;
        form.clear();

        Ok(item)
    }

    pub fn set_filters(&self, filters: Filters) -> AppResult<()> {
        filters.validate()?;
        *self.filters.write() = filters;

        Ok(())
    }

    /// Parses the filter form and makes it drive [`MenuBoard::visible_items`].
    pub fn apply_filter_form(&self, form: &FilterForm) -> AppResult<FilterSummary> {
        let filters = form.to_filters()?;
        let summary = FilterSummary::new(filters.clone(), self.currency_symbol.to_owned());
        self.set_filters(filters)?;
        info!(%summary, "Applying filters");

        Ok(summary)
    }

    pub fn clear_filters(&self) {
        *self.filters.write() = Filters::default();
    }

    pub fn active_filters(&self) -> Filters {
        self.filters.read().clone()
    }

    /// Every item in insertion order, ignoring the active filters.
    pub fn snapshot(&self) -> Vec<MenuItem> {
        self.catalog.read().items().to_vec()
    }

    pub fn visible_items(&self) -> AppResult<Vec<MenuItem>> {
        let filters = self.active_filters();
        let catalog = self.catalog.read();

        Ok(apply_filters(catalog.items(), &filters)?)
    }

    pub fn rows(&self) -> AppResult<Vec<MenuRow>> {
        Ok(menu_rows(&self.visible_items()?, &self.currency_symbol))
    }

    /// Text lines of the visible menu, with the empty-menu message when nothing matches.
    pub fn render(&self) -> AppResult<Vec<String>> {
        Ok(render_menu(&self.rows()?))
    }

    pub fn breakdown(&self) -> CategoryBreakdown {
        self.catalog.read().breakdown()
    }
}
