//! Raw form state collected from the add and filter screens.
//!
//! Fields hold text exactly as typed. Conversion into catalog inputs happens on submit.

use std::fmt;

use menuboard_catalog::NewMenuItemInput;
use menuboard_shared::{ALL_CATEGORIES, Filters};
use validator::{Validate, ValidationError, ValidationErrors};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddItemForm {
    pub title: String,
    pub description: String,
    pub price: String,
    pub category: String,
}

impl AddItemForm {
    /// Mirrors the submit button rule: title, price and category must be filled in.
    pub fn can_submit(&self) -> bool {
        [&self.title, &self.price, &self.category]
            .iter()
            .all(|field| !field.trim().is_empty())
    }

    pub fn to_input(&self) -> NewMenuItemInput {
        NewMenuItemInput::new(
            self.title.trim(),
            self.description.trim(),
            self.price.trim(),
            self.category.trim(),
        )
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterForm {
    pub category: String,
    pub only_available: bool,
    pub min_price: String,
    pub max_price: String,
}

impl Default for FilterForm {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORIES.to_owned(),
            only_available: false,
            min_price: String::new(),
            max_price: String::new(),
        }
    }
}

/// Parses an optional price bound. Blank and zero both mean "no bound".
fn parse_bound(raw: &str, message: &'static str) -> Result<Option<f64>, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(Some(value)),
        Ok(value) if value == 0.0 => Ok(None),
        _ => Err(ValidationError::new("invalid_price").with_message(message.into())),
    }
}

impl FilterForm {
    pub fn to_filters(&self) -> Result<Filters, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let min_price = parse_bound(
            &self.min_price,
            "Minimum price must be a valid positive number.",
        )
        .unwrap_or_else(|err| {
            errors.add("min_price", err);
            None
        });
        let max_price = parse_bound(
            &self.max_price,
            "Maximum price must be a valid positive number.",
        )
        .unwrap_or_else(|err| {
            errors.add("max_price", err);
            None
        });

        if !errors.errors().is_empty() {
            return Err(errors);
        }

        let category = self.category.trim();
        let filters = Filters {
            category: (!category.is_empty() && category != ALL_CATEGORIES)
                .then(|| category.to_owned()),
            is_available: self.only_available.then_some(true),
            min_price,
            max_price,
        };
        filters.validate()?;

        Ok(filters)
    }
}

/// Human-readable description of the filters in effect.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSummary {
    pub filters: Filters,
    pub currency_symbol: String,
}

impl FilterSummary {
    pub fn new(filters: Filters, currency_symbol: impl Into<String>) -> Self {
        Self {
            filters,
            currency_symbol: currency_symbol.into(),
        }
    }
}

impl fmt::Display for FilterSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = &self.currency_symbol;
        let category = self.filters.category_constraint().unwrap_or(ALL_CATEGORIES);
        let available = self.filters.is_available.unwrap_or(false);
        let min = self.filters.min_price.unwrap_or(0.0);
        let max = self
            .filters
            .max_price
            .map(|max| max.to_string())
            .unwrap_or_else(|| "Max".to_owned());

        write!(
            f,
            "Category={category}, Available={available}, Price Range: {symbol}{min} - {symbol}{max}"
        )
    }
}
