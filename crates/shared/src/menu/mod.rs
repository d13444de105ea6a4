mod filters;

pub use filters::*;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use validator::{Validate, ValidationError, ValidationErrors};

/// Category filter value that disables the category constraint.
pub const ALL_CATEGORIES: &str = "All";

/// Group label used when an item carries no category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Well-known menu sections offered by the category picker.
///
/// Items are not restricted to these; any non-empty label is a valid category.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
pub enum MenuCategory {
    #[default]
    Main,
    Appetizer,
    Dessert,
    Drink,
}

impl MenuCategory {
    /// Picker options in display order, starting with the "All" sentinel.
    pub fn picker_options() -> Vec<String> {
        std::iter::once(ALL_CATEGORIES.to_owned())
            .chain(Self::VARIANTS.iter().map(|c| c.to_string()))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub is_available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl MenuItem {
    /// Category label used for grouping, falling back to [`UNCATEGORIZED`].
    pub fn category_label(&self) -> &str {
        if self.category.trim().is_empty() {
            UNCATEGORIZED
        } else {
            &self.category
        }
    }

    /// Whether the item satisfies every constraint present in `filters`.
    ///
    /// Does not check that the filters themselves are consistent; see [`Filters`].
    pub fn matches(&self, filters: &Filters) -> bool {
        let category_ok = filters
            .category_constraint()
            .is_none_or(|category| self.category == category);
        let availability_ok = filters
            .is_available
            .is_none_or(|is_available| self.is_available == is_available);
        let min_ok = filters.min_price.is_none_or(|min| self.price >= min);
        let max_ok = filters.max_price.is_none_or(|max| self.price <= max);

        category_ok && availability_ok && min_ok && max_ok
    }
}

fn required(value: &str) -> Option<ValidationError> {
    value
        .trim()
        .is_empty()
        .then(|| ValidationError::new("blank").with_message("Field is required".into()))
}

/// Stored items need a title, a category and a finite, non-negative price.
/// The description may be empty.
impl Validate for MenuItem {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Some(err) = required(&self.title) {
            errors.add("title", err);
        }

        if let Some(err) = required(&self.category) {
            errors.add("category", err);
        }

        if !self.price.is_finite() || self.price < 0.0 {
            errors.add(
                "price",
                ValidationError::new("price_invalid")
                    .with_message("Price must be a finite, non-negative number".into()),
            );
        }

        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
