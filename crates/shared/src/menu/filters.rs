use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use super::ALL_CATEGORIES;

/// Optional constraints applied to a menu listing. An absent field means no constraint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filters {
    pub category: Option<String>,
    pub is_available: Option<bool>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl Filters {
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn available(mut self, is_available: bool) -> Self {
        self.is_available = Some(is_available);
        self
    }

    pub fn min_price(mut self, min_price: f64) -> Self {
        self.min_price = Some(min_price);
        self
    }

    pub fn max_price(mut self, max_price: f64) -> Self {
        self.max_price = Some(max_price);
        self
    }

    /// The category an item must equal, if any. `"All"` and blank labels resolve to none.
    pub fn category_constraint(&self) -> Option<&str> {
        self.category
            .as_deref()
            .filter(|category| !category.trim().is_empty() && *category != ALL_CATEGORIES)
    }

    pub fn is_unconstrained(&self) -> bool {
        self.category_constraint().is_none()
            && self.is_available.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
    }
}

fn validate_bound(value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::new("price_bound")
            .with_message("Price bound must be a non-negative number".into()));
    }

    Ok(())
}

impl Validate for Filters {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Some(Err(err)) = self.min_price.map(validate_bound) {
            errors.add("min_price", err);
        }

        if let Some(Err(err)) = self.max_price.map(validate_bound) {
            errors.add("max_price", err);
        }

        if let (Some(min), Some(max)) = (self.min_price, self.max_price) {
            if min > max {
                errors.add(
                    "__all__",
                    ValidationError::new("price_range").with_message(
                        "Minimum price cannot be greater than maximum price".into(),
                    ),
                );
            }
        }

        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filters_are_valid() {
        assert!(Filters::default().validate().is_ok());
        assert!(Filters::default().is_unconstrained());
    }

    #[test]
    fn test_all_category_is_unconstrained() {
        let filters = Filters::default().category("All");

        assert_eq!(filters.category_constraint(), None);
        assert!(filters.is_unconstrained());
    }

    #[test]
    fn test_blank_category_is_unconstrained() {
        for blank in ["", "   "] {
            let filters = Filters::default().category(blank);

            assert_eq!(filters.category_constraint(), None);
            assert!(filters.is_unconstrained());
        }
    }

    #[test]
    fn test_min_greater_than_max_is_rejected() {
        let errors = Filters::default()
            .min_price(20.0)
            .max_price(10.0)
            .validate()
            .unwrap_err();

        assert!(errors.errors().contains_key("__all__"));
    }

    #[test]
    fn test_equal_bounds_are_valid() {
        assert!(Filters::default().min_price(10.0).max_price(10.0).validate().is_ok());
    }

    #[test]
    fn test_negative_and_nan_bounds_are_rejected() {
        let errors = Filters::default()
            .min_price(-1.0)
            .max_price(f64::NAN)
            .validate()
            .unwrap_err();

        assert!(errors.errors().contains_key("min_price"));
        assert!(errors.errors().contains_key("max_price"));
    }
}
