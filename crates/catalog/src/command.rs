use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Reads a price the way the add form accepts it: trimmed, finite, not negative.
pub fn parse_price(price: &str) -> Result<f64, ValidationError> {
    let value = price.trim().parse::<f64>().map_err(|_| {
        ValidationError::new("price_not_numeric").with_message("Price must be a number".into())
    })?;

    if !value.is_finite() {
        return Err(ValidationError::new("price_not_finite")
            .with_message("Price must be a finite number".into()));
    }

    if value < 0.0 {
        return Err(ValidationError::new("price_negative")
            .with_message("Price cannot be negative".into()));
    }

    Ok(value)
}

fn validate_price(price: &str) -> Result<(), ValidationError> {
    parse_price(price).map(|_| ())
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("Field is required".into()));
    }

    Ok(())
}

/// Draft of a menu item before an id and availability are assigned.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct NewMenuItemInput {
    #[validate(custom(function = "validate_not_blank"))]
    pub title: String,
    #[validate(custom(function = "validate_not_blank"))]
    pub description: String,
    #[validate(custom(function = "validate_price"))]
    pub price: String,
    #[validate(custom(function = "validate_not_blank"))]
    pub category: String,
}

impl NewMenuItemInput {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        price: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            price: price.into(),
            category: category.into(),
        }
    }
}
