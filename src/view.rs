use std::fmt;

use menuboard_catalog::CategoryBreakdown;
use menuboard_shared::MenuItem;

pub const EMPTY_MENU_MESSAGE: &str = "No menu items available.";

pub fn format_price(price: f64, currency_symbol: &str) -> String {
    format!("{currency_symbol}{price:.2}")
}

/// One rendered line of the menu list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuRow {
    pub id: String,
    pub heading: String,
    pub price: String,
    pub description: String,
}

impl MenuRow {
    pub fn new(item: &MenuItem, currency_symbol: &str) -> Self {
        Self {
            id: item.id.to_owned(),
            heading: format!("{} - {}", item.title, item.category),
            price: format_price(item.price, currency_symbol),
            description: item.description.to_owned(),
        }
    }
}

impl fmt::Display for MenuRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.description.is_empty() {
            write!(f, "{} {}", self.heading, self.price)
        } else {
            write!(f, "{} {} | {}", self.heading, self.price, self.description)
        }
    }
}

pub fn menu_rows(items: &[MenuItem], currency_symbol: &str) -> Vec<MenuRow> {
    items
        .iter()
        .map(|item| MenuRow::new(item, currency_symbol))
        .collect()
}

/// One text line per row, or [`EMPTY_MENU_MESSAGE`] alone when there is nothing to show.
pub fn render_menu(rows: &[MenuRow]) -> Vec<String> {
    if rows.is_empty() {
        return vec![EMPTY_MENU_MESSAGE.to_owned()];
    }

    rows.iter().map(|row| row.to_string()).collect()
}

/// Alphabetical "<category>: <n> item(s), avg <price>" lines.
pub fn breakdown_lines(breakdown: &CategoryBreakdown, currency_symbol: &str) -> Vec<String> {
    breakdown
        .sorted()
        .into_iter()
        .map(|(label, stats)| {
            let noun = if stats.count == 1 { "item" } else { "items" };
            format!(
                "{label}: {} {noun}, avg {}",
                stats.count,
                format_price(stats.average, currency_symbol)
            )
        })
        .collect()
}
