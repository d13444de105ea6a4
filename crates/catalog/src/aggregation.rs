//! Per-category statistics over a menu listing.
//!
//! Items without a category are grouped under
//! [`UNCATEGORIZED`](menuboard_shared::UNCATEGORIZED). Groups are only emitted for
//! categories that have at least one item, so averages never divide by zero.

use std::collections::HashMap;

use menuboard_shared::MenuItem;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryStats {
    pub count: usize,
    /// Arithmetic mean of the group's prices, unrounded.
    ///
    /// Kept as a running mean so large prices do not overflow an intermediate sum.
    pub average: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdown {
    pub groups: HashMap<String, CategoryStats>,
    pub total_items: usize,
}

impl CategoryBreakdown {
    pub fn get(&self, category: &str) -> Option<&CategoryStats> {
        self.groups.get(category)
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Groups ordered alphabetically by label.
    pub fn sorted(&self) -> Vec<(&str, &CategoryStats)> {
        let mut groups = self
            .groups
            .iter()
            .map(|(label, stats)| (label.as_str(), stats))
            .collect::<Vec<_>>();
        groups.sort_by(|a, b| a.0.cmp(b.0));

        groups
    }
}

pub fn aggregate_by_category(items: &[MenuItem]) -> CategoryBreakdown {
    let mut groups: HashMap<String, CategoryStats> = HashMap::new();

    for item in items {
        let stats = groups
            .entry(item.category_label().to_owned())
            .or_insert(CategoryStats {
                count: 0,
                average: 0.0,
            });
        stats.count += 1;
        stats.average += (item.price - stats.average) / stats.count as f64;
    }

    CategoryBreakdown {
        groups,
        total_items: items.len(),
    }
}
