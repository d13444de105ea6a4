pub mod aggregation;
pub mod catalog;
pub mod command;
pub mod seed;

pub use aggregation::{CategoryBreakdown, CategoryStats, aggregate_by_category};
pub use catalog::{MenuCatalog, apply_filters};
pub use command::NewMenuItemInput;
pub use seed::seed_items;
