mod command;
pub mod menu;

pub use command::*;
pub use menu::*;
