//! Restaurant menu board: owns the menu catalog and turns raw form input
//! into catalog operations and display rows.

pub mod board;
pub mod config;
pub mod error;
pub mod forms;
pub mod observability;
pub mod view;

pub use board::MenuBoard;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use forms::{AddItemForm, FilterForm, FilterSummary};
pub use view::{EMPTY_MENU_MESSAGE, MenuRow};

/// Loads configuration, installs logging and builds the board.
///
/// Logging can only be installed once per process; later calls fail.
pub fn bootstrap(config_path: Option<String>) -> anyhow::Result<MenuBoard> {
    let config = Config::load(config_path)?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    observability::init_tracing(&config.logging)?;

    let board = MenuBoard::new(&config)?;
    tracing::info!(items = board.len(), "Menu board ready");

    Ok(board)
}
