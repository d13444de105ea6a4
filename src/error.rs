use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Menu(#[from] menuboard_shared::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Whether the error stems from user input and can be shown back on the form.
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Menu(err) if err.is_validation())
    }

    /// Failing input fields, empty for non-validation errors.
    pub fn fields(&self) -> Vec<String> {
        match self {
            AppError::Menu(err) => err.fields(),
            _ => vec![],
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Menu(errors.into())
    }
}
