#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("{0}")]
    Server(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Names of the fields that failed validation, sorted.
    ///
    /// Struct-level failures are reported under `__all__`. Empty for non-validation errors.
    pub fn fields(&self) -> Vec<String> {
        let Self::Validate(errors) = self else {
            return vec![];
        };

        let mut fields = errors
            .errors()
            .keys()
            .map(|field| field.to_string())
            .collect::<Vec<_>>();
        fields.sort();

        fields
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validate(_))
    }
}

/// Wraps a single field failure into a reportable error set.
pub fn field_error(
    field: &'static str,
    error: validator::ValidationError,
) -> validator::ValidationErrors {
    let mut errors = validator::ValidationErrors::new();
    errors.add(field, error);

    errors
}

#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::Server(format!($msg)))
    };
    ($err:expr $(,)?) => {
        return Err($crate::Error::Server(format!($err)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::Server(format!($fmt, $($arg)*)))
    };
}
