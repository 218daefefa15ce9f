use thiserror::Error;

/// Convenient result alias for the propsizer library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// "Nothing matched" is not an error; see
/// [`SelectionOutcome`](crate::selection::SelectionOutcome).
#[derive(Debug, Error)]
pub enum Error {
    /// A boat specification field is malformed or out of domain.
    #[error("invalid {field}: {message}")]
    InvalidInput {
        field: &'static str,
        message: String,
    },

    /// Raised when catalog data fails validation.
    #[error("invalid catalog data: {message}")]
    CatalogValidation { message: String },

    /// Raised when duplicate model names are encountered during catalog load.
    #[error("duplicate {kind} model encountered: {name}")]
    DuplicateModel { kind: &'static str, name: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for CSV reader/writer errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for JSON specification parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Name of the offending specification field, if this is a validation error.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Error::InvalidInput { field, .. } => Some(*field),
            _ => None,
        }
    }

    /// Whether this error was raised by specification validation.
    pub fn is_invalid_input(&self) -> bool {
        self.field().is_some()
    }

    pub(crate) fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Error::InvalidInput {
            field,
            message: message.into(),
        }
    }
}

pub(crate) fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
