use miette::Diagnostic;
use thiserror::Error;

/// Main error type for chequer operations
#[derive(Error, Diagnostic, Debug)]
pub enum ChequerError {
    #[error("Invalid parameter: {message}")]
    #[diagnostic(code(chequer::invalid_parameter))]
    InvalidParameter {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(chequer::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(chequer::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(chequer::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Watch error: {message}")]
    #[diagnostic(code(chequer::watch))]
    Watch { message: String },
}

impl ChequerError {
    /// Shorthand for an `InvalidParameter` without help text.
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
            help: None,
        }
    }

    /// Whether this is the core `InvalidParameter` kind.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }
}

pub type Result<T> = std::result::Result<T, ChequerError>;
