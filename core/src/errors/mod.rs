mod last_error;
mod parse_error;

pub use last_error::{ErrorCode, LastError};
pub use parse_error::{ParseError, ParseErrorKind};

use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for every pattern operation.
///
/// `Parse` and `Compile` are data-dependent failures: they are what the
/// last-error state reports as [`ErrorCode::Internal`]. `Argument` is a
/// caller mistake detected before any pattern is compiled and never touches
/// the last-error state.
#[derive(Debug, Error, Diagnostic)]
pub enum PregError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    #[error("Compilation failed: {message}")]
    #[diagnostic(
        code(preg::compile),
        help("the pattern body must be valid `regex` crate syntax")
    )]
    Compile { message: String },

    #[error("{message}")]
    #[diagnostic(code(preg::argument))]
    Argument { message: String },
}

impl PregError {
    pub(crate) fn argument(message: impl Into<String>) -> Self {
        Self::Argument {
            message: message.into(),
        }
    }

    /// The code recorded in the last-error state for this failure, or `None`
    /// for argument errors.
    pub fn error_code(&self) -> Option<ErrorCode> {
        match self {
            Self::Parse(_) | Self::Compile { .. } => Some(ErrorCode::Internal),
            Self::Argument { .. } => None,
        }
    }
}

impl From<regex::Error> for PregError {
    fn from(err: regex::Error) -> Self {
        let message = match err {
            regex::Error::Syntax(detail) => detail,
            regex::Error::CompiledTooBig(limit) => {
                format!("compiled pattern exceeds the size limit of {limit} bytes")
            }
            other => other.to_string(),
        };
        Self::Compile { message }
    }
}
