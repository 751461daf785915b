use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("Empty regular expression")]
    Empty,

    #[error("Delimiter must not be alphanumeric, backslash, or NUL")]
    InvalidDelimiter(char),

    #[error("No ending delimiter '{0}' found")]
    MissingEndDelimiter(char),

    #[error("No ending matching delimiter '{0}' found")]
    MissingMatchingDelimiter(char),

    #[error("Unknown modifier '{0}'")]
    UnknownModifier(char),

    #[error("The /e modifier is no longer supported, use a callback instead")]
    EvalModifier,
}

impl ParseErrorKind {
    fn advice(&self) -> Option<String> {
        match self {
            Self::Empty => None,
            Self::InvalidDelimiter(_) => {
                Some("wrap the pattern in a punctuation delimiter such as `/body/`".to_string())
            }
            Self::MissingEndDelimiter(delim) | Self::MissingMatchingDelimiter(delim) => {
                Some(format!("close the pattern body with '{delim}'"))
            }
            Self::UnknownModifier(_) => {
                Some("supported modifiers are i, m, s, u, x (and the no-ops A, U, D, S, J)".to_string())
            }
            Self::EvalModifier => Some("use replace_callback instead".to_string()),
        }
    }
}

/// A malformed pattern literal, labelled at the offending span.
#[derive(Debug, Error, Diagnostic)]
#[error("{kind}")]
#[diagnostic(code(preg::parse))]
pub struct ParseError {
    pub kind: ParseErrorKind,

    #[source_code]
    pub literal: String,

    #[label("here")]
    pub span: miette::SourceSpan,

    #[help]
    pub advice: Option<String>,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, literal: &str, offset: usize, length: usize) -> Self {
        let advice = kind.advice();
        Self {
            kind,
            literal: literal.to_string(),
            span: (offset, length).into(),
            advice,
        }
    }
}
