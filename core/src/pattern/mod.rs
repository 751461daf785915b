//! Pattern literal parsing: `<delim>body<delim><modifiers>`.

mod delimiter;
mod extended;
mod modifier;
mod quote;

pub use delimiter::{closing_delimiter, is_valid_delimiter};
pub use extended::strip_extended;
pub use modifier::{Modifier, NativeFlags};
pub use quote::quote;

use crate::errors::{ParseError, ParseErrorKind};

/// A literal split into its parts, ready for the native compiler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPattern {
    /// Body handed to the compiler (already stripped in extended mode).
    pub source: String,
    pub flags: NativeFlags,
    pub delimiter: char,
    pub extended: bool,
}

impl ParsedPattern {
    pub fn flag_string(&self) -> String {
        self.flags.to_flag_string()
    }
}

impl std::fmt::Display for ParsedPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.delimiter,
            self.source,
            closing_delimiter(self.delimiter),
            self.flag_string()
        )
    }
}

/// Parses a pattern literal such as `/ab+c/i`.
///
/// The body runs from after the opening delimiter to the *last* occurrence
/// of the closing delimiter; everything after it is modifiers.
pub fn parse_literal(literal: &str) -> Result<ParsedPattern, ParseError> {
    let start = literal.len() - literal.trim_start_matches(|c: char| c.is_ascii_whitespace()).len();
    let rest = &literal[start..];

    let Some(delimiter) = rest.chars().next() else {
        return Err(ParseError::new(ParseErrorKind::Empty, literal, start, 0));
    };
    let delimiter_len = delimiter.len_utf8();

    if !is_valid_delimiter(delimiter) {
        return Err(ParseError::new(
            ParseErrorKind::InvalidDelimiter(delimiter),
            literal,
            start,
            delimiter_len,
        ));
    }

    let closing = closing_delimiter(delimiter);
    let body_start = start + delimiter_len;
    let Some(body_len) = literal[body_start..].rfind(closing) else {
        let kind = if closing == delimiter {
            ParseErrorKind::MissingEndDelimiter(closing)
        } else {
            ParseErrorKind::MissingMatchingDelimiter(closing)
        };
        return Err(ParseError::new(kind, literal, start, rest.len()));
    };
    let body_end = body_start + body_len;
    let body = &literal[body_start..body_end];
    let modifiers_start = body_end + closing.len_utf8();

    let mut flags = NativeFlags::default();
    let mut extended = false;
    for (idx, ch) in literal[modifiers_start..].char_indices() {
        let modifier = Modifier::from_char(ch).map_err(|kind| {
            ParseError::new(kind, literal, modifiers_start + idx, ch.len_utf8())
        })?;
        match modifier {
            Some(Modifier::Extended) => extended = true,
            Some(m) => flags.apply(m),
            None => {}
        }
    }

    let source = if extended {
        strip_extended(body)
    } else {
        body.to_string()
    };

    Ok(ParsedPattern {
        source,
        flags,
        delimiter,
        extended,
    })
}
