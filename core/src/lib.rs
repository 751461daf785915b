//! Delimiter-framed pattern literals (`/body/modifiers`) on top of the
//! `regex` crate, with match, global match, replace, split and grep
//! semantics in the PCRE `preg_*` tradition.
//!
//! Use a [`Context`] when you can: it owns its cache and its last-error
//! state. The free functions in this crate share one process-wide context
//! behind a mutex. Each call is atomic, but "run an operation, then read
//! [`last_error_code`]" is two calls, so another thread may compile in
//! between.

mod flags;

pub mod compiler;
pub mod context;
pub mod engine;
pub mod errors;
pub mod grep;
pub mod matching;
pub mod pattern;
pub mod replace;
pub mod split;

pub use compiler::{CompiledPattern, Compiler};
pub use context::Context;
pub use engine::Engine;
pub use errors::{ErrorCode, LastError, ParseError, ParseErrorKind, PregError};
pub use grep::GrepFlags;
pub use matching::{CaptureKey, CaptureValue, GlobalMatches, MatchFlags, MatchRow, PatternColumns};
pub use pattern::{ParsedPattern, parse_literal, quote};
pub use replace::{OneOrMany, Replaced};
pub use split::{SplitFlags, SplitPiece};

use std::fmt::Display;
use std::sync::{LazyLock, Mutex, PoisonError};

static SHARED: LazyLock<Mutex<Context>> = LazyLock::new(|| Mutex::new(Context::new()));

fn with_shared<R>(f: impl FnOnce(&mut Context) -> R) -> R {
    let mut ctx = SHARED.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut ctx)
}

/// Code of the most recent compile attempt by any free function.
pub fn last_error_code() -> ErrorCode {
    with_shared(|ctx| ctx.last_error_code())
}

/// Message of the most recent compile attempt by any free function.
pub fn last_error_message() -> String {
    with_shared(|ctx| ctx.last_error_message().to_string())
}

pub fn match_one(
    literal: &str,
    subject: &str,
    flags: MatchFlags,
    offset: isize,
) -> Result<Option<MatchRow>, PregError> {
    with_shared(|ctx| ctx.match_one(literal, subject, flags, offset))
}

pub fn is_match(literal: &str, subject: &str) -> Result<bool, PregError> {
    with_shared(|ctx| ctx.is_match(literal, subject))
}

pub fn match_all(
    literal: &str,
    subject: &str,
    flags: MatchFlags,
    offset: isize,
) -> Result<GlobalMatches, PregError> {
    with_shared(|ctx| ctx.match_all(literal, subject, flags, offset))
}

pub fn replace(
    patterns: impl Into<OneOrMany<String>>,
    replacements: impl Into<OneOrMany<String>>,
    subjects: impl Into<OneOrMany<String>>,
    limit: isize,
) -> Result<Replaced, PregError> {
    let (patterns, replacements, subjects) = (patterns.into(), replacements.into(), subjects.into());
    with_shared(|ctx| ctx.replace(patterns, replacements, subjects, limit))
}

/// The shared context is locked only while compiling, so `callback` may
/// itself call the free functions.
pub fn replace_callback<F>(
    patterns: impl Into<OneOrMany<String>>,
    callback: F,
    subjects: impl Into<OneOrMany<String>>,
    limit: isize,
    flags: MatchFlags,
) -> Result<Replaced, PregError>
where
    F: FnMut(&MatchRow) -> String,
{
    let patterns = patterns.into();
    let compiled = with_shared(|ctx| ctx.compile_all(patterns.as_slice()))?;
    Ok(replace::run_callback(
        &compiled,
        callback,
        subjects.into(),
        limit,
        flags,
    ))
}

pub fn split(
    literal: &str,
    subject: &str,
    limit: isize,
    flags: SplitFlags,
) -> Result<Vec<SplitPiece>, PregError> {
    with_shared(|ctx| ctx.split(literal, subject, limit, flags))
}

pub fn grep<'a, T: Display>(
    literal: &str,
    entries: &'a [T],
    flags: GrepFlags,
) -> Result<Vec<(usize, &'a T)>, PregError> {
    with_shared(|ctx| ctx.grep(literal, entries, flags))
}
