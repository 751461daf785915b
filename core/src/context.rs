use std::fmt::Display;
use std::sync::Arc;

use crate::compiler::{CompiledPattern, Compiler};
use crate::errors::{ErrorCode, LastError, PregError};
use crate::grep::{self, GrepFlags};
use crate::matching::{self, GlobalMatches, MatchFlags, MatchRow};
use crate::replace::{self, OneOrMany, Replaced};
use crate::split::{self, SplitFlags, SplitPiece};

/// Single-owner handle for running pattern operations.
///
/// A context owns its compiled-pattern cache and its last-error state, so
/// the error reported by [`Context::last_error`] always belongs to this
/// context's most recent compile. Every operation also returns its error
/// directly.
#[derive(Debug, Default)]
pub struct Context {
    compiler: Compiler,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_compiler(compiler: Compiler) -> Self {
        Self { compiler }
    }

    pub fn last_error(&self) -> &LastError {
        self.compiler.last_error()
    }

    pub fn last_error_code(&self) -> ErrorCode {
        self.compiler.last_error().code()
    }

    pub fn last_error_message(&self) -> &str {
        self.compiler.last_error().message()
    }

    pub fn cached_patterns(&self) -> usize {
        self.compiler.cached_patterns()
    }

    pub fn compile(&mut self, literal: &str) -> Result<Arc<CompiledPattern>, PregError> {
        self.compiler.compile(literal)
    }

    pub(crate) fn compile_all(
        &mut self,
        literals: &[String],
    ) -> Result<Vec<Arc<CompiledPattern>>, PregError> {
        self.compiler.compile_all(literals)
    }

    /// Matches once. `Ok(None)` means the pattern compiled but did not
    /// match.
    pub fn match_one(
        &mut self,
        literal: &str,
        subject: &str,
        flags: MatchFlags,
        offset: isize,
    ) -> Result<Option<MatchRow>, PregError> {
        let compiled = self.compile(literal)?;
        Ok(matching::match_first(&compiled, subject, flags, offset))
    }

    pub fn is_match(&mut self, literal: &str, subject: &str) -> Result<bool, PregError> {
        let compiled = self.compile(literal)?;
        Ok(compiled.regex().is_match(subject))
    }

    /// Collects every occurrence, in pattern order unless `SET_ORDER` is
    /// set.
    pub fn match_all(
        &mut self,
        literal: &str,
        subject: &str,
        flags: MatchFlags,
        offset: isize,
    ) -> Result<GlobalMatches, PregError> {
        flags.check_order()?;
        let compiled = self.compile(literal)?;
        Ok(matching::match_every(&compiled, subject, flags, offset))
    }

    /// Replaces occurrences of each pattern, in order, in each subject.
    ///
    /// `limit` caps substitutions per pattern per subject; `-1` means no
    /// limit. If any pattern fails to compile nothing is replaced.
    pub fn replace(
        &mut self,
        patterns: impl Into<OneOrMany<String>>,
        replacements: impl Into<OneOrMany<String>>,
        subjects: impl Into<OneOrMany<String>>,
        limit: isize,
    ) -> Result<Replaced, PregError> {
        let patterns = patterns.into();
        let templates = replace::paired_templates(&patterns, &replacements.into())?;
        let compiled = self.compile_all(patterns.as_slice())?;
        Ok(replace::run_templates(
            &compiled,
            &templates,
            subjects.into(),
            limit,
        ))
    }

    /// Replaces each occurrence with the callback's result for its match
    /// row. `flags` shapes the row (`OFFSET_CAPTURE`, `UNMATCHED_AS_NULL`).
    pub fn replace_callback<F>(
        &mut self,
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
        let compiled = self.compile_all(patterns.as_slice())?;
        Ok(replace::run_callback(
            &compiled,
            callback,
            subjects.into(),
            limit,
            flags,
        ))
    }

    pub fn split(
        &mut self,
        literal: &str,
        subject: &str,
        limit: isize,
        flags: SplitFlags,
    ) -> Result<Vec<SplitPiece>, PregError> {
        let compiled = self.compile(literal)?;
        Ok(split::split_by(&compiled, subject, limit, flags))
    }

    pub fn grep<'a, T: Display>(
        &mut self,
        literal: &str,
        entries: &'a [T],
        flags: GrepFlags,
    ) -> Result<Vec<(usize, &'a T)>, PregError> {
        let compiled = self.compile(literal)?;
        Ok(grep::filter(&compiled, entries, flags))
    }
}
