//! Turns pattern literals into native regexes and keeps the last-error
//! state up to date.

mod cache;

pub use cache::PatternCache;

use std::sync::Arc;

use regex::{Regex, RegexBuilder};

use crate::errors::{LastError, PregError};
use crate::matching::CaptureKey;
use crate::pattern::{ParsedPattern, parse_literal};

/// Default number of compiled patterns kept per context.
pub const DEFAULT_CACHE_CAPACITY: usize = 4096;

/// A compiled pattern together with the literal parts it came from.
#[derive(Debug)]
pub struct CompiledPattern {
    regex: Regex,
    parsed: ParsedPattern,
    layout: Vec<(CaptureKey, usize)>,
}

impl CompiledPattern {
    /// Compiles a parsed literal. Does not touch any last-error state.
    pub fn build(parsed: ParsedPattern) -> Result<Self, PregError> {
        let regex = RegexBuilder::new(&parsed.source)
            .case_insensitive(parsed.flags.ignore_case)
            // Without `m`, `$` matches only at the very end, never before a final `\n`.
            .multi_line(parsed.flags.multiline)
            .dot_matches_new_line(parsed.flags.dotall)
            .unicode(true)
            .build()?;
        let layout = capture_layout(&regex);
        Ok(Self {
            regex,
            parsed,
            layout,
        })
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn parsed(&self) -> &ParsedPattern {
        &self.parsed
    }

    /// Row keys in output order, each paired with its group index. Key `0`
    /// comes first; a named group's name precedes its number.
    pub fn layout(&self) -> &[(CaptureKey, usize)] {
        &self.layout
    }

    pub fn capture_keys(&self) -> impl Iterator<Item = &CaptureKey> {
        self.layout.iter().map(|(key, _)| key)
    }
}

fn capture_layout(regex: &Regex) -> Vec<(CaptureKey, usize)> {
    let mut layout = Vec::with_capacity(regex.captures_len());
    for (idx, name) in regex.capture_names().enumerate() {
        if let Some(name) = name {
            layout.push((CaptureKey::Name(name.to_string()), idx));
        }
        layout.push((CaptureKey::Index(idx), idx));
    }
    layout
}

/// Compiles literals on behalf of one context.
///
/// Every call to [`Compiler::compile`] writes the last-error state: cleared
/// on success (cache hits included), `Internal` plus the diagnostic on
/// failure. Failures are never cached.
#[derive(Debug)]
pub struct Compiler {
    cache: Option<PatternCache>,
    last_error: LastError,
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl Compiler {
    /// A capacity of `0` disables caching.
    pub fn new(cache_capacity: usize) -> Self {
        Self {
            cache: (cache_capacity > 0).then(|| PatternCache::new(cache_capacity)),
            last_error: LastError::default(),
        }
    }

    pub fn last_error(&self) -> &LastError {
        &self.last_error
    }

    pub fn cached_patterns(&self) -> usize {
        self.cache.as_ref().map_or(0, PatternCache::len)
    }

    pub fn compile(&mut self, literal: &str) -> Result<Arc<CompiledPattern>, PregError> {
        if let Some(hit) = self.cache.as_ref().and_then(|cache| cache.get(literal)) {
            tracing::trace!(literal, "pattern cache hit");
            self.last_error.clear();
            return Ok(hit);
        }

        match compile_literal(literal) {
            Ok(compiled) => {
                let compiled = Arc::new(compiled);
                if let Some(cache) = self.cache.as_mut() {
                    cache.insert(literal, Arc::clone(&compiled));
                }
                self.last_error.clear();
                Ok(compiled)
            }
            Err(err) => {
                tracing::debug!(literal, error = %err, "pattern failed to compile");
                self.last_error.record(&err);
                Err(err)
            }
        }
    }

    /// Compiles every literal in order, stopping at the first failure.
    pub fn compile_all<S: AsRef<str>>(
        &mut self,
        literals: &[S],
    ) -> Result<Vec<Arc<CompiledPattern>>, PregError> {
        literals
            .iter()
            .map(|literal| self.compile(literal.as_ref()))
            .collect()
    }
}

/// Parses and compiles `literal` without any caching or error bookkeeping.
pub fn compile_literal(literal: &str) -> Result<CompiledPattern, PregError> {
    let parsed = parse_literal(literal)?;
    CompiledPattern::build(parsed)
}
