//! Substitution over one or many subjects.

mod template;

pub(crate) use template::Template;

use std::sync::Arc;

use regex::{Captures, Regex};
use serde::Serialize;

use crate::compiler::CompiledPattern;
use crate::errors::PregError;
use crate::matching::{MatchFlags, MatchRow, Occurrences, build_row};

/// A single value or a list of values.
///
/// Replace arguments take either shape, and the output mirrors the shape of
/// the subjects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::One(value) => std::slice::from_ref(value),
            Self::Many(values) => values,
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> OneOrMany<U> {
        match self {
            Self::One(value) => OneOrMany::One(f(value)),
            Self::Many(values) => OneOrMany::Many(values.into_iter().map(f).collect()),
        }
    }

    pub fn into_one(self) -> Option<T> {
        match self {
            Self::One(value) => Some(value),
            Self::Many(_) => None,
        }
    }

    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(value) => vec![value],
            Self::Many(values) => values,
        }
    }
}

impl From<&str> for OneOrMany<String> {
    fn from(value: &str) -> Self {
        Self::One(value.to_string())
    }
}

impl From<String> for OneOrMany<String> {
    fn from(value: String) -> Self {
        Self::One(value)
    }
}

impl From<Vec<String>> for OneOrMany<String> {
    fn from(values: Vec<String>) -> Self {
        Self::Many(values)
    }
}

impl From<Vec<&str>> for OneOrMany<String> {
    fn from(values: Vec<&str>) -> Self {
        Self::Many(values.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for OneOrMany<String> {
    fn from(values: &[&str]) -> Self {
        Self::Many(values.iter().map(|v| v.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for OneOrMany<String> {
    fn from(values: [&str; N]) -> Self {
        Self::Many(values.iter().map(|v| v.to_string()).collect())
    }
}

/// Output of a replace call plus the number of substitutions made across
/// every pattern and subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Replaced {
    pub output: OneOrMany<String>,
    pub count: usize,
}

impl Replaced {
    /// The replaced text when a single subject was given.
    pub fn text(&self) -> Option<&str> {
        match &self.output {
            OneOrMany::One(text) => Some(text),
            OneOrMany::Many(_) => None,
        }
    }
}

/// Pairs each pattern with its replacement template.
///
/// A single replacement serves every pattern; in a list, patterns without a
/// counterpart reuse the first entry.
pub(crate) fn paired_templates(
    patterns: &OneOrMany<String>,
    replacements: &OneOrMany<String>,
) -> Result<Vec<Template>, PregError> {
    match (patterns, replacements) {
        (OneOrMany::One(_), OneOrMany::Many(_)) => Err(PregError::argument(
            "Parameter mismatch, pattern is a string while replacement is a list",
        )),
        (_, OneOrMany::One(replacement)) => {
            let template = Template::parse(replacement);
            Ok(vec![template; patterns.len()])
        }
        (_, OneOrMany::Many(list)) => {
            let first = list.first().map_or("", String::as_str);
            Ok((0..patterns.len())
                .map(|idx| Template::parse(list.get(idx).map_or(first, String::as_str)))
                .collect())
        }
    }
}

/// Replaces up to `limit` occurrences (all of them when `limit` is
/// negative) and returns the new text with the number replaced.
pub(crate) fn substitute<F>(regex: &Regex, subject: &str, limit: isize, mut render: F) -> (String, usize)
where
    F: FnMut(&Captures<'_>, &mut String),
{
    let max = usize::try_from(limit).unwrap_or(usize::MAX);
    let mut out = String::with_capacity(subject.len());
    let mut last = 0;
    let mut count = 0;

    for caps in Occurrences::new(regex, subject).take(max) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        out.push_str(&subject[last..whole.start()]);
        render(&caps, &mut out);
        last = whole.end();
        count += 1;
    }

    out.push_str(&subject[last..]);
    (out, count)
}

/// Runs every pattern, in order, over every subject.
pub(crate) fn run_templates(
    compiled: &[Arc<CompiledPattern>],
    templates: &[Template],
    subjects: OneOrMany<String>,
    limit: isize,
) -> Replaced {
    let mut count = 0;
    let output = subjects.map(|subject| {
        compiled
            .iter()
            .zip(templates)
            .fold(subject, |text, (pattern, template)| {
                let (next, replaced) = substitute(pattern.regex(), &text, limit, |caps, out| {
                    template.expand(caps, out)
                });
                count += replaced;
                next
            })
    });
    Replaced { output, count }
}

/// Like [`run_templates`], but each occurrence is replaced by whatever
/// `callback` returns for its match row.
pub(crate) fn run_callback<F>(
    compiled: &[Arc<CompiledPattern>],
    mut callback: F,
    subjects: OneOrMany<String>,
    limit: isize,
    flags: MatchFlags,
) -> Replaced
where
    F: FnMut(&MatchRow) -> String,
{
    let mut count = 0;
    let output = subjects.map(|subject| {
        compiled.iter().fold(subject, |text, pattern| {
            let (next, replaced) = substitute(pattern.regex(), &text, limit, |caps, out| {
                let row = build_row(pattern, caps, 0, flags);
                out.push_str(&callback(&row));
            });
            count += replaced;
            next
        })
    });
    Replaced { output, count }
}
