//! Single and global matching.

mod format;
mod row;

pub use format::{GlobalMatches, PatternColumns};
pub use row::{CaptureKey, CaptureValue, MatchRow};

pub(crate) use format::arrange;
pub(crate) use row::build_row;

use regex::{Captures, Regex};

use crate::compiler::CompiledPattern;
use crate::errors::PregError;
use crate::flags::flag_set;

flag_set! {
    /// Flags for `match_one`, `match_all` and `replace_callback`.
    pub struct MatchFlags {
        /// Group global results by capture key (the default).
        const PATTERN_ORDER = 1;
        /// Group global results by occurrence.
        const SET_ORDER = 2;
        /// Pair every captured text with its byte offset.
        const OFFSET_CAPTURE = 256;
        /// Report non-participating groups as null instead of `""`.
        const UNMATCHED_AS_NULL = 512;
    }
}

impl MatchFlags {
    /// Rejects combinations that cannot be honoured.
    pub(crate) fn check_order(self) -> Result<(), PregError> {
        if self.contains(Self::PATTERN_ORDER) && self.contains(Self::SET_ORDER) {
            return Err(PregError::argument(
                "Invalid flags specified: PATTERN_ORDER and SET_ORDER are mutually exclusive",
            ));
        }
        Ok(())
    }

    pub(crate) fn wants_set_order(self) -> bool {
        self.contains(Self::SET_ORDER)
    }
}

/// Left-to-right occurrences of a regex in a haystack.
///
/// After a zero-length match the cursor steps over one character so the
/// iteration always makes progress.
pub(crate) struct Occurrences<'r, 'h> {
    regex: &'r Regex,
    haystack: &'h str,
    cursor: usize,
}

impl<'r, 'h> Occurrences<'r, 'h> {
    pub(crate) fn new(regex: &'r Regex, haystack: &'h str) -> Self {
        Self {
            regex,
            haystack,
            cursor: 0,
        }
    }
}

impl<'h> Iterator for Occurrences<'_, 'h> {
    type Item = Captures<'h>;

    fn next(&mut self) -> Option<Captures<'h>> {
        if self.cursor > self.haystack.len() {
            return None;
        }
        let caps = self.regex.captures_at(self.haystack, self.cursor)?;
        let whole = caps.get(0)?;
        self.cursor = if whole.is_empty() {
            step_past(self.haystack, whole.end())
        } else {
            whole.end()
        };
        Some(caps)
    }
}

fn step_past(haystack: &str, at: usize) -> usize {
    haystack[at..]
        .chars()
        .next()
        .map_or(at + 1, |ch| at + ch.len_utf8())
}

/// Resolves a caller-supplied search offset to a byte index into `subject`.
///
/// Negative offsets count back from the end (clamped to the start); an
/// offset past the end yields `None`; an offset inside a character moves
/// forward to the next character boundary.
pub(crate) fn resolve_offset(subject: &str, offset: isize) -> Option<usize> {
    let len = subject.len();
    let mut start = if offset < 0 {
        len.saturating_sub(offset.unsigned_abs())
    } else {
        offset.unsigned_abs()
    };
    if start > len {
        return None;
    }
    while !subject.is_char_boundary(start) {
        start += 1;
    }
    Some(start)
}

pub(crate) fn match_first(
    compiled: &CompiledPattern,
    subject: &str,
    flags: MatchFlags,
    offset: isize,
) -> Option<MatchRow> {
    let start = resolve_offset(subject, offset)?;
    let caps = compiled.regex().captures(&subject[start..])?;
    Some(build_row(compiled, &caps, start, flags))
}

pub(crate) fn match_every(
    compiled: &CompiledPattern,
    subject: &str,
    flags: MatchFlags,
    offset: isize,
) -> GlobalMatches {
    let rows = match resolve_offset(subject, offset) {
        Some(start) => Occurrences::new(compiled.regex(), &subject[start..])
            .map(|caps| build_row(compiled, &caps, start, flags))
            .collect(),
        None => Vec::new(),
    };
    arrange(compiled.capture_keys(), rows, flags.wants_set_order())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_resolve_from_either_end() {
        assert_eq!(resolve_offset("hello", 0), Some(0));
        assert_eq!(resolve_offset("hello", 2), Some(2));
        assert_eq!(resolve_offset("hello", 5), Some(5));
        assert_eq!(resolve_offset("hello", 6), None);
        assert_eq!(resolve_offset("hello", -2), Some(3));
        assert_eq!(resolve_offset("hello", -10), Some(0));
    }

    #[test]
    fn offsets_snap_to_character_boundaries() {
        // 'é' occupies bytes 1..3
        assert_eq!(resolve_offset("héllo", 2), Some(3));
    }

    #[test]
    fn empty_matches_advance_by_one_character() {
        let regex = Regex::new("x*").unwrap();
        let spans: Vec<_> = Occurrences::new(&regex, "aé")
            .map(|caps| caps.get(0).map(|m| m.range()).unwrap())
            .collect();
        assert_eq!(spans, vec![0..0, 1..1, 3..3]);
    }

    #[test]
    fn empty_match_may_follow_a_non_empty_one() {
        let regex = Regex::new("a*").unwrap();
        let spans: Vec<_> = Occurrences::new(&regex, "aab")
            .map(|caps| caps.get(0).map(|m| m.range()).unwrap())
            .collect();
        assert_eq!(spans, vec![0..2, 2..2, 3..3]);
    }

    #[test]
    fn conflicting_order_flags_are_rejected() {
        assert!(MatchFlags::SET_ORDER.check_order().is_ok());
        assert!(
            (MatchFlags::SET_ORDER | MatchFlags::PATTERN_ORDER)
                .check_order()
                .is_err()
        );
    }

    #[test]
    fn flag_bits_match_the_documented_values() {
        assert_eq!(MatchFlags::PATTERN_ORDER.bits(), 1);
        assert_eq!(MatchFlags::SET_ORDER.bits(), 2);
        assert_eq!(MatchFlags::OFFSET_CAPTURE.bits(), 256);
        assert_eq!(MatchFlags::UNMATCHED_AS_NULL.bits(), 512);
        assert_eq!(MatchFlags::from_bits_truncate(256 | 4).bits(), 256);
    }
}
