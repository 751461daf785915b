//! Splitting a subject at pattern occurrences.

use serde::ser::SerializeTuple;
use serde::{Serialize, Serializer};

use crate::compiler::CompiledPattern;
use crate::flags::flag_set;
use crate::matching::Occurrences;

flag_set! {
    /// Flags for `split`. Independent of [`MatchFlags`](crate::MatchFlags).
    pub struct SplitFlags {
        /// Drop empty pieces.
        const NO_EMPTY = 1;
        /// Also emit the capture groups of each delimiter.
        const DELIM_CAPTURE = 2;
        /// Attach the byte offset of every piece.
        const OFFSET_CAPTURE = 4;
    }
}

/// One piece of a split subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitPiece {
    pub text: String,
    /// Byte offset in the subject, present with `OFFSET_CAPTURE`.
    pub offset: Option<usize>,
}

impl SplitPiece {
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl AsRef<str> for SplitPiece {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for SplitPiece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl PartialEq<str> for SplitPiece {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for SplitPiece {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl Serialize for SplitPiece {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.offset {
            None => serializer.serialize_str(&self.text),
            Some(offset) => {
                let mut pair = serializer.serialize_tuple(2)?;
                pair.serialize_element(&self.text)?;
                pair.serialize_element(&offset)?;
                pair.end()
            }
        }
    }
}

struct Pieces {
    flags: SplitFlags,
    pieces: Vec<SplitPiece>,
}

impl Pieces {
    /// Returns whether the piece was kept.
    fn push(&mut self, text: &str, offset: usize) -> bool {
        if text.is_empty() && self.flags.contains(SplitFlags::NO_EMPTY) {
            return false;
        }
        self.pieces.push(SplitPiece {
            text: text.to_string(),
            offset: self
                .flags
                .contains(SplitFlags::OFFSET_CAPTURE)
                .then_some(offset),
        });
        true
    }
}

/// Splits `subject` at every occurrence of the pattern.
///
/// With `limit > 0` at most `limit` pieces come from the subject text (the
/// last one holds everything not yet split); delimiter captures do not
/// count towards it. `limit <= 0` means no limit.
pub(crate) fn split_by(
    compiled: &CompiledPattern,
    subject: &str,
    limit: isize,
    flags: SplitFlags,
) -> Vec<SplitPiece> {
    let limit = usize::try_from(limit).ok().filter(|l| *l > 0);
    let mut out = Pieces {
        flags,
        pieces: Vec::new(),
    };
    let mut emitted = 0;
    let mut last = 0;

    for caps in Occurrences::new(compiled.regex(), subject) {
        if limit.is_some_and(|limit| emitted + 1 >= limit) {
            break;
        }
        let Some(whole) = caps.get(0) else {
            continue;
        };

        if out.push(&subject[last..whole.start()], last) {
            emitted += 1;
        }
        if flags.contains(SplitFlags::DELIM_CAPTURE) {
            // Groups up to the last participating one; gaps read as "".
            let last_group = (1..caps.len()).rev().find(|idx| caps.get(*idx).is_some());
            for idx in 1..=last_group.unwrap_or(0) {
                match caps.get(idx) {
                    Some(group) => out.push(group.as_str(), group.start()),
                    None => out.push("", whole.start()),
                };
            }
        }
        last = whole.end();
    }

    out.push(&subject[last..], last);
    out.pieces
}
