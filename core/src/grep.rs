//! Filtering a list by whether its entries match.

use std::fmt::Display;

use crate::compiler::CompiledPattern;
use crate::flags::flag_set;

flag_set! {
    /// Flags for `grep`. Independent of [`MatchFlags`](crate::MatchFlags).
    pub struct GrepFlags {
        /// Keep the entries that do *not* match.
        const INVERT = 1;
    }
}

/// Keeps entries whose `Display` text matches (or, with `INVERT`, does not
/// match), together with their original positions.
pub(crate) fn filter<'a, T: Display>(
    compiled: &CompiledPattern,
    entries: &'a [T],
    flags: GrepFlags,
) -> Vec<(usize, &'a T)> {
    let invert = flags.contains(GrepFlags::INVERT);
    entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| compiled.regex().is_match(&entry.to_string()) != invert)
        .collect()
}
