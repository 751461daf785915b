use std::collections::HashMap;
use std::path::Path;

use crate::runner::CaseResult;

mod report;

pub use report::print_analysis;

#[derive(Default, Clone, Copy)]
pub struct SectionStats {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

#[derive(Default)]
pub struct Analysis {
    pub sections: HashMap<String, SectionStats>,
    pub failure_messages: HashMap<String, usize>,
    pub skip_reasons: HashMap<String, usize>,
}

impl Analysis {
    pub fn record(&mut self, root: &Path, path: &Path, result: &CaseResult) {
        let stats = self.sections.entry(section_from_path(root, path)).or_default();
        stats.total += 1;

        let (tally, reason) = match result {
            CaseResult::Passed => {
                stats.passed += 1;
                return;
            }
            CaseResult::Failed(reason) => {
                stats.failed += 1;
                (&mut self.failure_messages, reason)
            }
            CaseResult::Skipped(reason) => {
                stats.skipped += 1;
                (&mut self.skip_reasons, reason)
            }
        };
        *tally.entry(normalize_message(reason)).or_default() += 1;
    }
}

/// A case file's path below the root, without its extension.
fn section_from_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path).with_extension("");
    let parts: Vec<_> = rel
        .components()
        .filter_map(|component| match component {
            std::path::Component::Normal(part) => Some(part.to_string_lossy().to_string()),
            _ => None,
        })
        .collect();

    if parts.is_empty() {
        "(root)".to_string()
    } else {
        parts.join("/")
    }
}

/// Expected and actual values vary per case, so only the text before them
/// groups failures.
fn normalize_message(message: &str) -> String {
    let first_line = message.lines().next().unwrap_or_default().trim();
    let head = first_line
        .split_once(" but got ")
        .map_or(first_line, |(head, _)| head);
    let compact = head.split_whitespace().collect::<Vec<_>>().join(" ");
    let max_chars = 100;

    if compact.chars().count() <= max_chars {
        compact
    } else {
        let clipped: String = compact.chars().take(max_chars).collect();
        format!("{clipped}...")
    }
}
