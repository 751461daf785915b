use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

use colored::Colorize;
use rayon::prelude::*;

use crate::case::{Case, parse_cases};
use crate::panic_message::format_panic;
use crate::runner::{CaseResult, run_case};
use crate::stats::Analysis;

pub struct SuiteSummary {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub failures: Vec<(String, String)>,
    pub analysis: Analysis,
}

pub fn init_thread_pool() {
    let threads = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(8);

    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}

/// A case together with the file it came from.
pub struct Loaded {
    pub path: PathBuf,
    pub case: Case,
}

/// Reads every file; unreadable or malformed files become skip records.
pub fn load_suite(files: &[PathBuf]) -> (Vec<Loaded>, Vec<CaseRecord>) {
    let mut loaded = Vec::new();
    let mut skipped = Vec::new();

    for path in files {
        let cases = fs::read_to_string(path)
            .map_err(|err| format!("failed to read case file: {err}"))
            .and_then(|source| {
                parse_cases(&source).map_err(|err| format!("failed to parse case file: {err}"))
            });
        match cases {
            Ok(cases) => loaded.extend(cases.into_iter().map(|case| Loaded {
                path: path.clone(),
                case,
            })),
            Err(reason) => {
                tracing::warn!("skipping {}: {reason}", path.display());
                skipped.push(CaseRecord {
                    path: path.clone(),
                    name: "(file)".to_string(),
                    result: CaseResult::Skipped(reason),
                });
            }
        }
    }

    (loaded, skipped)
}

pub fn run_suite(root: &Path, files: &[PathBuf], verbose: bool, analyze: bool) -> SuiteSummary {
    let (cases, mut records) = load_suite(files);
    records.extend(cases.par_iter().map(run_loaded).collect::<Vec<_>>());

    let mut summary = SuiteSummary {
        passed: 0,
        failed: 0,
        skipped: 0,
        failures: Vec::new(),
        analysis: Analysis::default(),
    };

    for record in records {
        if analyze {
            summary.analysis.record(root, &record.path, &record.result);
        }
        apply_record(&mut summary, &record, verbose);
    }

    summary
}

pub struct CaseRecord {
    path: PathBuf,
    name: String,
    result: CaseResult,
}

impl CaseRecord {
    fn label(&self) -> String {
        format!("{} :: {}", self.path.display(), self.name)
    }
}

fn run_loaded(loaded: &Loaded) -> CaseRecord {
    let result = panic::catch_unwind(AssertUnwindSafe(|| run_case(&loaded.case)))
        .unwrap_or_else(|panic_payload| CaseResult::Failed(format_panic(panic_payload)));

    CaseRecord {
        path: loaded.path.clone(),
        name: loaded.case.name.clone(),
        result,
    }
}

fn apply_record(summary: &mut SuiteSummary, record: &CaseRecord, verbose: bool) {
    match &record.result {
        CaseResult::Passed => {
            summary.passed += 1;
            if verbose {
                println!("{} {}", "PASS".green(), record.label());
            }
        }
        CaseResult::Failed(reason) => {
            summary.failed += 1;
            if verbose {
                println!("{} {} - {}", "FAIL".red(), record.label(), reason);
            }
            summary.failures.push((record.label(), reason.clone()));
        }
        CaseResult::Skipped(reason) => {
            summary.skipped += 1;
            if verbose {
                println!("{} {} - {}", "SKIP".yellow(), record.label(), reason);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::collect_case_files;

    #[test]
    fn shipped_suite_passes() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../conformance");
        let files = collect_case_files(&root);
        let summary = run_suite(&root, &files, false, true);
        assert!(summary.passed > 0);
        assert_eq!(summary.failed, 0, "{:#?}", summary.failures);
    }

    #[test]
    fn broken_files_are_skipped() {
        let dir = std::env::temp_dir().join(format!("preg-conformance-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.yaml");
        fs::write(&path, "- name: [unterminated").unwrap();

        let (loaded, skipped) = load_suite(&[path.clone()]);
        assert!(loaded.is_empty());
        assert_eq!(skipped.len(), 1);
        assert!(matches!(skipped[0].result, CaseResult::Skipped(_)));

        fs::remove_dir_all(&dir).ok();
    }
}
