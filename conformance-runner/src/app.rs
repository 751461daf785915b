use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::discovery::collect_case_files;
use crate::execution::{SuiteSummary, init_thread_pool, run_suite};
use crate::stats::print_analysis;

const SAMPLE_ROWS: usize = 10;

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();
    init_thread_pool();

    let started = Instant::now();
    let files = collect_case_files(&cli.path);
    if files.is_empty() {
        eprintln!(
            "{} no case files under {}",
            "error:".red().bold(),
            cli.path.display()
        );
        return ExitCode::FAILURE;
    }
    println!(
        "{} {} case files from {}\n",
        "Running".bold().cyan(),
        files.len(),
        cli.path.display()
    );

    let summary = run_suite(&cli.path, &files, cli.verbose, cli.analyze);
    print_summary(&summary, started.elapsed());

    if cli.analyze {
        print_analysis(&summary.analysis);
    }
    if !cli.verbose {
        print_failure_sample(&summary.failures);
    }

    if summary.failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("PREG_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_summary(summary: &SuiteSummary, elapsed: Duration) {
    let rule = "=".repeat(60);
    println!("\n{rule}");
    println!(
        "Passed: {} | Failed: {} | Skipped: {}",
        summary.passed.to_string().green().bold(),
        summary.failed.to_string().red().bold(),
        summary.skipped.to_string().yellow().bold()
    );
    println!("Completed in {:.2}s", elapsed.as_secs_f64());
    println!("{rule}");
}

fn print_failure_sample(failures: &[(String, String)]) {
    if failures.is_empty() {
        return;
    }

    println!("\n{}", "Sample failures:".red().bold());
    for (label, reason) in failures.iter().take(SAMPLE_ROWS) {
        println!("  {label}\n      {reason}");
    }
    if let Some(hidden) = failures.len().checked_sub(SAMPLE_ROWS).filter(|n| *n > 0) {
        println!("  ... and {hidden} more (use --verbose for all)");
    }
}
