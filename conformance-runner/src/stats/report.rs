use std::collections::HashMap;

use colored::Colorize;

use super::{Analysis, SectionStats};

pub fn print_analysis(analysis: &Analysis) {
    println!("\n{}", "Analysis (--analyze)".bold().cyan());
    print_files(analysis);
    print_top("Most common failure messages:", &analysis.failure_messages, 10);
    print_top("Most common skip reasons:", &analysis.skip_reasons, 5);
}

fn print_files(analysis: &Analysis) {
    let mut files: Vec<(&String, &SectionStats)> = analysis.sections.iter().collect();
    files.sort_by(|a, b| a.0.cmp(b.0));

    println!("\n{}", "Case files:".bold());
    for (name, stats) in files {
        let line = format!(
            "  {:28} {:>5} cases | pass {:>6} | fail {:>6} | skip {:>6}",
            name,
            stats.total,
            rate(stats.passed, stats.total),
            rate(stats.failed, stats.total),
            rate(stats.skipped, stats.total)
        );
        if stats.failed > 0 {
            println!("{}", line.red());
        } else {
            println!("{line}");
        }
    }
}

fn print_top(title: &str, counts: &HashMap<String, usize>, limit: usize) {
    let mut ranked = ranked(counts);
    if ranked.is_empty() {
        return;
    }
    ranked.truncate(limit);

    println!("\n{}", title.bold());
    for (message, count) in ranked {
        println!("  {count:>4}x {message}");
    }
}

/// Most frequent first, ties by text.
fn ranked(counts: &HashMap<String, usize>) -> Vec<(&str, usize)> {
    let mut ranked: Vec<_> = counts.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked
}

fn rate(numerator: usize, denominator: usize) -> String {
    if denominator == 0 {
        return "n/a".to_string();
    }
    format!("{:.1}%", numerator as f64 * 100.0 / denominator as f64)
}
