use std::io::{self, Read};
use std::process;

use clap::{Args, Parser, Subcommand};
use miette::{IntoDiagnostic, WrapErr};
use owo_colors::OwoColorize;
use pregcompat::{
    Context, GrepFlags, MatchFlags, OneOrMany, SplitFlags, quote,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

mod repl;

#[derive(Parser)]
#[command(
    name = "preg",
    version,
    about = "Match, replace and split text with /pattern/flags literals"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
    /// Print JSON on a single line
    #[arg(long, global = true)]
    compact: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print the first match as a keyed row
    Match {
        pattern: String,
        /// Subject text; read from stdin when omitted
        subject: Option<String>,
        #[command(flatten)]
        row: RowArgs,
        /// Byte offset to start searching from (negative counts from the end)
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        offset: isize,
    },
    /// Print every match, grouped by capture or by match
    MatchAll {
        pattern: String,
        subject: Option<String>,
        #[command(flatten)]
        row: RowArgs,
        /// Group results per match instead of per capture group
        #[arg(long)]
        set_order: bool,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        offset: isize,
    },
    /// Replace occurrences in one or more subjects
    Replace {
        pattern: String,
        replacement: String,
        /// Subjects; read one from stdin when omitted
        subjects: Vec<String>,
        /// Maximum replacements per pattern per subject, -1 for no limit
        #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
        limit: isize,
    },
    /// Split a subject around matches
    Split {
        pattern: String,
        subject: Option<String>,
        /// Maximum number of pieces, -1 or 0 for no limit
        #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
        limit: isize,
        /// Drop empty pieces
        #[arg(long)]
        no_empty: bool,
        /// Include capture groups of the delimiter
        #[arg(long)]
        delim_capture: bool,
        /// Pair each piece with its byte offset
        #[arg(long)]
        offset_capture: bool,
    },
    /// Keep the entries that match (stdin lines when none are given)
    Grep {
        pattern: String,
        entries: Vec<String>,
        /// Keep the entries that do not match
        #[arg(long)]
        invert: bool,
    },
    /// Escape text so it matches literally inside a pattern
    Quote {
        text: String,
        /// Delimiter to escape as well
        #[arg(long)]
        delimiter: Option<char>,
    },
}

#[derive(Args)]
struct RowArgs {
    /// Pair each capture with its byte offset
    #[arg(long)]
    offset_capture: bool,
    /// Report unmatched groups as null instead of ""
    #[arg(long)]
    unmatched_as_null: bool,
}

impl RowArgs {
    fn flags(&self) -> MatchFlags {
        let mut flags = MatchFlags::empty();
        if self.offset_capture {
            flags |= MatchFlags::OFFSET_CAPTURE;
        }
        if self.unmatched_as_null {
            flags |= MatchFlags::UNMATCHED_AS_NULL;
        }
        flags
    }
}

/// Whether anything matched, used for the exit status.
enum Outcome {
    Found,
    Nothing,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        if let Err(err) = repl::run() {
            eprintln!("{} {err}", "repl error:".red().bold());
            process::exit(1);
        }
        return;
    };

    let mut ctx = Context::new();
    match execute(&mut ctx, command, cli.compact) {
        Ok(Outcome::Found) => {}
        Ok(Outcome::Nothing) => process::exit(1),
        Err(err) => {
            eprintln!("{err:?}");
            process::exit(2);
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("PREG_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn execute(ctx: &mut Context, command: Command, compact: bool) -> miette::Result<Outcome> {
    match command {
        Command::Match {
            pattern,
            subject,
            row,
            offset,
        } => {
            let subject = subject_or_stdin(subject)?;
            let found = ctx.match_one(&pattern, &subject, row.flags(), offset)?;
            print_json(&found, compact)?;
            Ok(if found.is_some() {
                Outcome::Found
            } else {
                Outcome::Nothing
            })
        }
        Command::MatchAll {
            pattern,
            subject,
            row,
            set_order,
            offset,
        } => {
            let subject = subject_or_stdin(subject)?;
            let mut flags = row.flags();
            if set_order {
                flags |= MatchFlags::SET_ORDER;
            }
            let found = ctx.match_all(&pattern, &subject, flags, offset)?;
            print_json(&found, compact)?;
            Ok(if found.count() > 0 {
                Outcome::Found
            } else {
                Outcome::Nothing
            })
        }
        Command::Replace {
            pattern,
            replacement,
            subjects,
            limit,
        } => {
            let subjects = match subjects.len() {
                0 => OneOrMany::One(read_stdin()?),
                1 => OneOrMany::One(subjects.into_iter().collect()),
                _ => OneOrMany::Many(subjects),
            };
            let replaced = ctx.replace(pattern, replacement, subjects, limit)?;
            print_json(&replaced, compact)?;
            Ok(Outcome::Found)
        }
        Command::Split {
            pattern,
            subject,
            limit,
            no_empty,
            delim_capture,
            offset_capture,
        } => {
            let subject = subject_or_stdin(subject)?;
            let mut flags = SplitFlags::empty();
            if no_empty {
                flags |= SplitFlags::NO_EMPTY;
            }
            if delim_capture {
                flags |= SplitFlags::DELIM_CAPTURE;
            }
            if offset_capture {
                flags |= SplitFlags::OFFSET_CAPTURE;
            }
            let pieces = ctx.split(&pattern, &subject, limit, flags)?;
            print_json(&pieces, compact)?;
            Ok(Outcome::Found)
        }
        Command::Grep {
            pattern,
            entries,
            invert,
        } => {
            let entries = if entries.is_empty() {
                read_stdin()?.lines().map(str::to_string).collect()
            } else {
                entries
            };
            let flags = if invert {
                GrepFlags::INVERT
            } else {
                GrepFlags::empty()
            };
            let kept = ctx.grep(&pattern, &entries, flags)?;
            let keyed: serde_json::Map<String, serde_json::Value> = kept
                .iter()
                .map(|(idx, entry)| (idx.to_string(), serde_json::Value::from(entry.as_str())))
                .collect();
            print_json(&keyed, compact)?;
            Ok(if kept.is_empty() {
                Outcome::Nothing
            } else {
                Outcome::Found
            })
        }
        Command::Quote { text, delimiter } => {
            println!("{}", quote(&text, delimiter));
            Ok(Outcome::Found)
        }
    }
}

fn subject_or_stdin(subject: Option<String>) -> miette::Result<String> {
    match subject {
        Some(subject) => Ok(subject),
        None => read_stdin(),
    }
}

fn read_stdin() -> miette::Result<String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .into_diagnostic()
        .wrap_err("could not read stdin")?;
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
    Ok(buf)
}

fn print_json<T: Serialize>(value: &T, compact: bool) -> miette::Result<()> {
    let rendered = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    };
    let rendered = rendered
        .into_diagnostic()
        .wrap_err("could not render JSON")?;
    println!("{rendered}");
    Ok(())
}
