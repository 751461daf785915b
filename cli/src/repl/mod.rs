mod completer;
mod helper;
mod highlighter;
mod hinter;

use owo_colors::OwoColorize;
use pregcompat::{Context, MatchFlags, ParseErrorKind, PregError, SplitFlags, parse_literal};
use rustyline::error::ReadlineError;
use rustyline::{Config, EditMode, Editor};

use self::helper::ReplHelper;

/// What a subject line is run through.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Mode {
    Match,
    Replace(String),
    Split,
}

struct Session {
    ctx: Context,
    pattern: Option<String>,
    mode: Mode,
    offset_capture: bool,
}

impl Session {
    fn new() -> Self {
        Self {
            ctx: Context::new(),
            pattern: None,
            mode: Mode::Match,
            offset_capture: false,
        }
    }
}

pub fn run() -> Result<(), ReadlineError> {
    let config = Config::builder()
        .history_ignore_dups(true)?
        .completion_type(rustyline::CompletionType::List)
        .edit_mode(EditMode::Emacs)
        .build();

    let mut rl: Editor<ReplHelper, rustyline::history::DefaultHistory> =
        Editor::with_config(config)?;
    rl.set_helper(Some(ReplHelper::default()));

    let mut session = Session::new();

    println!(
        "{} {}",
        "preg".bright_cyan().bold(),
        env!("CARGO_PKG_VERSION").bright_black()
    );
    println!("{}", "Type .help for REPL commands".bright_black());

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                match handle_command(trimmed, &mut session) {
                    Handled::Exit => break,
                    Handled::Yes => continue,
                    Handled::No => run_subject(&mut session, &line),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "^C".yellow());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "bye".bright_black());
                break;
            }
            Err(err) => return Err(err),
        }
    }

    Ok(())
}

enum Handled {
    Yes,
    No,
    Exit,
}

fn handle_command(trimmed: &str, session: &mut Session) -> Handled {
    if !trimmed.starts_with('.') {
        return Handled::No;
    }
    let (command, arg) = match trimmed.split_once(char::is_whitespace) {
        Some((command, arg)) => (command, arg.trim()),
        None => (trimmed, ""),
    };

    match command {
        ".exit" => return Handled::Exit,
        ".help" => print_help(),
        ".clear" => {
            *session = Session::new();
            println!("{}", "session cleared".green());
        }
        ".pattern" => set_pattern(session, arg),
        ".match" => {
            session.mode = Mode::Match;
            println!("{}", "subjects are matched".green());
        }
        ".replace" => {
            session.mode = Mode::Replace(arg.to_string());
            println!("{} {}", "subjects are replaced with".green(), arg.yellow());
        }
        ".split" => {
            session.mode = Mode::Split;
            println!("{}", "subjects are split".green());
        }
        ".flags" => {
            session.offset_capture = !session.offset_capture;
            let state = if session.offset_capture { "on" } else { "off" };
            println!("{} {}", "offset capture".green(), state.yellow());
        }
        ".error" => {
            let code = session.ctx.last_error_code();
            println!(
                "{} {} {}",
                code.code().to_string().bright_black(),
                code.name().cyan(),
                session.ctx.last_error_message()
            );
        }
        _ => eprintln!(
            "{} unknown command {}, try .help",
            "error:".red().bold(),
            command.yellow()
        ),
    }
    Handled::Yes
}

fn print_help() {
    for (usage, what) in completer::COMMANDS.iter().map(|c| (c.usage, c.about)) {
        println!("{}", format!("{usage:<22}{what}").bright_blue());
    }
    println!(
        "{}",
        "any other line is a subject for the current pattern".bright_black()
    );
}

fn set_pattern(session: &mut Session, literal: &str) {
    match session.ctx.compile(literal) {
        Ok(compiled) => {
            tracing::debug!("pattern set to {literal}");
            println!(
                "{} {}",
                "pattern".green(),
                compiled.parsed().to_string().cyan()
            );
            session.pattern = Some(literal.to_string());
        }
        Err(err) => report(err),
    }
}

fn run_subject(session: &mut Session, subject: &str) {
    let Some(pattern) = session.pattern.clone() else {
        eprintln!(
            "{} no pattern set, use .pattern /body/flags",
            "error:".red().bold()
        );
        return;
    };

    let rendered = match &session.mode {
        Mode::Match => {
            let mut flags = MatchFlags::SET_ORDER;
            if session.offset_capture {
                flags |= MatchFlags::OFFSET_CAPTURE;
            }
            session
                .ctx
                .match_all(&pattern, subject, flags, 0)
                .map(|found| serde_json::to_string(&found))
        }
        Mode::Replace(replacement) => {
            let replacement = replacement.clone();
            session
                .ctx
                .replace(pattern, replacement, subject, -1)
                .map(|replaced| serde_json::to_string(&replaced))
        }
        Mode::Split => {
            let flags = if session.offset_capture {
                SplitFlags::OFFSET_CAPTURE
            } else {
                SplitFlags::empty()
            };
            session
                .ctx
                .split(&pattern, subject, -1, flags)
                .map(|pieces| serde_json::to_string(&pieces))
        }
    };

    match rendered {
        Ok(Ok(json)) => println!("{json}"),
        Ok(Err(err)) => eprintln!("{} {err}", "error:".red().bold()),
        Err(err) => report(err),
    }
}

fn report(err: PregError) {
    eprintln!("{:?}", miette::Report::new(err));
}

/// A `.pattern` line continues while its literal lacks the closing
/// delimiter, so extended-mode bodies can span lines.
pub fn needs_more_input(source: &str) -> bool {
    if source.trim_end().ends_with('\\') {
        return true;
    }
    let Some(literal) = source.trim_start().strip_prefix(".pattern ") else {
        return false;
    };
    match parse_literal(literal) {
        Err(err) => matches!(
            err.kind,
            ParseErrorKind::MissingEndDelimiter(_) | ParseErrorKind::MissingMatchingDelimiter(_)
        ),
        Ok(_) => false,
    }
}
