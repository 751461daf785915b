use pregcompat::pattern::Modifier;
use rustyline::completion::{Completer, Pair};

pub struct CommandInfo {
    pub name: &'static str,
    pub usage: &'static str,
    pub about: &'static str,
}

pub static COMMANDS: [CommandInfo; 9] = [
    CommandInfo {
        name: ".pattern",
        usage: ".pattern <literal>",
        about: "set the current pattern",
    },
    CommandInfo {
        name: ".match",
        usage: ".match",
        about: "match subjects (default)",
    },
    CommandInfo {
        name: ".replace",
        usage: ".replace <text>",
        about: "replace matches in subjects",
    },
    CommandInfo {
        name: ".split",
        usage: ".split",
        about: "split subjects around matches",
    },
    CommandInfo {
        name: ".flags",
        usage: ".flags",
        about: "toggle offset capture",
    },
    CommandInfo {
        name: ".error",
        usage: ".error",
        about: "show the last error",
    },
    CommandInfo {
        name: ".clear",
        usage: ".clear",
        about: "reset the session",
    },
    CommandInfo {
        name: ".help",
        usage: ".help",
        about: "show commands",
    },
    CommandInfo {
        name: ".exit",
        usage: ".exit",
        about: "exit REPL",
    },
];

#[derive(Default)]
pub struct CommandCompleter;

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(complete_line(line, pos))
    }
}

/// Every letter the literal parser accepts as a modifier.
fn modifier_letters() -> impl Iterator<Item = char> {
    ('a'..='z')
        .chain('A'..='Z')
        .filter(|&ch| matches!(Modifier::from_char(ch), Ok(Some(_))))
}

pub fn complete_line(line: &str, pos: usize) -> (usize, Vec<Pair>) {
    let safe_pos = pos.min(line.len());
    let prefix = &line[..safe_pos];

    if prefix.starts_with('.') && !prefix.contains(char::is_whitespace) {
        let names = COMMANDS
            .iter()
            .map(|c| c.name)
            .filter(|name| name.starts_with(prefix))
            .collect::<Vec<_>>();
        return (0, pairs(&names));
    }

    if let Some(start) = modifier_start(prefix) {
        let used = &prefix[start..];
        let remaining = modifier_letters()
            .filter(|m| !used.contains(*m))
            .map(|m| m.to_string())
            .collect::<Vec<_>>();
        let refs = remaining.iter().map(String::as_str).collect::<Vec<_>>();
        return (safe_pos, pairs(&refs));
    }

    (safe_pos, Vec::new())
}

/// Byte index where the modifiers of a closed `.pattern` literal begin.
fn modifier_start(prefix: &str) -> Option<usize> {
    let literal = prefix.strip_prefix(".pattern ")?.trim_start();
    let offset = prefix.len() - literal.len();
    let delimiter = literal.chars().next()?;
    let closing = pregcompat::pattern::closing_delimiter(delimiter);
    let body = &literal[delimiter.len_utf8()..];
    let end = body.rfind(closing)?;
    let start = offset + delimiter.len_utf8() + end + closing.len_utf8();
    prefix[start..]
        .chars()
        .all(|c| c.is_ascii_alphabetic())
        .then_some(start)
}

fn pairs(values: &[&str]) -> Vec<Pair> {
    values
        .iter()
        .map(|v| Pair {
            display: (*v).to_string(),
            replacement: (*v).to_string(),
        })
        .collect()
}
