use std::borrow::Cow;

use owo_colors::OwoColorize;
use pregcompat::pattern::{closing_delimiter, is_valid_delimiter};

/// Colours dot-commands, and splits a `.pattern` literal into delimiters,
/// body and modifiers.
pub fn highlight_line(line: &str) -> Cow<'_, str> {
    if !line.starts_with('.') {
        return Cow::Borrowed(line);
    }

    let (command, rest) = match line.find(char::is_whitespace) {
        Some(idx) => line.split_at(idx),
        None => (line, ""),
    };
    let mut out = command.blue().bold().to_string();
    if command == ".pattern" {
        out.push_str(&highlight_literal(rest));
    } else {
        out.push_str(&rest.yellow().to_string());
    }
    Cow::Owned(out)
}

fn highlight_literal(text: &str) -> String {
    let literal = text.trim_start();
    let lead = &text[..text.len() - literal.len()];

    let Some(open) = literal.chars().next() else {
        return text.to_string();
    };
    if !is_valid_delimiter(open) {
        return format!("{lead}{}", literal.red());
    }

    let close = closing_delimiter(open);
    let after_open = &literal[open.len_utf8()..];
    let Some(end) = after_open.rfind(close) else {
        return format!("{lead}{}{after_open}", open.to_string().cyan().bold());
    };
    let body = &after_open[..end];
    let modifiers = &after_open[end + close.len_utf8()..];

    format!(
        "{lead}{}{body}{}{}",
        open.to_string().cyan().bold(),
        close.to_string().cyan().bold(),
        modifiers.magenta()
    )
}

pub fn highlight_prompt(prompt: &str) -> Cow<'_, str> {
    if prompt == "> " {
        return Cow::Owned(format!("{} ", ">".bright_green().bold()));
    }
    Cow::Borrowed(prompt)
}

pub fn highlight_hint(hint: &str) -> Cow<'_, str> {
    Cow::Owned(hint.bright_black().to_string())
}
