use rustyline::hint::Hinter;

use super::completer::COMMANDS;

#[derive(Default)]
pub struct CommandHinter;

impl Hinter for CommandHinter {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<String> {
        hint_for(line, pos)
    }
}

pub fn hint_for(line: &str, pos: usize) -> Option<String> {
    if pos < line.len() {
        return None;
    }

    let trimmed = line.trim_start();
    if trimmed.len() < 2 || !trimmed.starts_with('.') {
        return None;
    }

    if let Some(command) = COMMANDS.iter().find(|c| c.name == trimmed) {
        let args = command.usage.strip_prefix(command.name)?;
        return (!args.is_empty()).then(|| args.to_string());
    }

    let mut candidates = COMMANDS.iter().filter(|c| c.name.starts_with(trimmed));
    let only = candidates.next()?;
    if candidates.next().is_some() {
        return None;
    }
    only.usage.strip_prefix(trimmed).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_the_rest_of_a_unique_command() {
        assert_eq!(hint_for(".pat", 4), Some("tern <literal>".to_string()));
        assert_eq!(hint_for(".replace", 8), Some(" <text>".to_string()));
    }

    #[test]
    fn stays_quiet_when_ambiguous_or_mid_line() {
        assert_eq!(hint_for(".e", 2), None);
        assert_eq!(hint_for(".pat", 2), None);
        assert_eq!(hint_for(".split", 6), None);
        assert_eq!(hint_for("abc", 3), None);
    }
}
