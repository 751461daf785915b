use std::borrow::Cow;

use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::validate::{ValidationContext, ValidationResult, Validator};

use super::completer::CommandCompleter;
use super::highlighter;
use super::hinter::CommandHinter;

/// Line editor support: completion and hints come from the command table,
/// validation keeps an unclosed `.pattern` literal open across lines.
#[derive(
    Default,
    rustyline::Helper,
    rustyline::Completer,
    rustyline::Hinter,
    rustyline::Validator,
)]
pub struct ReplHelper {
    #[rustyline(Completer)]
    completer: CommandCompleter,
    #[rustyline(Hinter)]
    hinter: CommandHinter,
    #[rustyline(Validator)]
    validator: LiteralValidator,
}

#[derive(Default)]
pub struct LiteralValidator;

impl Validator for LiteralValidator {
    fn validate(&self, ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        Ok(if super::needs_more_input(ctx.input()) {
            ValidationResult::Incomplete
        } else {
            ValidationResult::Valid(None)
        })
    }
}

impl Highlighter for ReplHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        highlighter::highlight_line(line)
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        _default: bool,
    ) -> Cow<'b, str> {
        highlighter::highlight_prompt(prompt)
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        highlighter::highlight_hint(hint)
    }

    // Subject lines are shown as typed; only commands are coloured.
    fn highlight_char(&self, line: &str, _pos: usize, _kind: CmdKind) -> bool {
        line.starts_with('.')
    }
}
