/// Characters that carry meaning in a pattern body.
///
/// `<` and `>` are deliberately absent: they are literal on their own, while
/// `\<` and `\>` are word-boundary assertions in the native syntax.
const SPECIAL: &[char] = &[
    '.', '\\', '+', '*', '?', '[', '^', ']', '$', '(', ')', '{', '}', '=', '!', '|', ':', '-',
    '#',
];

/// Escapes `text` so that it matches itself literally when used as a pattern
/// body. `delimiter`, when given, is escaped as well so the result can be
/// framed by it.
pub fn quote(text: &str, delimiter: Option<char>) -> String {
    let delimiter = delimiter.filter(|d| escapable_delimiter(*d));
    let mut out = String::with_capacity(text.len() + text.len() / 4);

    for ch in text.chars() {
        if ch == '\0' {
            out.push_str(r"\x00");
            continue;
        }
        if SPECIAL.contains(&ch) || Some(ch) == delimiter {
            out.push('\\');
        }
        out.push(ch);
    }

    out
}

// Only ASCII punctuation can be escaped with a backslash.
fn escapable_delimiter(ch: char) -> bool {
    ch.is_ascii_punctuation() && ch != '<' && ch != '>'
}
