/// Removes insignificant whitespace and `#` comments from an extended-mode
/// pattern body.
///
/// Escaped characters are copied verbatim together with their backslash,
/// and nothing inside a `[...]` class is touched. A `]` that opens the
/// class (directly or after `^`) is a member, not the terminator.
pub fn strip_extended(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    let mut inside_class = false;
    let mut class_body = 0;

    while let Some(ch) = chars.next() {
        if ch == '\\' {
            out.push(ch);
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
            continue;
        }

        if inside_class {
            let members = &out[class_body..];
            let closes = ch == ']' && !(members.is_empty() || members == "^");
            out.push(ch);
            if closes {
                inside_class = false;
            }
            continue;
        }

        match ch {
            '[' => {
                out.push(ch);
                inside_class = true;
                class_body = out.len();
            }
            '#' => {
                for skipped in chars.by_ref() {
                    if skipped == '\n' {
                        break;
                    }
                }
            }
            c if is_pattern_whitespace(c) => {}
            c => out.push(c),
        }
    }

    out
}

fn is_pattern_whitespace(ch: char) -> bool {
    ch.is_ascii_whitespace() || ch == '\x0B'
}
