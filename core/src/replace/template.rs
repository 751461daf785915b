use regex::Captures;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Literal(String),
    Group(usize),
}

/// A parsed replacement string.
///
/// `$n`, `${n}` and `\n` (one or two digits) insert group `n`, or nothing
/// when that group did not participate or does not exist. A backslash in
/// front of `\` or `$` makes that character literal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct Template {
    pieces: Vec<Piece>,
}

impl Template {
    pub(crate) fn parse(replacement: &str) -> Self {
        let bytes = replacement.as_bytes();
        let mut template = Self::default();
        let mut literal_start = 0;
        let mut i = 0;

        while i < bytes.len() {
            let reference = match bytes[i] {
                b'\\' => match bytes.get(i + 1) {
                    Some(b'\\' | b'$') => {
                        template.push_literal(&replacement[literal_start..i]);
                        literal_start = i + 1;
                        i += 2;
                        continue;
                    }
                    Some(b) if b.is_ascii_digit() => read_digits(bytes, i + 1),
                    _ => None,
                },
                b'$' => match bytes.get(i + 1) {
                    Some(b'{') => read_digits(bytes, i + 2)
                        .filter(|(_, end)| bytes.get(*end) == Some(&b'}'))
                        .map(|(group, end)| (group, end + 1)),
                    Some(b) if b.is_ascii_digit() => read_digits(bytes, i + 1),
                    _ => None,
                },
                _ => None,
            };

            match reference {
                Some((group, end)) => {
                    template.push_literal(&replacement[literal_start..i]);
                    template.pieces.push(Piece::Group(group));
                    i = end;
                    literal_start = end;
                }
                None => i += 1,
            }
        }

        template.push_literal(&replacement[literal_start..]);
        template
    }

    fn push_literal(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(Piece::Literal(last)) = self.pieces.last_mut() {
            last.push_str(text);
        } else {
            self.pieces.push(Piece::Literal(text.to_string()));
        }
    }

    pub(crate) fn expand(&self, caps: &Captures<'_>, out: &mut String) {
        for piece in &self.pieces {
            match piece {
                Piece::Literal(text) => out.push_str(text),
                Piece::Group(idx) => {
                    if let Some(m) = caps.get(*idx) {
                        out.push_str(m.as_str());
                    }
                }
            }
        }
    }
}

/// Reads one or two ASCII digits starting at `at`; returns the number and
/// the index just past it.
fn read_digits(bytes: &[u8], at: usize) -> Option<(usize, usize)> {
    let first = bytes.get(at).filter(|b| b.is_ascii_digit())?;
    let mut value = usize::from(first - b'0');
    let mut end = at + 1;
    if let Some(second) = bytes.get(end).filter(|b| b.is_ascii_digit()) {
        value = value * 10 + usize::from(second - b'0');
        end += 1;
    }
    Some((value, end))
}
