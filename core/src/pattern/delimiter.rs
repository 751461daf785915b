/// Whether `ch` may open a pattern literal.
pub fn is_valid_delimiter(ch: char) -> bool {
    !(ch.is_alphanumeric() || ch == '\\' || ch == '\0')
}

/// The character that closes a literal opened with `open`. Bracket-style
/// delimiters pair with their counterpart; everything else closes itself.
pub fn closing_delimiter(open: char) -> char {
    match open {
        '(' => ')',
        '[' => ']',
        '{' => '}',
        '<' => '>',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punctuation_is_valid() {
        for ch in ['/', '#', '~', '!', '@', '%', '|', '{', '('] {
            assert!(is_valid_delimiter(ch), "{ch:?} should be accepted");
        }
    }

    #[test]
    fn word_characters_are_invalid() {
        for ch in ['a', 'Z', '0', '\\', '\0', 'é'] {
            assert!(!is_valid_delimiter(ch), "{ch:?} should be rejected");
        }
    }

    #[test]
    fn brackets_pair_up() {
        assert_eq!(closing_delimiter('('), ')');
        assert_eq!(closing_delimiter('['), ']');
        assert_eq!(closing_delimiter('{'), '}');
        assert_eq!(closing_delimiter('<'), '>');
        assert_eq!(closing_delimiter('/'), '/');
        assert_eq!(closing_delimiter('#'), '#');
    }
}
