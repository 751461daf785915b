use crate::errors::ParseErrorKind;

/// A recognized modifier letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    CaseInsensitive,
    Multiline,
    DotAll,
    Unicode,
    /// `x`: selects whitespace/comment stripping, never reaches the compiler.
    Extended,
    /// `A`, `U`, `D`, `S`, `J`: accepted for compatibility, no effect.
    Ignored(char),
}

impl Modifier {
    /// Classifies one modifier character. `Ok(None)` means the character is
    /// insignificant padding (space, CR, LF).
    pub fn from_char(ch: char) -> Result<Option<Self>, ParseErrorKind> {
        match ch {
            'i' => Ok(Some(Self::CaseInsensitive)),
            'm' => Ok(Some(Self::Multiline)),
            's' => Ok(Some(Self::DotAll)),
            'u' => Ok(Some(Self::Unicode)),
            'x' => Ok(Some(Self::Extended)),
            'A' | 'U' | 'D' | 'S' | 'J' => Ok(Some(Self::Ignored(ch))),
            ' ' | '\r' | '\n' => Ok(None),
            'e' => Err(ParseErrorKind::EvalModifier),
            other => Err(ParseErrorKind::UnknownModifier(other)),
        }
    }

    pub fn letter(self) -> char {
        match self {
            Self::CaseInsensitive => 'i',
            Self::Multiline => 'm',
            Self::DotAll => 's',
            Self::Unicode => 'u',
            Self::Extended => 'x',
            Self::Ignored(ch) => ch,
        }
    }
}

/// Flags forwarded to the native compiler. Setting a flag twice is a no-op,
/// so repeated modifier letters collapse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NativeFlags {
    pub ignore_case: bool,
    pub multiline: bool,
    pub dotall: bool,
    pub unicode: bool,
}

impl NativeFlags {
    pub fn apply(&mut self, modifier: Modifier) {
        match modifier {
            Modifier::CaseInsensitive => self.ignore_case = true,
            Modifier::Multiline => self.multiline = true,
            Modifier::DotAll => self.dotall = true,
            Modifier::Unicode => self.unicode = true,
            Modifier::Extended | Modifier::Ignored(_) => {}
        }
    }

    pub fn to_flag_string(&self) -> String {
        let mut s = String::new();
        if self.ignore_case {
            s.push('i');
        }
        if self.multiline {
            s.push('m');
        }
        if self.dotall {
            s.push('s');
        }
        if self.unicode {
            s.push('u');
        }
        s
    }
}
