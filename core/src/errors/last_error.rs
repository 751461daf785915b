use super::PregError;

/// Numeric last-error codes. Only `NoError` and `Internal` are ever
/// recorded; the others exist so callers can keep testing against the full
/// constant set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i32)]
pub enum ErrorCode {
    #[default]
    NoError = 0,
    Internal = 1,
    BacktrackLimit = 2,
    RecursionLimit = 3,
    BadUtf8 = 4,
    BadUtf8Offset = 5,
    JitStackLimit = 6,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 7] = [
        ErrorCode::NoError,
        ErrorCode::Internal,
        ErrorCode::BacktrackLimit,
        ErrorCode::RecursionLimit,
        ErrorCode::BadUtf8,
        ErrorCode::BadUtf8Offset,
        ErrorCode::JitStackLimit,
    ];

    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }

    /// Conventional constant name, e.g. `PREG_INTERNAL_ERROR`.
    pub fn name(self) -> &'static str {
        match self {
            Self::NoError => "PREG_NO_ERROR",
            Self::Internal => "PREG_INTERNAL_ERROR",
            Self::BacktrackLimit => "PREG_BACKTRACK_LIMIT_ERROR",
            Self::RecursionLimit => "PREG_RECURSION_LIMIT_ERROR",
            Self::BadUtf8 => "PREG_BAD_UTF8_ERROR",
            Self::BadUtf8Offset => "PREG_BAD_UTF8_OFFSET_ERROR",
            Self::JitStackLimit => "PREG_JIT_STACKLIMIT_ERROR",
        }
    }

    pub fn default_message(self) -> &'static str {
        match self {
            Self::NoError => "No error",
            Self::Internal => "Internal error",
            Self::BacktrackLimit => "Backtrack limit exhausted",
            Self::RecursionLimit => "Recursion limit exhausted",
            Self::BadUtf8 => "Malformed UTF-8 characters, possibly incorrectly encoded",
            Self::BadUtf8Offset => {
                "The offset did not correspond to the beginning of a valid UTF-8 code point"
            }
            Self::JitStackLimit => "JIT stack limit exhausted",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of the most recent compile attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastError {
    code: ErrorCode,
    message: String,
}

impl Default for LastError {
    fn default() -> Self {
        Self {
            code: ErrorCode::NoError,
            message: ErrorCode::NoError.default_message().to_string(),
        }
    }
}

impl LastError {
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn clear(&mut self) {
        if self.code != ErrorCode::NoError {
            *self = Self::default();
        }
    }

    pub(crate) fn record(&mut self, err: &PregError) {
        if let Some(code) = err.error_code() {
            self.code = code;
            self.message = err.to_string();
        }
    }
}
