//! Case files: a YAML list of operations with their expected outcome.

use pregcompat::{GrepFlags, MatchFlags, OneOrMany, SplitFlags};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Op {
    Match,
    MatchAll,
    Replace,
    Split,
    Grep,
    Quote,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Case {
    pub name: String,
    pub op: Op,
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default)]
    pub patterns: Option<Vec<String>>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub subjects: Option<Vec<String>>,
    #[serde(default)]
    pub entries: Option<Vec<String>>,
    #[serde(default)]
    pub replacement: Option<String>,
    #[serde(default)]
    pub replacements: Option<Vec<String>>,
    #[serde(default)]
    pub flags: Vec<String>,
    #[serde(default)]
    pub limit: Option<isize>,
    #[serde(default)]
    pub offset: isize,
    #[serde(default)]
    pub delimiter: Option<char>,
    /// `null` is an expectation too, so presence is tracked separately.
    #[serde(default, deserialize_with = "present")]
    pub expect: Option<Value>,
    /// Substitutions a replace case must report.
    #[serde(default)]
    pub count: Option<usize>,
    /// `PREG_*` name of the expected error code, or `argument`.
    #[serde(default)]
    pub error: Option<String>,
    /// Text the error message must contain.
    #[serde(default)]
    pub message: Option<String>,
    /// Reason to skip the case.
    #[serde(default)]
    pub skip: Option<String>,
}

pub fn parse_cases(source: &str) -> Result<Vec<Case>, serde_yaml::Error> {
    serde_yaml::from_str(source)
}

impl Case {
    pub fn pattern(&self) -> Result<&str, String> {
        self.pattern
            .as_deref()
            .ok_or_else(|| format!("{:?} case needs `pattern`", self.op))
    }

    pub fn subject(&self) -> Result<&str, String> {
        self.subject
            .as_deref()
            .ok_or_else(|| format!("{:?} case needs `subject`", self.op))
    }

    pub fn entries(&self) -> Result<&[String], String> {
        self.entries
            .as_deref()
            .ok_or_else(|| "grep case needs `entries`".to_string())
    }

    /// `patterns` wins over `pattern`; the shape carries through to replace.
    pub fn pattern_arg(&self) -> Result<OneOrMany<String>, String> {
        one_or_many(&self.pattern, &self.patterns, "pattern")
    }

    pub fn replacement_arg(&self) -> Result<OneOrMany<String>, String> {
        one_or_many(&self.replacement, &self.replacements, "replacement")
    }

    pub fn subject_arg(&self) -> Result<OneOrMany<String>, String> {
        one_or_many(&self.subject, &self.subjects, "subject")
    }

    pub fn match_flags(&self) -> Result<MatchFlags, String> {
        self.flags.iter().try_fold(MatchFlags::empty(), |acc, name| {
            let flag = match strip_prefixes(name) {
                "PATTERN_ORDER" => MatchFlags::PATTERN_ORDER,
                "SET_ORDER" => MatchFlags::SET_ORDER,
                "OFFSET_CAPTURE" => MatchFlags::OFFSET_CAPTURE,
                "UNMATCHED_AS_NULL" => MatchFlags::UNMATCHED_AS_NULL,
                _ => return Err(unknown_flag(name)),
            };
            Ok(acc | flag)
        })
    }

    pub fn split_flags(&self) -> Result<SplitFlags, String> {
        self.flags.iter().try_fold(SplitFlags::empty(), |acc, name| {
            let flag = match strip_prefixes(name) {
                "NO_EMPTY" => SplitFlags::NO_EMPTY,
                "DELIM_CAPTURE" => SplitFlags::DELIM_CAPTURE,
                "OFFSET_CAPTURE" => SplitFlags::OFFSET_CAPTURE,
                _ => return Err(unknown_flag(name)),
            };
            Ok(acc | flag)
        })
    }

    pub fn grep_flags(&self) -> Result<GrepFlags, String> {
        self.flags.iter().try_fold(GrepFlags::empty(), |acc, name| {
            let flag = match strip_prefixes(name) {
                "INVERT" => GrepFlags::INVERT,
                _ => return Err(unknown_flag(name)),
            };
            Ok(acc | flag)
        })
    }
}

fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

fn one_or_many(
    one: &Option<String>,
    many: &Option<Vec<String>>,
    field: &str,
) -> Result<OneOrMany<String>, String> {
    match (one, many) {
        (_, Some(list)) => Ok(OneOrMany::Many(list.clone())),
        (Some(value), None) => Ok(OneOrMany::One(value.clone())),
        (None, None) => Err(format!("case needs `{field}` or `{field}s`")),
    }
}

/// Accepts `SET_ORDER` as well as `PREG_SET_ORDER`, `PREG_SPLIT_NO_EMPTY`
/// and `PREG_GREP_INVERT`.
fn strip_prefixes(name: &str) -> &str {
    ["PREG_SPLIT_", "PREG_GREP_", "PREG_"]
        .iter()
        .find_map(|prefix| name.strip_prefix(prefix))
        .unwrap_or(name)
}

fn unknown_flag(name: &str) -> String {
    format!("unknown flag `{name}`")
}
