use std::ops::Index;

use regex::Captures;
use serde::ser::{SerializeMap, SerializeTuple};
use serde::{Serialize, Serializer};

use super::MatchFlags;
use crate::compiler::CompiledPattern;

/// Key of a result row entry: a group number or a group name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CaptureKey {
    Index(usize),
    Name(String),
}

impl From<usize> for CaptureKey {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for CaptureKey {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl std::fmt::Display for CaptureKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Index(idx) => write!(f, "{idx}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

impl Serialize for CaptureKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Index(idx) => serializer.serialize_u64(*idx as u64),
            Self::Name(name) => serializer.serialize_str(name),
        }
    }
}

/// One captured value.
///
/// `text` is `None` only for a group that did not participate while
/// `UNMATCHED_AS_NULL` is set; otherwise unmatched groups read as `""`.
/// `offset` is present only with `OFFSET_CAPTURE`, and is `-1` for an
/// unmatched group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureValue {
    pub text: Option<String>,
    pub offset: Option<isize>,
}

impl CaptureValue {
    pub fn as_str(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn text_or_empty(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }
}

impl PartialEq<str> for CaptureValue {
    fn eq(&self, other: &str) -> bool {
        self.text.as_deref() == Some(other)
    }
}

impl PartialEq<&str> for CaptureValue {
    fn eq(&self, other: &&str) -> bool {
        self.text.as_deref() == Some(*other)
    }
}

impl Serialize for CaptureValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.offset {
            None => self.text.serialize(serializer),
            Some(offset) => {
                let mut pair = serializer.serialize_tuple(2)?;
                pair.serialize_element(&self.text)?;
                pair.serialize_element(&offset)?;
                pair.end()
            }
        }
    }
}

/// Result of one match: ordered entries keyed by group number and name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchRow {
    entries: Vec<(CaptureKey, CaptureValue)>,
}

impl MatchRow {
    pub fn get(&self, index: usize) -> Option<&CaptureValue> {
        self.entries
            .iter()
            .find(|(key, _)| *key == CaptureKey::Index(index))
            .map(|(_, value)| value)
    }

    pub fn get_named(&self, name: &str) -> Option<&CaptureValue> {
        self.entries
            .iter()
            .find(|(key, _)| matches!(key, CaptureKey::Name(n) if n == name))
            .map(|(_, value)| value)
    }

    pub fn get_key(&self, key: &CaptureKey) -> Option<&CaptureValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    /// Text of the whole match.
    pub fn whole(&self) -> &str {
        self.get(0).map_or("", CaptureValue::text_or_empty)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &CaptureKey> {
        self.entries.iter().map(|(key, _)| key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CaptureKey, &CaptureValue)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    pub(crate) fn into_values(self) -> impl Iterator<Item = CaptureValue> {
        self.entries.into_iter().map(|(_, value)| value)
    }
}

impl Index<usize> for MatchRow {
    type Output = CaptureValue;

    fn index(&self, index: usize) -> &CaptureValue {
        match self.get(index) {
            Some(value) => value,
            None => panic!("no capture group {index} in match row"),
        }
    }
}

impl<'k> Index<&'k str> for MatchRow {
    type Output = CaptureValue;

    fn index(&self, name: &'k str) -> &CaptureValue {
        match self.get_named(name) {
            Some(value) => value,
            None => panic!("no capture group named '{name}' in match row"),
        }
    }
}

impl Serialize for MatchRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Builds a row from native captures. `base` is added to every offset so
/// that positions refer to the full subject, not the searched slice.
pub(crate) fn build_row(
    compiled: &CompiledPattern,
    caps: &Captures<'_>,
    base: usize,
    flags: MatchFlags,
) -> MatchRow {
    let with_offsets = flags.contains(MatchFlags::OFFSET_CAPTURE);
    let unmatched_as_null = flags.contains(MatchFlags::UNMATCHED_AS_NULL);

    let entries = compiled
        .layout()
        .iter()
        .map(|(key, idx)| {
            let value = match caps.get(*idx) {
                Some(m) => CaptureValue {
                    text: Some(m.as_str().to_string()),
                    offset: with_offsets.then(|| (base + m.start()) as isize),
                },
                None => CaptureValue {
                    text: (!unmatched_as_null).then(String::new),
                    offset: with_offsets.then_some(-1),
                },
            };
            (key.clone(), value)
        })
        .collect();

    MatchRow { entries }
}
