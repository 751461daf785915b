use std::ops::Index;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::{CaptureKey, CaptureValue, MatchRow};

/// All occurrences of a global match, in one of the two groupings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlobalMatches {
    /// One column per capture key, one value per occurrence.
    PatternOrder(PatternColumns),
    /// One row per occurrence.
    SetOrder(Vec<MatchRow>),
}

impl GlobalMatches {
    /// Number of occurrences.
    pub fn count(&self) -> usize {
        match self {
            Self::PatternOrder(columns) => columns.count(),
            Self::SetOrder(rows) => rows.len(),
        }
    }

    pub fn as_set_order(&self) -> Option<&[MatchRow]> {
        match self {
            Self::SetOrder(rows) => Some(rows),
            Self::PatternOrder(_) => None,
        }
    }

    pub fn as_pattern_order(&self) -> Option<&PatternColumns> {
        match self {
            Self::PatternOrder(columns) => Some(columns),
            Self::SetOrder(_) => None,
        }
    }
}

impl Serialize for GlobalMatches {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::PatternOrder(columns) => columns.serialize(serializer),
            Self::SetOrder(rows) => rows.serialize(serializer),
        }
    }
}

/// Global match results transposed by capture key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PatternColumns {
    columns: Vec<(CaptureKey, Vec<CaptureValue>)>,
    count: usize,
}

impl PatternColumns {
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn get(&self, index: usize) -> Option<&[CaptureValue]> {
        self.get_key(&CaptureKey::Index(index))
    }

    pub fn get_named(&self, name: &str) -> Option<&[CaptureValue]> {
        self.columns
            .iter()
            .find(|(key, _)| matches!(key, CaptureKey::Name(n) if n == name))
            .map(|(_, values)| values.as_slice())
    }

    pub fn get_key(&self, key: &CaptureKey) -> Option<&[CaptureValue]> {
        self.columns
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, values)| values.as_slice())
    }

    pub fn keys(&self) -> impl Iterator<Item = &CaptureKey> {
        self.columns.iter().map(|(key, _)| key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CaptureKey, &[CaptureValue])> {
        self.columns
            .iter()
            .map(|(key, values)| (key, values.as_slice()))
    }
}

impl Index<usize> for PatternColumns {
    type Output = [CaptureValue];

    fn index(&self, index: usize) -> &[CaptureValue] {
        match self.get(index) {
            Some(values) => values,
            None => panic!("no capture group {index} in match columns"),
        }
    }
}

impl<'k> Index<&'k str> for PatternColumns {
    type Output = [CaptureValue];

    fn index(&self, name: &'k str) -> &[CaptureValue] {
        match self.get_named(name) {
            Some(values) => values,
            None => panic!("no capture group named '{name}' in match columns"),
        }
    }
}

impl Serialize for PatternColumns {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (key, values) in &self.columns {
            map.serialize_entry(key, values)?;
        }
        map.end()
    }
}

/// Arranges rows built from one pattern. `keys` is that pattern's layout,
/// so every row carries exactly these keys in this order.
pub(crate) fn arrange<'k>(
    keys: impl Iterator<Item = &'k CaptureKey>,
    rows: Vec<MatchRow>,
    set_order: bool,
) -> GlobalMatches {
    if set_order {
        return GlobalMatches::SetOrder(rows);
    }

    let count = rows.len();
    let mut columns: Vec<(CaptureKey, Vec<CaptureValue>)> = keys
        .map(|key| (key.clone(), Vec::with_capacity(count)))
        .collect();
    if !columns.iter().any(|(key, _)| *key == CaptureKey::Index(0)) {
        columns.insert(0, (CaptureKey::Index(0), Vec::with_capacity(count)));
    }

    for row in rows {
        for ((_, column), value) in columns.iter_mut().zip(row.into_values()) {
            column.push(value);
        }
    }

    GlobalMatches::PatternOrder(PatternColumns { columns, count })
}
