//! Trace line parsing.
//!
//! Each trace line is a sequence of `/`-separated segments; a segment of
//! the form `key:value` contributes one field. Segments without a `:`
//! carry no field data and are skipped.

use std::collections::BTreeMap;

use serde::Serialize;

/// Parsed key/value fields of one trace line.
///
/// Keys iterate in sorted order so rendered diffs are deterministic. A key
/// appearing more than once in a line keeps the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Record {
    fields: BTreeMap<String, String>,
}

impl Record {
    /// Parse a raw trace line.
    ///
    /// Splits the line on `/`, then each segment on its first `:` only;
    /// everything after that first `:` is the value, later `:` included.
    pub fn parse(line: &str) -> Self {
        let mut fields = BTreeMap::new();
        for segment in line.split('/') {
            if let Some((key, value)) = segment.split_once(':') {
                fields.insert(key.to_string(), value.to_string());
            }
        }
        Self { fields }
    }

    /// Value of `key`, if the line set it.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Fields in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
