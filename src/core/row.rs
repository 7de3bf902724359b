// Copyright 2026 Siftql Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Row type for Siftql - a mapping from column names to cell values

use rustc_hash::FxHashMap;

use super::value::Value;

/// A table row keyed by column name
///
/// Rows come from JSON objects, so cells are addressed by name rather than
/// by position. Lookups are exact: column names are case-sensitive.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    cells: FxHashMap<String, Value>,
}

impl Row {
    /// Create a new empty row
    #[inline]
    pub fn new() -> Self {
        Self {
            cells: FxHashMap::default(),
        }
    }

    /// Create a row with pre-allocated capacity
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Set a cell, replacing any previous value for the column
    #[inline]
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.cells.insert(column.into(), value.into());
    }

    /// Get a cell by exact column name
    #[inline]
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.cells.get(column)
    }

    /// Returns true if the row has a cell for the column
    #[inline]
    pub fn contains_column(&self, column: &str) -> bool {
        self.cells.contains_key(column)
    }

    /// Number of cells in the row
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the row has no cells
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over (column, value) pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.cells.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, Value)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> Row {
        let mut row = Row::new();
        row.insert("firstName", "Rae");
        row.insert("age", 30.0);
        row
    }

    #[test]
    fn test_insert_and_get() {
        let row = sample_row();
        assert_eq!(row.get("firstName"), Some(&Value::text("Rae")));
        assert_eq!(row.get("age"), Some(&Value::number(30.0)));
        assert_eq!(row.get("missing"), None);
        assert_eq!(row.len(), 2);
        assert!(!row.is_empty());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let row = sample_row();
        assert!(row.contains_column("firstName"));
        assert!(!row.contains_column("firstname"));
        assert!(!row.contains_column("FIRSTNAME"));
    }

    #[test]
    fn test_insert_replaces() {
        let mut row = sample_row();
        row.insert("age", 31.0);
        assert_eq!(row.get("age"), Some(&Value::number(31.0)));
        assert_eq!(row.len(), 2);
    }

    #[test]
    fn test_from_iterator() {
        let row: Row = vec![
            ("email".to_string(), Value::text("rae@example.com")),
            ("latitude".to_string(), Value::number(-61.7588)),
        ]
        .into_iter()
        .collect();
        assert_eq!(row.get("latitude"), Some(&Value::number(-61.7588)));
    }
}
