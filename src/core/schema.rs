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

//! Schema types for Siftql - table and column definitions
//!
//! Schemas are not declared up front; the loader infers them from the first
//! row of each table and every later row must match.

use std::fmt;
use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use super::types::ColumnType;

/// A column definition in a table schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaColumn {
    /// Column name, exactly as it appears in the source JSON
    pub name: String,

    /// Inferred type of the column
    pub column_type: ColumnType,
}

impl SchemaColumn {
    /// Create a new column definition
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
        }
    }
}

impl fmt::Display for SchemaColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.column_type)
    }
}

/// Table schema definition
///
/// Column order follows the first row of the source table, so listings and
/// wildcard projections come out in source order.
#[derive(Debug)]
pub struct Schema {
    /// Name of the table
    pub table_name: String,

    /// Column definitions in source order
    pub columns: Vec<SchemaColumn>,

    /// Cached column index map (name -> index) for O(1) column lookup
    column_index_map_cache: OnceLock<FxHashMap<String, usize>>,
}

impl Clone for Schema {
    fn clone(&self) -> Self {
        Self {
            table_name: self.table_name.clone(),
            columns: self.columns.clone(),
            column_index_map_cache: OnceLock::new(), // recomputed lazily
        }
    }
}

impl PartialEq for Schema {
    fn eq(&self, other: &Self) -> bool {
        self.table_name == other.table_name && self.columns == other.columns
    }
}

impl Eq for Schema {}

impl Schema {
    /// Create a new schema with the given table name and columns
    pub fn new(table_name: impl Into<String>, columns: Vec<SchemaColumn>) -> Self {
        Self {
            table_name: table_name.into(),
            columns,
            column_index_map_cache: OnceLock::new(),
        }
    }

    /// Get the number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Check if the schema has any columns
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Find a column by exact name, returning its index and definition
    pub fn find_column(&self, name: &str) -> Option<(usize, &SchemaColumn)> {
        let index = *self.column_index_map().get(name)?;
        Some((index, &self.columns[index]))
    }

    /// Get a column by exact name
    pub fn get_column_by_name(&self, name: &str) -> Option<&SchemaColumn> {
        self.find_column(name).map(|(_, col)| col)
    }

    /// Get the type of a column by exact name
    pub fn get_column_type(&self, name: &str) -> Option<ColumnType> {
        self.get_column_by_name(name).map(|col| col.column_type)
    }

    /// Check if a column exists by exact name
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index_map().contains_key(name)
    }

    /// Get all column names in schema order as borrowed strings
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Get a cached map of column names to their indices
    #[inline]
    pub fn column_index_map(&self) -> &FxHashMap<String, usize> {
        self.column_index_map_cache.get_or_init(|| {
            self.columns
                .iter()
                .enumerate()
                .map(|(i, c)| (c.name.clone(), i))
                .collect()
        })
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (", self.table_name)?;
        for (i, col) in self.columns.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", col)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_schema() -> Schema {
        Schema::new(
            "user",
            vec![
                SchemaColumn::new("firstName", ColumnType::Text),
                SchemaColumn::new("age", ColumnType::Number),
                SchemaColumn::new("eyeColor", ColumnType::Text),
            ],
        )
    }

    #[test]
    fn test_schema_basics() {
        let schema = user_schema();
        assert_eq!(schema.table_name, "user");
        assert_eq!(schema.column_count(), 3);
        assert!(!schema.is_empty());
        assert_eq!(schema.column_names(), vec!["firstName", "age", "eyeColor"]);
    }

    #[test]
    fn test_find_column() {
        let schema = user_schema();
        let (index, col) = schema.find_column("age").unwrap();
        assert_eq!(index, 1);
        assert_eq!(col.column_type, ColumnType::Number);
        assert!(schema.find_column("height").is_none());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let schema = user_schema();
        assert!(schema.has_column("eyeColor"));
        assert!(!schema.has_column("eyecolor"));
        assert!(!schema.has_column("EYECOLOR"));
    }

    #[test]
    fn test_column_type_lookup() {
        let schema = user_schema();
        assert_eq!(schema.get_column_type("firstName"), Some(ColumnType::Text));
        assert_eq!(schema.get_column_type("age"), Some(ColumnType::Number));
        assert_eq!(schema.get_column_type("missing"), None);
    }

    #[test]
    fn test_index_map_survives_clone() {
        let schema = user_schema();
        // Prime the cache, then make sure the clone rebuilds its own
        assert_eq!(schema.column_index_map().len(), 3);
        let cloned = schema.clone();
        assert_eq!(cloned.column_index_map().get("eyeColor"), Some(&2));
        assert_eq!(schema, cloned);
    }

    #[test]
    fn test_display() {
        let schema = user_schema();
        assert_eq!(
            schema.to_string(),
            "user (firstName TEXT, age NUMBER, eyeColor TEXT)"
        );
    }
}
