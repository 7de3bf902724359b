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

//! In-memory tables and datasets
//!
//! A [`Table`] pairs an inferred schema with its validated rows; a
//! [`Dataset`] holds every table loaded from one data file, in file order.

use crate::core::{Row, Schema};

/// A typed, validated table
///
/// Row order is the order the rows appeared in the data file.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub schema: Schema,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(schema: Schema, rows: Vec<Row>) -> Self {
        Self { schema, rows }
    }

    /// Table name, as keyed in the data file
    pub fn name(&self) -> &str {
        &self.schema.table_name
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Every table loaded from one data file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    tables: Vec<Table>,
}

impl Dataset {
    pub fn new(tables: Vec<Table>) -> Self {
        Self { tables }
    }

    /// Look a table up by exact name.
    ///
    /// Absence is ordinary control flow here; callers that need an error
    /// convert `None` themselves.
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|table| table.name() == name)
    }

    /// Table names in file order
    pub fn table_names(&self) -> Vec<&str> {
        self.tables.iter().map(Table::name).collect()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Table> {
        self.tables.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ColumnType, SchemaColumn};

    fn user_table() -> Table {
        let schema = Schema::new(
            "user",
            vec![
                SchemaColumn::new("firstName", ColumnType::Text),
                SchemaColumn::new("age", ColumnType::Number),
            ],
        );
        let mut row = Row::new();
        row.insert("firstName", "Rose");
        row.insert("age", 35.0);
        Table::new(schema, vec![row])
    }

    #[test]
    fn test_table_name_comes_from_schema() {
        let table = user_table();
        assert_eq!(table.name(), "user");
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn test_dataset_lookup_is_exact() {
        let dataset = Dataset::new(vec![user_table()]);
        assert!(dataset.table("user").is_some());
        assert!(dataset.table("User").is_none());
        assert!(dataset.table("users").is_none());
    }

    #[test]
    fn test_dataset_preserves_table_order() {
        let mut other = user_table();
        other.schema.table_name = "account".to_string();
        let dataset = Dataset::new(vec![user_table(), other]);
        assert_eq!(dataset.table_names(), vec!["user", "account"]);
    }
}
