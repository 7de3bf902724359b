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

//! Database struct and operations
//!
//! The ergonomic entry point: load a dataset once, run queries against it.
//!
//! # Examples
//!
//! ```
//! use siftql::Database;
//!
//! let db = Database::from_json(r#"{
//!     "user": [
//!         { "firstName": "Rose",  "age": 35 },
//!         { "firstName": "Amond", "age": 28 }
//!     ]
//! }"#).unwrap();
//!
//! let result = db.query("SELECT firstName FROM user WHERE age > 30;").unwrap();
//! assert_eq!(result.columns, vec!["firstName"]);
//! assert_eq!(result.row_count(), 1);
//! ```

use std::path::Path;

use crate::core::{Error, Result, Row};
use crate::executor::{filter_rows, project_row, projected_columns};
use crate::parser::{parse_select, parse_where};
use crate::storage::{load_dataset, load_dataset_from_path, Dataset};

/// Result set of one query
///
/// `columns` is the display order of the output; each row is fetched cell
/// by cell against it, since rows themselves are name-keyed.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl QueryResult {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// An immutable, in-memory database loaded from one JSON data file
///
/// Queries never change the dataset, so a `Database` can be queried any
/// number of times and freely shared by reference.
#[derive(Debug, Clone)]
pub struct Database {
    dataset: Dataset,
}

impl Database {
    /// Load a database from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self {
            dataset: load_dataset(json)?,
        })
    }

    /// Load a database from a JSON data file
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            dataset: load_dataset_from_path(path)?,
        })
    }

    /// Table names in data-file order
    pub fn tables(&self) -> Vec<&str> {
        self.dataset.table_names()
    }

    /// Run one `;`-terminated query and collect its result set.
    ///
    /// The full chain: split the query, look the table up, filter by the
    /// WHERE condition when one is present, then project every surviving
    /// row onto the selected columns. Row order follows the data file.
    pub fn query(&self, query: &str) -> Result<QueryResult> {
        let statement = parse_select(query)?;
        let table = self
            .dataset
            .table(&statement.table)
            .ok_or_else(|| Error::TableNotFound(statement.table.clone()))?;

        let rows = match &statement.filter {
            Some(filter) => {
                let condition = parse_where(filter)?;
                filter_rows(&table.rows, &condition)?
            }
            None => table.rows.clone(),
        };

        let columns = projected_columns(&statement.columns, &table.schema);
        let mut projected = Vec::with_capacity(rows.len());
        for row in &rows {
            projected.push(project_row(&statement.columns, row)?);
        }

        Ok(QueryResult {
            columns,
            rows: projected,
        })
    }
}
