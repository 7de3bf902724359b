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

//! Core types and definitions for Siftql
//!
//! This module contains the fundamental types used throughout the engine:
//!
//! - [`ColumnType`] - The two-type column model (TEXT, NUMBER)
//! - [`Value`] - Runtime cell values
//! - [`Row`] - A table row keyed by column name
//! - [`Schema`] - Inferred table schema
//! - [`SchemaColumn`] - Column definition
//! - [`Error`] - Error types for all engine operations

pub mod error;
pub mod row;
pub mod schema;
pub mod types;
pub mod value;

// Re-export main types for convenience
pub use error::{Error, ErrorKind, Result};
pub use row::Row;
pub use schema::{Schema, SchemaColumn};
pub use types::ColumnType;
pub use value::Value;

#[cfg(test)]
mod integration_tests {
    use super::*;

    /// Integration test: schema and rows agree on names and types
    #[test]
    fn test_schema_row_integration() {
        let schema = Schema::new(
            "user",
            vec![
                SchemaColumn::new("firstName", ColumnType::Text),
                SchemaColumn::new("age", ColumnType::Number),
            ],
        );

        let mut row = Row::new();
        row.insert("firstName", "Tonya");
        row.insert("age", 27.0);

        for col in &schema.columns {
            let value = row.get(&col.name).expect("row should cover schema");
            assert_eq!(value.column_type(), col.column_type);
        }
    }

    /// Integration test: value semantics the evaluator relies on
    #[test]
    fn test_value_comparison_integration() {
        use std::cmp::Ordering;

        assert_eq!(
            Value::number(1.0).ordering(&Value::number(2.0)),
            Some(Ordering::Less)
        );
        assert_eq!(
            Value::text("a").ordering(&Value::text("b")),
            Some(Ordering::Less)
        );

        // Cross-type pairs neither equal nor order
        assert_ne!(Value::text("1"), Value::number(1.0));
        assert_eq!(Value::text("1").ordering(&Value::number(1.0)), None);
    }

    /// Integration test: error kinds cover the full taxonomy
    #[test]
    fn test_error_kind_integration() {
        let kinds = [
            Error::MissingTerminator.kind(),
            Error::DataRootNotObject.kind(),
            Error::TableNotFound("x".to_string()).kind(),
            Error::MixedOperands.kind(),
        ];
        assert_eq!(
            kinds,
            [
                ErrorKind::Format,
                ErrorKind::Schema,
                ErrorKind::Lookup,
                ErrorKind::Type
            ]
        );
    }
}
