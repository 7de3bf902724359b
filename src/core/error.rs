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

//! Error types for Siftql
//!
//! This module defines all error types used throughout the query engine,
//! along with the coarse [`ErrorKind`] classification callers can branch on.

use thiserror::Error;

/// Result type alias for Siftql operations
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of a query-engine failure.
///
/// Every [`Error`] variant maps to exactly one kind via [`Error::kind`]:
/// malformed query text, bad dataset shape, a missing table or column at
/// execution time, or a structurally valid condition that is semantically
/// ill-typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The query text itself is malformed
    Format,
    /// The dataset violates the flat tabular shape while loading
    Schema,
    /// A table or column named by the query does not exist
    Lookup,
    /// The condition parsed but is semantically ill-typed
    Type,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Format => write!(f, "format"),
            ErrorKind::Schema => write!(f, "schema"),
            ErrorKind::Lookup => write!(f, "lookup"),
            ErrorKind::Type => write!(f, "type"),
        }
    }
}

/// Main error type for Siftql operations
///
/// This enum covers all error cases including both sentinel errors
/// and structured errors with context.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // =========================================================================
    // Query format errors
    // =========================================================================
    /// Query text has no statement terminator
    #[error("query must end with a semicolon")]
    MissingTerminator,

    /// Query text does not match the SELECT/FROM/WHERE shape
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// A quoted string literal was never closed
    #[error("unterminated string literal starting at offset {offset}")]
    UnterminatedString { offset: usize },

    /// Parentheses in the condition do not pair up
    #[error("unbalanced parentheses in condition")]
    UnbalancedParens,

    /// The condition did not reduce to a single boolean tree
    #[error("malformed condition: {0}")]
    MalformedCondition(String),

    /// The projection list names no columns
    #[error("no columns selected")]
    EmptySelection,

    // =========================================================================
    // Dataset errors
    // =========================================================================
    /// Dataset text is not valid JSON
    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    /// Dataset root is not an object mapping table names to row arrays
    #[error("dataset root must be a JSON object of tables")]
    DataRootNotObject,

    /// A table value is not an array of rows
    #[error("table '{0}' must be a JSON array of rows")]
    TableNotArray(String),

    /// A row is not a JSON object
    #[error("row {row} in table '{table}' is not a JSON object")]
    RowNotObject { table: String, row: usize },

    /// A column holds a value outside the text/number model
    #[error("column '{column}' in table '{table}' has unsupported type {got}")]
    UnsupportedColumnType {
        table: String,
        column: String,
        got: String,
    },

    /// A table has no rows, so no schema can be inferred
    #[error("table '{0}' has no rows to infer a schema from")]
    EmptyTable(String),

    /// A row carries a column the inferred schema does not have
    #[error("row {row} in table '{table}' has unknown column '{column}'")]
    UnknownColumn {
        table: String,
        row: usize,
        column: String,
    },

    /// A row value disagrees with the inferred column type
    #[error("column '{column}' in row {row} of table '{table}' expected {expected}, got {got}")]
    ColumnTypeMismatch {
        table: String,
        row: usize,
        column: String,
        expected: String,
        got: String,
    },

    /// A row lacks a column the inferred schema requires
    #[error("row {row} in table '{table}' is missing column '{column}'")]
    MissingColumn {
        table: String,
        row: usize,
        column: String,
    },

    /// IO error (wrapped)
    #[error("IO error: {message}")]
    Io { message: String },

    // =========================================================================
    // Lookup errors
    // =========================================================================
    /// Table not found in the dataset
    #[error("table '{0}' not found")]
    TableNotFound(String),

    /// Column not found in a row or schema
    #[error("column '{0}' not found")]
    ColumnNotFound(String),

    // =========================================================================
    // Condition type errors
    // =========================================================================
    /// A logical operator was applied to a condition and a bare literal
    #[error("cannot combine a condition with a bare literal")]
    MixedOperands,

    /// The left side of a comparison is not a column name
    #[error("comparison left operand must be a column name, got {0}")]
    ComparisonLeftNotColumn(String),

    /// An operator outside the comparison set appeared between two literals
    #[error("operator '{0}' cannot be used in a comparison")]
    InvalidComparisonOperator(String),

    /// An operator outside AND/OR appeared between two conditions
    #[error("operator '{0}' cannot combine conditions")]
    InvalidLogicalOperator(String),
}

impl Error {
    /// Create a new InvalidQuery error
    pub fn invalid_query(query: impl Into<String>) -> Self {
        Error::InvalidQuery(query.into())
    }

    /// Create a new MalformedCondition error
    pub fn malformed_condition(message: impl Into<String>) -> Self {
        Error::MalformedCondition(message.into())
    }

    /// Create a new InvalidJson error
    pub fn invalid_json(message: impl Into<String>) -> Self {
        Error::InvalidJson(message.into())
    }

    /// Create a new RowNotObject error
    pub fn row_not_object(table: impl Into<String>, row: usize) -> Self {
        Error::RowNotObject {
            table: table.into(),
            row,
        }
    }

    /// Create a new UnsupportedColumnType error
    pub fn unsupported_column_type(
        table: impl Into<String>,
        column: impl Into<String>,
        got: impl Into<String>,
    ) -> Self {
        Error::UnsupportedColumnType {
            table: table.into(),
            column: column.into(),
            got: got.into(),
        }
    }

    /// Create a new UnknownColumn error
    pub fn unknown_column(
        table: impl Into<String>,
        row: usize,
        column: impl Into<String>,
    ) -> Self {
        Error::UnknownColumn {
            table: table.into(),
            row,
            column: column.into(),
        }
    }

    /// Create a new ColumnTypeMismatch error
    pub fn column_type_mismatch(
        table: impl Into<String>,
        row: usize,
        column: impl Into<String>,
        expected: impl Into<String>,
        got: impl Into<String>,
    ) -> Self {
        Error::ColumnTypeMismatch {
            table: table.into(),
            row,
            column: column.into(),
            expected: expected.into(),
            got: got.into(),
        }
    }

    /// Create a new MissingColumn error
    pub fn missing_column(
        table: impl Into<String>,
        row: usize,
        column: impl Into<String>,
    ) -> Self {
        Error::MissingColumn {
            table: table.into(),
            row,
            column: column.into(),
        }
    }

    /// Create a new IO error
    pub fn io(message: impl Into<String>) -> Self {
        Error::Io {
            message: message.into(),
        }
    }

    /// Classify this error into its [`ErrorKind`]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingTerminator
            | Error::InvalidQuery(_)
            | Error::UnterminatedString { .. }
            | Error::UnbalancedParens
            | Error::MalformedCondition(_)
            | Error::EmptySelection => ErrorKind::Format,

            Error::InvalidJson(_)
            | Error::DataRootNotObject
            | Error::TableNotArray(_)
            | Error::RowNotObject { .. }
            | Error::UnsupportedColumnType { .. }
            | Error::EmptyTable(_)
            | Error::UnknownColumn { .. }
            | Error::ColumnTypeMismatch { .. }
            | Error::MissingColumn { .. }
            | Error::Io { .. } => ErrorKind::Schema,

            Error::TableNotFound(_) | Error::ColumnNotFound(_) => ErrorKind::Lookup,

            Error::MixedOperands
            | Error::ComparisonLeftNotColumn(_)
            | Error::InvalidComparisonOperator(_)
            | Error::InvalidLogicalOperator(_) => ErrorKind::Type,
        }
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::TableNotFound(_) | Error::ColumnNotFound(_))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidJson(err.to_string())
    }
}
