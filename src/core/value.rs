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

//! Value type for Siftql - runtime cell values
//!
//! This module provides the Value enum representing a single cell: either
//! text or a number, mirroring the two-type column model.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use super::types::ColumnType;

/// A runtime cell value
///
/// Equality is strict: values of different types are never equal, and
/// numbers follow IEEE semantics (NaN is not equal to itself). Ordering
/// across types is undefined; [`Value::ordering`] returns `None` there and
/// the evaluator treats that as a false comparison.
///
/// Note: Text uses Arc<str> for cheap cloning when rows are copied into
/// query results.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// UTF-8 text string (Arc for cheap cloning)
    Text(Arc<str>),

    /// 64-bit floating point number
    Number(f64),
}

impl Value {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create a text value
    pub fn text(value: impl Into<String>) -> Self {
        Value::Text(Arc::from(value.into().as_str()))
    }

    /// Create a number value
    pub fn number(value: f64) -> Self {
        Value::Number(value)
    }

    // =========================================================================
    // Type accessors
    // =========================================================================

    /// Returns the column type of this value
    pub fn column_type(&self) -> ColumnType {
        match self {
            Value::Text(_) => ColumnType::Text,
            Value::Number(_) => ColumnType::Number,
        }
    }

    /// Returns true if this value is text
    pub fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    /// Returns true if this value is a number
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    // =========================================================================
    // Value extractors
    // =========================================================================

    /// Extract as &str, without coercion
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            Value::Number(_) => None,
        }
    }

    /// Extract as f64, without coercion
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Text(_) => None,
            Value::Number(v) => Some(*v),
        }
    }

    // =========================================================================
    // Comparison
    // =========================================================================

    /// Compare two values for ordering.
    ///
    /// Only same-type pairs order: text lexicographically, numbers by IEEE
    /// comparison. Returns `None` for cross-type pairs and for any
    /// comparison involving NaN.
    pub fn ordering(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
            (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{}", s),
            // f64 Display already drops the decimal point for integral
            // values, so 30.0 renders as "30"
            Value::Number(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::text(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::text(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}
