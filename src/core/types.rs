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

//! Core type definitions for Siftql
//!
//! This module defines ColumnType, the two-type model every loaded column
//! conforms to.

use std::fmt;

/// Column types supported by Siftql
///
/// The data model is deliberately flat: every cell is either a UTF-8
/// string or a 64-bit float. Anything else is rejected at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    /// UTF-8 text string
    Text,

    /// 64-bit floating point number
    Number,
}

impl ColumnType {
    /// Returns the string representation used in schema listings and errors
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Text => "TEXT",
            ColumnType::Number => "NUMBER",
        }
    }

    /// Classify a JSON value into a column type.
    ///
    /// Returns `None` for values outside the text/number model (booleans,
    /// nulls, arrays, nested objects); the loader turns that into a schema
    /// error with table and column context.
    pub fn of_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::String(_) => Some(ColumnType::Text),
            serde_json::Value::Number(_) => Some(ColumnType::Number),
            _ => None,
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
