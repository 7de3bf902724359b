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

//! # Siftql - SQL-subset query engine over flat JSON datasets
//!
//! Siftql loads a flat JSON data file into typed in-memory tables and runs
//! single-table SELECT/FROM/WHERE queries against them. The heart of the
//! crate is the WHERE-clause engine: a tokenizer, a two-stack
//! operator-precedence parser that builds a boolean condition tree, and a
//! pure tree evaluator that decides each row.
//!
//! ## Key Features
//!
//! - **Schema inference** - per-table schemas inferred from the first row and
//!   enforced across every row, so loaded tables are homogeneous
//! - **Condition trees** - parenthesized AND/OR logic over `=`, `!=`, `>`, `<`
//!   comparisons, with AND binding tighter than OR
//! - **Typed errors** - every failure is a typed [`Error`] classified by
//!   [`ErrorKind`]; nothing panics on user input
//! - **Interactive CLI** - a rustyline REPL with table or JSON output
//!
//! ## Quick Start
//!
//! ```rust
//! use siftql::Database;
//!
//! let db = Database::from_json(r#"{
//!     "user": [
//!         { "firstName": "Rose",  "age": 35, "eyeColor": "brown" },
//!         { "firstName": "Amond", "age": 28, "eyeColor": "blue" },
//!         { "firstName": "Lily",  "age": 41, "eyeColor": "green" }
//!     ]
//! }"#).unwrap();
//!
//! let result = db.query("SELECT firstName FROM user WHERE age > 30 AND eyeColor != 'green';").unwrap();
//! assert_eq!(result.row_count(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`api`] - Public database interface ([`api::Database`])
//! - [`core`] - Core types ([`ColumnType`], [`Value`], [`Row`], [`Schema`], [`Error`])
//! - [`parser`] - query splitting, condition lexing and parsing
//! - [`executor`] - condition evaluation, filtering, projection
//! - [`storage`] - JSON dataset loading and schema inference
//! - [`common`] - Utilities (version)

pub mod api;
pub mod common;
pub mod core;
pub mod executor;
pub mod parser;
pub mod storage;

// Re-export main types for convenience
pub use core::{ColumnType, Error, ErrorKind, Result, Row, Schema, SchemaColumn, Value};

// Re-export parser types
pub use parser::{ConditionNode, Operator, SelectStatement, Token};

// Re-export storage types
pub use storage::{Dataset, Table};

// Re-export API types
pub use api::{Database, QueryResult};
