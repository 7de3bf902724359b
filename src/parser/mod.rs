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

//! Query parser
//!
//! This module turns query text into executable structures:
//!
//! - [`statement`] - splits a query line into columns, table, and WHERE text
//! - [`lexer`] - tokenizer for WHERE condition text
//! - [`parser`] - two-stack parser that builds the condition tree
//! - [`ast`] - condition tree types
//! - [`token`] - token and operator types
//! - [`precedence`] - operator binding strengths
//!
//! # Example
//!
//! ```
//! use siftql::parser::{parse_select, parse_where};
//!
//! let stmt = parse_select("SELECT firstName FROM user WHERE age > 30;").unwrap();
//! assert_eq!(stmt.table, "user");
//!
//! let condition = parse_where(stmt.filter.as_deref().unwrap()).unwrap();
//! assert_eq!(condition.to_string(), "age > 30");
//! ```

pub mod ast;
pub mod lexer;
#[allow(clippy::module_inception)]
pub mod parser;
pub mod precedence;
pub mod statement;
pub mod token;

pub use ast::ConditionNode;
pub use lexer::{tokenize, Lexer};
pub use parser::parse_condition;
pub use precedence::Precedence;
pub use statement::{parse_select, SelectStatement, QUERY_SHAPE};
pub use token::{is_operator, Operator, Token, OPERATORS};

use crate::core::Result;

/// Parse a raw WHERE substring into a condition tree.
///
/// This is the main entry point for condition compilation; it chains the
/// lexer and the two-stack parser.
///
/// # Example
///
/// ```
/// use siftql::parser::parse_where;
///
/// let condition = parse_where("age > 30 AND eyeColor = 'brown'").unwrap();
/// assert_eq!(condition.to_string(), "(age > 30 AND eyeColor = 'brown')");
/// ```
pub fn parse_where(input: &str) -> Result<ConditionNode> {
    parse_condition(tokenize(input)?)
}
