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

//! Token types for the condition lexer
//!
//! This module defines the token types used by the WHERE-clause lexer and
//! parser, along with the operator literal table.

use rustc_hash::FxHashSet;
use std::fmt;
use std::sync::LazyLock;

/// Operators recognized in a condition
///
/// Parentheses are members of the operator set: the lexer treats them as
/// operator literals and the parser consumes them as structural markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Logical conjunction (AND)
    And,
    /// Logical disjunction (OR)
    Or,
    /// Equality (=)
    Eq,
    /// Inequality (!=)
    Ne,
    /// Greater than (>)
    Gt,
    /// Less than (<)
    Lt,
    /// Opening parenthesis
    LParen,
    /// Closing parenthesis
    RParen,
}

impl Operator {
    /// The literal spelling of this operator in query text
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Eq => "=",
            Operator::Ne => "!=",
            Operator::Gt => ">",
            Operator::Lt => "<",
            Operator::LParen => "(",
            Operator::RParen => ")",
        }
    }

    /// Look up an operator by its exact literal spelling.
    ///
    /// Matching is case-sensitive: `AND` is an operator, `and` is an
    /// ordinary name.
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "AND" => Some(Operator::And),
            "OR" => Some(Operator::Or),
            "=" => Some(Operator::Eq),
            "!=" => Some(Operator::Ne),
            ">" => Some(Operator::Gt),
            "<" => Some(Operator::Lt),
            "(" => Some(Operator::LParen),
            ")" => Some(Operator::RParen),
            _ => None,
        }
    }

    /// Returns true for AND/OR
    pub fn is_logical(&self) -> bool {
        matches!(self, Operator::And | Operator::Or)
    }

    /// Returns true for the relational operators (=, !=, >, <)
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            Operator::Eq | Operator::Ne | Operator::Gt | Operator::Lt
        )
    }

    /// Returns true for parentheses
    pub fn is_paren(&self) -> bool {
        matches!(self, Operator::LParen | Operator::RParen)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Token represents a lexical unit of a condition
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Text literal: a quoted string or a bare name such as a column
    /// reference. The two are indistinguishable at this stage.
    Text(String),
    /// Number literal
    Number(f64),
    /// Operator
    Op(Operator),
}

impl Token {
    /// Create a text token
    pub fn text(value: impl Into<String>) -> Self {
        Token::Text(value.into())
    }

    /// Create a number token
    pub fn number(value: f64) -> Self {
        Token::Number(value)
    }

    /// Check if this is an operator token with the given kind
    pub fn is_op(&self, op: Operator) -> bool {
        matches!(self, Token::Op(o) if *o == op)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Text(s) => write!(f, "'{}'", s),
            Token::Number(n) => write!(f, "{}", n),
            Token::Op(op) => write!(f, "{}", op),
        }
    }
}

/// Condition operator literals
pub static OPERATORS: &[&str] = &["AND", "OR", "=", "!=", ">", "<", "(", ")"];

/// Compiled operator set for O(1) lookups
static OPERATOR_SET: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
    let mut set = FxHashSet::with_capacity_and_hasher(OPERATORS.len(), Default::default());
    for op in OPERATORS {
        set.insert(*op);
    }
    set
});

/// Check if a string is exactly an operator literal (case-sensitive)
#[inline]
pub fn is_operator(s: &str) -> bool {
    OPERATOR_SET.contains(s)
}
