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

//! Operator precedence levels for the condition parser

use super::token::Operator;

/// Precedence levels (higher number = higher precedence)
///
/// Parentheses carry no precedence; the parser treats them as structural
/// markers rather than operators to reduce over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Precedence {
    /// Logical OR
    Or = 1,
    /// Logical AND
    And = 2,
    /// Relational operators (=, !=, >, <)
    Comparison = 3,
}

impl Precedence {
    /// Get the precedence for an operator
    pub fn for_operator(op: Operator) -> Precedence {
        match op {
            Operator::Or => Precedence::Or,
            Operator::And => Precedence::And,
            _ => Precedence::Comparison,
        }
    }
}
