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

//! Condition tree types
//!
//! This module defines the ConditionNode tree built by the condition
//! parser and consumed by the evaluator. Every consumer pattern-matches
//! exhaustively over the two variants.

use std::fmt;

use crate::core::Value;

use super::token::Operator;

/// A node of a parsed WHERE condition
///
/// The tree exclusively owns its children and is never mutated after
/// parsing, only evaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum ConditionNode {
    /// Leaf-level relational test between a column and a literal
    Comparison {
        /// Column referenced on the left side
        column: String,
        /// Relational operator; validated against the comparison set at
        /// evaluation time
        operator: Operator,
        /// Literal the column value is tested against
        literal: Value,
    },

    /// AND/OR combination of two sub-conditions
    Logical {
        left: Box<ConditionNode>,
        /// Always AND or OR; enforced when the node is built
        operator: Operator,
        right: Box<ConditionNode>,
    },
}

impl ConditionNode {
    /// Build a comparison leaf
    pub fn comparison(
        column: impl Into<String>,
        operator: Operator,
        literal: impl Into<Value>,
    ) -> Self {
        ConditionNode::Comparison {
            column: column.into(),
            operator,
            literal: literal.into(),
        }
    }

    /// Build a logical combination of two conditions
    pub fn logical(left: ConditionNode, operator: Operator, right: ConditionNode) -> Self {
        ConditionNode::Logical {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }
}

impl fmt::Display for ConditionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConditionNode::Comparison {
                column,
                operator,
                literal,
            } => match literal {
                Value::Text(s) => write!(f, "{} {} '{}'", column, operator, s),
                Value::Number(n) => write!(f, "{} {} {}", column, operator, n),
            },
            ConditionNode::Logical {
                left,
                operator,
                right,
            } => write!(f, "({} {} {})", left, operator, right),
        }
    }
}
