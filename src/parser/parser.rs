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

//! Condition parser
//!
//! Builds a [`ConditionNode`] tree from a token sequence with a two-stack
//! operator-precedence reduction: an operand stack of literals and built
//! subtrees, and an operator stack of pending operators. An operator on
//! the stack reduces before an incoming one of lower or equal precedence
//! is pushed, which is what makes AND bind tighter than OR.

use crate::core::{Error, Result, Value};

use super::ast::ConditionNode;
use super::precedence::Precedence;
use super::token::{Operator, Token};

/// An operand stack entry: a literal that has not been folded into a
/// comparison yet, or an already-built subtree.
///
/// Keeping the two cases as distinct variants lets the reducer tell a
/// column reference apart from a finished condition instead of guessing
/// from position.
#[derive(Debug)]
enum Operand {
    Literal(Value),
    Condition(ConditionNode),
}

/// Two-stack condition parser
struct Parser {
    operands: Vec<Operand>,
    operators: Vec<Operator>,
}

impl Parser {
    fn new() -> Self {
        Self {
            operands: Vec::new(),
            operators: Vec::new(),
        }
    }

    /// Apply the scan rule for one token
    fn scan_token(&mut self, token: Token) -> Result<()> {
        match token {
            Token::Op(Operator::LParen) => {
                self.operators.push(Operator::LParen);
            }
            Token::Op(Operator::RParen) => loop {
                match self.operators.last() {
                    Some(Operator::LParen) => {
                        self.operators.pop();
                        break;
                    }
                    Some(_) => self.reduce()?,
                    None => return Err(Error::UnbalancedParens),
                }
            },
            Token::Op(op) => {
                while self.can_reduce(op) {
                    self.reduce()?;
                }
                self.operators.push(op);
            }
            Token::Text(text) => {
                self.operands.push(Operand::Literal(Value::text(text)));
            }
            Token::Number(number) => {
                self.operands.push(Operand::Literal(Value::Number(number)));
            }
        }
        Ok(())
    }

    /// True when the stack top must reduce before `incoming` is pushed:
    /// the top is a real operator whose precedence is at least as high
    fn can_reduce(&self, incoming: Operator) -> bool {
        match self.operators.last() {
            None | Some(Operator::LParen) => false,
            Some(&top) => Precedence::for_operator(top) >= Precedence::for_operator(incoming),
        }
    }

    /// Pop right operand, operator, and left operand; push the built node.
    ///
    /// Two literals fold into a comparison whose left side must be a text
    /// literal naming a column. Two conditions fold into a logical node
    /// whose operator must be AND or OR. A literal paired with a condition
    /// cannot combine at a single reduction step.
    fn reduce(&mut self) -> Result<()> {
        let operator = self
            .operators
            .pop()
            .ok_or_else(|| Error::malformed_condition("missing operator"))?;
        let right = self.pop_operand(operator)?;
        let left = self.pop_operand(operator)?;

        let node = match (left, right) {
            (Operand::Literal(left), Operand::Literal(right)) => {
                let column = match left {
                    Value::Text(name) => name.to_string(),
                    Value::Number(_) => {
                        return Err(Error::ComparisonLeftNotColumn(left.to_string()))
                    }
                };
                ConditionNode::Comparison {
                    column,
                    operator,
                    literal: right,
                }
            }
            (Operand::Condition(left), Operand::Condition(right)) => {
                if !operator.is_logical() {
                    return Err(Error::InvalidLogicalOperator(operator.symbol().to_string()));
                }
                ConditionNode::logical(left, operator, right)
            }
            _ => return Err(Error::MixedOperands),
        };

        self.operands.push(Operand::Condition(node));
        Ok(())
    }

    fn pop_operand(&mut self, operator: Operator) -> Result<Operand> {
        self.operands.pop().ok_or_else(|| {
            Error::malformed_condition(format!("operator '{}' is missing an operand", operator))
        })
    }

    /// Drain the operator stack and check the final shape
    fn finish(mut self) -> Result<ConditionNode> {
        while let Some(&top) = self.operators.last() {
            if top == Operator::LParen {
                return Err(Error::UnbalancedParens);
            }
            self.reduce()?;
        }

        let node = match self.operands.pop() {
            Some(Operand::Condition(node)) => node,
            Some(Operand::Literal(value)) => {
                return Err(Error::malformed_condition(format!(
                    "condition reduces to the bare value '{}'",
                    value
                )))
            }
            None => return Err(Error::malformed_condition("empty condition")),
        };

        if !self.operands.is_empty() {
            return Err(Error::malformed_condition(
                "condition leaves unconsumed operands",
            ));
        }

        Ok(node)
    }
}

/// Parse a token sequence into a condition tree
pub fn parse_condition(tokens: Vec<Token>) -> Result<ConditionNode> {
    let mut parser = Parser::new();
    for token in tokens {
        parser.scan_token(token)?;
    }
    parser.finish()
}
