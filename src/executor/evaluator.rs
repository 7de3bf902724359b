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

//! Condition evaluator
//!
//! Walks a condition tree against a single row and decides whether the row
//! satisfies it. Evaluation is pure: the row is read, never changed, and
//! the same tree applied to the same row always yields the same answer.

use std::cmp::Ordering;

use crate::core::{Error, Result, Row};
use crate::parser::ast::ConditionNode;
use crate::parser::token::Operator;

/// Evaluate a condition tree against one row.
///
/// Comparisons look the column up by exact name; a missing column is a
/// lookup error, not `false`. Equality never holds across types, and
/// ordering comparisons between a text cell and a number literal (or the
/// reverse) are `false` rather than an error.
pub fn evaluate(condition: &ConditionNode, row: &Row) -> Result<bool> {
    match condition {
        ConditionNode::Comparison {
            column,
            operator,
            literal,
        } => {
            let cell = row
                .get(column)
                .ok_or_else(|| Error::ColumnNotFound(column.clone()))?;
            match operator {
                Operator::Eq => Ok(cell == literal),
                Operator::Ne => Ok(cell != literal),
                Operator::Gt => Ok(cell.ordering(literal) == Some(Ordering::Greater)),
                Operator::Lt => Ok(cell.ordering(literal) == Some(Ordering::Less)),
                other => Err(Error::InvalidComparisonOperator(
                    other.symbol().to_string(),
                )),
            }
        }
        ConditionNode::Logical {
            left,
            operator,
            right,
        } => {
            // Both sides evaluate before combining, so a bad column name on
            // the right surfaces even when the left alone decides the result.
            let left = evaluate(left, row)?;
            let right = evaluate(right, row)?;
            match operator {
                Operator::And => Ok(left && right),
                Operator::Or => Ok(left || right),
                other => Err(Error::InvalidLogicalOperator(other.symbol().to_string())),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ErrorKind, Value};

    fn sample_row() -> Row {
        let mut row = Row::new();
        row.insert("firstName", "Rose");
        row.insert("eyeColor", "brown");
        row.insert("age", 35.0);
        row.insert("balance", -61.75);
        row
    }

    #[test]
    fn test_number_equality() {
        let row = sample_row();
        let eq = ConditionNode::comparison("age", Operator::Eq, 35.0);
        assert!(evaluate(&eq, &row).unwrap());

        let ne = ConditionNode::comparison("age", Operator::Eq, 36.0);
        assert!(!evaluate(&ne, &row).unwrap());
    }

    #[test]
    fn test_text_equality() {
        let row = sample_row();
        let eq = ConditionNode::comparison("eyeColor", Operator::Eq, "brown");
        assert!(evaluate(&eq, &row).unwrap());

        // Exact match only, no case folding
        let other_case = ConditionNode::comparison("eyeColor", Operator::Eq, "Brown");
        assert!(!evaluate(&other_case, &row).unwrap());
    }

    #[test]
    fn test_not_equal() {
        let row = sample_row();
        let ne = ConditionNode::comparison("firstName", Operator::Ne, "Lily");
        assert!(evaluate(&ne, &row).unwrap());

        let same = ConditionNode::comparison("firstName", Operator::Ne, "Rose");
        assert!(!evaluate(&same, &row).unwrap());
    }

    #[test]
    fn test_numeric_ordering() {
        let row = sample_row();
        assert!(evaluate(&ConditionNode::comparison("age", Operator::Gt, 30.0), &row).unwrap());
        assert!(!evaluate(&ConditionNode::comparison("age", Operator::Gt, 35.0), &row).unwrap());
        assert!(evaluate(&ConditionNode::comparison("age", Operator::Lt, 40.0), &row).unwrap());
        assert!(
            evaluate(&ConditionNode::comparison("balance", Operator::Lt, 0.0), &row).unwrap()
        );
    }

    #[test]
    fn test_text_ordering_is_lexicographic() {
        let row = sample_row();
        assert!(
            evaluate(
                &ConditionNode::comparison("eyeColor", Operator::Gt, "blue"),
                &row
            )
            .unwrap()
        );
        assert!(
            evaluate(
                &ConditionNode::comparison("eyeColor", Operator::Lt, "green"),
                &row
            )
            .unwrap()
        );
    }

    #[test]
    fn test_cross_type_equality_is_false() {
        let row = sample_row();
        let text_vs_number = ConditionNode::comparison("age", Operator::Eq, Value::text("35"));
        assert!(!evaluate(&text_vs_number, &row).unwrap());

        // Not-equal is the complement, so it holds across types
        let ne = ConditionNode::comparison("age", Operator::Ne, Value::text("35"));
        assert!(evaluate(&ne, &row).unwrap());
    }

    #[test]
    fn test_cross_type_ordering_is_false() {
        let row = sample_row();
        let gt = ConditionNode::comparison("age", Operator::Gt, Value::text("1"));
        assert!(!evaluate(&gt, &row).unwrap());

        let lt = ConditionNode::comparison("firstName", Operator::Lt, 100.0);
        assert!(!evaluate(&lt, &row).unwrap());
    }

    #[test]
    fn test_missing_column_is_lookup_error() {
        let row = sample_row();
        let condition = ConditionNode::comparison("lastName", Operator::Eq, "Smith");
        let err = evaluate(&condition, &row).unwrap_err();
        assert_eq!(err, Error::ColumnNotFound("lastName".to_string()));
        assert_eq!(err.kind(), ErrorKind::Lookup);
    }

    #[test]
    fn test_logical_and_or() {
        let row = sample_row();
        let age_gt = ConditionNode::comparison("age", Operator::Gt, 30.0);
        let wrong_eye = ConditionNode::comparison("eyeColor", Operator::Eq, "blue");

        let and = ConditionNode::logical(age_gt.clone(), Operator::And, wrong_eye.clone());
        assert!(!evaluate(&and, &row).unwrap());

        let or = ConditionNode::logical(age_gt, Operator::Or, wrong_eye);
        assert!(evaluate(&or, &row).unwrap());
    }

    #[test]
    fn test_logical_evaluates_both_sides() {
        let row = sample_row();
        // Left side is already true, yet the missing column on the right
        // must still be reported.
        let or = ConditionNode::logical(
            ConditionNode::comparison("age", Operator::Gt, 0.0),
            Operator::Or,
            ConditionNode::comparison("nope", Operator::Eq, 1.0),
        );
        let err = evaluate(&or, &row).unwrap_err();
        assert_eq!(err, Error::ColumnNotFound("nope".to_string()));
    }

    #[test]
    fn test_logical_operator_in_comparison_position_fails() {
        let row = sample_row();
        let condition = ConditionNode::comparison("age", Operator::And, 1.0);
        let err = evaluate(&condition, &row).unwrap_err();
        assert_eq!(err, Error::InvalidComparisonOperator("AND".to_string()));
        assert_eq!(err.kind(), ErrorKind::Type);
    }

    #[test]
    fn test_comparison_operator_in_logical_position_fails() {
        let row = sample_row();
        let condition = ConditionNode::logical(
            ConditionNode::comparison("age", Operator::Gt, 0.0),
            Operator::Gt,
            ConditionNode::comparison("age", Operator::Lt, 100.0),
        );
        let err = evaluate(&condition, &row).unwrap_err();
        assert_eq!(err, Error::InvalidLogicalOperator(">".to_string()));
        assert_eq!(err.kind(), ErrorKind::Type);
    }
}
