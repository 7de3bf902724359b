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

//! Row filtering
//!
//! Applies a condition tree to every row of a table in sequence.

use crate::core::{Result, Row};
use crate::parser::ast::ConditionNode;

use super::evaluator::evaluate;

/// Keep the rows that satisfy the condition, preserving input order.
///
/// The first evaluation error aborts the pass. Filtering an already
/// filtered set with the same tree yields the same set.
pub fn filter_rows(rows: &[Row], condition: &ConditionNode) -> Result<Vec<Row>> {
    let mut kept = Vec::new();
    for row in rows {
        if evaluate(condition, row)? {
            kept.push(row.clone());
        }
    }
    Ok(kept)
}
