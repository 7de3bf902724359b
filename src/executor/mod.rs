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

//! Query executor
//!
//! Runs a parsed query against an in-memory table:
//!
//! ```text
//! Table rows
//!   ↓
//! filter_rows (WHERE condition tree)
//!   ↓
//! project_row (selected columns)
//!   ↓
//! QueryResult
//! ```
//!
//! # Components
//!
//! - [`evaluate`] - decides one row against a condition tree
//! - [`filter_rows`] - sequential, order-preserving row filtering
//! - [`project_row`] / [`projected_columns`] - column projection

pub mod evaluator;
pub mod filter;
pub mod projection;

pub use evaluator::evaluate;
pub use filter::filter_rows;
pub use projection::{project_row, projected_columns};
