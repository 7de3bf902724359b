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

//! Top-level Database API
//!
//! This module provides the high-level interface for Siftql.
//!
//! # Quick Start
//!
//! ```
//! use siftql::Database;
//!
//! let db = Database::from_json(r#"{
//!     "user": [
//!         { "firstName": "Rose",  "age": 35, "eyeColor": "brown" },
//!         { "firstName": "Amond", "age": 28, "eyeColor": "blue" }
//!     ]
//! }"#).unwrap();
//!
//! let result = db.query("SELECT firstName, age FROM user WHERE eyeColor = 'brown';").unwrap();
//! assert_eq!(result.columns, vec!["firstName", "age"]);
//! for row in &result.rows {
//!     println!("{}", row.get("firstName").unwrap());
//! }
//! ```

pub mod database;

pub use database::{Database, QueryResult};
