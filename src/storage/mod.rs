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

//! Storage module for Siftql
//!
//! This module contains the in-memory storage layer:
//! - JSON dataset loading with per-table schema inference
//! - Row validation against the inferred schema
//! - Typed tables and exact-name table lookup

pub mod loader;
pub mod table;

pub use loader::{load_dataset, load_dataset_from_path};
pub use table::{Dataset, Table};
