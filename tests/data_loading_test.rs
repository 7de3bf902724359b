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

//! Data Loading Tests
//!
//! Dataset parsing through the Database facade: schema inference, value
//! typing, file loading, and rejection of malformed datasets.

use std::io::Write;

use tempfile::NamedTempFile;

use siftql::{Database, ErrorKind};

const DATASET: &str = r#"{
    "user": [
        {"firstName": "Imogene", "age": 35, "eyeColor": "brown", "balanceDollars": 3087.32},
        {"firstName": "Hubbard", "age": 21, "eyeColor": "blue", "balanceDollars": 1523.75}
    ],
    "account": [
        {"accountId": 100, "owner": "Imogene Sykes"}
    ]
}"#;

#[test]
fn test_tables_follow_file_order() {
    let db = Database::from_json(DATASET).expect("Failed to load dataset");
    assert_eq!(db.tables(), vec!["user", "account"]);
}

#[test]
fn test_schema_follows_first_row_key_order() {
    let db = Database::from_json(DATASET).expect("Failed to load dataset");

    let result = db.query("SELECT * FROM user;").expect("Query failed");
    assert_eq!(
        result.columns,
        vec!["firstName", "age", "eyeColor", "balanceDollars"]
    );
}

#[test]
fn test_values_are_typed() {
    let db = Database::from_json(DATASET).expect("Failed to load dataset");

    let result = db.query("SELECT * FROM user;").expect("Query failed");
    let row = &result.rows[0];

    assert_eq!(
        row.get("firstName").and_then(|v| v.as_str()),
        Some("Imogene")
    );
    // Integers and floats both load as numbers
    assert_eq!(row.get("age").and_then(|v| v.as_number()), Some(35.0));
    assert_eq!(
        row.get("balanceDollars").and_then(|v| v.as_number()),
        Some(3087.32)
    );
}

#[test]
fn test_open_from_file() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(DATASET.as_bytes())
        .expect("Failed to write dataset");

    let db = Database::open(file.path()).expect("Failed to open dataset");
    let result = db.query("SELECT * FROM user;").expect("Query failed");
    assert_eq!(result.row_count(), 2);
}

#[test]
fn test_open_missing_file() {
    let err = Database::open("/nonexistent/users.json").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Schema);
}

// Malformed datasets

#[test]
fn test_malformed_json_rejected() {
    let err = Database::from_json("{ not json").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Schema);
    assert!(err.to_string().contains("invalid JSON"));
}

#[test]
fn test_root_must_be_object() {
    let err = Database::from_json(r#"[{"age": 1}]"#).unwrap_err();
    assert!(err.to_string().contains("root must be a JSON object"));
}

#[test]
fn test_table_must_be_array() {
    let err = Database::from_json(r#"{"user": {"age": 1}}"#).unwrap_err();
    assert!(err
        .to_string()
        .contains("table 'user' must be a JSON array"));
}

#[test]
fn test_empty_table_rejected() {
    let err = Database::from_json(r#"{"user": []}"#).unwrap_err();
    assert!(err
        .to_string()
        .contains("table 'user' has no rows to infer a schema from"));
}

#[test]
fn test_unsupported_column_type() {
    let err = Database::from_json(r#"{"user": [{"active": true}]}"#).unwrap_err();
    assert!(err.to_string().contains("unsupported type boolean"));
}

#[test]
fn test_unknown_column_in_later_row() {
    let data = r#"{"user": [
        {"firstName": "Imogene", "age": 35},
        {"firstName": "Hubbard", "age": 21, "extra": "x"}
    ]}"#;
    let err = Database::from_json(data).unwrap_err();
    assert!(err.to_string().contains("unknown column 'extra'"));
}

#[test]
fn test_column_type_mismatch_in_later_row() {
    let data = r#"{"user": [
        {"firstName": "Imogene", "age": 35},
        {"firstName": "Hubbard", "age": "twenty-one"}
    ]}"#;
    let err = Database::from_json(data).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Schema);
    assert!(err.to_string().contains("column 'age' in row 1"));
}

#[test]
fn test_missing_column_in_later_row() {
    let data = r#"{"user": [
        {"firstName": "Imogene", "age": 35},
        {"firstName": "Hubbard"}
    ]}"#;
    let err = Database::from_json(data).unwrap_err();
    assert!(err
        .to_string()
        .contains("row 1 in table 'user' is missing column 'age'"));
}
