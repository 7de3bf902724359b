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

//! Column projection
//!
//! Narrows rows to the selected columns. Selected names arrive as written
//! in the query, so each is cleaned of quote characters and surrounding
//! whitespace before lookup. A `*` anywhere in the selection keeps the
//! whole row.

use crate::core::{Error, Result, Row, Schema};

/// Strip quote characters and trim a selected column name
fn trim_column_name(name: &str) -> String {
    name.replace(['\'', '"'], "").trim().to_string()
}

/// Project one row onto the selected columns.
///
/// Fails with a lookup error when a selected column is absent from the
/// row, and with a format error when the selection names no columns.
pub fn project_row(selected: &[String], row: &Row) -> Result<Row> {
    let selected: Vec<String> = selected
        .iter()
        .map(|name| trim_column_name(name))
        .collect();

    if selected.is_empty() {
        return Err(Error::EmptySelection);
    }
    if selected.iter().any(|name| name == "*") {
        return Ok(row.clone());
    }

    let mut projected = Row::with_capacity(selected.len());
    for name in selected {
        let value = row
            .get(&name)
            .cloned()
            .ok_or_else(|| Error::ColumnNotFound(name.clone()))?;
        projected.insert(name, value);
    }
    Ok(projected)
}

/// Output column order for a selection: schema order when the selection
/// contains `*`, selection order (cleaned) otherwise
pub fn projected_columns(selected: &[String], schema: &Schema) -> Vec<String> {
    let cleaned: Vec<String> = selected
        .iter()
        .map(|name| trim_column_name(name))
        .collect();

    if cleaned.iter().any(|name| name == "*") {
        schema
            .column_names()
            .into_iter()
            .map(str::to_string)
            .collect()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ColumnType, ErrorKind, SchemaColumn};

    fn sample_row() -> Row {
        let mut row = Row::new();
        row.insert("firstName", "Rose");
        row.insert("age", 35.0);
        row.insert("eyeColor", "brown");
        row
    }

    fn sample_schema() -> Schema {
        Schema::new(
            "user",
            vec![
                SchemaColumn::new("firstName", ColumnType::Text),
                SchemaColumn::new("age", ColumnType::Number),
                SchemaColumn::new("eyeColor", ColumnType::Text),
            ],
        )
    }

    fn selection(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_project_subset() {
        let row = sample_row();
        let projected = project_row(&selection(&["firstName", "age"]), &row).unwrap();
        assert_eq!(projected.len(), 2);
        assert!(projected.contains_column("firstName"));
        assert!(projected.contains_column("age"));
        assert!(!projected.contains_column("eyeColor"));
    }

    #[test]
    fn test_wildcard_keeps_whole_row() {
        let row = sample_row();
        let projected = project_row(&selection(&["*"]), &row).unwrap();
        assert_eq!(projected, row);

        // A wildcard anywhere in the list wins
        let projected = project_row(&selection(&["age", "*"]), &row).unwrap();
        assert_eq!(projected, row);
    }

    #[test]
    fn test_selected_names_are_cleaned() {
        let row = sample_row();
        let projected = project_row(&selection(&[" 'firstName' ", "\"age\""]), &row).unwrap();
        assert!(projected.contains_column("firstName"));
        assert!(projected.contains_column("age"));

        // A quoted wildcard still selects everything
        let projected = project_row(&selection(&["'*'"]), &row).unwrap();
        assert_eq!(projected, row);
    }

    #[test]
    fn test_missing_column_is_lookup_error() {
        let row = sample_row();
        let err = project_row(&selection(&["lastName"]), &row).unwrap_err();
        assert_eq!(err, Error::ColumnNotFound("lastName".to_string()));
        assert_eq!(err.kind(), ErrorKind::Lookup);
    }

    #[test]
    fn test_empty_selection_is_format_error() {
        let row = sample_row();
        let err = project_row(&[], &row).unwrap_err();
        assert_eq!(err, Error::EmptySelection);
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn test_projected_columns_follow_selection_order() {
        let schema = sample_schema();
        let columns = projected_columns(&selection(&["eyeColor", " firstName "]), &schema);
        assert_eq!(columns, vec!["eyeColor", "firstName"]);
    }

    #[test]
    fn test_projected_columns_wildcard_follows_schema_order() {
        let schema = sample_schema();
        let columns = projected_columns(&selection(&["*"]), &schema);
        assert_eq!(columns, vec!["firstName", "age", "eyeColor"]);
    }
}
