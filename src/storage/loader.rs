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

//! Dataset loading and schema inference
//!
//! A data file is a JSON object mapping table names to arrays of row
//! objects. Each table's schema is inferred from its first row: key order
//! becomes column order, JSON strings become TEXT columns, JSON numbers
//! become NUMBER columns. Every row is then validated against that schema,
//! so a loaded table is homogeneous.

use std::fs;
use std::path::Path;

use serde_json::Value as JsonValue;

use crate::core::{ColumnType, Error, Result, Row, Schema, SchemaColumn, Value};

use super::table::{Dataset, Table};

/// Parse and validate a JSON dataset
pub fn load_dataset(json: &str) -> Result<Dataset> {
    let root: JsonValue = serde_json::from_str(json)?;
    parse_root(root)
}

/// Read a data file and load it as a dataset
pub fn load_dataset_from_path(path: impl AsRef<Path>) -> Result<Dataset> {
    let text = fs::read_to_string(path)?;
    load_dataset(&text)
}

fn parse_root(root: JsonValue) -> Result<Dataset> {
    let table_map = match root {
        JsonValue::Object(map) => map,
        _ => return Err(Error::DataRootNotObject),
    };

    let mut tables = Vec::with_capacity(table_map.len());
    for (name, value) in table_map {
        let raw_rows = match value {
            JsonValue::Array(rows) => rows,
            _ => return Err(Error::TableNotArray(name)),
        };
        tables.push(parse_table(name, raw_rows)?);
    }
    Ok(Dataset::new(tables))
}

fn parse_table(name: String, raw_rows: Vec<JsonValue>) -> Result<Table> {
    let first = raw_rows
        .first()
        .ok_or_else(|| Error::EmptyTable(name.clone()))?;
    let schema = infer_schema(&name, first)?;

    let mut rows = Vec::with_capacity(raw_rows.len());
    for (index, raw) in raw_rows.into_iter().enumerate() {
        rows.push(validate_row(&schema, index, raw)?);
    }
    Ok(Table::new(schema, rows))
}

/// Infer a table schema from its first row. Key order becomes column order.
fn infer_schema(table: &str, first: &JsonValue) -> Result<Schema> {
    let object = first
        .as_object()
        .ok_or_else(|| Error::row_not_object(table, 0))?;

    let mut columns = Vec::with_capacity(object.len());
    for (column, value) in object {
        let column_type = ColumnType::of_json(value).ok_or_else(|| {
            Error::unsupported_column_type(table, column.clone(), json_kind(value))
        })?;
        columns.push(SchemaColumn::new(column.clone(), column_type));
    }
    Ok(Schema::new(table, columns))
}

/// Check one row against the schema and convert it.
///
/// Every column present must be known and carry the inferred type, and
/// every schema column must be present. The first row passes through here
/// too; its checks cannot fail since the schema came from it.
fn validate_row(schema: &Schema, index: usize, raw: JsonValue) -> Result<Row> {
    let object = match raw {
        JsonValue::Object(object) => object,
        _ => return Err(Error::row_not_object(schema.table_name.clone(), index)),
    };

    let mut row = Row::with_capacity(object.len());
    for (column, value) in object {
        let expected = schema
            .get_column_type(&column)
            .ok_or_else(|| Error::unknown_column(schema.table_name.clone(), index, column.clone()))?;
        let cell = match (expected, value) {
            (ColumnType::Text, JsonValue::String(text)) => Value::text(text),
            (ColumnType::Number, JsonValue::Number(number)) => {
                Value::Number(number.as_f64().unwrap_or_default())
            }
            (expected, other) => {
                return Err(Error::column_type_mismatch(
                    schema.table_name.clone(),
                    index,
                    column,
                    expected.as_str(),
                    json_kind(&other),
                ))
            }
        };
        row.insert(column, cell);
    }

    for column in schema.column_names() {
        if !row.contains_column(column) {
            return Err(Error::missing_column(
                schema.table_name.clone(),
                index,
                column,
            ));
        }
    }

    Ok(row)
}

/// JSON value kind name for error messages
fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
