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

//! SELECT statement splitting
//!
//! Splits a raw query line into its selected columns, target table, and
//! optional WHERE substring. The WHERE text is carried verbatim; lexing
//! and condition parsing happen later, against that substring alone.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::core::{Error, Result};

/// Shape of a SELECT query, quoted back at the user when a line does not
/// split.
pub const QUERY_SHAPE: &str = "SELECT [columns] FROM [table] [WHERE [condition]];";

/// Splits a terminated query into columns, table, and optional condition.
///
/// Keywords match case-insensitively and the SELECT keyword itself may be
/// omitted. `.` spans newlines so a query accumulated over several input
/// lines still splits.
static SELECT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"^\s*(?:SELECT\s+)?(.+?)\s+FROM\s+(\w+)(?:\s+WHERE\s+(.+?))?\s*$")
        .case_insensitive(true)
        .dot_matches_new_line(true)
        .build()
        .expect("query pattern must compile")
});

/// A split SELECT query
///
/// `columns` holds the projection list as written (a lone `*` selects every
/// column), `table` the target table name, and `filter` the raw text after
/// WHERE when the clause is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectStatement {
    pub columns: Vec<String>,
    pub table: String,
    pub filter: Option<String>,
}

/// Split a query line into a [`SelectStatement`].
///
/// The line must carry a `;` terminator; text after the first terminator is
/// ignored. A line that has a terminator but no FROM clause, or otherwise
/// does not fit the SELECT shape, fails with a format error.
///
/// The split is not quote-aware: a `;` inside a quoted literal still
/// truncates the statement, leaving the literal unterminated. Callers
/// feeding multi-statement input (the CLI does) split on semicolons
/// outside quotes before handing each statement here.
pub fn parse_select(query: &str) -> Result<SelectStatement> {
    let statement = match query.split_once(';') {
        Some((statement, _rest)) => statement,
        None => return Err(Error::MissingTerminator),
    };

    let captures = SELECT_PATTERN
        .captures(statement)
        .ok_or_else(|| Error::invalid_query(format!("expected '{}'", QUERY_SHAPE)))?;

    let columns = captures[1]
        .split(',')
        .map(|name| name.trim().to_string())
        .collect();
    let table = captures[2].to_string();
    let filter = captures.get(3).map(|m| m.as_str().to_string());

    Ok(SelectStatement {
        columns,
        table,
        filter,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;

    #[test]
    fn test_select_all_columns() {
        let stmt = parse_select("SELECT * FROM user;").unwrap();
        assert_eq!(stmt.columns, vec!["*"]);
        assert_eq!(stmt.table, "user");
        assert_eq!(stmt.filter, None);
    }

    #[test]
    fn test_select_column_list_trims_whitespace() {
        let stmt = parse_select("SELECT firstName,  age ,eyeColor FROM user;").unwrap();
        assert_eq!(stmt.columns, vec!["firstName", "age", "eyeColor"]);
    }

    #[test]
    fn test_where_substring_carried_verbatim() {
        let stmt = parse_select("SELECT * FROM user WHERE age > 30 AND eyeColor = 'brown';")
            .unwrap();
        assert_eq!(
            stmt.filter.as_deref(),
            Some("age > 30 AND eyeColor = 'brown'")
        );
    }

    #[test]
    fn test_select_keyword_is_optional() {
        let stmt = parse_select("* FROM user;").unwrap();
        assert_eq!(stmt.columns, vec!["*"]);
        assert_eq!(stmt.table, "user");
    }

    #[test]
    fn test_keywords_match_case_insensitively() {
        let stmt = parse_select("select firstName from user where age > 30;").unwrap();
        assert_eq!(stmt.columns, vec!["firstName"]);
        assert_eq!(stmt.table, "user");
        assert_eq!(stmt.filter.as_deref(), Some("age > 30"));
    }

    #[test]
    fn test_text_after_terminator_is_ignored() {
        let stmt = parse_select("SELECT * FROM first; SELECT * FROM second;").unwrap();
        assert_eq!(stmt.table, "first");
    }

    #[test]
    fn test_query_spanning_lines() {
        let stmt = parse_select("SELECT firstName\nFROM user\nWHERE age > 30;").unwrap();
        assert_eq!(stmt.table, "user");
        assert_eq!(stmt.filter.as_deref(), Some("age > 30"));
    }

    #[test]
    fn test_terminator_inside_quotes_still_splits() {
        // The terminator scan is not quote-aware: the statement is cut at
        // the ';' inside the literal, which the condition lexer then
        // rejects as unterminated.
        let stmt = parse_select("SELECT * FROM user WHERE n = 'a;b';").unwrap();
        assert_eq!(stmt.filter.as_deref(), Some("n = 'a"));

        let err = crate::parser::parse_where(stmt.filter.as_deref().unwrap()).unwrap_err();
        assert!(matches!(err, Error::UnterminatedString { .. }));
    }

    #[test]
    fn test_missing_terminator_fails() {
        let err = parse_select("SELECT * FROM user").unwrap_err();
        assert_eq!(err, Error::MissingTerminator);
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn test_missing_from_clause_fails() {
        let err = parse_select("SELECT *;").unwrap_err();
        assert!(matches!(err, Error::InvalidQuery(_)));
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn test_junk_before_terminator_fails() {
        let err = parse_select("not a query;").unwrap_err();
        assert!(matches!(err, Error::InvalidQuery(_)));
    }

    #[test]
    fn test_trailing_space_before_terminator_is_tolerated() {
        let stmt = parse_select("SELECT * FROM user ;").unwrap();
        assert_eq!(stmt.table, "user");
    }
}
