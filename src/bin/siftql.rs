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

//! Siftql CLI - Interactive query interface for JSON datasets
//!

use std::io::{self, BufRead, IsTerminal};
use std::time::Instant;

use clap::Parser;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Config, DefaultEditor, EditMode, Editor};

use siftql::api::{Database, QueryResult};
use siftql::common::version::{MAJOR, MINOR, PATCH};
use siftql::parser::QUERY_SHAPE;
use siftql::Value;

/// Version string constant
const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION_MAJOR"),
    ".",
    env!("CARGO_PKG_VERSION_MINOR"),
    ".",
    env!("CARGO_PKG_VERSION_PATCH")
);

/// Siftql query CLI
#[derive(Parser, Debug)]
#[command(name = "siftql")]
#[command(author = "Siftql Contributors")]
#[command(version = VERSION)]
#[command(about = "SQL-subset query engine over flat JSON datasets")]
#[command(
    long_about = "Siftql loads a JSON dataset of flat tables and answers a small subset of SQL\n\
over it: column projection with SELECT and row filtering with WHERE.\n\n\
QUERY SHAPE:\n\
  SELECT [columns] FROM [table] [WHERE [condition]];\n\n\
  columns      comma-separated names, or * for every column\n\
  condition    comparisons (=, !=, >, <) joined with AND, OR and parentheses\n\n\
EXAMPLES:\n\
  siftql -d data.json                                  Interactive session\n\
  siftql -d data.json -e 'SELECT * FROM user;'         One-shot query\n\
  siftql -d data.json -e 'SELECT * FROM user;' --json  JSON output\n\
  siftql -d data.json -q < queries.sql                 Run a script"
)]
struct Args {
    /// Path to the JSON dataset file
    #[arg(short = 'd', long = "data")]
    data: String,

    /// Output results in JSON format
    #[arg(short = 'j', long = "json", default_value = "false")]
    json_output: bool,

    /// Suppress startup and summary messages
    #[arg(short = 'q', long = "quiet", default_value = "false")]
    quiet: bool,

    /// Maximum number of rows to display (0 for unlimited)
    #[arg(short = 'l', long = "limit", default_value = "40")]
    limit: usize,

    /// Execute the given statements and exit
    #[arg(short = 'e', long = "execute")]
    execute: Option<String>,
}

/// CLI state for interactive mode
struct Cli {
    db: Database,
    json_output: bool,
    limit: usize,
    quiet: bool,
    editor: Editor<(), DefaultHistory>,
    current_query: String,
    in_multi_line: bool,
}

impl Cli {
    fn new(db: Database, json_output: bool, limit: usize, quiet: bool) -> io::Result<Self> {
        let config = Config::builder()
            .history_ignore_space(true)
            .edit_mode(EditMode::Emacs)
            .build();

        let mut editor =
            DefaultEditor::with_config(config).map_err(|e| io::Error::other(e.to_string()))?;

        // Load history from file
        if let Some(home) = dirs::home_dir() {
            let history_file = home.join(".siftql_history");
            let _ = editor.load_history(&history_file);
        }

        Ok(Self {
            db,
            json_output,
            limit,
            quiet,
            editor,
            current_query: String::new(),
            in_multi_line: false,
        })
    }

    fn get_prompt(&self) -> &'static str {
        if self.in_multi_line {
            "\x1b[1;36m->\x1b[0m "
        } else {
            "\x1b[1;36m>\x1b[0m "
        }
    }

    fn run(&mut self) -> io::Result<()> {
        if !self.quiet {
            println!("Siftql v{}.{}.{}", MAJOR, MINOR, PATCH);
            println!("Enter queries, 'help' for assistance, or 'exit' to quit.");
            println!("Use Up/Down arrows for history, Ctrl+R to search history.");
            if self.json_output {
                println!("JSON output mode enabled.");
            }
            println!();
        }

        loop {
            let prompt = self.get_prompt();
            match self.editor.readline(prompt) {
                Ok(line) => {
                    let line = line.trim();

                    // Handle empty line
                    if !self.in_multi_line && line.is_empty() {
                        continue;
                    }

                    // Handle special commands (only when not in multi-line mode)
                    if !self.in_multi_line {
                        match line.to_lowercase().as_str() {
                            "exit" | "quit" | "\\q" => break,
                            "help" | "\\h" | "\\?" => {
                                self.print_help();
                                continue;
                            }
                            "tables" => {
                                let _ = self.editor.add_history_entry(line);
                                self.list_tables();
                                continue;
                            }
                            _ => {}
                        }
                    }

                    // Add line to current query
                    if !self.current_query.is_empty() {
                        self.current_query.push('\n');
                    }
                    self.current_query.push_str(line);

                    // Check if query ends with semicolon
                    let full_query = self.current_query.trim().to_string();
                    if full_query.ends_with(';') {
                        // Add to history
                        let history_entry = full_query.replace('\n', "\\n");
                        let _ = self.editor.add_history_entry(&history_entry);

                        self.in_multi_line = false;

                        // Split and execute statements
                        let statements = split_statements(&full_query);
                        for stmt in statements {
                            let stmt = stmt.trim();
                            if stmt.is_empty() {
                                continue;
                            }

                            let start = Instant::now();
                            if let Err(e) = self.execute_query(stmt) {
                                eprintln!("\x1b[1;31mError:\x1b[0m {}", e);
                            } else {
                                println!(
                                    "\x1b[1;32mQuery executed in {:?}\x1b[0m",
                                    start.elapsed()
                                );
                            }
                        }

                        self.current_query.clear();
                    } else {
                        self.in_multi_line = true;
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    break;
                }
            }
        }

        // Save history
        if let Some(home) = dirs::home_dir() {
            let history_file = home.join(".siftql_history");
            let _ = self.editor.save_history(&history_file);
        }

        Ok(())
    }

    fn execute_query(&mut self, query: &str) -> Result<(), String> {
        let lower_query = query.to_lowercase();
        let lower_query = lower_query.trim();

        // Handle special commands
        match lower_query {
            "help" | "\\h" | "\\?" => {
                self.print_help();
                return Ok(());
            }
            "tables" => {
                self.list_tables();
                return Ok(());
            }
            _ => {}
        }

        let result = self.db.query(query).map_err(|e| e.to_string())?;
        let rows = collect_cells(&result);
        let row_count = rows.len();

        if self.json_output {
            self.output_json(&result.columns, &rows, row_count)?;
        } else {
            self.output_table(&result.columns, &rows, row_count)?;
        }

        Ok(())
    }

    fn list_tables(&self) {
        for name in self.db.tables() {
            println!("{}", name);
        }
    }

    fn output_json(
        &self,
        columns: &[String],
        rows: &[Vec<Value>],
        row_count: usize,
    ) -> Result<(), String> {
        let json_rows: Vec<Vec<serde_json::Value>> = rows
            .iter()
            .map(|row| row.iter().map(value_to_json).collect())
            .collect();

        let result = serde_json::json!({
            "columns": columns,
            "rows": json_rows,
            "count": row_count
        });

        println!(
            "{}",
            serde_json::to_string(&result).map_err(|e| e.to_string())?
        );
        Ok(())
    }

    fn output_table(
        &self,
        columns: &[String],
        rows: &[Vec<Value>],
        row_count: usize,
    ) -> Result<(), String> {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL_CONDENSED)
            .set_content_arrangement(ContentArrangement::Dynamic);

        // Add header
        table.set_header(columns.iter().map(Cell::new));

        // Smart truncation with limit
        if self.limit > 0 && row_count > self.limit {
            let top_rows = self.limit / 2;
            let bottom_rows = self.limit - top_rows;

            // Add top rows
            for row in rows.iter().take(top_rows) {
                table.add_row(row.iter().map(Cell::new));
            }

            // Add truncation indicator
            let hidden_rows = row_count - self.limit;
            let mut truncation_row: Vec<Cell> = Vec::new();
            let message = format!("... ({} more rows) ...", hidden_rows);
            for (i, _) in columns.iter().enumerate() {
                if i == columns.len() / 2 {
                    truncation_row.push(Cell::new(&message));
                } else {
                    truncation_row.push(Cell::new(""));
                }
            }
            table.add_row(truncation_row);

            // Add bottom rows
            let start_idx = row_count.saturating_sub(bottom_rows).max(top_rows);
            for row in rows.iter().skip(start_idx) {
                table.add_row(row.iter().map(Cell::new));
            }
        } else {
            // Add all rows
            for row in rows {
                table.add_row(row.iter().map(Cell::new));
            }
        }

        println!("{table}");

        // Print summary
        let row_text = if row_count == 1 { "row" } else { "rows" };
        if self.limit > 0 && row_count > self.limit {
            println!(
                "\x1b[1;32m{} {} in set (showing {})\x1b[0m",
                row_count, row_text, self.limit
            );
        } else {
            println!("\x1b[1;32m{} {} in set\x1b[0m", row_count, row_text);
        }

        Ok(())
    }

    fn print_help(&self) {
        println!("\x1b[1mSiftql CLI Commands:\x1b[0m");
        println!();
        println!("  \x1b[1;33mQueries:\x1b[0m");
        println!("    {}", QUERY_SHAPE);
        println!();
        println!("    columns                Comma-separated column names, or * for all");
        println!("    condition              Comparisons (=, !=, >, <) joined with AND, OR");
        println!("                           and grouped with parentheses");
        println!();
        println!("  \x1b[1;33mSpecial Commands:\x1b[0m");
        println!("    tables                 List tables in the loaded dataset");
        println!("    exit, quit, \\q         Exit the CLI");
        println!("    help, \\h, \\?          Show this help message");
        println!();
        println!("  \x1b[1;33mKeyboard Shortcuts:\x1b[0m");
        println!("    Up/Down arrow keys     Navigate command history");
        println!("    Ctrl+R                 Search command history");
        println!("    Ctrl+A                 Move cursor to beginning of line");
        println!("    Ctrl+E                 Move cursor to end of line");
        println!("    Ctrl+W                 Delete word before cursor");
        println!("    Ctrl+U                 Delete from cursor to beginning of line");
        println!("    Ctrl+K                 Delete from cursor to end of line");
        println!("    Ctrl+L                 Clear screen");
        println!();
    }
}

fn main() {
    let args = Args::parse();

    // Load the dataset
    let db = match Database::open(&args.data) {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Error opening dataset: {}", e);
            std::process::exit(1);
        }
    };

    if !args.quiet {
        let tables = db.tables();
        let table_text = if tables.len() == 1 { "table" } else { "tables" };
        println!("Loaded {}: {} {}", args.data, tables.len(), table_text);
    }

    // Handle execute flag - run the given statements and exit
    if let Some(ref input) = args.execute {
        for stmt in split_statements(input) {
            let stmt = stmt.trim();
            if stmt.is_empty() {
                continue;
            }

            if let Err(e) =
                execute_query_with_options(&db, stmt, args.json_output, args.quiet, args.limit)
            {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    // Check if we're getting input from a pipe
    let is_pipe = !std::io::stdin().is_terminal();

    if is_pipe {
        if let Err(e) = execute_piped_input(&db, args.json_output, args.quiet, args.limit) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        return;
    }

    // Interactive mode
    let mut cli = match Cli::new(db, args.json_output, args.limit, args.quiet) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("Error initializing CLI: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = cli.run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn execute_piped_input(
    db: &Database,
    json_output: bool,
    quiet: bool,
    row_limit: usize,
) -> Result<(), String> {
    let stdin = io::stdin();
    let reader = stdin.lock();
    let mut current_statement = String::new();

    for line_result in reader.lines() {
        let line = line_result.map_err(|e| format!("Error reading input: {}", e))?;

        // Skip shell-style comment lines
        let trimmed = line.trim();
        if trimmed.starts_with('#') {
            continue;
        }

        // If blank line and we have a statement, execute it
        if trimmed.is_empty() && !current_statement.is_empty() {
            let block = current_statement.trim().to_string();
            current_statement.clear();

            if !block.is_empty() {
                run_statements(db, &block, json_output, quiet, row_limit);
            }
        } else {
            current_statement.push_str(&line);
            current_statement.push('\n');
        }
    }

    // Execute any remaining statement
    if !current_statement.is_empty() {
        let block = current_statement.trim().to_string();
        if !block.is_empty() {
            run_statements(db, &block, json_output, quiet, row_limit);
        }
    }

    Ok(())
}

/// Execute every statement in a block, reporting failures per statement
/// without aborting the rest.
fn run_statements(db: &Database, input: &str, json_output: bool, quiet: bool, row_limit: usize) {
    for stmt in split_statements(input) {
        let stmt = stmt.trim();
        if stmt.is_empty() {
            continue;
        }

        let start = Instant::now();
        if let Err(e) = execute_query_with_options(db, stmt, json_output, quiet, row_limit) {
            eprintln!("Error: {}", e);
        } else if !json_output && !quiet {
            println!("Query executed in {:?}", start.elapsed());
        }
    }
}

fn execute_query_with_options(
    db: &Database,
    query: &str,
    json_output: bool,
    quiet: bool,
    row_limit: usize,
) -> Result<(), String> {
    let lower_query = query.to_lowercase();
    let lower_query = lower_query.trim();

    // Handle special commands
    match lower_query {
        "help" | "\\h" | "\\?" => {
            print_help_main();
            return Ok(());
        }
        "tables" => {
            for name in db.tables() {
                println!("{}", name);
            }
            return Ok(());
        }
        _ => {}
    }

    let result = db.query(query).map_err(|e| e.to_string())?;
    let rows = collect_cells(&result);
    let row_count = rows.len();

    if json_output {
        output_json(&result.columns, &rows, row_count)?;
    } else {
        output_table(&result.columns, &rows, row_count, row_limit, quiet)?;
    }

    Ok(())
}

/// Flatten projected rows into cell vectors ordered by the result columns.
fn collect_cells(result: &QueryResult) -> Vec<Vec<Value>> {
    result
        .rows
        .iter()
        .map(|row| {
            result
                .columns
                .iter()
                // Projection fills every result column, so the fallback
                // never renders.
                .map(|column| row.get(column).cloned().unwrap_or_else(|| Value::text("")))
                .collect()
        })
        .collect()
}

fn output_json(columns: &[String], rows: &[Vec<Value>], row_count: usize) -> Result<(), String> {
    let json_rows: Vec<Vec<serde_json::Value>> = rows
        .iter()
        .map(|row| row.iter().map(value_to_json).collect())
        .collect();

    let result = serde_json::json!({
        "columns": columns,
        "rows": json_rows,
        "count": row_count
    });

    println!(
        "{}",
        serde_json::to_string(&result).map_err(|e| e.to_string())?
    );
    Ok(())
}

fn output_table(
    columns: &[String],
    rows: &[Vec<Value>],
    row_count: usize,
    row_limit: usize,
    quiet: bool,
) -> Result<(), String> {
    // Print the column names
    for (i, column) in columns.iter().enumerate() {
        if i > 0 {
            print!(" | ");
        }
        print!("{}", column);
    }
    println!();

    // Print a separator
    for (i, _) in columns.iter().enumerate() {
        if i > 0 {
            print!("-+-");
        }
        print!("----");
    }
    println!();

    // Display rows with smart truncation
    if row_limit == 0 || row_count <= row_limit {
        for row in rows {
            for (i, value) in row.iter().enumerate() {
                if i > 0 {
                    print!(" | ");
                }
                print!("{}", value);
            }
            println!();
        }

        if !quiet {
            println!("{} rows in set", row_count);
        }
    } else {
        // Smart truncation
        let top_rows = row_limit / 2;
        let bottom_rows = row_limit - top_rows;

        // Show top rows
        for row in rows.iter().take(top_rows) {
            for (i, value) in row.iter().enumerate() {
                if i > 0 {
                    print!(" | ");
                }
                print!("{}", value);
            }
            println!();
        }

        // Show truncation indicator
        let hidden_rows = row_count - row_limit;
        println!();
        println!("    \x1b[2m... ({} more rows) ...\x1b[0m", hidden_rows);
        println!();

        // Show bottom rows
        let start_idx = row_count.saturating_sub(bottom_rows).max(top_rows);
        for row in rows.iter().skip(start_idx) {
            for (i, value) in row.iter().enumerate() {
                if i > 0 {
                    print!(" | ");
                }
                print!("{}", value);
            }
            println!();
        }

        if !quiet {
            println!("{} rows in set (showing {})", row_count, row_limit);
        }
    }

    Ok(())
}

fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Text(s) => serde_json::json!(s.as_ref()),
        Value::Number(n) => serde_json::json!(n),
    }
}

/// Split input into statements at semicolons, keeping each terminator with
/// its statement. Semicolons inside quoted strings do not split.
fn split_statements(input: &str) -> Vec<String> {
    let mut statements = Vec::new();
    let mut current_statement = String::new();

    let mut in_single_quotes = false;
    let mut in_double_quotes = false;

    for ch in input.chars() {
        if ch == '\'' && !in_double_quotes {
            in_single_quotes = !in_single_quotes;
        } else if ch == '"' && !in_single_quotes {
            in_double_quotes = !in_double_quotes;
        }

        current_statement.push(ch);

        if ch == ';' && !in_single_quotes && !in_double_quotes {
            statements.push(current_statement.clone());
            current_statement.clear();
        }
    }

    // Keep any unterminated tail; executing it surfaces the missing
    // semicolon as a normal query error.
    if !current_statement.trim().is_empty() {
        statements.push(current_statement);
    }

    statements
}

fn print_help_main() {
    println!("Siftql CLI");
    println!();
    println!("  Queries:");
    println!("    {}", QUERY_SHAPE);
    println!();
    println!("  Special Commands:");
    println!("    tables                 List tables in the loaded dataset");
    println!("    help, \\h, \\?          Show this help message");
    println!();
}
