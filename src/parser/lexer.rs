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

//! Condition Lexer (Tokenizer)
//!
//! Lexes the raw text after WHERE into a token sequence. The scan
//! accumulates a pending buffer character by character; operator literals
//! are recognized greedily against the buffer so two-character operators
//! need no lookahead, and quoted runs are captured whole, keeping any
//! internal whitespace.

use crate::core::{Error, Result};

use super::token::{is_operator, Operator, Token};

/// A raw span produced by the scan, before classification.
///
/// Quoted spans carry their text with the outer quote pair already
/// stripped; the flag is what keeps `'30'` a text literal rather than a
/// number.
#[derive(Debug)]
struct RawSpan {
    text: String,
    quoted: bool,
}

impl RawSpan {
    fn plain(text: String) -> Self {
        Self {
            text,
            quoted: false,
        }
    }

    fn quoted(text: String) -> Self {
        Self { text, quoted: true }
    }
}

/// Condition lexer
pub struct Lexer {
    /// Input characters
    input: Vec<char>,
    /// Current position in input (next char to consume)
    position: usize,
}

impl Lexer {
    /// Create a new lexer for the given input
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// Lex the whole input into classified tokens
    pub fn tokenize(mut self) -> Result<Vec<Token>> {
        let spans = self.scan()?;
        Ok(spans.into_iter().map(classify).collect())
    }

    /// Scan the input into raw spans
    fn scan(&mut self) -> Result<Vec<RawSpan>> {
        let mut spans = Vec::new();
        let mut buffer = String::new();

        while self.position < self.input.len() {
            let ch = self.input[self.position];
            self.position += 1;

            if ch.is_whitespace() {
                if !buffer.is_empty() {
                    spans.push(RawSpan::plain(std::mem::take(&mut buffer)));
                }
                continue;
            }

            if ch == '\'' || ch == '"' {
                // A quoted run is captured whole and emitted on the spot;
                // the pending buffer is left as it was.
                let start = self.position - 1;
                let text = self.read_quoted(ch, start)?;
                spans.push(RawSpan::quoted(text));
                continue;
            }

            // Tentatively join to catch multi-character operators like !=
            buffer.push(ch);
            if is_operator(&buffer) {
                spans.push(RawSpan::plain(std::mem::take(&mut buffer)));
                continue;
            }
            buffer.pop();

            let mut utf8 = [0u8; 4];
            if is_operator(ch.encode_utf8(&mut utf8)) {
                if !buffer.is_empty() {
                    spans.push(RawSpan::plain(std::mem::take(&mut buffer)));
                }
                spans.push(RawSpan::plain(ch.to_string()));
                continue;
            }

            buffer.push(ch);
        }

        if !buffer.is_empty() {
            spans.push(RawSpan::plain(buffer));
        }

        Ok(spans)
    }

    /// Consume characters until the matching quote; the quotes themselves
    /// are not part of the returned text
    fn read_quoted(&mut self, quote: char, start: usize) -> Result<String> {
        let mut text = String::new();
        while self.position < self.input.len() {
            let ch = self.input[self.position];
            self.position += 1;
            if ch == quote {
                return Ok(text);
            }
            text.push(ch);
        }
        Err(Error::UnterminatedString { offset: start })
    }
}

/// Classify one raw span into a token
fn classify(span: RawSpan) -> Token {
    if span.quoted {
        return Token::Text(span.text);
    }
    if let Some(op) = Operator::from_symbol(&span.text) {
        return Token::Op(op);
    }
    if let Ok(number) = span.text.parse::<f64>() {
        // a bare NaN is a name, not a number
        if !number.is_nan() {
            return Token::Number(number);
        }
    }
    Token::Text(span.text)
}

/// Tokenize a raw condition string
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    Lexer::new(input).tokenize()
}
