use std::collections::HashSet;
use std::fs;
use std::path::Path;

use regex::Regex;
use tracing::trace;

use crate::errors::errors::{Error, ErrorImpl};
use crate::Position;

use super::pattern::PatternSet;
use super::tokens::Token;

/// Rewrites the token list after ignored kinds are dropped and before it
/// becomes the parse input. May merge, reclassify, or inject tokens; it
/// never re-scans text.
pub type TokenFilter = fn(Vec<Token>) -> Vec<Token>;

/// The tokenizer owns one source text and the token stream scanned from
/// it, and exposes the cursor/assertion methods grammars are written
/// against.
///
/// Instances are independent: each compiles its own pattern table and is
/// meant to be used from a single thread for a single parse.
pub struct Tokenizer {
    /// The complete source text.
    text: String,
    /// The compiled pattern table, immutable for this instance's lifetime.
    patterns: PatternSet,
    /// Token kinds dropped after scanning, typically whitespace/comments.
    ignored_kinds: HashSet<String>,
    /// Optional rewrite of the filtered token list.
    filter: Option<TokenFilter>,
    /// The finalized token sequence produced by `tokenize`.
    tokens: Vec<Token>,
    /// Read cursor into `tokens`.
    tokens_index: usize,
}

impl Tokenizer {
    /// Creates a tokenizer over a literal source text, compiling the
    /// pattern table.
    pub fn from_text(
        text: impl Into<String>,
        table: &[(&str, &str)],
        ignored_kinds: &[&str],
    ) -> Result<Tokenizer, Error> {
        Ok(Tokenizer {
            text: text.into(),
            patterns: PatternSet::compile(table)?,
            ignored_kinds: ignored_kinds.iter().map(|kind| kind.to_string()).collect(),
            filter: None,
            tokens: vec![],
            tokens_index: 0,
        })
    }

    /// Creates a tokenizer reading the source text from a file. The read
    /// happens here, in full; scanning never touches the filesystem.
    pub fn from_file(
        path: impl AsRef<Path>,
        table: &[(&str, &str)],
        ignored_kinds: &[&str],
    ) -> Result<Tokenizer, Error> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|err| {
            Error::new(
                ErrorImpl::Io {
                    path: path.display().to_string(),
                    message: err.to_string(),
                },
                Position::Unknown,
            )
        })?;
        Tokenizer::from_text(text, table, ignored_kinds)
    }

    /// Installs the token post-filter.
    pub fn with_filter(mut self, filter: TokenFilter) -> Tokenizer {
        self.filter = Some(filter);
        self
    }

    /// Scans the whole source into the token sequence and resets the
    /// cursor.
    ///
    /// Every match is anchored exactly at the scan position; the scan
    /// fails with a `Lexical` error if any text remains once no pattern
    /// matches. Ignored kinds are dropped afterwards, then the post-filter
    /// runs, and the result becomes the parse input.
    pub fn tokenize(&mut self) -> Result<&[Token], Error> {
        let mut line_number = 1;
        let mut offset = 0;

        let mut parsed_tokens: Vec<Token> = vec![];
        while offset < self.text.len() {
            let (kind, value) = match self.patterns.match_at(&self.text[offset..]) {
                Some(found) => found,
                None => break,
            };
            trace!(kind = %kind, line = line_number, offset = offset, "match");
            parsed_tokens.push(Token {
                kind: kind.to_string(),
                value: value.to_string(),
                line_number,
                offset,
            });
            line_number += value.matches('\n').count();
            offset += value.len();
        }

        if offset != self.text.len() {
            let context: String = self.text[offset..].chars().take(200).collect();
            return Err(Error::new(
                ErrorImpl::Lexical { context },
                Position::Line(line_number),
            ));
        }

        let filtered_tokens: Vec<Token> = parsed_tokens
            .into_iter()
            .filter(|token| !self.ignored_kinds.contains(&token.kind))
            .collect();

        self.tokens = match self.filter {
            Some(filter) => filter(filtered_tokens),
            None => filtered_tokens,
        };
        self.tokens_index = 0;

        Ok(&self.tokens)
    }

    /// The source text this tokenizer scans.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The finalized token sequence, empty before `tokenize` runs.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Checks whether a token exists at the cursor.
    pub fn more_tokens(&self) -> bool {
        self.more_tokens_at(0)
    }

    /// Checks whether a token exists `offset` past the cursor.
    pub fn more_tokens_at(&self, offset: usize) -> bool {
        self.tokens_index + offset < self.tokens.len()
    }

    /// Returns the token at the cursor without consuming it.
    pub fn peek_token(&self) -> Option<&Token> {
        self.peek_token_at(0)
    }

    /// Returns the token `offset` past the cursor without consuming.
    pub fn peek_token_at(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.tokens_index + offset)
    }

    /// Consumes and returns the token at the cursor, `None` at the end of
    /// the stream.
    pub fn next_token(&mut self) -> Option<&Token> {
        if !self.more_tokens() {
            return None;
        }
        self.tokens_index += 1;
        self.tokens.get(self.tokens_index - 1)
    }

    /// Consumes exactly `count` tokens and returns them.
    ///
    /// Unlike `next_token` this fails, with `OutOfRange`, when fewer than
    /// `count` tokens remain.
    pub fn step_tokens(&mut self, count: usize) -> Result<&[Token], Error> {
        let available = self.tokens.len() - self.tokens_index;
        if count > available {
            return Err(Error::new(
                ErrorImpl::OutOfRange {
                    requested: count,
                    available,
                },
                self.cursor_position(),
            ));
        }
        let start = self.tokens_index;
        self.tokens_index += count;
        Ok(&self.tokens[start..self.tokens_index])
    }

    /// Checks the kind of the token `offset` past the cursor.
    pub fn is_token_kind(&self, kind: &str, offset: usize) -> bool {
        match self.peek_token_at(offset) {
            Some(token) => token.kind == kind,
            None => false,
        }
    }

    /// Checks kind and literal value of the token `offset` past the
    /// cursor. `"*"` as `kind` matches any kind.
    pub fn is_token_value(&self, kind: &str, value: &str, offset: usize) -> bool {
        match self.peek_token_at(offset) {
            Some(token) => (kind == "*" || token.kind == kind) && token.value == value,
            None => false,
        }
    }

    /// Checks kind and value-against-pattern of the token `offset` past
    /// the cursor. `"*"` as `kind` matches any kind.
    pub fn is_token_value_match(&self, kind: &str, pattern: &Regex, offset: usize) -> bool {
        match self.peek_token_at(offset) {
            Some(token) => (kind == "*" || token.kind == kind) && pattern.is_match(&token.value),
            None => false,
        }
    }

    /// Fails with a `Syntax` error unless the token `offset` past the
    /// cursor has the given kind.
    pub fn assert_token_kind(&self, kind: &str, offset: usize) -> Result<(), Error> {
        if !self.is_token_kind(kind, offset) {
            return Err(self.confess_at_cursor(format!("token kind {}{}", kind, fmt_offset(offset))));
        }
        Ok(())
    }

    /// Fails with a `Syntax` error unless the token `offset` past the
    /// cursor has the given kind and literal value.
    pub fn assert_token_value(&self, kind: &str, value: &str, offset: usize) -> Result<(), Error> {
        if !self.is_token_value(kind, value, offset) {
            return Err(self.confess_at_cursor(format!(
                "token kind {} with value '{}'{}",
                kind,
                value,
                fmt_offset(offset)
            )));
        }
        Ok(())
    }

    /// Fails with a `Syntax` error unless the token `offset` past the
    /// cursor has the given kind and a value matching `pattern`.
    pub fn assert_token_value_match(
        &self,
        kind: &str,
        pattern: &Regex,
        offset: usize,
    ) -> Result<(), Error> {
        if !self.is_token_value_match(kind, pattern, offset) {
            return Err(self.confess_at_cursor(format!(
                "token kind {} with value matching '{}'{}",
                kind,
                pattern,
                fmt_offset(offset)
            )));
        }
        Ok(())
    }

    /// Asserts the kind of the token at the cursor, then consumes and
    /// returns it.
    pub fn expect_kind(&mut self, kind: &str) -> Result<Token, Error> {
        self.assert_token_kind(kind, 0)?;
        Ok(self.step_checked())
    }

    /// Asserts kind and literal value of the token at the cursor, then
    /// consumes and returns it.
    pub fn expect_value(&mut self, kind: &str, value: &str) -> Result<Token, Error> {
        self.assert_token_value(kind, value, 0)?;
        Ok(self.step_checked())
    }

    /// Asserts kind and value-against-pattern of the token at the cursor,
    /// then consumes and returns it.
    pub fn expect_value_match(&mut self, kind: &str, pattern: &Regex) -> Result<Token, Error> {
        self.assert_token_value_match(kind, pattern, 0)?;
        Ok(self.step_checked())
    }

    /// Line of the next token from the cursor onward whose kind is not
    /// `"whitespace"`.
    ///
    /// Only meaningful for grammars that deliberately keep whitespace
    /// tokens in the stream; `None` when no such token remains.
    pub fn current_line_number(&self) -> Option<usize> {
        let mut index = 0;
        while let Some(token) = self.peek_token_at(index) {
            if token.kind != "whitespace" {
                return Some(token.line_number);
            }
            index += 1;
        }
        None
    }

    /// Lists the whole token sequence, one `[line:offset] kind => <value>`
    /// line per token.
    pub fn dump(&self) -> String {
        let strings: Vec<String> = self.tokens.iter().map(|token| token.to_string()).collect();
        strings.join("\n")
    }

    /// Lists the tokens remaining at the cursor.
    pub fn dump_at_cursor(&self) -> String {
        let strings: Vec<String> = self.tokens[self.tokens_index..]
            .iter()
            .map(|token| token.to_string())
            .collect();
        strings.join("\n")
    }

    // Call only after a successful assertion at the cursor.
    fn step_checked(&mut self) -> Token {
        let token = self.tokens[self.tokens_index].clone();
        self.tokens_index += 1;
        token
    }

    fn cursor_position(&self) -> Position {
        match self.peek_token() {
            Some(token) => Position::Line(token.line_number),
            None => Position::EndOfFile,
        }
    }

    fn confess_at_cursor(&self, expected: String) -> Error {
        let (position, found) = match self.peek_token() {
            Some(token) => (
                Position::Line(token.line_number),
                Some((token.kind.clone(), token.value.clone())),
            ),
            None => (Position::EndOfFile, None),
        };
        Error::new(ErrorImpl::Syntax { expected, found }, position)
    }
}

fn fmt_offset(offset: usize) -> String {
    if offset > 0 {
        format!(" (at offset {})", offset)
    } else {
        String::new()
    }
}
