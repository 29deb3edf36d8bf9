//! Syntax driver implementation.
//!
//! This module contains the driver that orchestrates a full parse.
//! The driver owns a tokenizer and a grammar entry point; parsing runs
//! the scan, invokes the entry point with the cursor positioned at the
//! first token, and fails unless the entry point consumed the whole
//! stream. The syntax tree is whatever `DynamicValue` the entry point
//! returns.

use std::path::Path;

use crate::errors::errors::{Error, ErrorImpl};
use crate::lexer::tokenizer::Tokenizer;
use crate::value::value::DynamicValue;
use crate::Position;

/// The grammar entry point supplied by the caller.
///
/// Receives the token cursor and an optional seed value and returns the
/// finished syntax tree. Grammar functions drive the cursor/assertion
/// API and assemble `DynamicValue` trees bottom-up; the driver never
/// inspects the tree they return.
pub type GrammarFn = fn(&mut Tokenizer, Option<DynamicValue>) -> Result<DynamicValue, Error>;

/// Runs a complete parse over one source: scan, grammar entry point,
/// full-consumption check.
///
/// A driver makes a single pass. [`SyntaxParser::parse`] consumes it,
/// so a finished parse cannot be rerun or resumed.
pub struct SyntaxParser {
    /// Token source handed to the grammar entry point.
    tokenizer: Tokenizer,
    /// The externally supplied grammar entry point.
    grammar: GrammarFn,
}

impl SyntaxParser {
    /// Creates a driver over an already constructed tokenizer.
    ///
    /// # Arguments
    ///
    /// * `tokenizer` - The tokenizer whose stream the grammar consumes
    /// * `grammar` - The grammar entry point invoked by [`SyntaxParser::parse`]
    pub fn new(tokenizer: Tokenizer, grammar: GrammarFn) -> SyntaxParser {
        SyntaxParser { tokenizer, grammar }
    }

    /// Creates a driver scanning a literal source text.
    ///
    /// # Arguments
    ///
    /// * `text` - The complete source text
    /// * `table` - Ordered (name, pattern) pairs; order decides precedence
    /// * `ignored_kinds` - Token kinds dropped before parsing
    /// * `grammar` - The grammar entry point invoked by [`SyntaxParser::parse`]
    pub fn from_text(
        text: impl Into<String>,
        table: &[(&str, &str)],
        ignored_kinds: &[&str],
        grammar: GrammarFn,
    ) -> Result<SyntaxParser, Error> {
        Ok(SyntaxParser::new(
            Tokenizer::from_text(text, table, ignored_kinds)?,
            grammar,
        ))
    }

    /// Creates a driver reading the source text from a file. The file is
    /// read in full here, before any scanning.
    pub fn from_file(
        path: impl AsRef<Path>,
        table: &[(&str, &str)],
        ignored_kinds: &[&str],
        grammar: GrammarFn,
    ) -> Result<SyntaxParser, Error> {
        Ok(SyntaxParser::new(
            Tokenizer::from_file(path, table, ignored_kinds)?,
            grammar,
        ))
    }

    /// The tokenizer this driver scans with.
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Runs the parse to completion and returns the syntax tree.
    ///
    /// Scans the whole source, then invokes the grammar entry point with
    /// no seed. Once the entry point returns, the cursor must sit at the
    /// end of the stream: leftover tokens fail the parse with a
    /// `TrailingInput` error naming the first unconsumed token, so no
    /// grammar built on this driver can silently accept a partial parse.
    ///
    /// # Returns
    ///
    /// The `DynamicValue` tree produced by the grammar entry point.
    pub fn parse(mut self) -> Result<DynamicValue, Error> {
        self.tokenizer.tokenize()?;
        let tree = (self.grammar)(&mut self.tokenizer, None)?;
        if let Some(token) = self.tokenizer.peek_token() {
            return Err(Error::new(
                ErrorImpl::TrailingInput {
                    kind: token.kind.clone(),
                    value: token.value.clone(),
                },
                Position::Line(token.line_number),
            ));
        }
        Ok(tree)
    }
}
