//! Lexical analysis module for the library.
//!
//! This module contains the tokenizer that converts source text into a
//! stream of tokens using a caller-declared pattern table. It handles:
//!
//! - Compilation of ordered (name, pattern) tables into one alternation
//! - Anchored scanning with token position tracking
//! - Ignored-kind filtering and an optional token post-filter
//! - Cursor navigation and assertions over the finished token stream

pub mod pattern;
pub mod tokenizer;
pub mod tokens;
