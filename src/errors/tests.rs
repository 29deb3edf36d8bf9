//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl};
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::Lexical {
            context: "@".to_string(),
        },
        Position::Line(10),
    );

    assert_eq!(error.get_error_name(), "Lexical");
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::Syntax {
            expected: "token kind word".to_string(),
            found: None,
        },
        Position::Line(42),
    );

    assert_eq!(error.get_position(), Position::Line(42));
}

#[test]
fn test_error_display_with_line() {
    let error = Error::new(
        ErrorImpl::TrailingInput {
            kind: "word".to_string(),
            value: "leftover".to_string(),
        },
        Position::Line(3),
    );

    assert_eq!(
        error.to_string(),
        "error on line 3: more tokens after parsing complete, next is word => <leftover>"
    );
}

#[test]
fn test_error_display_at_end_of_file() {
    let error = Error::new(
        ErrorImpl::Syntax {
            expected: "token kind word".to_string(),
            found: None,
        },
        Position::EndOfFile,
    );

    assert_eq!(
        error.to_string(),
        "error on end of file: expected token kind word"
    );
}

#[test]
fn test_error_display_without_position() {
    let error = Error::new(
        ErrorImpl::KindMismatch {
            expected: "list",
            actual: "scalar",
        },
        Position::Unknown,
    );

    assert_eq!(
        error.to_string(),
        "attempt to use scalar DynamicValue as list"
    );
}

#[test]
fn test_syntax_error_names_next_token() {
    let error = Error::new(
        ErrorImpl::Syntax {
            expected: "token kind number".to_string(),
            found: Some(("word".to_string(), "abc".to_string())),
        },
        Position::Line(1),
    );

    assert_eq!(
        error.to_string(),
        "error on line 1: expected token kind number (next token is word => <abc>)"
    );
}

#[test]
fn test_missing_key_error() {
    let error = Error::new(
        ErrorImpl::MissingKey {
            key: "name".to_string(),
        },
        Position::Unknown,
    );

    assert_eq!(error.get_error_name(), "MissingKey");
    assert_eq!(error.to_string(), "missing key in map value: \"name\"");
}

#[test]
fn test_out_of_range_error() {
    let error = Error::new(
        ErrorImpl::OutOfRange {
            requested: 5,
            available: 2,
        },
        Position::Line(7),
    );

    assert_eq!(error.get_error_name(), "OutOfRange");
    assert_eq!(
        error.to_string(),
        "error on line 7: out of range: requested 5, only 2 available"
    );
}

#[test]
fn test_position_display() {
    assert_eq!(Position::Line(12).to_string(), "line 12");
    assert_eq!(Position::EndOfFile.to_string(), "end of file");
    assert_eq!(Position::Unknown.to_string(), "unknown position");
}
