//! Unit tests for the syntax driver.
//!
//! This module contains tests for the parse orchestration, including:
//! - Grammar invocation and tree return
//! - The full-consumption check and `TrailingInput` failures
//! - Propagation of scan and grammar errors

use super::parser::SyntaxParser;
use crate::errors::errors::{Error, ErrorImpl};
use crate::lexer::tokenizer::Tokenizer;
use crate::value::value::DynamicValue;
use crate::Position;

const TABLE: &[(&str, &str)] = &[("word", r"[A-Za-z]+"), ("space", r"\s+")];

fn all_words(tokenizer: &mut Tokenizer, seed: Option<DynamicValue>) -> Result<DynamicValue, Error> {
    assert!(seed.is_none());
    let mut words = DynamicValue::new_list();
    while tokenizer.more_tokens() {
        let token = tokenizer.expect_kind("word")?;
        words.push(DynamicValue::from(token.value))?;
    }
    Ok(words)
}

fn first_word_only(
    tokenizer: &mut Tokenizer,
    _seed: Option<DynamicValue>,
) -> Result<DynamicValue, Error> {
    let token = tokenizer.expect_kind("word")?;
    Ok(DynamicValue::from(token.value))
}

fn never_called(
    _tokenizer: &mut Tokenizer,
    _seed: Option<DynamicValue>,
) -> Result<DynamicValue, Error> {
    panic!("the grammar must not run when scanning fails");
}

#[test]
fn test_parse_returns_the_grammar_tree() {
    let parser = SyntaxParser::from_text("ab cd ef", TABLE, &["space"], all_words).unwrap();
    let tree = parser.parse().unwrap();

    assert_eq!(tree.to_strings().unwrap(), vec!["ab", "cd", "ef"]);
}

#[test]
fn test_parse_accepts_an_empty_source() {
    let parser = SyntaxParser::from_text("", TABLE, &["space"], all_words).unwrap();
    let tree = parser.parse().unwrap();

    assert!(tree.items().unwrap().is_empty());
}

#[test]
fn test_leftover_tokens_fail_the_parse() {
    let parser = SyntaxParser::from_text("ab cd ef", TABLE, &["space"], first_word_only).unwrap();
    let error = parser.parse().unwrap_err();

    assert_eq!(error.get_error_name(), "TrailingInput");
    assert_eq!(error.get_position(), Position::Line(1));
    match error.internal_error() {
        ErrorImpl::TrailingInput { kind, value } => {
            assert_eq!(kind, "word");
            assert_eq!(value, "cd");
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(
        error.to_string(),
        "error on line 1: more tokens after parsing complete, next is word => <cd>"
    );
}

#[test]
fn test_scan_errors_surface_before_the_grammar_runs() {
    let parser = SyntaxParser::from_text("ab @cd", TABLE, &["space"], never_called).unwrap();
    let error = parser.parse().unwrap_err();

    assert_eq!(error.get_error_name(), "Lexical");
}

#[test]
fn test_grammar_errors_propagate() {
    let table = [("word", r"[A-Za-z]+"), ("number", r"[0-9]+"), ("space", r"\s+")];
    let parser = SyntaxParser::from_text("ab 12 cd", &table, &["space"], all_words).unwrap();
    let error = parser.parse().unwrap_err();

    assert_eq!(error.get_error_name(), "Syntax");
    assert_eq!(error.get_position(), Position::Line(1));
}

#[test]
fn test_driver_over_an_existing_tokenizer() {
    let tokenizer = Tokenizer::from_text("ab", TABLE, &["space"]).unwrap();
    let parser = SyntaxParser::new(tokenizer, all_words);

    assert_eq!(parser.tokenizer().text(), "ab");
    let tree = parser.parse().unwrap();
    assert_eq!(tree.to_strings().unwrap(), vec!["ab"]);
}
