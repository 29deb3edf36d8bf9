use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// An error raised while scanning, navigating the token stream, working
/// with dynamic values, or finishing a parse.
///
/// Wraps the failure itself ([`ErrorImpl`]) together with the [`Position`]
/// it was raised at. Value operations have no stream context and carry
/// [`Position::Unknown`].
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> Position {
        self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::Lexical { .. } => "Lexical",
            ErrorImpl::Syntax { .. } => "Syntax",
            ErrorImpl::TrailingInput { .. } => "TrailingInput",
            ErrorImpl::KindMismatch { .. } => "KindMismatch",
            ErrorImpl::MissingKey { .. } => "MissingKey",
            ErrorImpl::Format { .. } => "Format",
            ErrorImpl::OutOfRange { .. } => "OutOfRange",
            ErrorImpl::InvalidPattern { .. } => "InvalidPattern",
            ErrorImpl::DuplicatePattern { .. } => "DuplicatePattern",
            ErrorImpl::Io { .. } => "Io",
        }
    }

    pub fn internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.position {
            Position::Unknown => write!(f, "{}", self.internal_error),
            position => write!(f, "error on {}: {}", position, self.internal_error),
        }
    }
}

impl std::error::Error for Error {}

fn fmt_found(found: &Option<(String, String)>) -> String {
    match found {
        Some((kind, value)) => format!(" (next token is {} => <{}>)", kind, value),
        None => String::new(),
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("no pattern matches the remaining text:\nHERE ---->{context}")]
    Lexical { context: String },
    #[error("expected {expected}{}", fmt_found(.found))]
    Syntax {
        expected: String,
        found: Option<(String, String)>,
    },
    #[error("more tokens after parsing complete, next is {kind} => <{value}>")]
    TrailingInput { kind: String, value: String },
    #[error("attempt to use {actual} DynamicValue as {expected}")]
    KindMismatch {
        expected: &'static str,
        actual: &'static str,
    },
    #[error("missing key in map value: {key:?}")]
    MissingKey { key: String },
    #[error("scalar is not an integer: {value:?}")]
    Format { value: String },
    #[error("out of range: requested {requested}, only {available} available")]
    OutOfRange { requested: usize, available: usize },
    #[error("invalid pattern {name:?}: {reason}")]
    InvalidPattern { name: String, reason: String },
    #[error("duplicate pattern name {name:?}")]
    DuplicatePattern { name: String },
    #[error("failed to read {path:?}: {message}")]
    Io { path: String, message: String },
}
