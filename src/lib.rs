#![allow(clippy::module_inception)]

use std::fmt::Display;

pub mod errors;
pub mod lexer;
pub mod parser;
pub mod value;

extern crate regex;

/// Where an error was raised, as carried by every [`errors::errors::Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// 1-based line in the source text.
    Line(usize),
    /// The token stream was already exhausted.
    EndOfFile,
    /// No stream context, e.g. a value operation.
    Unknown,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::Line(line) => write!(f, "line {}", line),
            Position::EndOfFile => write!(f, "end of file"),
            Position::Unknown => write!(f, "unknown position"),
        }
    }
}
