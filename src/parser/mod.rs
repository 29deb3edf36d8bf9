//! Parse driver module.
//!
//! This module contains the syntax driver that runs a complete parse:
//! it scans the source into tokens, hands the token cursor to an
//! externally supplied grammar entry point, and verifies the grammar
//! consumed every token before accepting its result.
//!
//! Grammar logic itself lives with the caller. The driver contributes
//! no syntax rules of its own; its one structural guarantee is that a
//! parse which leaves tokens behind never succeeds.

pub mod parser;

#[cfg(test)]
mod tests;
