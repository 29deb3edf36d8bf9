//! Error types and error handling for the library.
//!
//! This module defines the error types used throughout a parse. It
//! includes:
//!
//! - Error structures with source position information
//! - Specific error variants for scanning, assertions, values and the driver
//! - Error formatting and display functionality
//!
//! Every error is fatal to the parse that raised it: nothing is retried
//! or suppressed, callers receive it through `Result`.

pub mod errors;

#[cfg(test)]
mod tests;
