//! Dynamic values for syntax-tree construction.
//!
//! This module contains the tagged union grammar entry points use to
//! assemble syntax trees. It handles:
//!
//! - Scalar, list, map, and opaque value kinds
//! - Kind-checked access with no silent coercion between kinds
//! - Bulk projection of lists and maps to plain string/integer collections
//! - Identity-preserving wrapping of host objects

pub mod value;
