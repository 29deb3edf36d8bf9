use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::errors::errors::{Error, ErrorImpl};
use crate::Position;

lazy_static! {
    static ref VALID_NAME: Regex = Regex::new("^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
}

/// An ordered table of named token patterns compiled into a single
/// anchored alternation.
///
/// Declaration order is the disambiguation order: when several patterns
/// could match at the same position, the earliest declared one wins even
/// if a later one would match more text. This is the alternation
/// preference order of the regex engine, not longest-match, and grammars
/// may rely on it (keywords declared before a general identifier pattern).
#[derive(Debug, Clone)]
pub struct PatternSet {
    names: Vec<String>,
    regex: Regex,
}

impl PatternSet {
    /// Compiles an ordered `(name, pattern)` table.
    ///
    /// Names must be non-empty, unique, and of the form
    /// `[A-Za-z_][A-Za-z0-9_]*` so they can serve as capture group names.
    /// Patterns use the `regex` crate's syntax.
    pub fn compile(table: &[(&str, &str)]) -> Result<PatternSet, Error> {
        if table.is_empty() {
            return Err(invalid_pattern("", "pattern table is empty"));
        }

        let mut names: Vec<String> = Vec::with_capacity(table.len());
        let mut pieces: Vec<String> = Vec::with_capacity(table.len());

        for (name, pattern) in table {
            if !VALID_NAME.is_match(name) {
                return Err(invalid_pattern(
                    name,
                    "pattern names must be of the form [A-Za-z_][A-Za-z0-9_]*",
                ));
            }
            if names.iter().any(|seen| seen == name) {
                return Err(Error::new(
                    ErrorImpl::DuplicatePattern {
                        name: name.to_string(),
                    },
                    Position::Unknown,
                ));
            }
            names.push(name.to_string());
            pieces.push(format!("(?P<{}>{})", name, pattern));
        }

        let source = format!("^(?:{})", pieces.join("|"));
        let regex = match Regex::new(&source) {
            Ok(regex) => regex,
            Err(err) => return Err(compile_error(table, err)),
        };
        debug!(pattern = %source, "compiled pattern table");

        Ok(PatternSet { names, regex })
    }

    /// Attempts a match anchored at the start of `rest`.
    ///
    /// Returns the first declared name whose group captured non-empty text
    /// together with that text. An all-empty match cannot advance the scan
    /// and reports as no match.
    pub(crate) fn match_at<'t>(&self, rest: &'t str) -> Option<(&str, &'t str)> {
        let captures = self.regex.captures(rest)?;
        for name in &self.names {
            if let Some(group) = captures.name(name) {
                if !group.as_str().is_empty() {
                    return Some((name.as_str(), group.as_str()));
                }
            }
        }
        None
    }
}

fn invalid_pattern(name: &str, reason: &str) -> Error {
    Error::new(
        ErrorImpl::InvalidPattern {
            name: name.to_string(),
            reason: reason.to_string(),
        },
        Position::Unknown,
    )
}

// Pins a combined-alternation failure on a single table entry where
// possible. Every entry compiles on its own when the failure is a
// collision between entries, e.g. the same inner group name used twice.
fn compile_error(table: &[(&str, &str)], err: regex::Error) -> Error {
    for (name, pattern) in table {
        if let Err(single) = Regex::new(&format!("(?P<{}>{})", name, pattern)) {
            return invalid_pattern(name, &single.to_string());
        }
    }
    invalid_pattern("<pattern table>", &err.to_string())
}
