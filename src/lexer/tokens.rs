use std::fmt::Display;

/// A single token produced by scanning.
///
/// `kind` is always one of the pattern names declared in the owning
/// tokenizer's table. Tokens are immutable once emitted; the cursor hands
/// them out by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: String,
    /// The exact matched substring.
    pub value: String,
    /// 1-based line the token starts on.
    pub line_number: usize,
    /// Bytes of source consumed before this token.
    pub offset: usize,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}:{}] {} => <{}>",
            self.line_number, self.offset, self.kind, self.value
        )
    }
}
