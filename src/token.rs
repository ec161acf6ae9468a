use std::fmt;

/// Token kinds produced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// One shell-style argument, fully unescaped.
    Word,
    /// Remainder of a line after a word-boundary `#`.
    Comment,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Word => write!(f, "word"),
            Self::Comment => write!(f, "comment"),
        }
    }
}

/// A single token: its kind and its value.
///
/// For words the value is the unescaped text. For comments it is the
/// text between the comment marker and the end of the line, with both
/// the marker and the newline left out.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

impl Token {
    #[must_use]
    pub fn word(value: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Word,
            value: value.into(),
        }
    }

    #[must_use]
    pub fn comment(value: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Comment,
            value: value.into(),
        }
    }

    #[must_use]
    pub const fn is_word(&self) -> bool {
        matches!(self.kind, TokenKind::Word)
    }

    #[must_use]
    pub const fn is_comment(&self) -> bool {
        matches!(self.kind, TokenKind::Comment)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.value)
    }
}
