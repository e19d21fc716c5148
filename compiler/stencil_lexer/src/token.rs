//! Tokens produced by the lexer.

use std::fmt;

use stencil_lexer_core::TagKind;

/// A lexed piece of a template.
///
/// Payloads borrow from the template. `Text` carries the raw source
/// verbatim; tagged tokens carry the content between the delimiters with
/// surrounding spaces trimmed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Token<'a> {
    Text(&'a str),
    Variable(&'a str),
    Block(&'a str),
    Comment(&'a str),
}

/// Payload-free discriminant of a [`Token`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Text,
    Variable,
    Block,
    Comment,
}

impl<'a> Token<'a> {
    /// Build the tagged token for `kind`.
    pub fn tag(kind: TagKind, value: &'a str) -> Self {
        match kind {
            TagKind::Variable => Token::Variable(value),
            TagKind::Block => Token::Block(value),
            TagKind::Comment => Token::Comment(value),
        }
    }

    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Text(_) => TokenKind::Text,
            Token::Variable(_) => TokenKind::Variable,
            Token::Block(_) => TokenKind::Block,
            Token::Comment(_) => TokenKind::Comment,
        }
    }

    /// The token's payload.
    pub fn value(&self) -> &'a str {
        match *self {
            Token::Text(value)
            | Token::Variable(value)
            | Token::Block(value)
            | Token::Comment(value) => value,
        }
    }
}

impl From<TagKind> for TokenKind {
    fn from(kind: TagKind) -> Self {
        match kind {
            TagKind::Variable => TokenKind::Variable,
            TagKind::Block => TokenKind::Block,
            TagKind::Comment => TokenKind::Comment,
        }
    }
}

impl TokenKind {
    /// Human-readable name for display.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Text => "Text",
            TokenKind::Variable => "Variable",
            TokenKind::Block => "Block",
            TokenKind::Comment => "Comment",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind(), self.value())
    }
}

#[cfg(test)]
mod tests;
