//! Lexer error types.
//!
//! Errors carry WHERE (`offset`, a byte position in the template) and WHAT
//! (`kind`). They are only produced under [`Recovery::Strict`]; the other
//! recovery modes turn the same conditions into tokens.
//!
//! [`Recovery::Strict`]: crate::Recovery::Strict

use stencil_lexer_core::Delimiter;

/// A lexer error with its location in the template.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind} at byte {offset}")]
pub struct LexError {
    /// WHAT went wrong.
    pub kind: LexErrorKind,
    /// WHERE: byte offset of the offending tag's opening marker.
    pub offset: usize,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// An opening marker with no closing marker anywhere after it.
    #[error("unterminated tag: `{open}` is never closed by `{close}`")]
    UnterminatedTag {
        open: &'static str,
        close: &'static str,
    },
    /// A tag shorter than its own delimiters, such as `{#}`, where the closer
    /// overlaps the opener.
    #[error("malformed tag `{chunk}`: shorter than its delimiters")]
    MalformedTag { chunk: String },
}

impl LexError {
    /// Opening marker at `offset` whose closer never appears.
    #[cold]
    pub fn unterminated_tag(delimiter: &Delimiter, offset: usize) -> Self {
        Self {
            kind: LexErrorKind::UnterminatedTag {
                open: delimiter.open,
                close: delimiter.close,
            },
            offset,
        }
    }

    /// Tag chunk at `offset` too short to hold both delimiters.
    #[cold]
    pub fn malformed_tag(chunk: &str, offset: usize) -> Self {
        Self {
            kind: LexErrorKind::MalformedTag {
                chunk: chunk.to_owned(),
            },
            offset,
        }
    }
}

#[cfg(test)]
mod tests;
