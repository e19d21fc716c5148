//! Lexer configuration.

use stencil_lexer_core::TrimMode;

/// How the lexer handles tags it cannot lex cleanly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Recovery {
    /// Report unterminated and malformed tags as [`LexError`](crate::LexError)s.
    #[default]
    Strict,
    /// Historical behavior. An unterminated tag becomes a single empty
    /// `Text` token and the rest of the template is dropped; a malformed
    /// tag gets an empty payload.
    Legacy,
    /// Emit the raw source of unterminated and malformed tags as `Text`.
    Lossless,
}

/// Options controlling a [`Lexer`](crate::Lexer).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LexerOptions {
    pub recovery: Recovery,
    /// Trim applied to tag payloads after stripping the delimiters.
    pub trim: TrimMode,
}

impl LexerOptions {
    /// Options reproducing the historical lexer exactly.
    pub fn legacy() -> Self {
        Self {
            recovery: Recovery::Legacy,
            trim: TrimMode::Legacy,
        }
    }

    #[must_use]
    pub fn with_recovery(mut self, recovery: Recovery) -> Self {
        self.recovery = recovery;
        self
    }

    #[must_use]
    pub fn with_trim(mut self, trim: TrimMode) -> Self {
        self.trim = trim;
        self
    }
}

#[cfg(test)]
mod tests;
