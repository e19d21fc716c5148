//! Cooking layer: raw chunks to tokens.
//!
//! Classification looks only at the chunk's prefix. A chunk starting with an
//! opening marker becomes the matching tagged token, with two characters
//! stripped positionally from each end and the rest space-trimmed.
//! Everything else is `Text`, verbatim.
//!
//! Chunks that cannot be cooked (unterminated tags, tags shorter than their
//! delimiters) are resolved according to [`Recovery`].

use stencil_lexer_core::trim::trim;
use stencil_lexer_core::{ChunkKind, Delimiter, RawChunk, TrimMode};

use crate::{LexError, LexerOptions, Recovery, Token};

/// Remove two characters from each end of `chunk`, then trim spaces.
///
/// Returns `None` if `chunk` has fewer than four characters.
pub fn strip(chunk: &str, mode: TrimMode) -> Option<&str> {
    let start = chunk.char_indices().nth(2)?.0;
    let end = chunk.char_indices().nth_back(1)?.0;
    let inner = chunk.get(start..end)?;
    Some(trim(inner, ' ', mode))
}

/// Classify a raw chunk into a token.
///
/// Returns `None` only for a chunk that starts with an opening marker but is
/// too short to strip.
pub fn create_token(chunk: &str, mode: TrimMode) -> Option<Token<'_>> {
    match Delimiter::starting(chunk) {
        Some(delimiter) => strip(chunk, mode).map(|value| Token::tag(delimiter.kind, value)),
        None => Some(Token::Text(chunk)),
    }
}

/// Cook one raw chunk under `options`.
pub(crate) fn cook<'a>(
    chunk: RawChunk<'a>,
    options: LexerOptions,
) -> Result<Token<'a>, LexError> {
    match chunk.kind {
        ChunkKind::Text => Ok(Token::Text(chunk.text)),
        ChunkKind::Tag(delimiter) => {
            if let Some(token) = create_token(chunk.text, options.trim) {
                tracing::trace!(%token, offset = chunk.start, "cooked tag");
                return Ok(token);
            }
            tracing::debug!(chunk = chunk.text, offset = chunk.start, "malformed tag");
            match options.recovery {
                Recovery::Strict => Err(LexError::malformed_tag(chunk.text, chunk.start)),
                Recovery::Legacy => Ok(Token::tag(delimiter.kind, "")),
                Recovery::Lossless => Ok(Token::Text(chunk.text)),
            }
        }
        ChunkKind::Unterminated(delimiter) => {
            tracing::debug!(
                open = delimiter.open,
                offset = chunk.start,
                "unterminated tag"
            );
            match options.recovery {
                Recovery::Strict => Err(LexError::unterminated_tag(delimiter, chunk.start)),
                Recovery::Legacy => Ok(Token::Text("")),
                Recovery::Lossless => Ok(Token::Text(chunk.text)),
            }
        }
    }
}
