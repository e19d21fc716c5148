//! Raw chunker splitting a template into text and tag chunks.
//!
//! The chunker drives a [`Cursor`] through the template: it scans for the
//! next opening marker, yields the text before it, then consumes through the
//! matching closing marker and yields the tag. Chunks are not classified
//! beyond their [`ChunkKind`], and tag payloads are not stripped. That is
//! the cooking layer's job.
//!
//! # Coverage
//!
//! The raw text of all chunks, concatenated in order, is exactly the input.
//! This holds for every input, including unterminated tags.

use crate::cursor::Cursor;
use crate::delimiter::{Delimiter, OPENERS};

/// What a raw chunk contains.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChunkKind {
    /// Literal text containing no opening marker.
    Text,
    /// A tag from its opening marker through its closing marker.
    Tag(&'static Delimiter),
    /// An opening marker with no closing marker; runs to the end of input.
    Unterminated(&'static Delimiter),
}

/// A slice of the template produced by the chunker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawChunk<'a> {
    pub kind: ChunkKind,
    /// Byte offset of `text` in the template.
    pub start: usize,
    /// The raw source text, delimiters included.
    pub text: &'a str,
}

/// Iterator over the [`RawChunk`]s of a template.
///
/// Empty text between tags is never yielded, and an empty template yields
/// nothing. After an unterminated tag the chunker is exhausted.
#[derive(Clone, Debug)]
pub struct RawChunker<'a> {
    cursor: Cursor<'a>,
    /// Tag chunk scanned together with the text preceding it.
    pending: Option<RawChunk<'a>>,
}

impl<'a> RawChunker<'a> {
    /// Create a chunker starting at the cursor's position.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self {
            cursor,
            pending: None,
        }
    }

    /// Consume a tag starting at the cursor, which sits on `delimiter.open`.
    ///
    /// The close search starts at the opening marker, not after it, so a
    /// closer may overlap the opener (`{#}` is a complete 3-byte tag).
    fn tag(&mut self, delimiter: &'static Delimiter) -> RawChunk<'a> {
        let start = self.cursor.pos();
        match self.cursor.try_consume_until(delimiter.close, true) {
            Some(text) => RawChunk {
                kind: ChunkKind::Tag(delimiter),
                start,
                text,
            },
            None => RawChunk {
                kind: ChunkKind::Unterminated(delimiter),
                start,
                text: self.cursor.consume_rest(),
            },
        }
    }
}

impl<'a> Iterator for RawChunker<'a> {
    type Item = RawChunk<'a>;

    fn next(&mut self) -> Option<RawChunk<'a>> {
        if let Some(chunk) = self.pending.take() {
            return Some(chunk);
        }
        if self.cursor.is_empty() {
            return None;
        }

        let start = self.cursor.pos();
        let Some((open, text)) = self.cursor.consume_until_any(&OPENERS) else {
            return Some(RawChunk {
                kind: ChunkKind::Text,
                start,
                text: self.cursor.consume_rest(),
            });
        };

        // OPENERS is built from the delimiter table, so this always resolves.
        let tag = self.tag(Delimiter::for_open(open)?);
        if text.is_empty() {
            return Some(tag);
        }

        self.pending = Some(tag);
        Some(RawChunk {
            kind: ChunkKind::Text,
            start,
            text,
        })
    }
}

impl std::iter::FusedIterator for RawChunker<'_> {}
