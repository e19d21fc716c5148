//! Low-level scanner for Stencil templates.
//!
//! Splits a template into raw chunks (literal text, tags, unterminated tags)
//! without classifying or trimming them. The cooking layer lives in
//! `stencil_lexer`, which turns these chunks into tokens.
//!
//! # Layers
//!
//! - [`Cursor`]: forward-only position in the source with the two marker
//!   searches every other piece is built on.
//! - [`RawChunker`]: the scanning loop, yielding [`RawChunk`]s that cover
//!   the source exactly.
//! - [`Delimiter`]: the static opener/closer table.
//! - [`trim`]: character trimming used when stripping tag payloads.

mod chunker;
mod cursor;
mod delimiter;
pub mod trim;

pub use chunker::{ChunkKind, RawChunk, RawChunker};
pub use cursor::Cursor;
pub use delimiter::{Delimiter, TagKind, DELIMITERS, OPENERS};
pub use trim::TrimMode;
