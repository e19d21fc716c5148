//! Lexer for Stencil templates.
//!
//! Turns a template string into a flat sequence of [`Token`]s: literal
//! text plus `{{ variable }}`, `{% block %}` and `{# comment #}` tags.
//! Tag payloads are returned as opaque trimmed strings; nothing here parses
//! them or matches tags against each other.
//!
//! Scanning is done by `stencil_lexer_core`; this crate classifies the raw
//! chunks ("cooking") and applies the configured [`Recovery`].
//!
//! # Example
//!
//! ```
//! use stencil_lexer::{tokenize, Token};
//!
//! let tokens = tokenize("Hello {{ name }}!").unwrap();
//! assert_eq!(
//!     tokens,
//!     [Token::Text("Hello "), Token::Variable("name"), Token::Text("!")]
//! );
//! ```
//!
//! # Tracing
//!
//! `tokenize` opens a `debug` span; recoveries are logged at `debug` and
//! each cooked tag at `trace`. No subscriber is installed here.

mod cooker;
mod lex_error;
mod options;
mod token;

use stencil_lexer_core::{Cursor, RawChunker};

pub use cooker::{create_token, strip};
pub use lex_error::{LexError, LexErrorKind};
pub use options::{LexerOptions, Recovery};
pub use stencil_lexer_core::TrimMode;
pub use token::{Token, TokenKind};

/// Lex `source` with default options.
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    Lexer::new(source).tokenize()
}

/// A lexer over one template.
///
/// Construction is free; all work happens in [`tokenize`](Self::tokenize)
/// or while iterating [`tokens`](Self::tokens). The lexer can be reused and
/// always produces the same result for the same template.
#[derive(Clone, Copy, Debug)]
pub struct Lexer<'a> {
    source: &'a str,
    options: LexerOptions,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self::with_options(source, LexerOptions::default())
    }

    pub fn with_options(source: &'a str, options: LexerOptions) -> Self {
        Self { source, options }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn options(&self) -> LexerOptions {
        self.options
    }

    /// Lex the whole template.
    ///
    /// Under [`Recovery::Strict`] the first unterminated or malformed tag
    /// aborts lexing with its error.
    #[tracing::instrument(level = "debug", skip_all, fields(len = self.source.len()))]
    pub fn tokenize(&self) -> Result<Vec<Token<'a>>, LexError> {
        let tokens = self.tokens().collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(count = tokens.len(), "tokenized template");
        Ok(tokens)
    }

    /// Lazily lex the template, one token at a time.
    pub fn tokens(&self) -> Tokens<'a> {
        Tokens {
            chunks: RawChunker::new(Cursor::new(self.source)),
            options: self.options,
            failed: false,
        }
    }
}

/// Iterator over the tokens of a template. See [`Lexer::tokens`].
///
/// Yields nothing further after the first error.
#[derive(Clone, Debug)]
pub struct Tokens<'a> {
    chunks: RawChunker<'a>,
    options: LexerOptions,
    failed: bool,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Result<Token<'a>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let result = cooker::cook(self.chunks.next()?, self.options);
        self.failed = result.is_err();
        Some(result)
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}
