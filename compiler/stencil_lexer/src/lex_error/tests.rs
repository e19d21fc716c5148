use pretty_assertions::assert_eq;
use stencil_lexer_core::TagKind;

use super::*;

#[test]
fn unterminated_construction() {
    let err = LexError::unterminated_tag(TagKind::Variable.delimiter(), 7);
    assert_eq!(err.offset, 7);
    assert_eq!(
        err.kind,
        LexErrorKind::UnterminatedTag {
            open: "{{",
            close: "}}"
        }
    );
}

#[test]
fn malformed_construction() {
    let err = LexError::malformed_tag("{#}", 0);
    assert_eq!(
        err.kind,
        LexErrorKind::MalformedTag {
            chunk: "{#}".to_owned()
        }
    );
}

#[test]
fn display_includes_kind_and_offset() {
    let err = LexError::unterminated_tag(TagKind::Block.delimiter(), 12);
    assert_eq!(
        err.to_string(),
        "unterminated tag: `{%` is never closed by `%}` at byte 12"
    );

    let err = LexError::malformed_tag("{%}", 3);
    assert_eq!(
        err.to_string(),
        "malformed tag `{%}`: shorter than its delimiters at byte 3"
    );
}

#[test]
fn error_equality() {
    let a = LexError::malformed_tag("{#}", 0);
    let b = LexError::malformed_tag("{#}", 0);
    let c = LexError::malformed_tag("{#}", 1);
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn is_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
    assert_error(&LexError::malformed_tag("{%}", 0));
}
