use pretty_assertions::assert_eq;

use super::*;

#[test]
fn tag_constructor_maps_kinds() {
    assert_eq!(Token::tag(TagKind::Variable, "x"), Token::Variable("x"));
    assert_eq!(Token::tag(TagKind::Block, "if"), Token::Block("if"));
    assert_eq!(Token::tag(TagKind::Comment, "c"), Token::Comment("c"));
}

#[test]
fn kind_and_value() {
    let token = Token::Block("for x in xs");
    assert_eq!(token.kind(), TokenKind::Block);
    assert_eq!(token.value(), "for x in xs");
    assert_eq!(Token::Text("").value(), "");
}

#[test]
fn tag_kind_converts_to_token_kind() {
    assert_eq!(TokenKind::from(TagKind::Variable), TokenKind::Variable);
    assert_eq!(TokenKind::from(TagKind::Block), TokenKind::Block);
    assert_eq!(TokenKind::from(TagKind::Comment), TokenKind::Comment);
}

#[test]
fn display_shows_kind_and_quoted_value() {
    assert_eq!(Token::Variable("name").to_string(), r#"Variable("name")"#);
    assert_eq!(Token::Text("a\nb").to_string(), r#"Text("a\nb")"#);
    assert_eq!(TokenKind::Comment.to_string(), "Comment");
}

#[cfg(feature = "serde")]
#[test]
fn serde_round_trip() {
    let token = Token::Variable("user.name");
    let json = serde_json::to_string(&token).unwrap();
    assert_eq!(json, r#"{"variable":"user.name"}"#);
    let back: Token<'_> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, token);
}
