use pretty_assertions::assert_eq;

use super::*;

#[test]
fn defaults_are_strict_and_standard() {
    let options = LexerOptions::default();
    assert_eq!(options.recovery, Recovery::Strict);
    assert_eq!(options.trim, TrimMode::Standard);
}

#[test]
fn builders_override_fields() {
    let options = LexerOptions::default()
        .with_recovery(Recovery::Lossless)
        .with_trim(TrimMode::Legacy);
    assert_eq!(options.recovery, Recovery::Lossless);
    assert_eq!(options.trim, TrimMode::Legacy);
}

#[test]
fn legacy_preset() {
    assert_eq!(
        LexerOptions::legacy(),
        LexerOptions {
            recovery: Recovery::Legacy,
            trim: TrimMode::Legacy,
        }
    );
}

#[cfg(feature = "serde")]
#[test]
fn deserialize_partial_config() {
    let options: LexerOptions = serde_json::from_str(r#"{"recovery":"lossless"}"#).unwrap();
    assert_eq!(options.recovery, Recovery::Lossless);
    assert_eq!(options.trim, TrimMode::Standard);

    let options: LexerOptions =
        serde_json::from_str(r#"{"recovery":"legacy","trim":"legacy"}"#).unwrap();
    assert_eq!(options, LexerOptions::legacy());
}
