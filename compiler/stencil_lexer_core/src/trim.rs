//! Trimming a run of one character from both ends of a string.
//!
//! Two end finders exist. [`find_last_not`] examines every character.
//! [`find_last_not_legacy`] reproduces the historical scan, which walks
//! right to left and stops *before* examining position 0, so a string whose
//! only differing character is its first keeps its trailing run
//! (`"a  "` trims to `"a  "`). [`TrimMode`] selects between them.
//!
//! All indices are byte offsets on character boundaries.

/// Which end finder [`trim`] uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TrimMode {
    /// Strip leading and trailing runs; an all-matching string trims to `""`.
    #[default]
    Standard,
    /// Historical boundary behavior: position 0 is never an end boundary and
    /// an all-matching string is returned whole.
    Legacy,
}

/// Byte index of the first character not equal to `ch`.
///
/// `None` if `text` is empty or consists entirely of `ch`.
pub fn find_first_not(text: &str, ch: char) -> Option<usize> {
    text.char_indices()
        .find(|&(_, c)| c != ch)
        .map(|(index, _)| index)
}

/// Exclusive end index after the last character not equal to `ch`.
///
/// `None` if `text` is empty or consists entirely of `ch`.
pub fn find_last_not(text: &str, ch: char) -> Option<usize> {
    text.char_indices()
        .rev()
        .find(|&(_, c)| c != ch)
        .map(|(index, c)| index + c.len_utf8())
}

/// Exclusive end index after the last character not equal to `ch`, never
/// examining the character at position 0.
///
/// `None` if no character after the first differs from `ch`, including for
/// empty and single-character strings.
pub fn find_last_not_legacy(text: &str, ch: char) -> Option<usize> {
    text.char_indices()
        .rev()
        .take_while(|&(index, _)| index != 0)
        .find(|&(_, c)| c != ch)
        .map(|(index, c)| index + c.len_utf8())
}

/// Strip leading and trailing runs of `ch` from `text`.
pub fn trim(text: &str, ch: char, mode: TrimMode) -> &str {
    match mode {
        TrimMode::Standard => match (find_first_not(text, ch), find_last_not(text, ch)) {
            (Some(first), Some(last)) => &text[first..last],
            _ => "",
        },
        TrimMode::Legacy => {
            let first = find_first_not(text, ch).unwrap_or(0);
            let last = find_last_not_legacy(text, ch).unwrap_or(text.len());
            &text[first..last]
        }
    }
}
