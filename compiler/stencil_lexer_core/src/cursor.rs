//! Forward-only cursor over an in-memory template.
//!
//! The cursor is a byte offset into an immutable `&str`. The remaining input
//! is always `source[pos..]`, a suffix of the original template, so nothing
//! is ever copied while scanning. `pos` only moves forward and always lands
//! on a UTF-8 character boundary.
//!
//! # Marker Search
//!
//! A marker can only begin where its first byte occurs, so candidate
//! positions are located with `memchr` over the markers' first bytes and
//! then checked with a prefix comparison. The result is the same as testing
//! every position in order. Because a marker's first byte is never a UTF-8
//! continuation byte, every candidate is a character boundary.

/// Forward-only cursor over a template string.
///
/// Created once per scan and discarded when exhausted. The cursor is
/// [`Copy`], enabling cheap snapshots.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// The full template.
    source: &'a str,
    /// Current read position (byte index into `source`).
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The unconsumed suffix of the source.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.pos..]
    }

    /// Returns `true` if no input remains.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Advance to the first occurrence of any of `markers`.
    ///
    /// The earliest position wins; at that position, the first-listed
    /// marker wins. On a match the cursor is left *at* the marker (the
    /// marker itself is not consumed) and the marker is returned together
    /// with the text that preceded it.
    ///
    /// Returns `None` and leaves the cursor unchanged if no marker occurs.
    /// Empty markers never match.
    pub fn consume_until_any<'m>(&mut self, markers: &[&'m str]) -> Option<(&'m str, &'a str)> {
        let rest = self.remaining();
        let (offset, marker) = find_any(rest, markers)?;
        self.pos += offset;
        Some((marker, &rest[..offset]))
    }

    /// Advance past the first occurrence of `marker`.
    ///
    /// Returns the text before the marker, with the marker appended when
    /// `include_marker` is set. The marker is always consumed once matched.
    ///
    /// An empty marker returns `""` without scanning. If the marker never
    /// occurs, returns `""` and leaves the cursor unchanged; use
    /// [`try_consume_until`](Self::try_consume_until) to tell the two apart.
    pub fn consume_until(&mut self, marker: &str, include_marker: bool) -> &'a str {
        self.try_consume_until(marker, include_marker).unwrap_or_default()
    }

    /// Like [`consume_until`](Self::consume_until), but a missing marker is
    /// reported as `None` instead of an empty string.
    pub fn try_consume_until(&mut self, marker: &str, include_marker: bool) -> Option<&'a str> {
        if marker.is_empty() {
            return Some("");
        }

        let rest = self.remaining();
        let offset = memchr::memmem::find(rest.as_bytes(), marker.as_bytes())?;
        let end = offset + marker.len();
        self.pos += end;

        if include_marker {
            Some(&rest[..end])
        } else {
            Some(&rest[..offset])
        }
    }

    /// Consume and return everything that remains.
    pub fn consume_rest(&mut self) -> &'a str {
        let rest = self.remaining();
        self.pos = self.source.len();
        rest
    }
}

/// Find the earliest position in `haystack` where one of `markers` starts.
///
/// Returns the byte offset and the marker that matched there.
fn find_any<'m>(haystack: &str, markers: &[&'m str]) -> Option<(usize, &'m str)> {
    let bytes = haystack.as_bytes();
    let marker_at = |pos: usize| {
        markers
            .iter()
            .copied()
            .find(|marker| !marker.is_empty() && bytes[pos..].starts_with(marker.as_bytes()))
            .map(|marker| (pos, marker))
    };

    let mut firsts: Vec<u8> = markers
        .iter()
        .filter_map(|marker| marker.as_bytes().first().copied())
        .collect();
    firsts.sort_unstable();
    firsts.dedup();

    match *firsts.as_slice() {
        [] => None,
        [a] => memchr::memchr_iter(a, bytes).find_map(marker_at),
        [a, b] => memchr::memchr2_iter(a, b, bytes).find_map(marker_at),
        [a, b, c] => memchr::memchr3_iter(a, b, c, bytes).find_map(marker_at),
        // memchr handles at most three needles; test every position instead.
        _ => (0..bytes.len()).find_map(marker_at),
    }
}
