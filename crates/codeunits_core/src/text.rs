//! Text positions and spans for provenance tracking.
//!
//! Every code unit produced by the scanner points back at the slice of the
//! token it was decoded from. These types describe such slices.

use std::ops::Range;

/// A position in source text, measured in UTF-16 code units from the start.
pub type TextPos = u32;

/// A span in source text, defined by a start position and a length.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct TextSpan {
    /// The UTF-16 offset where this span starts.
    pub start: TextPos,
    /// The length of this span in UTF-16 code units.
    pub length: TextPos,
}

impl TextSpan {
    /// Create a new text span.
    #[inline]
    pub fn new(start: TextPos, length: TextPos) -> Self {
        Self { start, length }
    }

    /// The end position of this span (exclusive).
    #[inline]
    pub fn end(&self) -> TextPos {
        self.start + self.length
    }
}

/// Convert a UTF-16 offset into `text` to the matching UTF-8 byte offset.
///
/// An offset that lands between the two halves of a surrogate pair resolves
/// to the start of that character. Offsets past the end clamp to `text.len()`.
pub fn utf16_to_utf8_offset(text: &str, pos: TextPos) -> usize {
    let mut utf16 = 0u32;
    for (byte, ch) in text.char_indices() {
        let next = utf16 + ch.len_utf16() as u32;
        if next > pos {
            return byte;
        }
        utf16 = next;
    }
    text.len()
}

/// Like [`utf16_to_utf8_offset`], but an offset inside a surrogate pair
/// resolves to the end of that character.
fn utf16_to_utf8_offset_ceil(text: &str, pos: TextPos) -> usize {
    let mut utf16 = 0u32;
    for (byte, ch) in text.char_indices() {
        if utf16 >= pos {
            return byte;
        }
        utf16 += ch.len_utf16() as u32;
    }
    text.len()
}

/// Convert a UTF-16 span over `text` to a UTF-8 byte range.
///
/// The range covers every character the span touches, so a one-unit span
/// over half of a surrogate pair maps to the whole character.
pub fn utf16_span_to_utf8_range(text: &str, span: TextSpan) -> Range<usize> {
    let start = utf16_to_utf8_offset(text, span.start);
    let end = utf16_to_utf8_offset_ceil(text, span.end());
    start..end.max(start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_span() {
        let span = TextSpan::new(5, 10);
        assert_eq!(span.start, 5);
        assert_eq!(span.length, 10);
        assert_eq!(span.end(), 15);
    }

    #[test]
    fn test_utf16_to_utf8_ascii() {
        assert_eq!(utf16_to_utf8_offset("abc", 0), 0);
        assert_eq!(utf16_to_utf8_offset("abc", 2), 2);
        assert_eq!(utf16_to_utf8_offset("abc", 9), 3);
        assert_eq!(utf16_span_to_utf8_range("abc", TextSpan::new(1, 1)), 1..2);
    }

    #[test]
    fn test_utf16_to_utf8_wide_chars() {
        // '⌛' is one UTF-16 unit and three bytes, '𝄞' two units and four bytes.
        let text = "a⌛𝄞z";
        assert_eq!(utf16_to_utf8_offset(text, 1), 1);
        assert_eq!(utf16_to_utf8_offset(text, 2), 4);
        assert_eq!(utf16_to_utf8_offset(text, 3), 4);
        assert_eq!(utf16_to_utf8_offset(text, 4), 8);
        assert_eq!(utf16_span_to_utf8_range(text, TextSpan::new(2, 2)), 4..8);
    }

    #[test]
    fn test_utf16_span_over_half_a_pair() {
        let text = "\"\"\u{1F600}";
        assert_eq!(utf16_span_to_utf8_range(text, TextSpan::new(2, 1)), 2..6);
        assert_eq!(utf16_span_to_utf8_range(text, TextSpan::new(3, 1)), 2..6);
        assert_eq!(utf16_span_to_utf8_range(text, TextSpan::new(4, 1)), 6..6);
    }
}
