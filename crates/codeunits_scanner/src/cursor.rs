//! Read position over a UTF-16 token.

use codeunits_core::TextPos;

/// A position within an immutable UTF-16 source.
///
/// Performs no validation of its own; the scanners and the escape decoder
/// decide how far to move it.
pub(crate) struct Cursor<'a> {
    text: &'a [u16],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(text: &'a [u16]) -> Self {
        Self { text, pos: 0 }
    }

    /// Current position.
    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// Current position as a text offset.
    #[inline]
    pub(crate) fn text_pos(&self) -> TextPos {
        to_text_pos(self.pos)
    }

    /// Look at the unit at the current position without advancing.
    #[inline]
    pub(crate) fn current(&self) -> Option<u16> {
        self.text.get(self.pos).copied()
    }

    /// Look at the unit at `pos + offset`.
    #[inline]
    pub(crate) fn char_at(&self, offset: usize) -> Option<u16> {
        self.text.get(self.pos + offset).copied()
    }

    #[inline]
    pub(crate) fn advance(&mut self, count: usize) {
        self.pos += count;
    }

    /// Whether we've reached the end of the text.
    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// The source units in `start..end`.
    #[inline]
    pub(crate) fn slice(&self, start: usize, end: usize) -> &'a [u16] {
        &self.text[start..end]
    }

    /// The source units from the current position to the end.
    #[inline]
    pub(crate) fn rest(&self) -> &'a [u16] {
        &self.text[self.pos.min(self.text.len())..]
    }
}

/// Narrow a buffer index to a text offset.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn to_text_pos(pos: usize) -> TextPos {
    pos as TextPos
}
