//! The code unit record produced by the scanners.

use crate::cursor::to_text_pos;
use crate::escape::Decoded;
use codeunits_core::{TextPos, TextSpan};
use std::fmt;

/// Which half of a surrogate pair a code unit is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surrogate {
    High,
    Low,
}

impl fmt::Display for Surrogate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Surrogate::High => write!(f, "high"),
            Surrogate::Low => write!(f, "low"),
        }
    }
}

/// One UTF-16 code unit of a token's value, with the source it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CodeUnit {
    /// The emitted UTF-16 code unit.
    pub char_code: u16,
    /// Offset of the producing construct: the literal character, or the
    /// backslash of an escape.
    pub start: TextPos,
    /// The exact source units that produced this code unit.
    pub source: Vec<u16>,
    /// Set only on the halves of a supplementary code point decoded from a
    /// single escape.
    pub surrogate: Option<Surrogate>,
}

impl CodeUnit {
    pub fn new(
        char_code: u16,
        start: TextPos,
        source: &[u16],
        surrogate: Option<Surrogate>,
    ) -> Self {
        Self {
            char_code,
            start,
            source: source.to_vec(),
            surrogate,
        }
    }

    /// Number of source units consumed to produce this unit.
    #[inline]
    pub fn len(&self) -> TextPos {
        to_text_pos(self.source.len())
    }

    /// Always false for units produced by the scanners.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Offset just past the producing construct.
    #[inline]
    pub fn end(&self) -> TextPos {
        self.start + self.len()
    }

    #[inline]
    pub fn span(&self) -> TextSpan {
        TextSpan::new(self.start, self.len())
    }

    /// The unit as a `char`, or `None` when it is a surrogate.
    pub fn as_char(&self) -> Option<char> {
        char::from_u32(u32::from(self.char_code))
    }

    /// The producing source, with lone surrogates replaced by U+FFFD.
    pub fn source_lossy(&self) -> String {
        String::from_utf16_lossy(&self.source)
    }
}

/// Append the units for one decoded construct.
///
/// A pair shares `start` and `source` and is tagged high then low.
pub(crate) fn push_decoded(
    units: &mut Vec<CodeUnit>,
    decoded: Decoded,
    start: usize,
    source: &[u16],
) {
    let start = to_text_pos(start);
    match decoded {
        Decoded::Empty => {}
        Decoded::Unit(ch) => units.push(CodeUnit::new(ch, start, source, None)),
        Decoded::Pair(high, low) => {
            units.push(CodeUnit::new(high, start, source, Some(Surrogate::High)));
            units.push(CodeUnit::new(low, start, source, Some(Surrogate::Low)));
        }
    }
}
