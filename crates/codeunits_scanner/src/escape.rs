//! Escape sequence decoding shared by both token scanners.
//!
//! Decoding starts just after the backslash and consumes exactly one escape
//! construct: a simple escape, `\x` and `\u` hex escapes, `\u{…}` code point
//! escapes, legacy octal and `\8`/`\9` escapes, or a line continuation.
//! Anything else is an identity escape.
//!
//! The scanners differ only in whether legacy octal and decimal escapes are
//! allowed, which they pass in as an [`EscapeContext`].

use crate::char_codes::*;
use crate::code_unit::{push_decoded, CodeUnit};
use crate::cursor::{to_text_pos, Cursor};
use crate::token::UsedFeatures;
use codeunits_diagnostics::{ParseError, ParseErrorKind};
use tracing::trace;

/// Which escape forms a scan accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EscapeContext {
    /// Accept `\1`-`\7`, `\0` followed by a digit, `\8` and `\9`.
    pub allow_octal: bool,
}

impl EscapeContext {
    /// String literals accept legacy escapes.
    pub const STRING: EscapeContext = EscapeContext { allow_octal: true };
    /// Template tokens reject them.
    pub const TEMPLATE: EscapeContext = EscapeContext { allow_octal: false };
}

/// The value of one escape construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Decoded {
    /// A line continuation.
    Empty,
    Unit(u16),
    /// High and low surrogate of a supplementary code point.
    Pair(u16, u16),
}

#[inline]
fn invalid_escape(pos: usize) -> ParseError {
    ParseError::new(ParseErrorKind::InvalidEscapeSequence, to_text_pos(pos))
}

/// Scan the escape whose backslash is at the cursor, appending its units.
pub(crate) fn scan_escape(
    cursor: &mut Cursor<'_>,
    context: EscapeContext,
    features: &mut UsedFeatures,
    units: &mut Vec<CodeUnit>,
) -> Result<(), ParseError> {
    let start = cursor.pos();
    cursor.advance(1);
    let decoded = decode_escape(cursor, context, features)?;
    push_decoded(units, decoded, start, cursor.slice(start, cursor.pos()));
    Ok(())
}

/// Decode one escape. The cursor must be positioned after the backslash.
pub(crate) fn decode_escape(
    cursor: &mut Cursor<'_>,
    context: EscapeContext,
    features: &mut UsedFeatures,
) -> Result<Decoded, ParseError> {
    let pos = cursor.pos();
    let Some(ch) = cursor.current() else {
        return Err(ParseError::new(
            ParseErrorKind::UnexpectedTrailingBackslash,
            to_text_pos(pos - 1),
        ));
    };
    cursor.advance(1);
    trace!(pos, ch, "escape");

    let decoded = match ch {
        B_LOWER => Decoded::Unit(BACKSPACE),
        F_LOWER => Decoded::Unit(FORM_FEED),
        N_LOWER => Decoded::Unit(LINE_FEED),
        R_LOWER => Decoded::Unit(CARRIAGE_RETURN),
        T_LOWER => Decoded::Unit(TAB),
        V_LOWER => Decoded::Unit(VERTICAL_TAB),
        X_LOWER => Decoded::Unit(read_hex_sequence(cursor, 2)?),
        U_LOWER => read_unicode_escape(cursor, features)?,
        _ if is_line_break(ch) => {
            // <CR><LF> continues as a single line break.
            if ch == CARRIAGE_RETURN && cursor.current() == Some(LINE_FEED) {
                cursor.advance(1);
            }
            Decoded::Empty
        }
        _0 if !cursor.current().is_some_and(is_digit) => Decoded::Unit(NULL_CHARACTER),
        _0..=_3 => read_octal_sequence(cursor, context, features, 3)?,
        _4..=_7 => read_octal_sequence(cursor, context, features, 2)?,
        _8 | _9 => {
            if !context.allow_octal {
                return Err(invalid_escape(pos));
            }
            features.insert(UsedFeatures::OCTAL_ESCAPE);
            Decoded::Unit(ch)
        }
        _ => Decoded::Unit(ch),
    };
    Ok(decoded)
}

/// Read exactly `length` hex digits. The cursor must be on the first digit,
/// just after the introducing `x` or `u`.
fn read_hex_sequence(cursor: &mut Cursor<'_>, length: usize) -> Result<u16, ParseError> {
    let intro = cursor.pos() - 1;
    let digits = cursor.rest().get(..length).ok_or_else(|| invalid_escape(intro))?;
    let mut value = 0u16;
    for &digit in digits {
        let digit = hex_digit_value(digit).ok_or_else(|| invalid_escape(intro))?;
        value = (value << 4) | digit;
    }
    cursor.advance(length);
    Ok(value)
}

/// Read a `\u` escape. The cursor must be just after the `u`.
///
/// A well-formed `{hex+}` is a code point escape; anything else is read as
/// the four-digit form.
fn read_unicode_escape(
    cursor: &mut Cursor<'_>,
    features: &mut UsedFeatures,
) -> Result<Decoded, ParseError> {
    let intro = cursor.pos() - 1;
    let Some((code_point, consumed)) = match_braced_code_point(cursor.rest()) else {
        return Ok(Decoded::Unit(read_hex_sequence(cursor, 4)?));
    };
    if code_point > MAX_CODE_POINT {
        return Err(invalid_escape(intro));
    }
    cursor.advance(consumed);
    features.insert(UsedFeatures::CODE_POINT_ESCAPE);
    Ok(split_code_point(code_point))
}

/// Match `{hex+}` at the start of `rest`, returning the (saturated) value and
/// the number of units matched.
fn match_braced_code_point(rest: &[u16]) -> Option<(u32, usize)> {
    if rest.first() != Some(&OPEN_BRACE) {
        return None;
    }
    let mut value = 0u32;
    let mut len = 1;
    while let Some(digit) = rest.get(len).copied().and_then(hex_digit_value) {
        value = value.saturating_mul(16).saturating_add(u32::from(digit));
        len += 1;
    }
    if len == 1 || rest.get(len) != Some(&CLOSE_BRACE) {
        return None;
    }
    Some((value, len + 1))
}

#[allow(clippy::cast_possible_truncation)]
fn split_code_point(code_point: u32) -> Decoded {
    if code_point <= 0xFFFF {
        return Decoded::Unit(code_point as u16);
    }
    let offset = code_point - 0x1_0000;
    let high = 0xD800 + (offset >> 10) as u16;
    let low = 0xDC00 + (offset & 0x3FF) as u16;
    Decoded::Pair(high, low)
}

/// Read an octal escape of at most `max_len` digits, counting the first
/// digit, which the cursor has just passed.
fn read_octal_sequence(
    cursor: &mut Cursor<'_>,
    context: EscapeContext,
    features: &mut UsedFeatures,
    max_len: usize,
) -> Result<Decoded, ParseError> {
    let first = cursor.pos() - 1;
    features.insert(UsedFeatures::OCTAL_ESCAPE);
    if !context.allow_octal {
        return Err(invalid_escape(first));
    }
    let end = (first + max_len).min(first + 1 + cursor.rest().len());
    let digits = cursor.slice(first, end);
    let len = digits.iter().take_while(|&&d| is_octal_digit(d)).count();
    let value = digits[..len].iter().fold(0u16, |acc, &d| acc * 8 + (d - _0));
    cursor.advance(len - 1);
    Ok(Decoded::Unit(value))
}
