//! UTF-16 code unit constants used by the scanners.

pub const NULL_CHARACTER: u16 = 0x00;
pub const BACKSPACE: u16 = 0x08;
pub const TAB: u16 = 0x09;
pub const LINE_FEED: u16 = 0x0A;
pub const VERTICAL_TAB: u16 = 0x0B;
pub const FORM_FEED: u16 = 0x0C;
pub const CARRIAGE_RETURN: u16 = 0x0D;
pub const LINE_SEPARATOR: u16 = 0x2028;
pub const PARAGRAPH_SEPARATOR: u16 = 0x2029;

pub const DOUBLE_QUOTE: u16 = b'"' as u16;
pub const DOLLAR_SIGN: u16 = b'$' as u16;
pub const SINGLE_QUOTE: u16 = b'\'' as u16;
pub const _0: u16 = b'0' as u16;
pub const _3: u16 = b'3' as u16;
pub const _4: u16 = b'4' as u16;
pub const _7: u16 = b'7' as u16;
pub const _8: u16 = b'8' as u16;
pub const _9: u16 = b'9' as u16;
pub const BACKSLASH: u16 = b'\\' as u16;
pub const BACKTICK: u16 = b'`' as u16;

pub const B_LOWER: u16 = b'b' as u16;
pub const F_LOWER: u16 = b'f' as u16;
pub const N_LOWER: u16 = b'n' as u16;
pub const R_LOWER: u16 = b'r' as u16;
pub const T_LOWER: u16 = b't' as u16;
pub const U_LOWER: u16 = b'u' as u16;
pub const V_LOWER: u16 = b'v' as u16;
pub const X_LOWER: u16 = b'x' as u16;

pub const OPEN_BRACE: u16 = b'{' as u16;
pub const CLOSE_BRACE: u16 = b'}' as u16;

/// Highest Unicode code point.
pub const MAX_CODE_POINT: u32 = 0x10FFFF;

/// Check if a code unit is a line terminator.
#[inline]
pub fn is_line_break(ch: u16) -> bool {
    ch == LINE_FEED
        || ch == CARRIAGE_RETURN
        || ch == LINE_SEPARATOR
        || ch == PARAGRAPH_SEPARATOR
}

/// Check if a code unit is a decimal digit.
#[inline]
pub fn is_digit(ch: u16) -> bool {
    (_0..=_9).contains(&ch)
}

/// Check if a code unit is an octal digit (0-7).
#[inline]
pub fn is_octal_digit(ch: u16) -> bool {
    (_0..=_7).contains(&ch)
}

/// The value of an ASCII hex digit, if `ch` is one.
#[inline]
pub fn hex_digit_value(ch: u16) -> Option<u16> {
    match ch {
        0x30..=0x39 => Some(ch - 0x30),
        0x41..=0x46 => Some(ch - 0x41 + 10),
        0x61..=0x66 => Some(ch - 0x61 + 10),
        _ => None,
    }
}
