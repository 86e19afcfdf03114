//! codeunits_diagnostics: Error values reported by the token scanners.
//!
//! Every failure is a [`ParseError`]: a [`ParseErrorKind`] plus the UTF-16
//! offset of the element that made the token invalid. Failures are not
//! recoverable, so there is no collection type; the first error ends a scan.

use codeunits_core::text::{TextPos, TextSpan};
use std::fmt;

/// A diagnostic message template with a stable numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosticMessage {
    /// The diagnostic code (e.g., 1004).
    pub code: u32,
    /// The message text, exactly as reported to callers.
    pub message: &'static str,
}

/// The kind of token a scanner was asked to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A `"…"` or `'…'` string literal.
    StringLiteral,
    /// A template token opened by `` ` `` or `}`.
    TemplateToken,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::StringLiteral => write!(f, "string literal"),
            TokenKind::TemplateToken => write!(f, "template token"),
        }
    }
}

/// What went wrong while scanning a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// The token does not open with a delimiter valid for its kind.
    MalformedDelimiter(TokenKind),
    /// Input ended before the closing delimiter.
    UnterminatedToken,
    /// The last character of input is a backslash.
    UnexpectedTrailingBackslash,
    /// Malformed hex digits, out-of-range code point, or a legacy octal or
    /// decimal escape where those are disallowed.
    InvalidEscapeSequence,
    /// A raw `<LF>` or `<CR>` inside a string literal.
    UnexpectedLineTermination,
    /// Content after the token's closing delimiter.
    UnexpectedCharacterPastEndOfToken,
}

impl ParseErrorKind {
    /// The message template for this kind.
    pub fn message(self) -> &'static DiagnosticMessage {
        match self {
            ParseErrorKind::MalformedDelimiter(TokenKind::StringLiteral) => {
                &messages::EXPECTED_SINGLE_OR_DOUBLE_QUOTATION_MARK
            }
            ParseErrorKind::MalformedDelimiter(TokenKind::TemplateToken) => {
                &messages::EXPECTED_BACKTICK_OR_CLOSING_BRACE
            }
            ParseErrorKind::UnterminatedToken => &messages::UNTERMINATED_TOKEN,
            ParseErrorKind::UnexpectedTrailingBackslash => &messages::UNEXPECTED_TRAILING_BACKSLASH,
            ParseErrorKind::InvalidEscapeSequence => &messages::INVALID_ESCAPE_SEQUENCE,
            ParseErrorKind::UnexpectedLineTermination => &messages::UNEXPECTED_LINE_TERMINATION,
            ParseErrorKind::UnexpectedCharacterPastEndOfToken => {
                &messages::UNEXPECTED_CHARACTER_PAST_END_OF_TOKEN
            }
        }
    }
}

/// A syntax error raised by a scanner, positioned in UTF-16 code units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{}", .kind.message().message)]
pub struct ParseError {
    /// What went wrong.
    pub kind: ParseErrorKind,
    /// Offset into the scanned token of the offending element.
    pub pos: TextPos,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, pos: TextPos) -> Self {
        Self { kind, pos }
    }

    /// The diagnostic code of this error's message.
    pub fn code(&self) -> u32 {
        self.kind.message().code
    }

    /// A one-unit span covering the offending element.
    pub fn span(&self) -> TextSpan {
        TextSpan::new(self.pos, 1)
    }
}

// ============================================================================
// Diagnostic Messages
// ============================================================================

pub mod messages {
    use super::DiagnosticMessage;

    macro_rules! diag {
        ($code:expr, $msg:expr) => {
            DiagnosticMessage { code: $code, message: $msg }
        };
    }

    pub const EXPECTED_SINGLE_OR_DOUBLE_QUOTATION_MARK: DiagnosticMessage = diag!(1001, "Expected single or double quotation mark");
    pub const EXPECTED_BACKTICK_OR_CLOSING_BRACE: DiagnosticMessage = diag!(1002, "Expected backtick or closing brace");
    pub const UNTERMINATED_TOKEN: DiagnosticMessage = diag!(1003, "Unterminated token");
    pub const UNEXPECTED_TRAILING_BACKSLASH: DiagnosticMessage = diag!(1004, "Unexpected trailing backslash");
    pub const INVALID_ESCAPE_SEQUENCE: DiagnosticMessage = diag!(1005, "Invalid escape sequence");
    pub const UNEXPECTED_LINE_TERMINATION: DiagnosticMessage = diag!(1006, "Unexpected line termination");
    pub const UNEXPECTED_CHARACTER_PAST_END_OF_TOKEN: DiagnosticMessage = diag!(1007, "Unexpected character past end of token");
}
