//! The string literal and template token scanners.
//!
//! Both scanners walk a complete token, delimiters included, and emit one
//! [`CodeUnit`] per UTF-16 unit of the token's value. Backslashes are handed
//! to the shared escape decoder; the scanners themselves only deal with
//! delimiters and raw characters.

use crate::char_codes::*;
use crate::code_unit::CodeUnit;
use crate::cursor::{to_text_pos, Cursor};
use crate::escape::{scan_escape, EscapeContext};
use crate::token::{StringLiteral, TemplateToken, TemplateTokenKind, UsedFeatures};
use codeunits_diagnostics::{ParseError, ParseErrorKind, TokenKind};
use tracing::debug;

/// Parse a string literal, including its delimiting quotes.
///
/// ```
/// use codeunits_scanner::parse_string_literal;
///
/// let literal = parse_string_literal(r#""a\x40z""#).unwrap();
/// assert_eq!(literal.cooked(), "a@z");
/// assert_eq!(literal.units[1].start, 2);
/// assert_eq!(literal.units[1].len(), 4);
/// ```
pub fn parse_string_literal(source: &str) -> Result<StringLiteral, ParseError> {
    let text: Vec<u16> = source.encode_utf16().collect();
    parse_string_literal_utf16(&text)
}

/// Parse a string literal given as UTF-16, which may contain lone surrogates.
#[tracing::instrument(level = "trace", skip_all, fields(len = source.len()))]
pub fn parse_string_literal_utf16(source: &[u16]) -> Result<StringLiteral, ParseError> {
    let result = scan_string_literal(source);
    if let Err(err) = &result {
        debug!(pos = err.pos, error = %err, "string literal rejected");
    }
    result
}

/// Parse a template token, including its delimiting `` ` ``, `${` or `}`.
///
/// ```
/// use codeunits_scanner::{parse_template_token, TemplateTokenKind};
///
/// let token = parse_template_token("}A\r\nZ${").unwrap();
/// assert_eq!(token.kind, TemplateTokenKind::TemplateMiddle);
/// assert_eq!(token.cooked(), "A\nZ");
/// ```
pub fn parse_template_token(source: &str) -> Result<TemplateToken, ParseError> {
    let text: Vec<u16> = source.encode_utf16().collect();
    parse_template_token_utf16(&text)
}

/// Parse a template token given as UTF-16, which may contain lone surrogates.
#[tracing::instrument(level = "trace", skip_all, fields(len = source.len()))]
pub fn parse_template_token_utf16(source: &[u16]) -> Result<TemplateToken, ParseError> {
    let result = scan_template_token(source);
    if let Err(err) = &result {
        debug!(pos = err.pos, error = %err, "template token rejected");
    }
    result
}

fn unterminated_token() -> ParseError {
    ParseError::new(ParseErrorKind::UnterminatedToken, 0)
}

/// Fail if anything follows the closing delimiter.
fn assert_end_of_token(cursor: &Cursor<'_>) -> Result<(), ParseError> {
    if cursor.is_eof() {
        Ok(())
    } else {
        Err(ParseError::new(
            ParseErrorKind::UnexpectedCharacterPastEndOfToken,
            cursor.text_pos(),
        ))
    }
}

/// Push a raw character as a code unit of its own.
fn push_literal(cursor: &mut Cursor<'_>, units: &mut Vec<CodeUnit>, char_code: u16, len: usize) {
    let start = cursor.pos();
    cursor.advance(len);
    units.push(CodeUnit::new(
        char_code,
        to_text_pos(start),
        cursor.slice(start, start + len),
        None,
    ));
}

fn scan_string_literal(source: &[u16]) -> Result<StringLiteral, ParseError> {
    let mut cursor = Cursor::new(source);
    let quote = match cursor.current() {
        Some(quote @ (DOUBLE_QUOTE | SINGLE_QUOTE)) => quote,
        _ => {
            return Err(ParseError::new(
                ParseErrorKind::MalformedDelimiter(TokenKind::StringLiteral),
                0,
            ))
        }
    };
    cursor.advance(1);

    let mut units = Vec::new();
    let mut used_features = UsedFeatures::empty();
    loop {
        let Some(ch) = cursor.current() else {
            return Err(unterminated_token());
        };
        match ch {
            _ if ch == quote => {
                cursor.advance(1);
                assert_end_of_token(&cursor)?;
                break;
            }
            BACKSLASH => scan_escape(
                &mut cursor,
                EscapeContext::STRING,
                &mut used_features,
                &mut units,
            )?,
            LINE_FEED | CARRIAGE_RETURN => {
                return Err(ParseError::new(
                    ParseErrorKind::UnexpectedLineTermination,
                    cursor.text_pos(),
                ));
            }
            _ => {
                if ch == LINE_SEPARATOR || ch == PARAGRAPH_SEPARATOR {
                    used_features.insert(UsedFeatures::LINE_TERMINATOR);
                }
                push_literal(&mut cursor, &mut units, ch, 1);
            }
        }
    }

    Ok(StringLiteral {
        quote,
        units,
        used_features,
    })
}

fn scan_template_token(source: &[u16]) -> Result<TemplateToken, ParseError> {
    let mut cursor = Cursor::new(source);
    let opening = match cursor.current() {
        Some(opening @ (BACKTICK | CLOSE_BRACE)) => opening,
        _ => {
            return Err(ParseError::new(
                ParseErrorKind::MalformedDelimiter(TokenKind::TemplateToken),
                0,
            ))
        }
    };
    cursor.advance(1);

    let mut units = Vec::new();
    // Templates have no strict-mode ambiguity to report.
    let mut ignored_features = UsedFeatures::empty();
    let kind = loop {
        let Some(ch) = cursor.current() else {
            return Err(unterminated_token());
        };
        match ch {
            BACKTICK => {
                cursor.advance(1);
                assert_end_of_token(&cursor)?;
                break if opening == BACKTICK {
                    TemplateTokenKind::NoSubstitutionTemplate
                } else {
                    TemplateTokenKind::TemplateTail
                };
            }
            DOLLAR_SIGN if cursor.char_at(1) == Some(OPEN_BRACE) => {
                cursor.advance(2);
                assert_end_of_token(&cursor)?;
                break if opening == BACKTICK {
                    TemplateTokenKind::TemplateHead
                } else {
                    TemplateTokenKind::TemplateMiddle
                };
            }
            BACKSLASH => scan_escape(
                &mut cursor,
                EscapeContext::TEMPLATE,
                &mut ignored_features,
                &mut units,
            )?,
            CARRIAGE_RETURN if cursor.char_at(1) == Some(LINE_FEED) => {
                push_literal(&mut cursor, &mut units, LINE_FEED, 2);
            }
            _ => push_literal(&mut cursor, &mut units, ch, 1),
        }
    };

    Ok(TemplateToken { kind, units })
}
