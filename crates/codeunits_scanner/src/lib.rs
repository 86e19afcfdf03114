//! codeunits_scanner: Provenance-preserving decoder for JavaScript string
//! literals and template tokens.
//!
//! Decodes the body of a token into UTF-16 code units, each carrying the exact
//! source slice that produced it:
//! - Simple, hex, `\u`, `\u{…}` and legacy octal escapes
//! - Line continuations, which produce no units
//! - Surrogate pairs from supplementary code point escapes, tagged high/low
//! - Feature reporting for strict-mode-sensitive string literal syntax
//!
//! All offsets are UTF-16 offsets into the token passed in.

mod char_codes;
mod code_unit;
mod cursor;
mod escape;
mod scanner;
mod token;

pub use code_unit::{CodeUnit, Surrogate};
pub use codeunits_diagnostics::{ParseError, ParseErrorKind, TokenKind};
pub use escape::EscapeContext;
pub use scanner::{
    parse_string_literal, parse_string_literal_utf16, parse_template_token,
    parse_template_token_utf16,
};
pub use token::{StringLiteral, TemplateToken, TemplateTokenKind, UsedFeatures};
