//! Results produced by the token scanners.

use crate::code_unit::CodeUnit;

bitflags::bitflags! {
    /// Legacy or context-sensitive features used by a string literal.
    ///
    /// These are reported, never enforced: strict-mode and template rules
    /// that forbid them live with the consumer.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct UsedFeatures: u8 {
        /// A `\u{…}` escape was used.
        const CODE_POINT_ESCAPE = 1 << 0;
        /// An unescaped U+2028 or U+2029 appeared in the body.
        const LINE_TERMINATOR   = 1 << 1;
        /// An octal escape, or a `\8` / `\9` escape, was used.
        const OCTAL_ESCAPE      = 1 << 2;
    }
}

impl UsedFeatures {
    #[inline]
    pub fn code_point_escape(self) -> bool {
        self.contains(UsedFeatures::CODE_POINT_ESCAPE)
    }

    #[inline]
    pub fn line_terminator(self) -> bool {
        self.contains(UsedFeatures::LINE_TERMINATOR)
    }

    #[inline]
    pub fn octal_escape(self) -> bool {
        self.contains(UsedFeatures::OCTAL_ESCAPE)
    }
}

/// A decoded string literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral {
    /// The opening (and closing) quote, `"` or `'`.
    pub quote: u16,
    /// The code units of the literal's value, in source order.
    pub units: Vec<CodeUnit>,
    pub used_features: UsedFeatures,
}

impl StringLiteral {
    pub fn code_units(&self) -> &[CodeUnit] {
        &self.units
    }

    pub fn into_code_units(self) -> Vec<CodeUnit> {
        self.units
    }

    /// The literal's value, with lone surrogates replaced by U+FFFD.
    pub fn cooked(&self) -> String {
        cooked_value(&self.units)
    }
}

/// The position of a template token within its template literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateTokenKind {
    /// `` `…` ``
    NoSubstitutionTemplate,
    /// `` `…${ ``
    TemplateHead,
    /// `}…${`
    TemplateMiddle,
    /// `` }…` ``
    TemplateTail,
}

impl TemplateTokenKind {
    /// Whether the token is followed by an interpolation.
    pub fn opens_substitution(self) -> bool {
        matches!(self, TemplateTokenKind::TemplateHead | TemplateTokenKind::TemplateMiddle)
    }
}

/// A decoded template token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateToken {
    pub kind: TemplateTokenKind,
    /// The code units of the token's cooked value, in source order.
    pub units: Vec<CodeUnit>,
}

impl TemplateToken {
    pub fn code_units(&self) -> &[CodeUnit] {
        &self.units
    }

    pub fn into_code_units(self) -> Vec<CodeUnit> {
        self.units
    }

    /// The token's cooked value, with lone surrogates replaced by U+FFFD.
    pub fn cooked(&self) -> String {
        cooked_value(&self.units)
    }
}

fn cooked_value(units: &[CodeUnit]) -> String {
    let codes: Vec<u16> = units.iter().map(|unit| unit.char_code).collect();
    String::from_utf16_lossy(&codes)
}
