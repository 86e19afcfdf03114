//! Table and JSON rendering of decoded tokens.

use crate::Format;
use codeunits_scanner::{
    CodeUnit, StringLiteral, TemplateToken, TemplateTokenKind, UsedFeatures,
};
use serde::Serialize;
use std::fmt::Write;

/// A code unit as exposed in JSON output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CodeUnitRecord {
    char: String,
    char_code: u16,
    start: u32,
    end: u32,
    length: u32,
    source: String,
    surrogate: Option<String>,
}

impl From<&CodeUnit> for CodeUnitRecord {
    fn from(unit: &CodeUnit) -> Self {
        Self {
            char: String::from_utf16_lossy(&[unit.char_code]),
            char_code: unit.char_code,
            start: unit.start,
            end: unit.end(),
            length: unit.len(),
            source: unit.source_lossy(),
            surrogate: unit.surrogate.map(|s| s.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UsedFeaturesRecord {
    code_point_escape: bool,
    line_terminator: bool,
    octal_escape: bool,
}

impl From<UsedFeatures> for UsedFeaturesRecord {
    fn from(features: UsedFeatures) -> Self {
        Self {
            code_point_escape: features.code_point_escape(),
            line_terminator: features.line_terminator(),
            octal_escape: features.octal_escape(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StringLiteralRecord {
    code_units: Vec<CodeUnitRecord>,
    used_features: UsedFeaturesRecord,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TemplateTokenRecord {
    kind: &'static str,
    code_units: Vec<CodeUnitRecord>,
}

fn kind_name(kind: TemplateTokenKind) -> &'static str {
    match kind {
        TemplateTokenKind::NoSubstitutionTemplate => "noSubstitutionTemplate",
        TemplateTokenKind::TemplateHead => "templateHead",
        TemplateTokenKind::TemplateMiddle => "templateMiddle",
        TemplateTokenKind::TemplateTail => "templateTail",
    }
}

pub(crate) fn string_literal(
    literal: &StringLiteral,
    format: Format,
) -> serde_json::Result<String> {
    match format {
        Format::Json => serde_json::to_string_pretty(&StringLiteralRecord {
            code_units: literal.units.iter().map(CodeUnitRecord::from).collect(),
            used_features: literal.used_features.into(),
        }),
        Format::Table => {
            let mut out = table(&literal.units);
            let features = literal.used_features;
            let _ = write!(
                out,
                "\ncodePointEscape: {}, lineTerminator: {}, octalEscape: {}",
                features.code_point_escape(),
                features.line_terminator(),
                features.octal_escape()
            );
            Ok(out)
        }
    }
}

pub(crate) fn template_token(token: &TemplateToken, format: Format) -> serde_json::Result<String> {
    match format {
        Format::Json => serde_json::to_string_pretty(&TemplateTokenRecord {
            kind: kind_name(token.kind),
            code_units: token.units.iter().map(CodeUnitRecord::from).collect(),
        }),
        Format::Table => {
            let mut out = table(&token.units);
            let _ = write!(out, "\nkind: {}", kind_name(token.kind));
            Ok(out)
        }
    }
}

fn table(units: &[CodeUnit]) -> String {
    let mut out = String::from("START  END    CODE    CHAR      SOURCE          SURROGATE");
    for unit in units {
        let shown = match unit.as_char() {
            Some(ch) => format!("{:?}", ch),
            None => "-".to_string(),
        };
        let source = format!("{:?}", unit.source_lossy());
        let surrogate = unit.surrogate.map(|s| s.to_string()).unwrap_or_default();
        let _ = write!(
            out,
            "\n{:<6} {:<6} {:#06x}  {:<9} {:<15} {}",
            unit.start,
            unit.end(),
            unit.char_code,
            shown,
            source,
            surrogate
        );
    }
    out.trim_end().to_string()
}
