//! Property tests for provenance and surrogate pairing.

use codeunits_scanner::{
    parse_string_literal, parse_string_literal_utf16, parse_template_token,
    parse_template_token_utf16, CodeUnit, Surrogate,
};
use proptest::prelude::*;

/// Complete string literal body fragments. Line continuations are left out
/// since they drop their source from the output.
fn string_fragment() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("a"),
        Just("Z"),
        Just("0"),
        Just("8"),
        Just(" "),
        Just("'"),
        Just("⌛"),
        Just("\u{1D11E}"),
        Just("\u{2028}"),
        Just("\u{2029}"),
        Just(r"\n"),
        Just(r"\v"),
        Just(r#"\""#),
        Just(r"\\"),
        Just(r"\q"),
        Just(r"\x41"),
        Just(r"\u00e9"),
        Just(r"\uD834"),
        Just(r"\u{41}"),
        Just(r"\u{1F600}"),
        Just(r"\u{10FFFF}"),
        Just(r"\0"),
        Just(r"\12"),
        Just(r"\377"),
        Just(r"\5"),
        Just(r"\8"),
        Just(r"\9"),
    ]
}

/// Complete template body fragments; no `$`, `{` or octal escapes.
fn template_fragment() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("a"),
        Just("Z"),
        Just("}"),
        Just("\""),
        Just("⌛"),
        Just("\u{1D11E}"),
        Just("\n"),
        Just("\r"),
        Just("\r\n"),
        Just("\u{2028}"),
        Just(r"\n"),
        Just(r"\`"),
        Just(r"\$"),
        Just(r"\x7e"),
        Just(r"\uFFFF"),
        Just(r"\u{1F600}"),
        Just(r"\0"),
    ]
}

fn joined_sources(units: &[CodeUnit]) -> String {
    let mut source = Vec::new();
    let mut last_start = None;
    for unit in units {
        // Both halves of a pair share one source.
        if unit.surrogate == Some(Surrogate::Low) && last_start == Some(unit.start) {
            continue;
        }
        source.extend_from_slice(&unit.source);
        last_start = Some(unit.start);
    }
    String::from_utf16(&source).unwrap_or_default()
}

fn assert_pairs_well_formed(units: &[CodeUnit]) -> Result<(), TestCaseError> {
    for (index, unit) in units.iter().enumerate() {
        match unit.surrogate {
            Some(Surrogate::High) => {
                let low = &units[index + 1];
                prop_assert_eq!(low.surrogate, Some(Surrogate::Low));
                prop_assert_eq!(low.start, unit.start);
                prop_assert_eq!(&low.source, &unit.source);
                prop_assert!((0xD800..=0xDBFF).contains(&unit.char_code));
                prop_assert!((0xDC00..=0xDFFF).contains(&low.char_code));
            }
            Some(Surrogate::Low) => {
                prop_assert!(index > 0);
                prop_assert_eq!(units[index - 1].surrogate, Some(Surrogate::High));
            }
            None => {}
        }
    }
    Ok(())
}

fn assert_contiguous(units: &[CodeUnit]) -> Result<(), TestCaseError> {
    for window in units.windows(2) {
        let (prev, next) = (&window[0], &window[1]);
        if next.surrogate == Some(Surrogate::Low) {
            prop_assert_eq!(next.start, prev.start);
        } else {
            prop_assert_eq!(next.start, prev.end());
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn string_sources_reconstruct_input(
        fragments in proptest::collection::vec(string_fragment(), 0..24),
    ) {
        let body = fragments.concat();
        let literal = parse_string_literal(&format!("\"{body}\"")).unwrap();
        prop_assert_eq!(joined_sources(&literal.units), body);
        assert_pairs_well_formed(&literal.units)?;
        assert_contiguous(&literal.units)?;
    }

    #[test]
    fn template_sources_reconstruct_input(
        fragments in proptest::collection::vec(template_fragment(), 0..24),
        opening in prop_oneof![Just("`"), Just("}")],
        closing in prop_oneof![Just("`"), Just("${")],
    ) {
        let body = fragments.concat();
        let token = parse_template_token(&format!("{opening}{body}{closing}")).unwrap();
        prop_assert_eq!(joined_sources(&token.units), body);
        assert_pairs_well_formed(&token.units)?;
        assert_contiguous(&token.units)?;
    }

    #[test]
    fn code_point_escape_decodes_to_the_code_point(ch in any::<char>()) {
        let source = format!("\"\\u{{{:x}}}\"", u32::from(ch));
        let literal = parse_string_literal(&source).unwrap();
        prop_assert_eq!(literal.cooked(), ch.to_string());
        prop_assert_eq!(literal.units.len(), ch.len_utf16());
        prop_assert!(literal.used_features.code_point_escape());
        assert_pairs_well_formed(&literal.units)?;
    }

    #[test]
    fn arbitrary_input_never_panics(text in proptest::collection::vec(any::<u16>(), 0..64)) {
        let _ = parse_string_literal_utf16(&text);
        let _ = parse_template_token_utf16(&text);
    }

    #[test]
    fn error_positions_stay_in_bounds(text in "[\"'`}][a-z\\\\0-9xu{}$\"'`\r\n]{0,16}") {
        let len = text.encode_utf16().count();
        if let Err(err) = parse_string_literal(&text) {
            prop_assert!((err.pos as usize) < len.max(1));
        }
        if let Err(err) = parse_template_token(&text) {
            prop_assert!((err.pos as usize) < len.max(1));
        }
    }
}
