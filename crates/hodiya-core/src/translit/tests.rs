use proptest::prelude::*;

use super::*;
use crate::mapping::{CollisionKind, MappingEntry, MappingTable};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

#[test]
fn test_direction_parse() {
    assert_eq!("toRoman".parse::<Direction>(), Ok(Direction::ToRoman));
    assert_eq!("to-roman".parse::<Direction>(), Ok(Direction::ToRoman));
    assert_eq!("toScript".parse::<Direction>(), Ok(Direction::ToScript));
    assert_eq!("to-script".parse::<Direction>(), Ok(Direction::ToScript));
    for bad in ["", "roman", "TOROMAN", "toEnglish", " toRoman"] {
        assert_eq!(
            bad.parse::<Direction>(),
            Err(TranslitError::InvalidDirection(bad.to_string()))
        );
    }
}

#[test]
fn test_direction_display_roundtrip() {
    for d in [Direction::ToRoman, Direction::ToScript] {
        assert_eq!(d.to_string().parse::<Direction>(), Ok(d));
        assert_eq!(d.reversed().reversed(), d);
    }
}

#[test]
fn test_transliterate_dispatch() {
    assert_eq!(transliterate("ලංකා", "toRoman").unwrap(), "laxkaa");
    assert_eq!(transliterate("laxkaa", "toScript").unwrap(), "ලංකා");
    assert_eq!(
        transliterate("ලංකා", "sideways"),
        Err(TranslitError::InvalidDirection("sideways".into()))
    );
}

#[test]
fn test_invalid_direction_message() {
    let err = transliterate("x", "up").unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid direction \"up\": expected \"toRoman\" or \"toScript\""
    );
}

#[test]
fn test_suggest_direction() {
    assert_eq!(suggest_direction("මම"), Direction::ToRoman);
    assert_eq!(suggest_direction("mama ලංකා"), Direction::ToRoman);
    assert_eq!(suggest_direction("mama"), Direction::ToScript);
    assert_eq!(suggest_direction(""), Direction::ToScript);
}

// ---------------------------------------------------------------------------
// Table atoms
// ---------------------------------------------------------------------------

#[test]
fn test_default_entries_roundtrip() {
    let table = MappingTable::global();
    for entry in table.entries() {
        assert_eq!(
            script_to_roman(table, &entry.script),
            entry.roman,
            "forward mismatch for {:?}",
            entry.script
        );
        if !entry.roman.is_empty() {
            assert_eq!(
                roman_to_script(table, &entry.roman),
                entry.script,
                "reverse mismatch for {:?}",
                entry.roman
            );
        }
    }
}

#[test]
fn test_fixture_scenario_roundtrip() {
    let table = MappingTable::from_entries([
        MappingEntry::new("ක", "k"),
        MappingEntry::new("කා", "kaa"),
        MappingEntry::new("්", ""),
        MappingEntry::new("ත", "th"),
    ]);
    let roman = script_to_roman(&table, "කාත");
    assert_eq!(roman, "kaath");
    assert_eq!(roman_to_script(&table, &roman), "කාත");
}

#[test]
fn test_collision_is_not_invertible() {
    let table = MappingTable::from_entries([
        MappingEntry::new("ක", "ka"),
        MappingEntry::new("ඛ", "ka"),
    ]);
    assert_eq!(table.collisions()[0].kind, CollisionKind::Roman);

    let roman = script_to_roman(&table, "ඛ");
    assert_eq!(roman, "ka");
    let script = roman_to_script(&table, &roman);
    // Well-defined, but the first entry wins over the script that was romanized.
    assert_eq!(script, "ක");
    assert_ne!(script, "ඛ");
    assert_eq!(script_to_roman(&table, &script), roman);
}

#[test]
fn test_unused_latin_letters_pass_through() {
    let table = MappingTable::global();
    assert_eq!(roman_to_script(table, "qzcvQZ"), "qzcvQZ");
    assert_eq!(roman_to_script(table, "zaa"), "zආ");
    assert_eq!(roman_to_script(table, "vowel"), "vඔවෙල්");
}

#[test]
fn test_default_table_free_text_not_invertible() {
    let table = MappingTable::global();
    // Consonant + ෛ and consonant + ඉ romanize identically.
    assert_eq!(script_to_roman(table, "කෛ"), "kai");
    assert_eq!(script_to_roman(table, "කඉ"), "kai");
    assert_eq!(roman_to_script(table, "kai"), "කෛ");
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

fn arb_sinhala_char() -> impl Strategy<Value = char> {
    prop::char::range('\u{0D80}', '\u{0DFF}')
}

fn arb_mixed_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            4 => arb_sinhala_char(),
            2 => prop::char::range('a', 'z'),
            1 => prop::char::range('A', 'Z'),
            1 => prop::sample::select(vec![' ', '\u{200D}', '!', '.', '7', '🦀']),
            1 => any::<char>(),
        ],
        0..64,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

/// Characters with no entry in either index of the default table.
fn arb_unmapped_char() -> impl Strategy<Value = char> {
    prop_oneof![
        prop::sample::select(vec!['!', '@', '#', '%', '&', '*', '+', '=', '/', ' ']),
        // Latin letters no romanization key is built from on their own.
        prop::sample::select(vec!['q', 'z', 'c', 'v', 'Q', 'Z']),
        prop::char::range('\u{0400}', '\u{04FF}'),
        prop::char::range('\u{1F300}', '\u{1F5FF}'),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn both_directions_are_total(text in arb_mixed_text()) {
        let table = MappingTable::global();
        let _ = script_to_roman(table, &text);
        let _ = roman_to_script(table, &text);
    }

    #[test]
    fn unmapped_text_passes_through(chars in prop::collection::vec(arb_unmapped_char(), 0..32)) {
        let table = MappingTable::global();
        let text: String = chars.into_iter().collect();
        prop_assert_eq!(script_to_roman(table, &text), text.clone());
        prop_assert_eq!(roman_to_script(table, &text), text);
    }

    #[test]
    fn ascii_is_untouched_by_script_to_roman(text in "[ -~]{0,64}") {
        prop_assert_eq!(script_to_roman(MappingTable::global(), &text), text);
    }

    #[test]
    fn romanized_output_is_ascii_for_mapped_sinhala(
        ids in prop::collection::vec(0usize..739, 0..16)
    ) {
        let table = MappingTable::global();
        let text: String = ids.iter().map(|&i| table.entries()[i].script.as_str()).collect();
        let roman = script_to_roman(table, &text);
        prop_assert!(roman.is_ascii(), "non-ASCII output {:?} for {:?}", roman, text);
    }

    #[test]
    fn roman_to_script_has_no_ascii_letters_left(text in "[a-zA-Z]{0,48}") {
        // A letter is only copied through when it has no single-character key.
        let table = MappingTable::global();
        let out = roman_to_script(table, &text);
        for c in out.chars().filter(char::is_ascii_alphabetic) {
            let mut buf = [0u8; 4];
            prop_assert!(table.lookup_reverse(c.encode_utf8(&mut buf)).is_none());
        }
    }
}
