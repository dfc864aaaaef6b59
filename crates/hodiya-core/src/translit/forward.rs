use tracing::debug_span;

use crate::mapping::MappingTable;

/// Longest script sequence looked up at one position: a consonant plus one
/// dependent sign.
pub const MAX_SCRIPT_WINDOW: usize = 2;

/// Convert Sinhala script to Singlish.
///
/// At each position the two-code-point window is tried before the single
/// code point; anything unmapped is copied through. Never fails.
pub fn script_to_roman(table: &MappingTable, input: &str) -> String {
    let _span = debug_span!("script_to_roman", bytes = input.len()).entered();

    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(first) = rest.chars().next() {
        let one = first.len_utf8();
        if let Some(second) = rest[one..].chars().next() {
            let two = one + second.len_utf8();
            if let Some(roman) = table.lookup_forward(&rest[..two]) {
                out.push_str(roman);
                rest = &rest[two..];
                continue;
            }
        }
        match table.lookup_forward(&rest[..one]) {
            Some(roman) => out.push_str(roman),
            None => out.push(first),
        }
        rest = &rest[one..];
    }
    out
}
