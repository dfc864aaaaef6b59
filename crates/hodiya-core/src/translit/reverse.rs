use tracing::debug_span;

use crate::mapping::MappingTable;

/// Longest romanization looked up at one position.
pub const MAX_ROMAN_WINDOW: usize = 5;

/// Convert Singlish to Sinhala script.
///
/// Maximal munch: windows of 5, 4, 3, 2 and 1 characters are tried in that
/// order and the first hit is emitted. Unmapped characters are copied
/// through. Never fails.
pub fn roman_to_script(table: &MappingTable, input: &str) -> String {
    let _span = debug_span!("roman_to_script", bytes = input.len()).entered();

    let mut out = String::with_capacity(input.len() * 3);
    let mut rest = input;
    while let Some(first) = rest.chars().next() {
        match longest_match(table, rest) {
            Some((script, width)) => {
                out.push_str(script);
                rest = &rest[width..];
            }
            None => {
                out.push(first);
                rest = &rest[first.len_utf8()..];
            }
        }
    }
    out
}

/// Returns the script for the longest window at the start of `rest` that has
/// a reverse entry, with the window's byte width. Windows that would run
/// past the end of the input are never formed.
fn longest_match<'t>(table: &'t MappingTable, rest: &str) -> Option<(&'t str, usize)> {
    let mut ends = [0usize; MAX_ROMAN_WINDOW];
    let mut count = 0;
    for (i, c) in rest.char_indices().take(MAX_ROMAN_WINDOW) {
        ends[count] = i + c.len_utf8();
        count += 1;
    }
    ends[..count]
        .iter()
        .rev()
        .find_map(|&end| table.lookup_reverse(&rest[..end]).map(|s| (s, end)))
}
