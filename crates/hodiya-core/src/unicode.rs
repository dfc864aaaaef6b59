//! Character-level Unicode classification for Sinhala text.

/// Check the full Sinhala block (U+0D80..U+0DFF). Includes unassigned code
/// points, which never appear in mapping tables and simply pass through.
pub fn is_sinhala(c: char) -> bool {
    ('\u{0D80}'..='\u{0DFF}').contains(&c)
}

/// Independent vowels අ (U+0D85) through ඖ (U+0D96).
pub fn is_independent_vowel(c: char) -> bool {
    ('\u{0D85}'..='\u{0D96}').contains(&c)
}

/// Base consonants ක (U+0D9A) through ෆ (U+0DC6).
pub fn is_consonant(c: char) -> bool {
    ('\u{0D9A}'..='\u{0DC6}').contains(&c)
}

/// Al-lakuna / hal kirima (U+0DCA).
pub fn is_virama(c: char) -> bool {
    c == '\u{0DCA}'
}

/// Dependent vowel signs: U+0DCF..U+0DDF plus the long vocalic signs
/// ෲ (U+0DF2) and ෳ (U+0DF3).
pub fn is_dependent_vowel_sign(c: char) -> bool {
    ('\u{0DCF}'..='\u{0DDF}').contains(&c) || c == '\u{0DF2}' || c == '\u{0DF3}'
}

/// A mark that attaches to a preceding consonant.
pub fn is_consonant_sign(c: char) -> bool {
    is_virama(c) || is_dependent_vowel_sign(c)
}

pub fn contains_sinhala(s: &str) -> bool {
    s.chars().any(is_sinhala)
}
