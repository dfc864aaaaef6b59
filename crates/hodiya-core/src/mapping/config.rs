use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::Deserialize;

use super::MappingEntry;
use crate::translit::MAX_ROMAN_WINDOW;
use crate::unicode::{is_consonant, is_consonant_sign, is_independent_vowel};

fn default_inherent_vowel() -> String {
    "a".to_string()
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct MappingConfig {
    #[serde(default = "default_inherent_vowel")]
    inherent_vowel: String,
    #[serde(default)]
    vowels: BTreeMap<String, String>,
    #[serde(default)]
    consonants: BTreeMap<String, String>,
    #[serde(default)]
    signs: BTreeMap<String, String>,
    #[serde(default)]
    symbols: BTreeMap<String, String>,
}

/// A table section of the mapping TOML.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Vowels,
    Consonants,
    Signs,
    Symbols,
}

impl Section {
    pub fn name(self) -> &'static str {
        match self {
            Section::Vowels => "vowels",
            Section::Consonants => "consonants",
            Section::Signs => "signs",
            Section::Symbols => "symbols",
        }
    }

    fn class_name(self) -> &'static str {
        match self {
            Section::Vowels => "independent vowel",
            Section::Consonants => "consonant",
            Section::Signs => "dependent vowel sign or virama",
            Section::Symbols => "symbol",
        }
    }

    fn accepts(self, c: char) -> bool {
        match self {
            Section::Vowels => is_independent_vowel(c),
            Section::Consonants => is_consonant(c),
            Section::Signs => is_consonant_sign(c),
            Section::Symbols => true,
        }
    }

    /// Whether an empty romanization is allowed (marks that carry no sound).
    fn allows_empty(self) -> bool {
        matches!(self, Section::Signs | Section::Symbols)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MappingConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[{0}] table is empty")]
    Empty(Section),
    #[error("[{section}] key {script:?} must be a single code point")]
    NotSingleCodePoint { section: Section, script: String },
    #[error("[{section}] key {script:?} is not an {}", .section.class_name())]
    WrongClass { section: Section, script: String },
    #[error("non-ASCII romanization {roman:?} for {script:?}")]
    NonAsciiRoman { script: String, roman: String },
    #[error("[{section}] empty romanization for {script:?}")]
    EmptyRoman { section: Section, script: String },
    #[error("inherent_vowel must be a non-empty ASCII string, got {0:?}")]
    InvalidInherentVowel(String),
    #[error("romanization {roman:?} for {script:?} is longer than {max} characters")]
    RomanTooLong {
        script: String,
        roman: String,
        max: usize,
    },
    #[error("script {0:?} is defined more than once")]
    DuplicateScript(String),
    #[error("mapping table already initialized")]
    AlreadyInitialized,
}

/// Parse mapping TOML and compose the canonical entry list.
///
/// Order: vowels, then each consonant followed by its sign combinations,
/// then symbols. Keys within a section are ordered by code point. Roman
/// collisions are not rejected here; the table resolves them first-wins.
pub fn parse_mapping_toml(toml_str: &str) -> Result<Vec<MappingEntry>, MappingConfigError> {
    let config: MappingConfig =
        toml::from_str(toml_str).map_err(|e| MappingConfigError::Parse(e.to_string()))?;

    if config.vowels.is_empty() {
        return Err(MappingConfigError::Empty(Section::Vowels));
    }
    if config.consonants.is_empty() {
        return Err(MappingConfigError::Empty(Section::Consonants));
    }
    if config.inherent_vowel.is_empty() || !config.inherent_vowel.is_ascii() {
        return Err(MappingConfigError::InvalidInherentVowel(
            config.inherent_vowel,
        ));
    }

    let mut seen = HashSet::new();
    for (section, map) in [
        (Section::Vowels, &config.vowels),
        (Section::Consonants, &config.consonants),
        (Section::Signs, &config.signs),
        (Section::Symbols, &config.symbols),
    ] {
        for (script, roman) in map {
            validate_key(section, script)?;
            validate_roman(section, script, roman)?;
            if !seen.insert(script.as_str()) {
                return Err(MappingConfigError::DuplicateScript(script.clone()));
            }
        }
    }

    let mut entries = Vec::with_capacity(
        config.vowels.len()
            + config.consonants.len() * (config.signs.len() + 1)
            + config.symbols.len(),
    );
    for (script, roman) in &config.vowels {
        entries.push(checked_entry(script.clone(), roman.clone())?);
    }
    for (consonant, stem) in &config.consonants {
        entries.push(checked_entry(
            consonant.clone(),
            format!("{stem}{}", config.inherent_vowel),
        )?);
        for (sign, suffix) in &config.signs {
            entries.push(checked_entry(
                format!("{consonant}{sign}"),
                format!("{stem}{suffix}"),
            )?);
        }
    }
    for (script, roman) in &config.symbols {
        entries.push(checked_entry(script.clone(), roman.clone())?);
    }

    Ok(entries)
}

fn validate_key(section: Section, script: &str) -> Result<(), MappingConfigError> {
    let mut chars = script.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return Err(MappingConfigError::NotSingleCodePoint {
            section,
            script: script.to_string(),
        });
    };
    if !section.accepts(c) {
        return Err(MappingConfigError::WrongClass {
            section,
            script: script.to_string(),
        });
    }
    Ok(())
}

fn validate_roman(section: Section, script: &str, roman: &str) -> Result<(), MappingConfigError> {
    if !roman.is_ascii() {
        return Err(MappingConfigError::NonAsciiRoman {
            script: script.to_string(),
            roman: roman.to_string(),
        });
    }
    if roman.is_empty() && !section.allows_empty() {
        return Err(MappingConfigError::EmptyRoman {
            section,
            script: script.to_string(),
        });
    }
    Ok(())
}

/// Romans are ASCII by now, so byte length equals character length.
fn checked_entry(script: String, roman: String) -> Result<MappingEntry, MappingConfigError> {
    if roman.len() > MAX_ROMAN_WINDOW {
        return Err(MappingConfigError::RomanTooLong {
            script,
            roman,
            max: MAX_ROMAN_WINDOW,
        });
    }
    Ok(MappingEntry { script, roman })
}
