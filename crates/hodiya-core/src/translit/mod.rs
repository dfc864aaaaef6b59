//! Sinhala ⇄ Singlish transliteration.
//!
//! Both directions are greedy single-pass scans over the mapping table:
//! script → roman looks ahead at most two code points, roman → script at
//! most five characters. Unmapped characters always pass through, so the
//! scans are total; only the direction selector can be rejected.

mod batch;
mod forward;
mod reverse;

#[cfg(test)]
mod tests;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::mapping::MappingTable;
use crate::unicode::contains_sinhala;

pub use batch::transliterate_batch;
pub use forward::{script_to_roman, MAX_SCRIPT_WINDOW};
pub use reverse::{roman_to_script, MAX_ROMAN_WINDOW};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslitError {
    #[error("invalid direction {0:?}: expected \"toRoman\" or \"toScript\"")]
    InvalidDirection(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    /// Sinhala script → Singlish.
    ToRoman,
    /// Singlish → Sinhala script.
    ToScript,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::ToRoman => "toRoman",
            Direction::ToScript => "toScript",
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::ToRoman => Direction::ToScript,
            Direction::ToScript => Direction::ToRoman,
        }
    }

    pub fn apply(self, table: &MappingTable, text: &str) -> String {
        match self {
            Direction::ToRoman => script_to_roman(table, text),
            Direction::ToScript => roman_to_script(table, text),
        }
    }
}

impl FromStr for Direction {
    type Err = TranslitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "toRoman" | "to-roman" => Ok(Direction::ToRoman),
            "toScript" | "to-script" => Ok(Direction::ToScript),
            other => Err(TranslitError::InvalidDirection(other.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transliterate `text` with the global table. `direction` must be one of
/// the selectors accepted by [`Direction::from_str`]; nothing is guessed.
pub fn transliterate(text: &str, direction: &str) -> Result<String, TranslitError> {
    let direction: Direction = direction.parse()?;
    Ok(transliterate_with(MappingTable::global(), text, direction))
}

pub fn transliterate_with(table: &MappingTable, text: &str, direction: Direction) -> String {
    direction.apply(table, text)
}

/// Pick a direction for free text: anything containing Sinhala script is
/// romanized, everything else is read as Singlish.
pub fn suggest_direction(text: &str) -> Direction {
    if contains_sinhala(text) {
        Direction::ToRoman
    } else {
        Direction::ToScript
    }
}
