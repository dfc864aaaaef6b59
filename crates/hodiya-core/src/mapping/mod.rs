//! Sinhala ⇄ Singlish grapheme mapping table.
//!
//! One canonical list of (script, roman) pairs is composed from a TOML
//! authoring format (vowels, consonant stems, signs, symbols) and indexed in
//! both directions. The process-wide default is built once and never mutated.

mod config;
mod index;
mod table;

use serde::{Deserialize, Serialize};

pub use config::{parse_mapping_toml, MappingConfigError, Section};
pub use index::{Collision, CollisionKind, MappingTable};
pub use table::default_toml;

/// One orthographic unit and its romanization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MappingEntry {
    /// One or two Sinhala code points.
    pub script: String,
    /// Up to five ASCII characters. Empty for marks that carry no sound.
    pub roman: String,
}

impl MappingEntry {
    pub fn new(script: impl Into<String>, roman: impl Into<String>) -> Self {
        Self {
            script: script.into(),
            roman: roman.into(),
        }
    }
}
