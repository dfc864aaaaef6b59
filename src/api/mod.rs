//! UniFFI export layer.
//!
//! Direction selectors cross the boundary as strings (`"toRoman"`,
//! `"toScript"`) and are validated here, so hosts get `InvalidDirection`
//! rather than a silent default.

mod types;

pub use types::{HodiyaError, HodiyaMappingEntry};

use std::path::Path;

use hodiya_core::mapping::MappingTable;
use hodiya_core::translit::{self, Direction};
use tracing::info;

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

#[uniffi::export]
fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[uniffi::export]
fn transliterate(text: String, direction: String) -> Result<String, HodiyaError> {
    Ok(translit::transliterate(&text, &direction)?)
}

#[uniffi::export]
fn script_to_roman(text: String) -> String {
    translit::script_to_roman(MappingTable::global(), &text)
}

#[uniffi::export]
fn roman_to_script(text: String) -> String {
    translit::roman_to_script(MappingTable::global(), &text)
}

#[uniffi::export]
fn transliterate_batch(texts: Vec<String>, direction: String) -> Result<Vec<String>, HodiyaError> {
    let direction: Direction = direction.parse()?;
    Ok(translit::transliterate_batch(
        MappingTable::global(),
        &texts,
        direction,
    ))
}

/// Returns `"toRoman"` for text containing Sinhala script, else `"toScript"`.
#[uniffi::export]
fn suggest_direction(text: String) -> String {
    translit::suggest_direction(&text).as_str().to_string()
}

#[uniffi::export]
fn mapping_load_config(path: String) -> Result<(), HodiyaError> {
    let content = std::fs::read_to_string(&path).map_err(|e| HodiyaError::Io {
        msg: format!("{path}: {e}"),
    })?;
    MappingTable::init_custom(content)?;
    info!(path = %path, "custom mapping table registered");
    Ok(())
}

#[uniffi::export]
fn mapping_default_config() -> String {
    hodiya_core::mapping::default_toml().to_string()
}

#[uniffi::export]
fn mapping_entries() -> Vec<HodiyaMappingEntry> {
    MappingTable::global()
        .entries()
        .iter()
        .map(HodiyaMappingEntry::from)
        .collect()
}

#[uniffi::export]
fn trace_init(log_dir: String) {
    crate::trace_init::init_tracing(Path::new(&log_dir));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transliterate_both_directions() {
        assert_eq!(
            transliterate("ලංකා".into(), "toRoman".into()).unwrap(),
            "laxkaa"
        );
        assert_eq!(
            transliterate("laxkaa".into(), "toScript".into()).unwrap(),
            "ලංකා"
        );
    }

    #[test]
    fn test_invalid_direction() {
        let err = transliterate("x".into(), "toKlingon".into()).unwrap_err();
        assert!(
            matches!(err, HodiyaError::InvalidDirection { ref selector } if selector == "toKlingon")
        );
        let err = transliterate_batch(vec!["x".into()], "".into()).unwrap_err();
        assert!(matches!(err, HodiyaError::InvalidDirection { .. }));
    }

    #[test]
    fn test_batch() {
        let out = transliterate_batch(
            vec!["ammaa".into(), "kiyanna".into()],
            "to-script".into(),
        )
        .unwrap();
        assert_eq!(out, vec!["අම්මා".to_string(), "කියන්න".to_string()]);
    }

    #[test]
    fn test_direct_functions_and_suggestion() {
        assert_eq!(script_to_roman("කා".into()), "kaa");
        assert_eq!(roman_to_script("kaa".into()), "කා");
        assert_eq!(suggest_direction("කා".into()), "toRoman");
        assert_eq!(suggest_direction("kaa".into()), "toScript");
    }

    #[test]
    fn test_mapping_config_errors() {
        let err = mapping_load_config("/nonexistent/hodiya/mapping.toml".into()).unwrap_err();
        assert!(matches!(err, HodiyaError::Io { .. }));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[vowels]\n\"ක\" = \"ka\"\n").unwrap();
        let err = mapping_load_config(path.to_string_lossy().into_owned()).unwrap_err();
        assert!(matches!(err, HodiyaError::InvalidData { .. }));
    }

    #[test]
    fn test_mapping_entries_match_default() {
        let entries = mapping_entries();
        assert_eq!(entries.len(), MappingTable::global().len());
        assert_eq!(
            entries[0],
            HodiyaMappingEntry {
                script: "අ".into(),
                roman: "a".into(),
            }
        );
        assert!(mapping_default_config().contains("[consonants]"));
    }
}
