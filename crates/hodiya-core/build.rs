const DEFAULT_MAPPING: &str = "src/mapping/default_mapping.toml";

fn main() {
    println!("cargo:rerun-if-changed={DEFAULT_MAPPING}");
    if let Err(msg) = check_mapping(include_str!("src/mapping/default_mapping.toml")) {
        panic!("{DEFAULT_MAPPING}: {msg}");
    }
}

/// Shape check only: full validation (classes, lengths, duplicates) runs in
/// `parse_mapping_toml` and its tests.
fn check_mapping(content: &str) -> Result<(), String> {
    let table: toml::Table = content.parse().map_err(|e| format!("invalid TOML: {e}"))?;
    for section in ["vowels", "consonants"] {
        match table.get(section) {
            Some(toml::Value::Table(t)) if !t.is_empty() => {}
            Some(toml::Value::Table(_)) => return Err(format!("[{section}] is empty")),
            Some(_) => return Err(format!("{section} must be a table")),
            None => return Err(format!("missing [{section}]")),
        }
    }
    for section in ["signs", "symbols"] {
        if let Some(v) = table.get(section) {
            if !v.is_table() {
                return Err(format!("{section} must be a table"));
            }
        }
    }
    match table.get("inherent_vowel") {
        None | Some(toml::Value::String(_)) => Ok(()),
        Some(_) => Err("inherent_vowel must be a string".to_string()),
    }
}
