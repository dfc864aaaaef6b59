pub(crate) const DEFAULT_TOML: &str = include_str!("default_mapping.toml");

/// Returns the embedded default mapping TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}
