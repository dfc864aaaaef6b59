use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::{debug, warn};

use super::config::{parse_mapping_toml, MappingConfigError};
use super::table::DEFAULT_TOML;
use super::MappingEntry;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();
static INSTANCE: OnceLock<MappingTable> = OnceLock::new();

/// Which index a [`Collision`] occurred in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    Script,
    Roman,
}

/// Two canonical entries that share a key. `kept` was defined first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub kind: CollisionKind,
    pub kept: MappingEntry,
    pub dropped: MappingEntry,
}

/// Immutable bidirectional lookup over one canonical entry list.
///
/// Both indices point into `entries`, so the two directions cannot drift
/// apart. On a duplicate key the earlier entry wins and the pair is recorded
/// in `collisions`.
#[derive(Debug)]
pub struct MappingTable {
    entries: Vec<MappingEntry>,
    forward: HashMap<String, usize>,
    reverse: HashMap<String, usize>,
    collisions: Vec<Collision>,
}

impl MappingTable {
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = MappingEntry>,
    {
        let entries: Vec<MappingEntry> = entries.into_iter().collect();
        let mut forward = HashMap::with_capacity(entries.len());
        let mut reverse = HashMap::with_capacity(entries.len());
        let mut collisions = Vec::new();

        for (id, entry) in entries.iter().enumerate() {
            if let Some(kept) = insert_first(&mut forward, &entry.script, id) {
                collisions.push(Collision {
                    kind: CollisionKind::Script,
                    kept: entries[kept].clone(),
                    dropped: entry.clone(),
                });
                continue;
            }
            // Empty romanizations are forward-only: no scan window is empty.
            if entry.roman.is_empty() {
                continue;
            }
            if let Some(kept) = insert_first(&mut reverse, &entry.roman, id) {
                collisions.push(Collision {
                    kind: CollisionKind::Roman,
                    kept: entries[kept].clone(),
                    dropped: entry.clone(),
                });
            }
        }

        for c in &collisions {
            warn!(
                kind = ?c.kind,
                kept_script = %c.kept.script,
                kept_roman = %c.kept.roman,
                dropped_script = %c.dropped.script,
                dropped_roman = %c.dropped.roman,
                "mapping collision, first entry wins"
            );
        }
        debug!(
            entries = entries.len(),
            forward = forward.len(),
            reverse = reverse.len(),
            collisions = collisions.len(),
            "mapping table built"
        );

        Self {
            entries,
            forward,
            reverse,
            collisions,
        }
    }

    /// Parse mapping TOML and build a table from it.
    pub fn from_toml(toml_str: &str) -> Result<Self, MappingConfigError> {
        parse_mapping_toml(toml_str).map(Self::from_entries)
    }

    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), MappingConfigError> {
        // Validate eagerly
        parse_mapping_toml(&toml_content)?;
        register_custom(&CUSTOM_TOML, &INSTANCE, toml_content)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static MappingTable {
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            // Custom TOML is validated in init_custom, the default by build.rs and tests.
            MappingTable::from_toml(toml_str).expect("mapping TOML must be valid")
        })
    }

    pub fn lookup_forward(&self, script: &str) -> Option<&str> {
        self.forward
            .get(script)
            .map(|&id| self.entries[id].roman.as_str())
    }

    pub fn lookup_reverse(&self, roman: &str) -> Option<&str> {
        self.reverse
            .get(roman)
            .map(|&id| self.entries[id].script.as_str())
    }

    /// The canonical list in definition order, including entries shadowed by
    /// a collision.
    pub fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }
}

/// Store `toml_content` for the first `global()` call. The instance is
/// checked after the store so a concurrent `global()` either sees the custom
/// text or makes this return `AlreadyInitialized`.
fn register_custom(
    custom: &OnceLock<String>,
    instance: &OnceLock<MappingTable>,
    toml_content: String,
) -> Result<(), MappingConfigError> {
    custom
        .set(toml_content)
        .map_err(|_| MappingConfigError::AlreadyInitialized)?;
    if instance.get().is_some() {
        return Err(MappingConfigError::AlreadyInitialized);
    }
    Ok(())
}

/// Insert `key → id` unless the key exists; returns the existing id.
fn insert_first(index: &mut HashMap<String, usize>, key: &str, id: usize) -> Option<usize> {
    match index.entry(key.to_string()) {
        Entry::Occupied(e) => Some(*e.get()),
        Entry::Vacant(e) => {
            e.insert(id);
            None
        }
    }
}
