// src/store.rs
//! Resolved locale data, as seen by the checker.
//!
//! [`ValueStore`] is the narrow read-only view the checker needs.
//! [`MemoryStore`] implements it over a JSON snapshot of one resolved locale.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CheckError, Result};

/// Source locale id of values synthesized from codes rather than authored.
pub const CODE_FALLBACK_ID: &str = "code-fallback";

/// Value meaning "explicitly do not inherit"; never checked.
pub const NO_INHERITANCE_MARKER: &str = "\u{2205}\u{2205}\u{2205}";

/// Read-only access to one resolved locale.
///
/// Implementations must be safe to share across the parallel sweep.
pub trait ValueStore: Sync {
    /// Id of the locale this store resolves.
    fn locale_id(&self) -> &str;

    /// Resolved value of `path`.
    fn value(&self, path: &str) -> Option<&str>;

    /// All paths starting with `prefix` whose value is equivalent to `value`.
    fn paths_with_value(&self, value: &str, prefix: &str) -> Vec<String>;

    /// Whether `path` holds the winning value after resolution.
    fn is_winning(&self, path: &str) -> bool;

    /// Locale that actually supplies the value of `path`.
    fn source_locale(&self, path: &str) -> Option<&str>;

    /// All paths starting with `prefix`, in path order.
    fn paths_under(&self, prefix: &str) -> Vec<String>;
}

/// One stored value with its resolution metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredValue {
    pub value: String,
    #[serde(default = "default_winning")]
    pub winning: bool,
    #[serde(default)]
    pub source: Option<String>,
}

const fn default_winning() -> bool { true }

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SnapshotEntry {
    path: String,
    #[serde(flatten)]
    stored: StoredValue,
}

/// On-disk form of a [`MemoryStore`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Snapshot {
    locale: String,
    #[serde(default)]
    entries: Vec<SnapshotEntry>,
}

/// In-memory [`ValueStore`] with a reverse value index.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    locale: String,
    values: BTreeMap<String, StoredValue>,
    by_value: HashMap<String, BTreeSet<String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new(locale: impl Into<String>) -> Self {
        Self { locale: locale.into(), ..Self::default() }
    }

    /// Builds a store where every value is winning and authored locally.
    #[must_use]
    pub fn from_pairs(locale: &str, pairs: &[(&str, &str)]) -> Self {
        let mut store = Self::new(locale);
        for (path, value) in pairs {
            store.insert(*path, *value);
        }
        store
    }

    /// Loads a JSON snapshot.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or is not a valid snapshot.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| CheckError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        Self::from_json(&content)
    }

    /// Parses a JSON snapshot.
    ///
    /// # Errors
    /// Returns error if the content is not a valid snapshot.
    pub fn from_json(content: &str) -> Result<Self> {
        let snapshot: Snapshot = serde_json::from_str(content)?;
        let mut store = Self::new(snapshot.locale);
        for entry in snapshot.entries {
            store.insert_stored(entry.path, entry.stored);
        }
        Ok(store)
    }

    /// Serializes the store back into snapshot form.
    ///
    /// # Errors
    /// Returns error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        let snapshot = Snapshot {
            locale: self.locale.clone(),
            entries: self
                .values
                .iter()
                .map(|(path, stored)| SnapshotEntry { path: path.clone(), stored: stored.clone() })
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&snapshot)?)
    }

    pub fn insert(&mut self, path: impl Into<String>, value: impl Into<String>) {
        self.insert_stored(
            path.into(),
            StoredValue { value: value.into(), winning: true, source: None },
        );
    }

    pub fn insert_stored(&mut self, path: String, stored: StoredValue) {
        if let Some(old) = self.values.get(&path) {
            let key = fold(&old.value);
            if let Some(paths) = self.by_value.get_mut(&key) {
                paths.remove(&path);
            }
        }
        self.by_value
            .entry(fold(&stored.value))
            .or_default()
            .insert(path.clone());
        self.values.insert(path, stored);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ValueStore for MemoryStore {
    fn locale_id(&self) -> &str {
        &self.locale
    }

    fn value(&self, path: &str) -> Option<&str> {
        self.values.get(path).map(|s| s.value.as_str())
    }

    fn paths_with_value(&self, value: &str, prefix: &str) -> Vec<String> {
        self.by_value
            .get(&fold(value))
            .map(|paths| {
                paths
                    .iter()
                    .filter(|p| p.starts_with(prefix))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    fn is_winning(&self, path: &str) -> bool {
        self.values.get(path).is_some_and(|s| s.winning)
    }

    fn source_locale(&self, path: &str) -> Option<&str> {
        self.values
            .get(path)
            .map(|s| s.source.as_deref().unwrap_or(&self.locale))
    }

    fn paths_under(&self, prefix: &str) -> Vec<String> {
        self.values
            .range(prefix.to_string()..)
            .take_while(|(p, _)| p.starts_with(prefix))
            .map(|(p, _)| p.clone())
            .collect()
    }
}

/// Equivalence key: case-folded, whitespace runs collapsed.
fn fold(value: &str) -> String {
    value
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FR: &str = r#"//ldml/localeDisplayNames/languages/language[@type="fr"]"#;
    const FR_TERRITORY: &str = r#"//ldml/localeDisplayNames/territories/territory[@type="FR"]"#;

    #[test]
    fn test_equivalent_values() {
        let store = MemoryStore::from_pairs("xx", &[(FR, "French"), (FR_TERRITORY, " french ")]);
        let hits = store.paths_with_value("FRENCH", "//ldml/localeDisplayNames");
        assert_eq!(hits.len(), 2);
        let hits = store.paths_with_value("French", "//ldml/localeDisplayNames/languages");
        assert_eq!(hits, vec![FR.to_string()]);
    }

    #[test]
    fn test_reinsert_moves_index() {
        let mut store = MemoryStore::from_pairs("xx", &[(FR, "French")]);
        store.insert(FR, "Francais");
        assert!(store.paths_with_value("French", "//ldml").is_empty());
        assert_eq!(store.paths_with_value("francais", "//ldml").len(), 1);
    }

    #[test]
    fn test_snapshot_defaults() {
        let json = format!(
            r#"{{"locale":"xx","entries":[{{"path":{},"value":"EUR","source":"code-fallback","winning":false}},{{"path":{},"value":"French"}}]}}"#,
            serde_json::to_string(r#"//ldml/numbers/currencies/currency[@type="EUR"]/symbol"#).unwrap(),
            serde_json::to_string(FR).unwrap(),
        );
        let store = MemoryStore::from_json(&json).unwrap();
        assert_eq!(store.source_locale(FR), Some("xx"));
        assert!(store.is_winning(FR));
        let eur = r#"//ldml/numbers/currencies/currency[@type="EUR"]/symbol"#;
        assert_eq!(store.source_locale(eur), Some(CODE_FALLBACK_ID));
        assert!(!store.is_winning(eur));
    }

    #[test]
    fn test_paths_under() {
        let store = MemoryStore::from_pairs("xx", &[(FR, "French"), (FR_TERRITORY, "France")]);
        assert_eq!(store.paths_under("//ldml/localeDisplayNames/territories"), vec![FR_TERRITORY.to_string()]);
        assert_eq!(store.paths_under("//ldml").len(), 2);
    }
}
