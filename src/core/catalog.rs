/// Catalog lookup — the read-only seam to the curated name dataset.

use rustc_hash::FxHashMap;
use std::collections::HashMap;
use std::path::Path;

use crate::core::normalize::normalize;
use crate::core::rules::DataError;
use crate::schema::catalog::CatalogEntry;

/// Anything that can answer "is this normalized name curated?".
pub trait CatalogLookup {
    fn lookup(&self, key: &str) -> Option<&CatalogEntry>;
}

impl CatalogLookup for HashMap<String, CatalogEntry> {
    fn lookup(&self, key: &str) -> Option<&CatalogEntry> {
        self.get(key)
    }
}

impl CatalogLookup for FxHashMap<String, CatalogEntry> {
    fn lookup(&self, key: &str) -> Option<&CatalogEntry> {
        self.get(key)
    }
}

/// A catalog with no entries, for callers without a dataset.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyCatalog;

impl CatalogLookup for EmptyCatalog {
    fn lookup(&self, _key: &str) -> Option<&CatalogEntry> {
        None
    }
}

/// Curated entries indexed by normalized name.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: FxHashMap<String, CatalogEntry>,
}

impl Catalog {
    /// Index entries by normalized name. When two entries normalize to the
    /// same key the first one is kept; nameless entries are skipped.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = CatalogEntry>,
    {
        let mut map = FxHashMap::default();
        for entry in entries {
            let key = normalize(&entry.name);
            if key.is_empty() {
                continue;
            }
            map.entry(key).or_insert(entry);
        }
        Self { entries: map }
    }

    /// Parse a JSON array of catalog records.
    pub fn from_json_str(input: &str) -> Result<Catalog, DataError> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(input)?;
        Ok(Self::from_entries(entries))
    }

    pub fn load_from_json(path: &Path) -> Result<Catalog, DataError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Look up by display name rather than by key.
    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.get(&normalize(name))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CatalogLookup for Catalog {
    fn lookup(&self, key: &str) -> Option<&CatalogEntry> {
        self.entries.get(key)
    }
}
