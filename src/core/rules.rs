/// Static rule tables — loading, validation, and read-only lookup.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::core::normalize::normalize;
use crate::schema::rules::{
    CompositePart, NameRoot, RootGloss, RulePhrases, TheophoricSuffix, Toponym, WordNote,
};

const BUILTIN_RULES: &str = include_str!("../../onomastic_data/rules.ron");

/// Shortest and longest accepted onomastic root, in characters.
pub const ROOT_KEY_LEN: std::ops::RangeInclusive<usize> = 2..=4;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("JSON deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("template parse error: {0}")]
    TemplateParse(String),
    #[error("invalid cue pattern: {0}")]
    Regex(#[from] regex::Error),
    #[error("invalid table entry: {0}")]
    InvalidEntry(String),
}

/// The rule tables exactly as written in a RON data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename = "RuleTables")]
pub struct RuleTables {
    pub roots: Vec<NameRoot>,
    pub theophoric_suffixes: Vec<TheophoricSuffix>,
    pub root_glosses: Vec<RootGloss>,
    pub toponyms: Vec<Toponym>,
    pub virtues: Vec<WordNote>,
    pub celestial: Vec<WordNote>,
    pub nature: Vec<WordNote>,
    pub elements: Vec<WordNote>,
    pub composite_parts: Vec<CompositePart>,
    pub phrases: RulePhrases,
}

/// Validated, normalized rule tables with lookup indexes.
///
/// Built once and then only read; every analysis function takes it by
/// reference.
#[derive(Debug, Clone)]
pub struct RuleSet {
    tables: RuleTables,
    root_index: FxHashMap<String, usize>,
    /// Composite parts, longest key first (stable for equal lengths).
    composites_by_length: Vec<CompositePart>,
}

impl RuleSet {
    /// The rule tables compiled into the crate.
    pub fn builtin() -> Result<RuleSet, DataError> {
        Self::parse_ron(BUILTIN_RULES)
    }

    /// Load rule tables from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<RuleSet, DataError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse rule tables from a RON string.
    pub fn parse_ron(input: &str) -> Result<RuleSet, DataError> {
        let tables: RuleTables = ron::from_str(input)?;
        Self::from_tables(tables)
    }

    /// Normalize every key and build the indexes.
    pub fn from_tables(mut tables: RuleTables) -> Result<RuleSet, DataError> {
        let mut root_index = FxHashMap::default();
        for (i, root) in tables.roots.iter_mut().enumerate() {
            root.key = normalize(&root.key);
            let len = root.key.chars().count();
            if !ROOT_KEY_LEN.contains(&len) {
                return Err(DataError::InvalidEntry(format!(
                    "root '{}' must be 2-4 characters, got {}",
                    root.key, len
                )));
            }
            if root_index.insert(root.key.clone(), i).is_some() {
                return Err(DataError::InvalidEntry(format!(
                    "duplicate root '{}'",
                    root.key
                )));
            }
        }

        for suffix in &mut tables.theophoric_suffixes {
            suffix.suffix = normalize(&suffix.suffix);
        }
        for gloss in &mut tables.root_glosses {
            gloss.key = normalize(&gloss.key);
        }
        for toponym in &mut tables.toponyms {
            toponym.name = normalize(&toponym.name);
        }
        for list in [
            &mut tables.virtues,
            &mut tables.celestial,
            &mut tables.nature,
            &mut tables.elements,
        ] {
            for word in list.iter_mut() {
                word.key = normalize(&word.key);
            }
        }
        for part in &mut tables.composite_parts {
            part.key = normalize(&part.key);
        }

        let empty_key = tables
            .theophoric_suffixes
            .iter()
            .map(|s| &s.suffix)
            .chain(tables.root_glosses.iter().map(|g| &g.key))
            .chain(tables.composite_parts.iter().map(|p| &p.key))
            .any(|k| k.is_empty());
        if empty_key {
            return Err(DataError::InvalidEntry(
                "suffix, gloss and composite keys must be non-empty".to_string(),
            ));
        }

        let mut composites_by_length = tables.composite_parts.clone();
        composites_by_length.sort_by(|a, b| b.key.len().cmp(&a.key.len()));

        Ok(RuleSet {
            tables,
            root_index,
            composites_by_length,
        })
    }

    pub fn tables(&self) -> &RuleTables {
        &self.tables
    }

    pub fn phrases(&self) -> &RulePhrases {
        &self.tables.phrases
    }

    /// Look up a root by its normalized key.
    pub fn root(&self, key: &str) -> Option<&NameRoot> {
        self.root_index.get(key).map(|&i| &self.tables.roots[i])
    }

    /// Composite parts ordered for greedy longest-match scanning.
    pub fn composites_longest_first(&self) -> &[CompositePart] {
        &self.composites_by_length
    }

    /// Look up a composite part by its exact normalized key.
    pub fn composite(&self, key: &str) -> Option<&CompositePart> {
        self.tables.composite_parts.iter().find(|p| p.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::rules::RuleKind;

    fn minimal_ron(roots: &str) -> String {
        format!(
            r#"RuleTables(
                roots: [{roots}],
                theophoric_suffixes: [(suffix: "el", note: "theophoric")],
                root_glosses: [(key: "Luc", gloss: "light")],
                toponyms: [(name: "Ávila", note: "a walled city")],
                virtues: [],
                celestial: [(key: "Sol", note: "sun")],
                nature: [],
                elements: [],
                composite_parts: [
                    (key: "mar", kind: nature, note: "sea"),
                    (key: "maria", kind: root, note: "Mary"),
                    (key: "sol", kind: celestial, note: "sun"),
                ],
                phrases: (
                    theophoric_meaning: "Theophoric.",
                    theophoric_origin: "Hebrew",
                    nuances_prefix: "Associated nuances:",
                    virtue: "Virtue.",
                    celestial: "Celestial.",
                    nature: "Nature.",
                    element: "Element.",
                    fusion_prefix: "Fusion of meanings:",
                    compound_origin: "Modern composition",
                    compound_meaning: "Two names.",
                    roots_origin: "Mixed",
                    roots_meaning_prefix: "Echoes:",
                    roots_meaning_suffix: "Steady.",
                    coined_meaning: "Coined.",
                ),
            )"#
        )
    }

    #[test]
    fn builtin_rules_load() {
        let rules = RuleSet::builtin().unwrap();
        assert!(!rules.tables().roots.is_empty());
        let ana = rules.root("ana").unwrap();
        assert_eq!(ana.origin, "Hebrew");
        assert_eq!(ana.gloss, "grace, compassion");
    }

    #[test]
    fn keys_are_normalized_on_load() {
        let rules = RuleSet::parse_ron(&minimal_ron(
            r#"(key: "ÁNA", origin: "Hebrew", gloss: "grace")"#,
        ))
        .unwrap();
        assert!(rules.root("ana").is_some());
        assert_eq!(rules.tables().root_glosses[0].key, "luc");
        assert_eq!(rules.tables().toponyms[0].name, "avila");
        assert_eq!(rules.tables().celestial[0].key, "sol");
    }

    #[test]
    fn root_length_enforced() {
        let err = RuleSet::parse_ron(&minimal_ron(
            r#"(key: "sophia", origin: "Greek", gloss: "wisdom")"#,
        ))
        .unwrap_err();
        assert!(matches!(err, DataError::InvalidEntry(_)));

        let err = RuleSet::parse_ron(&minimal_ron(r#"(key: "a", origin: "?", gloss: "?")"#))
            .unwrap_err();
        assert!(matches!(err, DataError::InvalidEntry(_)));
    }

    #[test]
    fn duplicate_roots_rejected() {
        let err = RuleSet::parse_ron(&minimal_ron(
            r#"(key: "ana", origin: "Hebrew", gloss: "grace"),
               (key: "Ána", origin: "Hebrew", gloss: "grace")"#,
        ))
        .unwrap_err();
        assert!(matches!(err, DataError::InvalidEntry(_)));
    }

    #[test]
    fn composites_sorted_longest_first() {
        let rules = RuleSet::parse_ron(&minimal_ron("")).unwrap();
        let keys: Vec<&str> = rules
            .composites_longest_first()
            .iter()
            .map(|p| p.key.as_str())
            .collect();
        assert_eq!(keys, vec!["maria", "mar", "sol"]);
        assert_eq!(rules.composite("sol").unwrap().kind, RuleKind::Celestial);
        assert!(rules.composite("so").is_none());
    }

    #[test]
    fn malformed_ron_is_an_error() {
        assert!(matches!(
            RuleSet::parse_ron("RuleTables(roots: ["),
            Err(DataError::Ron(_))
        ));
    }
}
