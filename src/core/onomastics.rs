/// Root matcher — sliding-window scan for known onomastic fragments.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::normalize::normalize;
use crate::core::rules::{RuleSet, ROOT_KEY_LEN};
use crate::schema::rules::NameRoot;

/// Result of scanning one name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub normalized: String,
    /// Best-effort syllable split; informational only.
    pub tokens: Vec<String>,
    /// Roots found in the name. No precedence among overlapping matches.
    pub matches: Vec<NameRoot>,
}

/// Origin and meaning synthesized from root matches alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootMeaning {
    pub origin: String,
    pub meaning: String,
    pub glosses: Vec<String>,
}

/// Scan `name` for every root whose key appears as a 2-4 character window.
pub fn analyze_name(name: &str, rules: &RuleSet) -> AnalysisResult {
    let normalized = normalize(name);
    let chars: Vec<char> = normalized.chars().collect();

    let mut seen = FxHashSet::default();
    let mut windows = Vec::new();
    for start in 0..chars.len() {
        for len in ROOT_KEY_LEN {
            if start + len > chars.len() {
                break;
            }
            let window: String = chars[start..start + len].iter().collect();
            if seen.insert(window.clone()) {
                windows.push(window);
            }
        }
    }

    let matches = windows
        .iter()
        .filter_map(|w| rules.root(w))
        .cloned()
        .collect();

    AnalysisResult {
        tokens: syllables(&normalized),
        normalized,
        matches,
    }
}

/// Split the first alphabetic run after every vowel ("valeria" ->
/// "va", "le", "ri", "a"). Falls back to the whole string.
fn syllables(normalized: &str) -> Vec<String> {
    let word: String = normalized
        .chars()
        .skip_while(|c| !c.is_alphabetic())
        .take_while(|c| c.is_alphabetic())
        .collect();
    if word.is_empty() {
        return vec![normalized.to_string()];
    }

    let mut tokens = Vec::new();
    let mut current = String::new();
    for c in word.chars() {
        current.push(c);
        if matches!(c, 'a' | 'e' | 'i' | 'o' | 'u') {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

/// Build an origin and meaning for a name nobody curated, from its roots.
pub fn meaning_from_roots(analysis: &AnalysisResult, rules: &RuleSet) -> RootMeaning {
    let phrases = rules.phrases();
    if analysis.matches.is_empty() {
        return RootMeaning {
            origin: phrases.roots_origin.clone(),
            meaning: phrases.coined_meaning.clone(),
            glosses: Vec::new(),
        };
    }

    let glosses: Vec<String> = analysis.matches.iter().map(|m| m.gloss.clone()).collect();
    let mut origins: Vec<&str> = Vec::new();
    for m in &analysis.matches {
        if !origins.contains(&m.origin.as_str()) {
            origins.push(&m.origin);
        }
    }

    RootMeaning {
        origin: origins.join(", "),
        meaning: format!(
            "{} {}; {}",
            phrases.roots_meaning_prefix,
            glosses.join(", "),
            phrases.roots_meaning_suffix
        ),
        glosses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> RuleSet {
        RuleSet::builtin().unwrap()
    }

    #[test]
    fn empty_name_has_no_matches() {
        let result = analyze_name("", &rules());
        assert_eq!(result.normalized, "");
        assert!(result.matches.is_empty());
    }

    #[test]
    fn ana_matches_hebrew_root() {
        let result = analyze_name("Ana", &rules());
        assert_eq!(result.normalized, "ana");
        let ana = result.matches.iter().find(|m| m.key == "ana").unwrap();
        assert_eq!(ana.origin, "Hebrew");
        assert_eq!(ana.gloss, "grace, compassion");
    }

    #[test]
    fn overlapping_roots_all_reported() {
        let result = analyze_name("Isabel", &rules());
        let keys: Vec<&str> = result.matches.iter().map(|m| m.key.as_str()).collect();
        assert!(keys.contains(&"bel"));
        assert!(keys.contains(&"el"));
    }

    #[test]
    fn diacritics_do_not_block_matches() {
        let result = analyze_name("Válerio", &rules());
        assert!(result.matches.iter().any(|m| m.key == "val"));
    }

    #[test]
    fn repeated_window_reported_once() {
        let result = analyze_name("Anana", &rules());
        assert_eq!(result.matches.iter().filter(|m| m.key == "ana").count(), 1);
    }

    #[test]
    fn no_match_is_not_an_error() {
        let result = analyze_name("Pedro", &rules());
        assert!(result.matches.is_empty());
        assert_eq!(result.normalized, "pedro");
    }

    #[test]
    fn syllable_tokens() {
        assert_eq!(syllables("valeria"), vec!["va", "le", "ri", "a"]);
        assert_eq!(syllables("bern"), vec!["be", "rn"]);
        assert_eq!(syllables("ana sofia"), vec!["a", "na"]);
        assert_eq!(syllables(""), vec![""]);
    }

    #[test]
    fn meaning_from_matched_roots() {
        let rules = rules();
        let analysis = analyze_name("Leomir", &rules);
        let meaning = meaning_from_roots(&analysis, &rules);
        assert_eq!(meaning.origin, "Greek/Latin, Slavic");
        assert!(meaning.meaning.contains("lion, bravery"));
        assert!(meaning.meaning.contains("peace, wonder"));
        assert_eq!(meaning.glosses.len(), 2);
    }

    #[test]
    fn meaning_without_roots_is_generic() {
        let rules = rules();
        let meaning = meaning_from_roots(&analyze_name("Pedro", &rules), &rules);
        assert_eq!(meaning.origin, "Mixed");
        assert_eq!(meaning.meaning, rules.phrases().coined_meaning);
        assert!(meaning.glosses.is_empty());
    }
}
