/// Rule enricher — thematic tags and merged meaning/origin text.

use serde::{Deserialize, Serialize};

use crate::core::normalize::normalize;
use crate::core::rules::RuleSet;
use crate::schema::rules::{RuleKind, RuleNote, WordNote};

/// Meaning and origin already known for a name (from the catalog or an
/// earlier pass), to be amended rather than replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeaningBase {
    pub meaning: Option<String>,
    pub origin: Option<String>,
}

impl MeaningBase {
    pub fn new(meaning: &str, origin: &str) -> Self {
        Self {
            meaning: Some(meaning.to_string()),
            origin: Some(origin.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrichment {
    pub tags: Vec<RuleNote>,
    pub merged_meaning: Option<String>,
    pub merged_origin: Option<String>,
}

impl Enrichment {
    /// Feed this result back in as the base of another pass.
    pub fn as_base(&self) -> MeaningBase {
        MeaningBase {
            meaning: self.merged_meaning.clone(),
            origin: self.merged_origin.clone(),
        }
    }
}

/// Apply the theophoric, root-gloss, toponym and word-list rules.
///
/// Every appended sentence is guarded, so enriching an already enriched
/// base adds nothing new.
pub fn enrich_name(name: &str, base: Option<&MeaningBase>, rules: &RuleSet) -> Enrichment {
    let key = normalize(name);
    let tables = rules.tables();
    let phrases = rules.phrases();
    let mut tags = Vec::new();

    // An empty key would "end with" nothing and match no word list anyway,
    // but skipping makes the blank-input path explicit.
    let theophoric = if key.is_empty() {
        None
    } else {
        tables
            .theophoric_suffixes
            .iter()
            .find(|t| key.ends_with(t.suffix.as_str()))
    };
    if let Some(t) = theophoric {
        tags.push(RuleNote {
            kind: RuleKind::Theophoric,
            note: t.note.clone(),
        });
    }

    let mut glosses: Vec<&str> = Vec::new();
    for root in tables.root_glosses.iter().filter(|r| key.contains(r.key.as_str())) {
        tags.push(RuleNote {
            kind: RuleKind::Root,
            note: root.note.clone().unwrap_or_else(|| root.gloss.clone()),
        });
        if !glosses.contains(&root.gloss.as_str()) {
            glosses.push(&root.gloss);
        }
    }

    if let Some(t) = tables.toponyms.iter().find(|t| t.name == key) {
        tags.push(RuleNote {
            kind: RuleKind::Toponym,
            note: t.note.clone(),
        });
    }

    let word_lists: [(&[WordNote], RuleKind, &str); 4] = [
        (&tables.virtues, RuleKind::Virtue, &phrases.virtue),
        (&tables.celestial, RuleKind::Celestial, &phrases.celestial),
        (&tables.nature, RuleKind::Nature, &phrases.nature),
        (&tables.elements, RuleKind::Element, &phrases.element),
    ];
    let mut word_sentences = Vec::new();
    for (list, kind, sentence) in word_lists {
        if let Some(word) = list.iter().find(|w| w.key == key) {
            tags.push(RuleNote {
                kind,
                note: word.note.clone(),
            });
            word_sentences.push(sentence);
        }
    }

    let mut meaning = base
        .and_then(|b| b.meaning.clone())
        .unwrap_or_default();
    let mut origin = base.and_then(|b| b.origin.clone()).unwrap_or_default();

    if theophoric.is_some() {
        append_once(&mut meaning, &phrases.theophoric_meaning);
        let hebrew = &phrases.theophoric_origin;
        if origin.trim().is_empty() {
            origin = hebrew.clone();
        } else if !origin.to_lowercase().contains(&hebrew.to_lowercase()) {
            origin = format!("{} / {}", origin.trim(), hebrew);
        }
    }

    if !glosses.is_empty() && !meaning.contains(phrases.nuances_prefix.as_str()) {
        let nuances = format!("{} {}.", phrases.nuances_prefix, glosses.join(", "));
        append_once(&mut meaning, &nuances);
    }

    for sentence in word_sentences {
        append_once(&mut meaning, sentence);
    }

    Enrichment {
        tags,
        merged_meaning: non_empty(meaning),
        merged_origin: non_empty(origin),
    }
}

/// Append `sentence` with a single separating space unless already present.
fn append_once(text: &mut String, sentence: &str) {
    let sentence = sentence.trim();
    if sentence.is_empty() || text.contains(sentence) {
        return;
    }
    let trimmed = text.trim();
    *text = if trimmed.is_empty() {
        sentence.to_string()
    } else {
        format!("{} {}", trimmed, sentence)
    };
}

fn non_empty(text: String) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}
