use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::tone::Tone;

/// Input to the story engine. Immutable for the duration of one
/// generation, including its retries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryContext {
    /// Display form of the name, interpolated as-is.
    pub name: String,
    pub meaning: String,
    pub tone: Tone,
    /// Caller-supplied thematic hints, merged with tags inferred from the name.
    pub tags: Vec<String>,
    /// Caller seed; combined with the name and tone before use.
    pub seed: u32,
    /// Texts the result must not reproduce exactly.
    pub avoid: FxHashSet<String>,
}

impl StoryContext {
    pub fn new(name: &str, meaning: &str, tone: Tone, seed: u32) -> Self {
        Self {
            name: name.to_string(),
            meaning: meaning.to_string(),
            tone,
            tags: Vec::new(),
            seed,
            avoid: FxHashSet::default(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn with_avoid<I, S>(mut self, avoid: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.avoid.extend(avoid.into_iter().map(Into::into));
        self
    }
}

/// A rendered narrative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedStory {
    pub tone: Tone,
    pub text: String,
    /// One rationale line per tag that carries an annotation.
    pub notes: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_builders() {
        let ctx = StoryContext::new("Luna", "Moon.", Tone::Poetic, 7)
            .with_tags(["celeste"])
            .with_avoid(vec!["old text".to_string()]);
        assert_eq!(ctx.tags, vec!["celeste".to_string()]);
        assert!(ctx.avoid.contains("old text"));
        assert_eq!(ctx.seed, 7);
    }

    #[test]
    fn generated_story_json() {
        let story = GeneratedStory {
            tone: Tone::Epic,
            text: "Leo stood firm.".to_string(),
            notes: vec![],
        };
        let json = serde_json::to_string(&story).unwrap();
        assert_eq!(json, r#"{"tone":"epic","text":"Leo stood firm.","notes":[]}"#);
    }
}
