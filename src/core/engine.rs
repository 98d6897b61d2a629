/// The name engine: name or phrase in, origin, meaning, tags and story out.
///
/// Resolution order is catalog hit on the whole name, then compound
/// resolution, then synthesis from matched roots. Whatever base that
/// yields is passed through the rule enricher, and the resulting tags
/// steer the story engine.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::core::catalog::CatalogLookup;
use crate::core::compound::{analyze_compound, CompoundResult};
use crate::core::enrich::{enrich_name, Enrichment, MeaningBase};
use crate::core::normalize::{capitalize, normalize};
use crate::core::onomastics::{analyze_name, meaning_from_roots, AnalysisResult};
use crate::core::rules::{DataError, RuleSet};
use crate::core::story::{StoryBanks, StoryEngine, DEFAULT_RETRY_LIMIT};
use crate::schema::rules::{RuleKind, RuleNote};
use crate::schema::story::{GeneratedStory, StoryContext};
use crate::schema::tone::Tone;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("data error: {0}")]
    Data(#[from] DataError),
}

/// Per-call generation options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateOptions {
    pub tone: Tone,
    /// Omitted: the engine's default seed, or a random one when none is
    /// configured (the output is then not reproducible).
    #[serde(default)]
    pub seed: Option<u32>,
    /// Thematic hints merged with the tags found by the rules.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Earlier story texts the new one must not repeat.
    #[serde(default)]
    pub avoid: Vec<String>,
}

impl GenerateOptions {
    pub fn new(tone: Tone) -> Self {
        Self {
            tone,
            seed: None,
            tags: Vec::new(),
            avoid: Vec::new(),
        }
    }

    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn avoid<I, S>(mut self, avoid: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.avoid.extend(avoid.into_iter().map(Into::into));
        self
    }
}

/// Where the base origin and meaning came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeaningSource {
    Catalog,
    Compound,
    Roots,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Display form of the name the story was written for.
    pub name: String,
    pub origin: String,
    pub meaning: String,
    pub source: MeaningSource,
    pub tags: Vec<RuleNote>,
    pub story: GeneratedStory,
}

/// The top-level engine. Built via `NameEngine::builder()`.
///
/// Holds only read-only tables, so one engine can serve any number of
/// concurrent calls.
#[derive(Debug, Clone)]
pub struct NameEngine {
    rules: RuleSet,
    stories: StoryEngine,
    default_seed: Option<u32>,
}

/// Builder for constructing a `NameEngine`.
#[derive(Debug, Default)]
pub struct NameEngineBuilder {
    rules_file: Option<PathBuf>,
    story_banks_file: Option<PathBuf>,
    /// Directly provided tables; take precedence over files.
    rules: Option<RuleSet>,
    story_banks: Option<StoryBanks>,
    retry_limit: Option<u32>,
    default_seed: Option<u32>,
}

struct ResolvedBase {
    name: String,
    base: MeaningBase,
    source: MeaningSource,
    part_kinds: Vec<RuleKind>,
}

impl NameEngine {
    pub fn builder() -> NameEngineBuilder {
        NameEngineBuilder::default()
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn stories(&self) -> &StoryEngine {
        &self.stories
    }

    /// Scan a name for known roots.
    pub fn analyze(&self, name: &str) -> AnalysisResult {
        analyze_name(name, &self.rules)
    }

    pub fn enrich(&self, name: &str, base: Option<&MeaningBase>) -> Enrichment {
        enrich_name(name, base, &self.rules)
    }

    pub fn compound<C>(&self, input: &str, catalog: &C) -> Option<CompoundResult>
    where
        C: CatalogLookup + ?Sized,
    {
        analyze_compound(input, catalog, &self.rules)
    }

    pub fn build_story(&self, ctx: &StoryContext) -> GeneratedStory {
        self.stories.build_story(ctx)
    }

    /// Run the full pipeline for one name or phrase.
    ///
    /// Never fails: blank input, unknown names and non-compounds all fall
    /// through to the generic root-based meaning.
    pub fn generate<C>(&self, input: &str, catalog: &C, options: &GenerateOptions) -> GenerationResult
    where
        C: CatalogLookup + ?Sized,
    {
        let seed = self.resolve_seed(options.seed);
        self.generate_seeded(input, catalog, options, seed)
    }

    /// Tell a story for a name whose meaning the caller already has,
    /// skipping catalog and compound resolution.
    pub fn tell(&self, name: &str, meaning: &str, options: &GenerateOptions) -> GeneratedStory {
        let enrichment = enrich_name(name, None, &self.rules);
        let mut tags = options.tags.clone();
        tags.extend(enrichment.tags.iter().map(|t| t.kind.tag().to_string()));

        let seed = self.resolve_seed(options.seed);
        let ctx = StoryContext::new(name.trim(), meaning, options.tone, seed)
            .with_tags(tags)
            .with_avoid(options.avoid.iter().cloned());
        self.stories.build_story(&ctx)
    }

    /// Generate `count` stories for the same name, each avoiding the texts
    /// of all previous ones (and of `options.avoid`).
    pub fn generate_variants<C>(
        &self,
        input: &str,
        catalog: &C,
        options: &GenerateOptions,
        count: usize,
    ) -> Vec<GenerationResult>
    where
        C: CatalogLookup + ?Sized,
    {
        let seed = self.resolve_seed(options.seed);
        let mut options = options.clone();
        let mut results = Vec::with_capacity(count);
        for _ in 0..count {
            let result = self.generate_seeded(input, catalog, &options, seed);
            options.avoid.push(result.story.text.clone());
            results.push(result);
        }
        results
    }

    fn resolve_seed(&self, requested: Option<u32>) -> u32 {
        requested
            .or(self.default_seed)
            .unwrap_or_else(rand::random::<u32>)
    }

    fn generate_seeded<C>(
        &self,
        input: &str,
        catalog: &C,
        options: &GenerateOptions,
        seed: u32,
    ) -> GenerationResult
    where
        C: CatalogLookup + ?Sized,
    {
        let shown = input.split_whitespace().collect::<Vec<_>>().join(" ");
        let resolved = self.resolve_base(&shown, catalog);
        let enrichment = enrich_name(&shown, Some(&resolved.base), &self.rules);

        let origin = enrichment
            .merged_origin
            .clone()
            .or_else(|| resolved.base.origin.clone())
            .unwrap_or_default();
        let meaning = enrichment
            .merged_meaning
            .clone()
            .or_else(|| resolved.base.meaning.clone())
            .unwrap_or_default();

        let mut story_tags = options.tags.clone();
        story_tags.extend(enrichment.tags.iter().map(|t| t.kind.tag().to_string()));
        story_tags.extend(resolved.part_kinds.iter().map(|k| k.tag().to_string()));

        let ctx = StoryContext::new(&resolved.name, &meaning, options.tone, seed)
            .with_tags(story_tags)
            .with_avoid(options.avoid.iter().cloned());
        let story = self.stories.build_story(&ctx);

        GenerationResult {
            name: resolved.name,
            origin,
            meaning,
            source: resolved.source,
            tags: enrichment.tags,
            story,
        }
    }

    /// `shown` is the input with whitespace runs collapsed.
    fn resolve_base<C>(&self, shown: &str, catalog: &C) -> ResolvedBase
    where
        C: CatalogLookup + ?Sized,
    {
        if let Some(entry) = catalog.lookup(&normalize(shown)) {
            debug!(name = shown, "catalog hit");
            let name = if entry.name.trim().is_empty() {
                capitalize(shown)
            } else {
                entry.name.trim().to_string()
            };
            let mut base = MeaningBase {
                meaning: non_blank(&entry.meaning),
                origin: non_blank(&entry.origin),
            };
            if base.meaning.is_none() || base.origin.is_none() {
                debug!(name = shown, "catalog entry incomplete, filling from roots");
                let roots = meaning_from_roots(&analyze_name(shown, &self.rules), &self.rules);
                base.meaning.get_or_insert(roots.meaning);
                base.origin.get_or_insert(roots.origin);
            }
            return ResolvedBase {
                name,
                base,
                source: MeaningSource::Catalog,
                part_kinds: Vec::new(),
            };
        }

        // The split only shapes the meaning; the story keeps the name as given.
        if let Some(compound) = analyze_compound(shown, catalog, &self.rules) {
            debug!(
                name = shown,
                split = compound.name.as_str(),
                parts = compound.parts.len(),
                "resolved as compound"
            );
            return ResolvedBase {
                part_kinds: compound.parts.iter().filter_map(|p| p.kind).collect(),
                base: MeaningBase::new(&compound.meaning, &compound.origin),
                name: capitalize_words(shown),
                source: MeaningSource::Compound,
            };
        }

        debug!(name = shown, "falling back to root synthesis");
        let roots = meaning_from_roots(&analyze_name(shown, &self.rules), &self.rules);
        ResolvedBase {
            name: capitalize(shown),
            base: MeaningBase::new(&roots.meaning, &roots.origin),
            source: MeaningSource::Roots,
            part_kinds: Vec::new(),
        }
    }
}

impl NameEngineBuilder {
    pub fn rules_file(mut self, path: impl AsRef<Path>) -> Self {
        self.rules_file = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn story_banks_file(mut self, path: impl AsRef<Path>) -> Self {
        self.story_banks_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Provide rule tables directly (for testing without files).
    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Provide story banks directly (for testing without files).
    pub fn with_story_banks(mut self, banks: StoryBanks) -> Self {
        self.story_banks = Some(banks);
        self
    }

    /// Total attempts per story before suffixing. Defaults to 8.
    pub fn retry_limit(mut self, retry_limit: u32) -> Self {
        self.retry_limit = Some(retry_limit);
        self
    }

    /// Seed used when a call supplies none.
    pub fn default_seed(mut self, seed: u32) -> Self {
        self.default_seed = Some(seed);
        self
    }

    pub fn build(self) -> Result<NameEngine, EngineError> {
        let rules = match (self.rules, &self.rules_file) {
            (Some(rules), _) => rules,
            (None, Some(path)) => RuleSet::load_from_ron(path)?,
            (None, None) => RuleSet::builtin()?,
        };

        let banks = match (self.story_banks, &self.story_banks_file) {
            (Some(banks), _) => banks,
            (None, Some(path)) => StoryBanks::load_from_ron(path)?,
            (None, None) => StoryBanks::builtin()?,
        };

        let stories =
            StoryEngine::new(banks).with_retry_limit(self.retry_limit.unwrap_or(DEFAULT_RETRY_LIMIT));

        Ok(NameEngine {
            rules,
            stories,
            default_seed: self.default_seed,
        })
    }
}

fn capitalize_words(text: &str) -> String {
    text.split(' ').map(capitalize).collect::<Vec<_>>().join(" ")
}

fn non_blank(text: &str) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
