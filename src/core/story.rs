/// Story engine — tone banks, tag inference, and seeded story assembly.

use rand::distributions::{Distribution, WeightedIndex};
use regex::Regex;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

use crate::core::normalize::{capitalize, lower_first, normalize};
use crate::core::rng::{derive_seed, Mulberry32};
use crate::core::rules::DataError;
use crate::core::template::{LexicalSlot, Template, TemplateSegment};
use crate::schema::rules::{RuleKind, ThemeTag};
use crate::schema::story::{GeneratedStory, StoryContext};
use crate::schema::tone::Tone;

const BUILTIN_STORY_BANKS: &str = include_str!("../../onomastic_data/story_banks.ron");

/// Attempts made before falling back to a suffixed variant.
pub const DEFAULT_RETRY_LIMIT: u32 = 8;

const MIN_TEMPLATES_PER_TONE: usize = 2;

// RON deserialization helpers; validated and compiled into the types below.

#[derive(Debug, Deserialize)]
struct RonTemplate {
    weight: u32,
    text: String,
}

#[derive(Debug, Deserialize)]
struct RonToneBank {
    templates: Vec<RonTemplate>,
    verbs: Vec<String>,
    nouns: Vec<String>,
    closings: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RonCue {
    pattern: String,
    tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename = "StoryBanks")]
struct RonStoryBanks {
    tones: HashMap<String, RonToneBank>,
    themes: HashMap<String, Vec<String>>,
    neutral: Vec<String>,
    #[serde(default)]
    notes: HashMap<String, String>,
    #[serde(default)]
    cues: Vec<RonCue>,
    exhausted_suffix: String,
}

/// A template with its selection weight.
#[derive(Debug, Clone)]
pub struct WeightedTemplate {
    pub weight: u32,
    pub template: Template,
}

/// Templates and lexicons for one tone.
#[derive(Debug, Clone)]
pub struct ToneBank {
    templates: Vec<WeightedTemplate>,
    chooser: WeightedIndex<u32>,
    verbs: Vec<String>,
    nouns: Vec<String>,
    closings: Vec<String>,
}

impl ToneBank {
    fn from_raw(tone: Tone, raw: RonToneBank) -> Result<ToneBank, DataError> {
        if raw.templates.len() < MIN_TEMPLATES_PER_TONE {
            return Err(DataError::InvalidEntry(format!(
                "tone '{}' needs at least {} templates, found {}",
                tone,
                MIN_TEMPLATES_PER_TONE,
                raw.templates.len()
            )));
        }

        let mut templates = Vec::with_capacity(raw.templates.len());
        for t in raw.templates {
            let template = Template::parse(&t.text)?;
            if !template.has_clauses() {
                return Err(DataError::InvalidEntry(format!(
                    "tone '{}': template without {{clauses}}: {}",
                    tone, t.text
                )));
            }
            templates.push(WeightedTemplate {
                weight: t.weight,
                template,
            });
        }

        let chooser = WeightedIndex::new(templates.iter().map(|t| t.weight))
            .map_err(|e| DataError::InvalidEntry(format!("tone '{}': {}", tone, e)))?;

        let bank = ToneBank {
            templates,
            chooser,
            verbs: clean_lines(raw.verbs),
            nouns: clean_lines(raw.nouns),
            closings: clean_lines(raw.closings),
        };

        for slot in bank.templates.iter().flat_map(|t| t.template.lexical_slots()) {
            if bank.lexicon(slot).is_empty() {
                return Err(DataError::InvalidEntry(format!(
                    "tone '{}': templates use {{{}}} but its bank is empty",
                    tone,
                    slot_name(slot)
                )));
            }
        }

        Ok(bank)
    }

    pub fn templates(&self) -> &[WeightedTemplate] {
        &self.templates
    }

    pub fn lexicon(&self, slot: LexicalSlot) -> &[String] {
        match slot {
            LexicalSlot::Verb => &self.verbs,
            LexicalSlot::Noun => &self.nouns,
            LexicalSlot::Closing => &self.closings,
        }
    }
}

/// The four tone banks, one field per tone so lookup cannot miss.
#[derive(Debug, Clone)]
struct ToneBanks {
    epic: ToneBank,
    poetic: ToneBank,
    mythological: ToneBank,
    fantastical: ToneBank,
}

impl ToneBanks {
    fn get(&self, tone: Tone) -> &ToneBank {
        match tone {
            Tone::Epic => &self.epic,
            Tone::Poetic => &self.poetic,
            Tone::Mythological => &self.mythological,
            Tone::Fantastical => &self.fantastical,
        }
    }
}

/// A compiled name cue: when `pattern` matches the normalized name, the
/// story gains `tags`.
#[derive(Debug, Clone)]
pub struct NameCue {
    pub pattern: Regex,
    pub tags: Vec<ThemeTag>,
}

/// Everything the story engine draws from, validated at load time.
#[derive(Debug, Clone)]
pub struct StoryBanks {
    tones: ToneBanks,
    themes: FxHashMap<RuleKind, Vec<String>>,
    neutral: Vec<String>,
    /// Keyed by canonical tag.
    notes: FxHashMap<String, String>,
    cues: Vec<NameCue>,
    exhausted_suffix: String,
}

impl StoryBanks {
    /// The story banks compiled into the crate.
    pub fn builtin() -> Result<StoryBanks, DataError> {
        Self::parse_ron(BUILTIN_STORY_BANKS)
    }

    /// Load story banks from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<StoryBanks, DataError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse story banks from a RON string.
    pub fn parse_ron(input: &str) -> Result<StoryBanks, DataError> {
        let raw: RonStoryBanks = ron::from_str(input)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RonStoryBanks) -> Result<StoryBanks, DataError> {
        let mut by_tone: FxHashMap<Tone, RonToneBank> = FxHashMap::default();
        for (key, bank) in raw.tones {
            let tone: Tone = key
                .parse()
                .map_err(|e| DataError::InvalidEntry(format!("tone bank: {}", e)))?;
            if by_tone.insert(tone, bank).is_some() {
                return Err(DataError::InvalidEntry(format!(
                    "tone '{}' defined twice",
                    tone
                )));
            }
        }
        let mut take = |tone: Tone| -> Result<ToneBank, DataError> {
            let bank = by_tone.remove(&tone).ok_or_else(|| {
                DataError::InvalidEntry(format!("missing bank for tone '{}'", tone))
            })?;
            ToneBank::from_raw(tone, bank)
        };
        let tones = ToneBanks {
            epic: take(Tone::Epic)?,
            poetic: take(Tone::Poetic)?,
            mythological: take(Tone::Mythological)?,
            fantastical: take(Tone::Fantastical)?,
        };

        let mut themes = FxHashMap::default();
        for (key, lines) in raw.themes {
            let kind = RuleKind::from_key(&normalize(&key))
                .ok_or_else(|| DataError::InvalidEntry(format!("unknown theme bank '{}'", key)))?;
            themes.insert(kind, clean_lines(lines));
        }
        for kind in RuleKind::BLEND_ORDER {
            if themes.get(&kind).map_or(true, |lines| lines.is_empty()) {
                return Err(DataError::InvalidEntry(format!(
                    "theme bank '{}' is missing or empty",
                    kind.tag()
                )));
            }
        }

        let neutral = clean_lines(raw.neutral);
        if neutral.is_empty() {
            return Err(DataError::InvalidEntry("neutral bank is empty".to_string()));
        }

        let mut notes = FxHashMap::default();
        for (key, note) in raw.notes {
            let tag = parse_tag(&key)?;
            notes.insert(tag.canonical(), note.trim().to_string());
        }

        let mut cues = Vec::with_capacity(raw.cues.len());
        for cue in raw.cues {
            let pattern = Regex::new(&cue.pattern)?;
            let tags = cue
                .tags
                .iter()
                .map(|t| parse_tag(t))
                .collect::<Result<Vec<_>, _>>()?;
            cues.push(NameCue { pattern, tags });
        }

        let exhausted_suffix = raw.exhausted_suffix.trim().to_string();
        if exhausted_suffix.is_empty() {
            return Err(DataError::InvalidEntry(
                "exhausted_suffix must not be empty".to_string(),
            ));
        }

        Ok(StoryBanks {
            tones,
            themes,
            neutral,
            notes,
            cues,
            exhausted_suffix,
        })
    }

    pub fn tone(&self, tone: Tone) -> &ToneBank {
        self.tones.get(tone)
    }

    pub fn theme(&self, kind: RuleKind) -> &[String] {
        self.themes.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn neutral(&self) -> &[String] {
        &self.neutral
    }

    /// Annotation for a tag: the exact canonical form first, then its kind.
    pub fn note_for(&self, tag: &ThemeTag) -> Option<&str> {
        self.notes
            .get(&tag.canonical())
            .or_else(|| self.notes.get(tag.kind.tag()))
            .map(String::as_str)
    }

    pub fn cues(&self) -> &[NameCue] {
        &self.cues
    }

    pub fn exhausted_suffix(&self) -> &str {
        &self.exhausted_suffix
    }

    /// Tags implied by the name alone, in cue order, without duplicates.
    pub fn infer_tags(&self, name: &str) -> Vec<ThemeTag> {
        let key = normalize(name);
        let mut tags = Vec::new();
        for cue in self.cues.iter().filter(|c| c.pattern.is_match(&key)) {
            for tag in &cue.tags {
                if !tags.contains(tag) {
                    tags.push(tag.clone());
                }
            }
        }
        tags
    }

    /// Caller tags first, then inferred ones. Unrecognized caller tags are
    /// dropped.
    pub fn resolve_tags(&self, name: &str, supplied: &[String]) -> Vec<ThemeTag> {
        let mut tags: Vec<ThemeTag> = Vec::new();
        for raw in supplied {
            match ThemeTag::parse(raw) {
                Some(tag) if !tags.contains(&tag) => tags.push(tag),
                Some(_) => {}
                None => debug!(tag = raw.as_str(), "ignoring unknown story tag"),
            }
        }
        for tag in self.infer_tags(name) {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        tags
    }

    /// Descriptive lines for the given tags, banks in blend order; the
    /// neutral bank when no tag selects one.
    pub fn clause_pool(&self, tags: &[ThemeTag]) -> Vec<&str> {
        let pool: Vec<&str> = RuleKind::BLEND_ORDER
            .iter()
            .filter(|kind| tags.iter().any(|t| t.kind == **kind))
            .flat_map(|kind| self.theme(*kind))
            .map(String::as_str)
            .collect();
        if pool.is_empty() {
            self.neutral.iter().map(String::as_str).collect()
        } else {
            pool
        }
    }
}

/// Renders stories from a set of banks.
#[derive(Debug, Clone)]
pub struct StoryEngine {
    banks: StoryBanks,
    retry_limit: u32,
}

impl StoryEngine {
    pub fn new(banks: StoryBanks) -> Self {
        Self {
            banks,
            retry_limit: DEFAULT_RETRY_LIMIT,
        }
    }

    /// Total attempts per story, including the first. Zero is treated as one.
    pub fn with_retry_limit(mut self, retry_limit: u32) -> Self {
        self.retry_limit = retry_limit.max(1);
        self
    }

    pub fn banks(&self) -> &StoryBanks {
        &self.banks
    }

    pub fn retry_limit(&self) -> u32 {
        self.retry_limit
    }

    /// Render a story for `ctx`.
    ///
    /// The same context always yields the same story. Texts in
    /// `ctx.avoid` are skipped by reseeding; once the retry bound is spent
    /// the first rendering is returned with a distinguishing suffix.
    pub fn build_story(&self, ctx: &StoryContext) -> GeneratedStory {
        let tags = self.banks.resolve_tags(&ctx.name, &ctx.tags);
        let pool = self.banks.clause_pool(&tags);
        let bank = self.banks.tone(ctx.tone);
        let seed = derive_seed(&ctx.name, ctx.tone, ctx.seed);

        let first = self.render(bank, ctx, &pool, seed);
        let text = if !ctx.avoid.contains(&first) {
            first
        } else {
            self.retry(bank, ctx, &pool, seed, first)
        };

        let mut notes: Vec<String> = Vec::new();
        for tag in &tags {
            if let Some(note) = self.banks.note_for(tag) {
                if !notes.iter().any(|n| n == note) {
                    notes.push(note.to_string());
                }
            }
        }

        GeneratedStory {
            tone: ctx.tone,
            text,
            notes,
        }
    }

    fn retry(
        &self,
        bank: &ToneBank,
        ctx: &StoryContext,
        pool: &[&str],
        seed: u32,
        first: String,
    ) -> String {
        for attempt in 1..self.retry_limit {
            let text = self.render(bank, ctx, pool, seed.wrapping_add(attempt));
            if !ctx.avoid.contains(&text) {
                debug!(name = ctx.name.as_str(), attempt, "story reseeded past avoid set");
                return text;
            }
        }

        warn!(
            name = ctx.name.as_str(),
            tone = ctx.tone.key(),
            attempts = self.retry_limit,
            "every attempt collided with the avoid set; suffixing"
        );
        let suffix = &self.banks.exhausted_suffix;
        let mut candidate = format!("{} {}", first, suffix);
        // Each collision must be one of the avoided texts, so this ends
        // within avoid.len() + 2 rounds.
        let mut n = 2;
        while ctx.avoid.contains(&candidate) {
            candidate = format!("{} {} ({})", first, suffix, n);
            n += 1;
        }
        candidate
    }

    fn render(&self, bank: &ToneBank, ctx: &StoryContext, pool: &[&str], seed: u32) -> String {
        let mut rng = Mulberry32::new(seed);
        let template = &bank.templates[bank.chooser.sample(&mut rng)].template;
        let name = capitalize(ctx.name.trim());
        let meaning = ctx.meaning.trim().trim_end_matches('.');

        let mut out = String::new();
        for segment in &template.segments {
            match segment {
                TemplateSegment::Literal(text) => out.push_str(text),
                TemplateSegment::Name => out.push_str(&name),
                TemplateSegment::Meaning => out.push_str(meaning),
                TemplateSegment::MeaningLower => out.push_str(&lower_first(meaning)),
                TemplateSegment::Lexeme(slot) => {
                    if let Some(word) = rng.pick(bank.lexicon(*slot)) {
                        out.push_str(word);
                    }
                }
                TemplateSegment::Clauses => {
                    let count = 2 + rng.index(2);
                    let clauses: Vec<&str> =
                        rng.pick_distinct(pool, count).into_iter().copied().collect();
                    out.push_str(&clauses.join(" "));
                }
            }
        }

        out.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

fn parse_tag(raw: &str) -> Result<ThemeTag, DataError> {
    ThemeTag::parse(raw).ok_or_else(|| DataError::InvalidEntry(format!("unknown tag '{}'", raw)))
}

fn clean_lines(lines: Vec<String>) -> Vec<String> {
    let mut seen = FxHashSet::default();
    lines
        .into_iter()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty() && seen.insert(l.clone()))
        .collect()
}

fn slot_name(slot: LexicalSlot) -> &'static str {
    match slot {
        LexicalSlot::Verb => "verb",
        LexicalSlot::Noun => "noun",
        LexicalSlot::Closing => "closing",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> StoryEngine {
        StoryEngine::new(StoryBanks::builtin().unwrap())
    }

    /// Banks where every tone renders exactly one text per name.
    fn minimal_ron(template: &str) -> String {
        let tone = format!(
            r#"(templates: [(weight: 1, text: "{t}"), (weight: 2, text: "{t}")], verbs: ["go"], nouns: ["road"], closings: ["at last"])"#,
            t = template
        );
        format!(
            r#"StoryBanks(
                tones: {{ "epic": {tone}, "poetic": {tone}, "mythological": {tone}, "fantastical": {tone} }},
                themes: {{
                    "celestial": ["Stars."], "nature": ["Leaves."], "element": ["Fire."],
                    "virtue": ["Virtue."], "theophoric": ["Prayer."], "toponym": ["Streets."],
                    "root": ["Roots."],
                }},
                neutral: ["Plain."],
                notes: {{ "celeste": "Sky note." }},
                cues: [(pattern: "sol", tags: ["celestial"])],
                exhausted_suffix: "(again)",
            )"#,
            tone = tone
        )
    }

    fn minimal_engine(template: &str) -> StoryEngine {
        StoryEngine::new(StoryBanks::parse_ron(&minimal_ron(template)).unwrap())
    }

    fn all_theme_lines_except(banks: &StoryBanks, keep: RuleKind) -> Vec<String> {
        let mut lines: Vec<String> = RuleKind::BLEND_ORDER
            .iter()
            .filter(|k| **k != keep)
            .flat_map(|k| banks.theme(*k).to_vec())
            .collect();
        lines.extend(banks.neutral().iter().cloned());
        lines
    }

    #[test]
    fn builtin_banks_load() {
        let banks = StoryBanks::builtin().unwrap();
        for tone in Tone::ALL {
            assert!(banks.tone(tone).templates().len() >= MIN_TEMPLATES_PER_TONE);
        }
        for kind in RuleKind::BLEND_ORDER {
            assert!(!banks.theme(kind).is_empty(), "empty bank {:?}", kind);
        }
        assert!(!banks.cues().is_empty());
    }

    #[test]
    fn same_context_same_story() {
        let engine = engine();
        let ctx = StoryContext::new("Valeria", "Strength, courage.", Tone::Epic, 42);
        assert_eq!(engine.build_story(&ctx), engine.build_story(&ctx));
    }

    #[test]
    fn tones_diverge() {
        let engine = engine();
        let epic = engine.build_story(&StoryContext::new("Valeria", "Strength.", Tone::Epic, 1));
        let poetic =
            engine.build_story(&StoryContext::new("Valeria", "Strength.", Tone::Poetic, 1));
        assert_ne!(epic.text, poetic.text);
        assert_eq!(poetic.tone, Tone::Poetic);
    }

    #[test]
    fn name_is_capitalized_and_meaning_trimmed() {
        let engine = minimal_engine("{name}: {meaning}. {clauses}");
        let story = engine.build_story(&StoryContext::new("ana", "Grace, compassion.", Tone::Epic, 3));
        assert_eq!(story.text, "Ana: Grace, compassion. Plain.");
    }

    #[test]
    fn meaning_lower_slot() {
        let engine = minimal_engine("{name} means {meaning_lower}. {clauses}");
        let story = engine.build_story(&StoryContext::new("Ana", "Grace.", Tone::Poetic, 3));
        assert_eq!(story.text, "Ana means grace. Plain.");
    }

    #[test]
    fn avoided_text_is_not_repeated() {
        let engine = engine();
        let ctx = StoryContext::new("Valeria", "Strength, courage.", Tone::Mythological, 9);
        let first = engine.build_story(&ctx);
        let second = engine.build_story(&ctx.clone().with_avoid([first.text.clone()]));
        assert_ne!(first.text, second.text);
        assert!(!second.text.ends_with("(another telling)"));
    }

    #[test]
    fn exhausted_retries_append_suffix() {
        let engine = minimal_engine("{name} went. {clauses}");
        let ctx = StoryContext::new("Ana", "Grace.", Tone::Epic, 0);
        let first = engine.build_story(&ctx);
        assert_eq!(first.text, "Ana went. Plain.");

        let ctx = ctx.with_avoid([first.text.clone()]);
        let second = engine.build_story(&ctx);
        assert_eq!(second.text, "Ana went. Plain. (again)");

        let ctx = ctx.with_avoid([second.text.clone()]);
        let third = engine.build_story(&ctx);
        assert_eq!(third.text, "Ana went. Plain. (again) (2)");
    }

    #[test]
    fn retry_limit_of_one_goes_straight_to_suffix() {
        let limited = engine().with_retry_limit(1);
        let ctx = StoryContext::new("Leo", "Lion.", Tone::Fantastical, 5);
        let first = limited.build_story(&ctx);
        let second = limited.build_story(&ctx.clone().with_avoid([first.text.clone()]));
        assert_eq!(second.text, format!("{} (another telling)", first.text));
        assert_eq!(engine().with_retry_limit(0).retry_limit(), 1);
    }

    #[test]
    fn celestial_tag_draws_only_celestial_clauses() {
        let engine = engine();
        let banks = engine.banks();
        let foreign = all_theme_lines_except(banks, RuleKind::Celestial);
        for tone in Tone::ALL {
            for seed in 0..20 {
                let ctx = StoryContext::new("Tomas", "Twin.", tone, seed).with_tags(["celeste"]);
                let story = engine.build_story(&ctx);
                for line in &foreign {
                    assert!(!story.text.contains(line.as_str()), "{:?} leaked: {}", line, story.text);
                }
                let celestial = banks
                    .theme(RuleKind::Celestial)
                    .iter()
                    .filter(|l| story.text.contains(l.as_str()))
                    .count();
                assert!(celestial >= 2, "too few clauses in {}", story.text);
                assert_eq!(story.notes.len(), 1);
            }
        }
    }

    #[test]
    fn untagged_name_uses_neutral_bank() {
        let engine = engine();
        let banks = engine.banks();
        let story = engine.build_story(&StoryContext::new("Tomas", "Twin.", Tone::Epic, 11));
        assert!(banks.neutral().iter().any(|l| story.text.contains(l.as_str())));
        assert!(story.notes.is_empty());
    }

    #[test]
    fn cues_infer_tags_from_name() {
        let banks = StoryBanks::builtin().unwrap();
        let canon = |name: &str| -> Vec<String> {
            banks.infer_tags(name).iter().map(ThemeTag::canonical).collect()
        };
        assert_eq!(canon("Mar"), vec!["nature", "element:water"]);
        assert_eq!(canon("Marisol"), vec!["celestial", "element:fire"]);
        assert_eq!(canon("Gabriel"), vec!["theophoric"]);
        assert_eq!(canon("Roma"), vec!["toponym"]);
        assert_eq!(canon("Esperanza"), vec!["virtue"]);
        assert!(canon("Tomas").is_empty());
        assert!(canon("").is_empty());
    }

    #[test]
    fn caller_tags_come_first_and_unknown_are_dropped() {
        let banks = StoryBanks::builtin().unwrap();
        let tags = banks.resolve_tags(
            "Gabriel",
            &["Virtud".to_string(), "dragon".to_string(), "teoforico".to_string()],
        );
        let canon: Vec<String> = tags.iter().map(ThemeTag::canonical).collect();
        assert_eq!(canon, vec!["virtue", "theophoric"]);
    }

    #[test]
    fn notes_follow_tags() {
        let engine = engine();
        let story = engine.build_story(&StoryContext::new("Mar", "Sea.", Tone::Poetic, 2));
        assert_eq!(story.notes.len(), 2);
        assert!(story.notes[1].contains("water"));
    }

    #[test]
    fn note_keys_accept_aliases() {
        let engine = minimal_engine("{clauses}");
        let story = engine.build_story(&StoryContext::new("Solange", "Sun.", Tone::Epic, 0));
        assert_eq!(story.notes, vec!["Sky note.".to_string()]);
        assert_eq!(story.text, "Stars.");
    }

    #[test]
    fn template_without_clauses_rejected() {
        let err = StoryBanks::parse_ron(&minimal_ron("{name}")).unwrap_err();
        assert!(matches!(err, DataError::InvalidEntry(_)));
    }

    #[test]
    fn unknown_slot_rejected() {
        let err = StoryBanks::parse_ron(&minimal_ron("{hero} {clauses}")).unwrap_err();
        assert!(matches!(err, DataError::TemplateParse(_)));
    }

    #[test]
    fn bad_cue_pattern_rejected() {
        let ron = minimal_ron("{clauses}").replace("pattern: \"sol\"", "pattern: \"(sol\"");
        assert!(matches!(StoryBanks::parse_ron(&ron), Err(DataError::Regex(_))));
    }

    #[test]
    fn missing_tone_rejected() {
        let ron = minimal_ron("{clauses}").replace("\"fantastical\"", "\"epica\"");
        assert!(matches!(StoryBanks::parse_ron(&ron), Err(DataError::InvalidEntry(_))));
    }

    #[test]
    fn zero_weights_rejected() {
        let ron = minimal_ron("{clauses}")
            .replace("weight: 1", "weight: 0")
            .replace("weight: 2", "weight: 0");
        assert!(matches!(StoryBanks::parse_ron(&ron), Err(DataError::InvalidEntry(_))));
    }
}
