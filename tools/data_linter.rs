/// Data Linter — validates rule tables and story banks.
///
/// Usage: data_linter [--rules <file.ron>] [--story-banks <file.ron>]
///
/// Load failures are errors (exit 1); quality issues are warnings.

use clap::Parser;
use name_story_engine::core::normalize::normalize;
use name_story_engine::core::rules::{RuleSet, RuleTables, ROOT_KEY_LEN};
use name_story_engine::core::story::StoryBanks;
use name_story_engine::core::template::LexicalSlot;
use name_story_engine::schema::rules::{RuleKind, ThemeTag};
use name_story_engine::Tone;
use std::collections::HashMap;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "data_linter")]
#[command(about = "Validate onomastic rule tables and story banks")]
struct Args {
    #[arg(long, default_value = "onomastic_data/rules.ron")]
    rules: PathBuf,

    #[arg(long, default_value = "onomastic_data/story_banks.ron")]
    story_banks: PathBuf,
}

const MIN_LEXICON: usize = 3;

fn main() {
    let filter =
        EnvFilter::try_from_env("NAME_STORY_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    match std::fs::read_to_string(&args.rules) {
        Ok(contents) => lint_rules(&contents, &mut errors, &mut warnings),
        Err(e) => errors.push(format!("{}: {}", args.rules.display(), e)),
    }

    match StoryBanks::load_from_ron(&args.story_banks) {
        Ok(banks) => {
            println!("Loaded story banks from {}", args.story_banks.display());
            lint_story_banks(&banks, &mut warnings);
        }
        Err(e) => errors.push(format!("{}: {}", args.story_banks.display(), e)),
    }

    println!("\n=== Data Lint Report ===\n");

    if errors.is_empty() && warnings.is_empty() {
        println!("All checks passed!");
    }

    for warning in &warnings {
        println!("WARNING: {}", warning);
    }

    for error in &errors {
        println!("ERROR: {}", error);
    }

    println!(
        "\nSummary: {} errors, {} warnings",
        errors.len(),
        warnings.len()
    );

    if errors.is_empty() {
        process::exit(0);
    } else {
        process::exit(1);
    }
}

fn lint_rules(contents: &str, errors: &mut Vec<String>, warnings: &mut Vec<String>) {
    let tables: RuleTables = match ron::from_str(contents) {
        Ok(tables) => tables,
        Err(e) => {
            errors.push(format!("rules: {}", e));
            return;
        }
    };

    // Raw keys, before the loader normalizes them.
    for root in &tables.roots {
        let len = root.key.chars().count();
        if !ROOT_KEY_LEN.contains(&len) {
            errors.push(format!(
                "root '{}' has {} characters (expected {}-{})",
                root.key,
                len,
                ROOT_KEY_LEN.start(),
                ROOT_KEY_LEN.end()
            ));
        }
        if normalize(&root.key) != root.key {
            warnings.push(format!(
                "root '{}' is not normalized (loads as '{}')",
                root.key,
                normalize(&root.key)
            ));
        }
    }

    for part in &tables.composite_parts {
        if normalize(&part.key) != part.key {
            warnings.push(format!("composite part '{}' is not normalized", part.key));
        }
    }

    let mut word_kinds: HashMap<String, Vec<RuleKind>> = HashMap::new();
    let lists = [
        (&tables.virtues, RuleKind::Virtue),
        (&tables.celestial, RuleKind::Celestial),
        (&tables.nature, RuleKind::Nature),
        (&tables.elements, RuleKind::Element),
    ];
    for (list, kind) in lists {
        for word in list {
            word_kinds.entry(normalize(&word.key)).or_default().push(kind);
        }
    }
    let mut shared: Vec<_> = word_kinds.iter().filter(|(_, k)| k.len() > 1).collect();
    shared.sort();
    for (word, kinds) in shared {
        let tags: Vec<&str> = kinds.iter().map(|k| k.tag()).collect();
        warnings.push(format!("word '{}' is listed under {}", word, tags.join(" and ")));
    }

    match RuleSet::from_tables(tables) {
        Ok(rules) => println!(
            "Loaded {} roots, {} composite parts",
            rules.tables().roots.len(),
            rules.composites_longest_first().len()
        ),
        Err(e) => errors.push(format!("rules: {}", e)),
    }
}

fn lint_story_banks(banks: &StoryBanks, warnings: &mut Vec<String>) {
    for tone in Tone::ALL {
        let bank = banks.tone(tone);
        for t in bank.templates() {
            if t.weight == 0 {
                warnings.push(format!("{}: a template has weight 0 and is never chosen", tone));
            }
        }
        for (slot, name) in [
            (LexicalSlot::Verb, "verbs"),
            (LexicalSlot::Noun, "nouns"),
            (LexicalSlot::Closing, "closings"),
        ] {
            let size = bank.lexicon(slot).len();
            if size < MIN_LEXICON {
                warnings.push(format!(
                    "{}: only {} {} (recommend at least {})",
                    tone, size, name, MIN_LEXICON
                ));
            }
        }
    }

    let mut owner: HashMap<&str, &str> = HashMap::new();
    for kind in RuleKind::BLEND_ORDER {
        let lines = banks.theme(kind);
        if lines.len() < 2 {
            warnings.push(format!(
                "theme '{}' has a single line; stories will repeat it",
                kind.tag()
            ));
        }
        for line in lines {
            if let Some(prev) = owner.insert(line.as_str(), kind.tag()) {
                warnings.push(format!(
                    "line shared by themes '{}' and '{}': {}",
                    prev,
                    kind.tag(),
                    line
                ));
            }
        }
        if banks.note_for(&ThemeTag::new(kind)).is_none() {
            warnings.push(format!("no note for tag '{}'", kind.tag()));
        }
    }

    for cue in banks.cues() {
        if cue.pattern.is_match("") {
            warnings.push(format!("cue '{}' matches every name", cue.pattern.as_str()));
        }
    }
}
