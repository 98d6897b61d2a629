/// Name Story — generate the origin, meaning and a story for a name.
///
/// Usage: name_story <name> [--tone <tone>] [--seed <n>] [--catalog <file.json>]
///                   [--tag <tag>]... [--avoid <text>]... [--variants <n>] [--json]
///
/// Log output goes to stderr; filter it with NAME_STORY_LOG (e.g. `debug`).

use clap::Parser;
use name_story_engine::core::catalog::{Catalog, CatalogLookup, EmptyCatalog};
use name_story_engine::{GenerateOptions, GenerationResult, NameEngine, Tone};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "name_story")]
#[command(about = "Generate an origin, meaning and short story for a personal name")]
struct Args {
    /// Name or phrase, e.g. "Marisol" or "Ana Sofía"
    name: String,

    /// epic, poetic, mythological or fantastical (Spanish labels accepted)
    #[arg(short, long, default_value = "epic")]
    tone: Tone,

    /// Seed for reproducible output; random when omitted
    #[arg(short, long)]
    seed: Option<u32>,

    /// JSON array of curated name records
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Thematic hint, repeatable (celestial, nature, element:water, ...)
    #[arg(long = "tag")]
    tags: Vec<String>,

    /// A previous story text to avoid, repeatable
    #[arg(long)]
    avoid: Vec<String>,

    /// Number of distinct stories to generate
    #[arg(short = 'n', long, default_value = "1")]
    variants: usize,

    /// Rule tables RON file (defaults to the built-in tables)
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Story banks RON file (defaults to the built-in banks)
    #[arg(long)]
    story_banks: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    let filter =
        EnvFilter::try_from_env("NAME_STORY_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut builder = NameEngine::builder();
    if let Some(ref path) = args.rules {
        builder = builder.rules_file(path);
    }
    if let Some(ref path) = args.story_banks {
        builder = builder.story_banks_file(path);
    }
    let engine = match builder.build() {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            process::exit(1);
        }
    };

    let catalog: Box<dyn CatalogLookup> = match args.catalog {
        Some(ref path) => match Catalog::load_from_json(path) {
            Ok(catalog) => {
                eprintln!("Loaded {} catalog entries", catalog.len());
                Box::new(catalog)
            }
            Err(e) => {
                eprintln!("ERROR: Failed to load catalog '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => Box::new(EmptyCatalog),
    };

    let mut options = GenerateOptions::new(args.tone)
        .tags(args.tags.iter().cloned())
        .avoid(args.avoid.iter().cloned());
    if let Some(seed) = args.seed {
        options = options.seed(seed);
    }

    let results =
        engine.generate_variants(&args.name, catalog.as_ref(), &options, args.variants.max(1));

    if args.json {
        let rendered = if results.len() == 1 {
            serde_json::to_string_pretty(&results[0])
        } else {
            serde_json::to_string_pretty(&results)
        };
        match rendered {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("ERROR: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    for (i, result) in results.iter().enumerate() {
        if i == 0 {
            print_header(result);
        }
        println!("\n--- {} story {} ---", result.story.tone, i + 1);
        println!("{}", result.story.text);
        for note in &result.story.notes {
            println!("  * {}", note);
        }
    }
}

fn print_header(result: &GenerationResult) {
    println!("{}", result.name);
    println!("  origin:  {}", result.origin);
    println!("  meaning: {}", result.meaning);
    println!("  source:  {:?}", result.source);
    for tag in &result.tags {
        println!("  [{}] {}", tag.kind.tag(), tag.note);
    }
}
