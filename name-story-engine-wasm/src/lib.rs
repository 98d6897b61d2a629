//! WASM bindings for name-story-engine — JSON in, JSON out, for the web front end.
//!
//! Request failures are not thrown: they come back as
//! `{ "error": <kind>, "detail": <message> }` so the page can show them.

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use name_story_engine::core::catalog::Catalog;
use name_story_engine::schema::story::GeneratedStory;
use name_story_engine::{GenerateOptions, NameEngine, Tone};

// ---------------------------------------------------------------------------
// JSON helper types for communication across the WASM boundary
// ---------------------------------------------------------------------------

/// Request body, accepting the front end's Spanish keys or English ones.
#[derive(serde::Deserialize)]
struct StoryRequest {
    #[serde(alias = "name")]
    nombre: String,
    #[serde(default, alias = "meaning")]
    significado: Option<String>,
    tone: String,
    #[serde(default)]
    seed: Option<u32>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    avoid: Vec<String>,
}

/// The story endpoint's response shape.
#[derive(serde::Serialize)]
struct StoryResponse {
    tipo: String,
    relato: String,
    notas: Vec<String>,
}

impl From<GeneratedStory> for StoryResponse {
    fn from(story: GeneratedStory) -> Self {
        StoryResponse {
            tipo: story.tone.source_label().to_string(),
            relato: story.text,
            notas: story.notes,
        }
    }
}

#[derive(serde::Serialize)]
struct ErrorResponse<'a> {
    error: &'a str,
    detail: String,
}

#[derive(serde::Serialize)]
struct ToneInfo {
    key: &'static str,
    label: &'static str,
}

enum RequestError {
    BadJson(String),
    BadTone(String),
}

impl RequestError {
    fn to_json(&self) -> String {
        let body = match self {
            RequestError::BadJson(detail) => ErrorResponse {
                error: "invalid_request",
                detail: detail.clone(),
            },
            RequestError::BadTone(detail) => ErrorResponse {
                error: "invalid_tone",
                detail: detail.clone(),
            },
        };
        to_json(&body)
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        format!(r#"{{"error":"serialization","detail":"{}"}}"#, e.to_string().replace('"', "'"))
    })
}

fn parse_request(request_json: &str) -> Result<(StoryRequest, GenerateOptions), RequestError> {
    let request: StoryRequest = serde_json::from_str(request_json)
        .map_err(|e| RequestError::BadJson(format!("Invalid request JSON: {e}")))?;
    let tone: Tone = request
        .tone
        .parse()
        .map_err(|e| RequestError::BadTone(format!("{e}")))?;

    let mut options = GenerateOptions::new(tone)
        .tags(request.tags.iter().cloned())
        .avoid(request.avoid.iter().cloned());
    if let Some(seed) = request.seed {
        options = options.seed(seed);
    }
    Ok((request, options))
}

// ---------------------------------------------------------------------------
// NameStory — the main exported struct
// ---------------------------------------------------------------------------
#[wasm_bindgen]
pub struct NameStory {
    engine: NameEngine,
    catalog: Catalog,
}

#[wasm_bindgen]
impl NameStory {
    /// Create an engine over the built-in tables, with an optional JSON
    /// array of catalog records.
    #[wasm_bindgen(constructor)]
    pub fn new(catalog_json: Option<String>) -> Result<NameStory, JsError> {
        let engine = NameEngine::builder()
            .build()
            .map_err(|e| JsError::new(&format!("Engine build error: {e}")))?;
        let catalog = match catalog_json {
            Some(json) => Catalog::from_json_str(&json)
                .map_err(|e| JsError::new(&format!("Catalog parse error: {e}")))?,
            None => Catalog::default(),
        };
        Ok(NameStory { engine, catalog })
    }

    /// Full pipeline: origin, meaning, tags and story, as JSON.
    ///
    /// Expected JSON shape:
    /// ```json
    /// { "nombre": "Marisol", "tone": "poética", "seed": 7, "tags": [], "avoid": [] }
    /// ```
    pub fn generate(&self, request_json: &str) -> String {
        match parse_request(request_json) {
            Ok((request, options)) => {
                to_json(&self.engine.generate(&request.nombre, &self.catalog, &options))
            }
            Err(e) => e.to_json(),
        }
    }

    /// Story only, as `{ tipo, relato, notas }`. A `significado` in the
    /// request is used as the meaning; otherwise it is resolved.
    pub fn story(&self, request_json: &str) -> String {
        let (request, options) = match parse_request(request_json) {
            Ok(parsed) => parsed,
            Err(e) => return e.to_json(),
        };
        let story = match request.significado.as_deref().map(str::trim) {
            Some(meaning) if !meaning.is_empty() => {
                self.engine.tell(&request.nombre, meaning, &options)
            }
            _ => {
                self.engine
                    .generate(&request.nombre, &self.catalog, &options)
                    .story
            }
        };
        to_json(&StoryResponse::from(story))
    }

    /// Generate several distinct stories. Returns a JSON array of full results.
    pub fn variants(&self, request_json: &str, count: usize) -> String {
        match parse_request(request_json) {
            Ok((request, options)) => to_json(&self.engine.generate_variants(
                &request.nombre,
                &self.catalog,
                &options,
                count,
            )),
            Err(e) => e.to_json(),
        }
    }

    /// Number of catalog entries loaded.
    pub fn catalog_size(&self) -> usize {
        self.catalog.len()
    }

    /// Return JSON array of `{ key, label }` for the four tones.
    pub fn tones() -> String {
        let tones: Vec<ToneInfo> = Tone::ALL
            .iter()
            .map(|t| ToneInfo {
                key: t.key(),
                label: t.source_label(),
            })
            .collect();
        to_json(&tones)
    }
}

thread_local! {
    static DEFAULT: RefCell<Option<NameStory>> = const { RefCell::new(None) };
}

fn with_default<F>(f: F) -> String
where
    F: FnOnce(&NameStory) -> String,
{
    DEFAULT.with(|cell| {
        let mut slot = cell.borrow_mut();
        if slot.is_none() {
            match NameEngine::builder().build() {
                Ok(engine) => {
                    *slot = Some(NameStory {
                        engine,
                        catalog: Catalog::default(),
                    })
                }
                Err(e) => {
                    return to_json(&ErrorResponse {
                        error: "engine",
                        detail: e.to_string(),
                    })
                }
            }
        }
        match slot.as_ref() {
            Some(bridge) => f(bridge),
            None => to_json(&ErrorResponse {
                error: "engine",
                detail: "engine unavailable".to_string(),
            }),
        }
    })
}

/// Stateless story endpoint: `{ nombre, significado?, tone, seed?, tags?, avoid? }`
/// in, `{ tipo, relato, notas }` or `{ error, detail }` out.
#[wasm_bindgen]
pub fn generate_story(request_json: &str) -> String {
    with_default(|bridge| bridge.story(request_json))
}

/// Stateless full-pipeline endpoint, without a catalog.
#[wasm_bindgen]
pub fn generate(request_json: &str) -> String {
    with_default(|bridge| bridge.generate(request_json))
}
