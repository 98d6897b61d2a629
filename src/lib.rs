//! Name Story Engine — onomastic analysis and seeded story generation.
//!
//! Turns a free-text personal name into an etymological gloss, thematic
//! tags and a short narrative in one of four tones, without neural
//! inference: static rule tables, a greedy portmanteau splitter and
//! tone-specific template banks driven by a reproducible RNG.

pub mod core;
pub mod schema;

pub use crate::core::engine::{GenerateOptions, GenerationResult, MeaningSource, NameEngine};
pub use crate::schema::tone::Tone;
