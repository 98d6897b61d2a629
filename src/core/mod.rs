//! Analysis and generation stages, leaf-first.

pub mod catalog;
pub mod compound;
pub mod engine;
pub mod enrich;
pub mod normalize;
pub mod onomastics;
pub mod rng;
pub mod rules;
pub mod story;
pub mod template;
