//! Plain data types shared by the analysis and generation stages.

pub mod catalog;
pub mod rules;
pub mod story;
pub mod tone;
