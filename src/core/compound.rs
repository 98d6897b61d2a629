/// Compound resolver — multi-token and portmanteau names.
///
/// "Ana Sofía" and "Juan-Pablo" split on their separators; "Marisol" is
/// scanned greedily against the composite-part table. Each resolved part
/// is looked up in the catalog, falling back to the rule enricher, and
/// the origins and meanings are fused.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::catalog::CatalogLookup;
use crate::core::enrich::enrich_name;
use crate::core::normalize::{capitalize, normalize};
use crate::core::rules::RuleSet;
use crate::schema::catalog::CatalogEntry;
use crate::schema::rules::{CompositePart, RuleKind};

/// One constituent of a compound name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompoundPart {
    pub name: String,
    pub catalog_hit: Option<CatalogEntry>,
    /// Composite-part kind, for parts found by the portmanteau scan.
    pub kind: Option<RuleKind>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompoundResult {
    /// Parts re-joined with single spaces, each capitalized.
    pub name: String,
    pub parts: Vec<CompoundPart>,
    pub origin: String,
    pub meaning: String,
}

/// A piece of a greedy portmanteau scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment<'r> {
    Known(&'r CompositePart),
    /// A run of characters no composite key matched.
    Unmatched(String),
}

/// Scan a normalized name left to right, consuming the longest composite
/// key at each position or a single character when none matches.
///
/// Ambiguous names can be over- or under-segmented; the scan never
/// backtracks.
pub fn split_portmanteau<'r>(normalized: &str, rules: &'r RuleSet) -> Vec<Fragment<'r>> {
    let parts = rules.composites_longest_first();
    let mut fragments: Vec<Fragment<'r>> = Vec::new();
    let mut cursor = 0;

    while cursor < normalized.len() {
        let rest = &normalized[cursor..];
        if let Some(part) = parts.iter().find(|p| rest.starts_with(p.key.as_str())) {
            fragments.push(Fragment::Known(part));
            cursor += part.key.len();
            continue;
        }

        let Some(c) = rest.chars().next() else {
            break;
        };
        match fragments.last_mut() {
            Some(Fragment::Unmatched(span)) => span.push(c),
            _ => fragments.push(Fragment::Unmatched(c.to_string())),
        }
        cursor += c.len_utf8();
    }

    fragments
}

/// Resolve `input` as a compound name.
///
/// Returns `None` when fewer than two parts can be resolved: the name is
/// simply not a compound, which callers must not confuse with an empty one.
pub fn analyze_compound<C>(input: &str, catalog: &C, rules: &RuleSet) -> Option<CompoundResult>
where
    C: CatalogLookup + ?Sized,
{
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let explicit: Vec<&str> = trimmed
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|t| !t.is_empty())
        .collect();

    let tokens: Vec<(String, Option<RuleKind>)> = match explicit.len() {
        0 => return None,
        1 => {
            let known: Vec<&CompositePart> = split_portmanteau(&normalize(trimmed), rules)
                .into_iter()
                .filter_map(|f| match f {
                    Fragment::Known(part) => Some(part),
                    Fragment::Unmatched(_) => None,
                })
                .collect();
            if known.len() < 2 {
                return None;
            }
            debug!(
                input = trimmed,
                parts = ?known.iter().map(|p| p.key.as_str()).collect::<Vec<_>>(),
                "resolved portmanteau"
            );
            known
                .into_iter()
                .map(|p| (p.key.clone(), Some(p.kind)))
                .collect()
        }
        _ => explicit.into_iter().map(|t| (t.to_string(), None)).collect(),
    };

    let mut origins: Vec<String> = Vec::new();
    let mut meanings: Vec<String> = Vec::new();
    let mut parts = Vec::with_capacity(tokens.len());

    for (token, kind) in &tokens {
        let hit = catalog.lookup(&normalize(token)).cloned();
        let (origin, meaning) = match &hit {
            Some(entry) => (Some(entry.origin.clone()), Some(entry.meaning.clone())),
            None => {
                let enriched = enrich_name(token, None, rules);
                (enriched.merged_origin, enriched.merged_meaning)
            }
        };
        push_distinct(&mut origins, origin);
        push_distinct(&mut meanings, meaning);
        parts.push(CompoundPart {
            name: token.clone(),
            catalog_hit: hit,
            kind: *kind,
        });
    }

    let phrases = rules.phrases();
    let origin = if origins.is_empty() {
        phrases.compound_origin.clone()
    } else {
        origins.join(" / ")
    };
    let meaning = match meanings.len() {
        0 => phrases.compound_meaning.clone(),
        1 => meanings.remove(0),
        _ => {
            let fused: Vec<&str> = meanings.iter().map(|m| m.trim_end_matches('.')).collect();
            format!("{} {}.", phrases.fusion_prefix, fused.join(" + "))
        }
    };

    Some(CompoundResult {
        name: tokens
            .iter()
            .map(|(t, _)| capitalize(t))
            .collect::<Vec<_>>()
            .join(" "),
        parts,
        origin,
        meaning,
    })
}

fn push_distinct(list: &mut Vec<String>, value: Option<String>) {
    if let Some(value) = value {
        let value = value.trim();
        if !value.is_empty() && !list.iter().any(|v| v == value) {
            list.push(value.to_string());
        }
    }
}
