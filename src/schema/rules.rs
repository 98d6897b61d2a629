use serde::{Deserialize, Serialize};

use crate::core::normalize::normalize;

/// The thematic classification a rule attaches to a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    Theophoric,
    Root,
    Toponym,
    Virtue,
    Celestial,
    Nature,
    Element,
}

impl RuleKind {
    /// Fixed order in which thematic banks are blended.
    pub const BLEND_ORDER: [RuleKind; 7] = [
        RuleKind::Celestial,
        RuleKind::Nature,
        RuleKind::Element,
        RuleKind::Virtue,
        RuleKind::Theophoric,
        RuleKind::Toponym,
        RuleKind::Root,
    ];

    /// Returns the tag string for this kind (e.g., "celestial").
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Theophoric => "theophoric",
            Self::Root => "root",
            Self::Toponym => "toponym",
            Self::Virtue => "virtue",
            Self::Celestial => "celestial",
            Self::Nature => "nature",
            Self::Element => "element",
        }
    }

    /// Parse a normalized tag head. Spanish labels are accepted as aliases.
    pub fn from_key(key: &str) -> Option<RuleKind> {
        match key {
            "theophoric" | "teoforico" => Some(Self::Theophoric),
            "root" | "raiz" => Some(Self::Root),
            "toponym" | "toponimo" => Some(Self::Toponym),
            "virtue" | "virtud" => Some(Self::Virtue),
            "celestial" | "celeste" => Some(Self::Celestial),
            "nature" | "naturaleza" => Some(Self::Nature),
            "element" | "elemento" => Some(Self::Element),
            _ => None,
        }
    }
}

/// A thematic tag as used by the story engine: a kind plus an optional
/// detail, written `kind` or `kind:detail` (e.g. `element:water`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ThemeTag {
    pub kind: RuleKind,
    pub detail: Option<String>,
}

impl ThemeTag {
    pub fn new(kind: RuleKind) -> Self {
        Self { kind, detail: None }
    }

    /// Parse a free-form tag, case- and diacritic-insensitively.
    ///
    /// Returns `None` for tags that name no known kind.
    pub fn parse(raw: &str) -> Option<ThemeTag> {
        let key = normalize(raw);
        let (head, detail) = match key.split_once(':') {
            Some((head, detail)) => (head.trim(), Some(detail.trim())),
            None => (key.as_str(), None),
        };
        let kind = RuleKind::from_key(head)?;
        let detail = detail
            .filter(|d| !d.is_empty())
            .map(|d| element_alias(d).to_string());
        Some(ThemeTag { kind, detail })
    }

    /// Canonical string form, used as the key for annotations.
    pub fn canonical(&self) -> String {
        match &self.detail {
            Some(detail) => format!("{}:{}", self.kind.tag(), detail),
            None => self.kind.tag().to_string(),
        }
    }
}

fn element_alias(detail: &str) -> &str {
    match detail {
        "agua" => "water",
        "fuego" => "fire",
        "aire" => "air",
        "tierra" => "earth",
        other => other,
    }
}

/// A rule-derived annotation on a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleNote {
    pub kind: RuleKind,
    pub note: String,
}

/// A known onomastic fragment and its attributed origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRoot {
    pub key: String,
    pub origin: String,
    pub gloss: String,
}

/// A name ending that marks a theophoric ("El/Elohim") name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TheophoricSuffix {
    pub suffix: String,
    pub note: String,
}

/// A frequent root whose presence anywhere in a name adds a nuance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootGloss {
    pub key: String,
    pub gloss: String,
    #[serde(default)]
    pub note: Option<String>,
}

/// A place name that is also used as a given name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toponym {
    pub name: String,
    pub note: String,
}

/// An exact-match word list entry (virtue, celestial, nature, element).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordNote {
    pub key: String,
    pub note: String,
}

/// A fragment recognized when splitting separator-less compound names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositePart {
    pub key: String,
    pub kind: RuleKind,
    pub note: String,
}

/// Fixed sentences the enricher and resolvers splice into meanings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulePhrases {
    pub theophoric_meaning: String,
    pub theophoric_origin: String,
    pub nuances_prefix: String,
    pub virtue: String,
    pub celestial: String,
    pub nature: String,
    pub element: String,
    pub fusion_prefix: String,
    pub compound_origin: String,
    pub compound_meaning: String,
    pub roots_origin: String,
    pub roots_meaning_prefix: String,
    pub roots_meaning_suffix: String,
    pub coined_meaning: String,
}
