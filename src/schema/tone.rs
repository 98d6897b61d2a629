use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::core::normalize::normalize;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToneError {
    #[error("unknown tone '{0}': expected one of epic, poetic, mythological, fantastical")]
    Unknown(String),
}

/// The narrative register a story is rendered in.
///
/// Closed set: an unrecognized label is a caller error, there is no
/// fallback tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Tone {
    Epic,
    Poetic,
    Mythological,
    Fantastical,
}

impl Tone {
    pub const ALL: [Tone; 4] = [Tone::Epic, Tone::Poetic, Tone::Mythological, Tone::Fantastical];

    /// Returns the canonical label for this tone (e.g., "epic").
    pub fn key(&self) -> &'static str {
        match self {
            Self::Epic => "epic",
            Self::Poetic => "poetic",
            Self::Mythological => "mythological",
            Self::Fantastical => "fantastical",
        }
    }

    /// Label used by the Spanish-language catalog and web front end.
    pub fn source_label(&self) -> &'static str {
        match self {
            Self::Epic => "épica",
            Self::Poetic => "poética",
            Self::Mythological => "mitológica",
            Self::Fantastical => "fantástica",
        }
    }
}

impl FromStr for Tone {
    type Err = ToneError;

    /// Accepts English labels and the Spanish ones, with or without
    /// diacritics and in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "epic" | "epica" => Ok(Self::Epic),
            "poetic" | "poetica" => Ok(Self::Poetic),
            "mythological" | "mythic" | "mitologica" => Ok(Self::Mythological),
            "fantastical" | "fantasy" | "fantastica" => Ok(Self::Fantastical),
            _ => Err(ToneError::Unknown(s.to_string())),
        }
    }
}

impl TryFrom<String> for Tone {
    type Error = ToneError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Tone> for String {
    fn from(tone: Tone) -> Self {
        tone.key().to_string()
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_keys() {
        assert_eq!(Tone::Epic.key(), "epic");
        assert_eq!(Tone::Poetic.key(), "poetic");
        assert_eq!(Tone::Mythological.key(), "mythological");
        assert_eq!(Tone::Fantastical.key(), "fantastical");
    }

    #[test]
    fn parse_source_labels() {
        assert_eq!("épica".parse::<Tone>().unwrap(), Tone::Epic);
        assert_eq!("Poética".parse::<Tone>().unwrap(), Tone::Poetic);
        assert_eq!("mitologica".parse::<Tone>().unwrap(), Tone::Mythological);
        assert_eq!(" FANTÁSTICA ".parse::<Tone>().unwrap(), Tone::Fantastical);
    }

    #[test]
    fn unknown_tone_rejected() {
        let err = "bíblica".parse::<Tone>().unwrap_err();
        assert_eq!(err, ToneError::Unknown("bíblica".to_string()));
        assert!("".parse::<Tone>().is_err());
    }

    #[test]
    fn serde_uses_canonical_label() {
        let json = serde_json::to_string(&Tone::Mythological).unwrap();
        assert_eq!(json, "\"mythological\"");
        let back: Tone = serde_json::from_str("\"épica\"").unwrap();
        assert_eq!(back, Tone::Epic);
        assert!(serde_json::from_str::<Tone>("\"tragic\"").is_err());
    }
}
