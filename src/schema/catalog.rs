use serde::{Deserialize, Serialize};

/// The curated story attached to a catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStory {
    #[serde(rename = "type", alias = "tipo")]
    pub kind: String,
    #[serde(alias = "relato")]
    pub text: String,
}

/// A curated name record supplied by the dataset collaborator.
///
/// Read-only input: the engine never mutates or owns the catalog. Field
/// aliases accept the Spanish-keyed dataset export as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(default, alias = "genero")]
    pub gender: String,
    #[serde(default, alias = "origen")]
    pub origin: String,
    #[serde(default, alias = "significado")]
    pub meaning: String,
    #[serde(default, alias = "historia")]
    pub story: Option<CatalogStory>,
}
