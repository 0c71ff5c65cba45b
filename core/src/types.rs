//! Shapes the client expects to find in PokeAPI responses.
//!
//! # Design
//! Only the fields the client actually reads are declared; everything else in
//! a response is ignored. Single-resource lookups return the whole record as
//! `serde_json::Value` instead, since callers want arbitrary fields from it.
//! These types are defined independently of the mock server's fixtures, so
//! the integration tests catch drift between the two.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Minimal `{name, url}` reference returned in listings and links.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

impl NamedResource {
    /// Numeric id encoded in the URL, e.g. `.../pokemon-species/25/` → 25.
    pub fn id(&self) -> Result<u32, ApiError> {
        let segment = self.url.trim_end_matches('/').rsplit('/').next().unwrap_or("");
        segment.parse().map_err(|_| {
            ApiError::MalformedResponse(format!("no numeric id in resource url {:?}", self.url))
        })
    }
}

/// One page of a paginated collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<NamedResource>,
}

/// A resource addressed either by numeric id or by name.
///
/// Renders as the lower-cased path segment the API expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    Id(u32),
    Name(String),
}

impl From<u32> for Identifier {
    fn from(id: u32) -> Self {
        Identifier::Id(id)
    }
}

impl From<&str> for Identifier {
    fn from(name: &str) -> Self {
        Identifier::Name(name.to_string())
    }
}

impl From<String> for Identifier {
    fn from(name: String) -> Self {
        Identifier::Name(name)
    }
}

impl From<&String> for Identifier {
    fn from(name: &String) -> Self {
        Identifier::Name(name.clone())
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Id(id) => write!(f, "{id}"),
            Identifier::Name(name) => write!(f, "{}", name.to_lowercase()),
        }
    }
}

/// Link to a related resource that has no name, e.g. an evolution chain.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceLink {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FlavorTextEntry {
    pub flavor_text: String,
    pub language: NamedResource,
    pub version: NamedResource,
}

/// The parts of a `pokemon-species` record the client reads.
#[derive(Debug, Clone, Deserialize)]
pub struct Species {
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorTextEntry>,
    pub evolution_chain: Option<ResourceLink>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EvolutionChain {
    pub chain: ChainLink,
}

/// One node of an evolution tree.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChainLink {
    pub species: NamedResource,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    pub pokemon: NamedResource,
}

/// The parts of a `type` record the client reads.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeRecord {
    #[serde(default)]
    pub pokemon: Vec<TypeSlot>,
}

/// The parts of a `generation` record the client reads.
#[derive(Debug, Clone, Deserialize)]
pub struct Generation {
    #[serde(default)]
    pub pokemon_species: Vec<NamedResource>,
}
