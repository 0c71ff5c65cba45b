//! Blocking client for the PokeAPI (<https://pokeapi.co>).
//!
//! # Overview
//! Wraps GET requests against the v2 REST API: single resources, pages of a
//! collection, lazy iteration over a whole collection, type membership,
//! flavor text, evolution chains and per-generation member listings.
//!
//! # Design
//! - `PokeClient` builds `HttpRequest` values and parses `HttpResponse` values;
//!   a `Transport` performs the round-trip in between. The default
//!   `UreqTransport` keeps one connection pool for the client's lifetime.
//! - Filtering, ordering and tree flattening live in `query` as pure functions.
//! - Errors fall into three classes (`ApiError`); none are retried.
//!
//! ```no_run
//! use pokeapi_core::{GenerationQuery, PokeClient};
//!
//! let client = PokeClient::new();
//! let chain = client.get_evolution_chain("charmander")?;
//! assert_eq!(chain.unwrap(), ["charmander", "charmeleon", "charizard"]);
//!
//! let grass = client.get_generation_members(6, &GenerationQuery::default().type_filter("grass"))?;
//! println!("{} grass species in generation VI", grass.len());
//! client.close();
//! # Ok::<(), pokeapi_core::ApiError>(())
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod query;
pub mod stream;
pub mod transport;
pub mod types;

pub use client::{
    GenerationQuery, PokeClient, DEFAULT_FLAVOR_LANGUAGE, DEFAULT_FLAVOR_VERSION,
    DEFAULT_PAGE_LIMIT, DEFAULT_STREAM_PAGE_SIZE,
};
pub use config::{ClientConfig, BASE_URL, USER_AGENT};
pub use error::ApiError;
pub use http::{HttpRequest, HttpResponse};
pub use stream::{ResourceStream, TypeMembers};
pub use transport::{Transport, UreqTransport};
pub use types::{ChainLink, Identifier, NamedResource, Page};
