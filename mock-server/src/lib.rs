//! A PokeAPI look-alike serving a fixed dataset.
//!
//! Routes mirror `https://pokeapi.co/api/v2`: paginated collections accept
//! `limit`/`offset`, detail routes accept an id or a lower-case name, links
//! between resources are absolute URLs with a trailing slash, and unknown
//! resources answer 404.

pub mod fixtures;

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, MethodRouter},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use fixtures::SpeciesEntry;

const DEFAULT_LIMIT: usize = 20;

/// Absolute URL prefix used when rendering links, e.g.
/// `http://127.0.0.1:3000/api/v2`.
pub struct Dex {
    pub base_url: String,
}

pub type SharedDex = Arc<Dex>;

#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

pub fn app(base_url: &str) -> Router {
    let state: SharedDex = Arc::new(Dex {
        base_url: base_url.trim_end_matches('/').to_string(),
    });

    let router = Router::new()
        .route("/api/v2/pokemon", list("pokemon"))
        .route("/api/v2/pokemon-species", list("pokemon-species"))
        .route("/api/v2/type", list("type"))
        .route("/api/v2/generation", list("generation"));

    let router = with_trailing_slash(router, "/api/v2/pokemon/{key}", get(get_pokemon));
    let router = with_trailing_slash(router, "/api/v2/pokemon-species/{key}", get(get_species));
    let router = with_trailing_slash(router, "/api/v2/evolution-chain/{key}", get(get_chain));
    let router = with_trailing_slash(router, "/api/v2/type/{key}", get(get_type));
    let router = with_trailing_slash(router, "/api/v2/generation/{key}", get(get_generation));

    router.with_state(state)
}

/// Serve on `listener`, rendering links against the listener's own address.
pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    let base_url = format!("http://{addr}/api/v2");
    tracing::info!(%base_url, "mock PokeAPI listening");
    axum::serve(listener, app(&base_url)).await
}

fn with_trailing_slash(
    router: Router<SharedDex>,
    path: &str,
    handler: MethodRouter<SharedDex>,
) -> Router<SharedDex> {
    router
        .route(path, handler.clone())
        .route(&format!("{path}/"), handler)
}

fn list(collection: &'static str) -> MethodRouter<SharedDex> {
    get(
        move |State(dex): State<SharedDex>, Query(params): Query<PageParams>| async move {
            Json(list_collection(&dex, collection, &params))
        },
    )
}

impl Dex {
    fn link(&self, collection: &str, name: &str, id: u32) -> Value {
        json!({"name": name, "url": format!("{}/{collection}/{id}/", self.base_url)})
    }

    fn species_link(&self, s: &SpeciesEntry) -> Value {
        self.link("pokemon-species", s.name, s.id)
    }

    fn type_link(&self, name: &str) -> Value {
        let id = fixtures::find_type(name).map_or(0, |t| t.0);
        self.link("type", name, id)
    }

    fn chain_link(&self, s: &SpeciesEntry) -> Value {
        let evolves_to: Vec<Value> = fixtures::children_of(s.name)
            .map(|child| self.chain_link(child))
            .collect();
        json!({
            "is_baby": false,
            "species": self.species_link(s),
            "evolution_details": [],
            "evolves_to": evolves_to,
        })
    }
}

fn list_collection(dex: &Dex, collection: &str, params: &PageParams) -> Value {
    let entries: Vec<(&str, u32)> = match collection {
        "type" => fixtures::TYPES.iter().map(|&(id, name)| (name, id)).collect(),
        "generation" => fixtures::GENERATIONS.iter().map(|&(id, name, _)| (name, id)).collect(),
        _ => fixtures::SPECIES.iter().map(|s| (s.name, s.id)).collect(),
    };

    let count = entries.len();
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
    let offset = params.offset.unwrap_or(0);

    let results: Vec<Value> = entries
        .iter()
        .skip(offset)
        .take(limit)
        .map(|&(name, id)| dex.link(collection, name, id))
        .collect();

    let page_url = |offset: usize| {
        format!("{}/{collection}?offset={offset}&limit={limit}", dex.base_url)
    };
    let next = (offset + limit < count).then(|| page_url(offset + limit));
    let previous = (offset > 0).then(|| page_url(offset.saturating_sub(limit)));

    json!({
        "count": count,
        "next": next,
        "previous": previous,
        "results": results,
    })
}

async fn get_pokemon(
    State(dex): State<SharedDex>,
    Path(key): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    let s = fixtures::find_species(&key).ok_or(StatusCode::NOT_FOUND)?;
    let types: Vec<Value> = s
        .types
        .iter()
        .enumerate()
        .map(|(i, t)| json!({"slot": i + 1, "type": dex.type_link(t)}))
        .collect();
    Ok(Json(json!({
        "id": s.id,
        "name": s.name,
        "is_default": true,
        "species": dex.species_link(s),
        "types": types,
    })))
}

async fn get_species(
    State(dex): State<SharedDex>,
    Path(key): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    let s = fixtures::find_species(&key).ok_or(StatusCode::NOT_FOUND)?;
    let flavor_text_entries: Vec<Value> = fixtures::FLAVOR_TEXT
        .iter()
        .filter(|(species, ..)| *species == s.name)
        .map(|&(_, language, version, text)| {
            json!({
                "flavor_text": text,
                "language": {"name": language, "url": format!("{}/language/{language}/", dex.base_url)},
                "version": {"name": version, "url": format!("{}/version/{version}/", dex.base_url)},
            })
        })
        .collect();
    let evolves_from = s
        .evolves_from
        .and_then(fixtures::find_species)
        .map(|parent| dex.species_link(parent));
    let generation = fixtures::find_generation(&s.generation.to_string())
        .map(|&(id, name, _)| dex.link("generation", name, id));

    Ok(Json(json!({
        "id": s.id,
        "name": s.name,
        "generation": generation,
        "evolves_from_species": evolves_from,
        "evolution_chain": {"url": format!("{}/evolution-chain/{}/", dex.base_url, s.chain)},
        "flavor_text_entries": flavor_text_entries,
    })))
}

async fn get_chain(
    State(dex): State<SharedDex>,
    Path(key): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    let id: u32 = key.parse().map_err(|_| StatusCode::NOT_FOUND)?;
    let root = fixtures::chain_root(id).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(json!({
        "id": id,
        "baby_trigger_item": null,
        "chain": dex.chain_link(root),
    })))
}

async fn get_type(
    State(dex): State<SharedDex>,
    Path(key): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    let &(id, name) = fixtures::find_type(&key).ok_or(StatusCode::NOT_FOUND)?;
    let pokemon: Vec<Value> = fixtures::SPECIES
        .iter()
        .filter_map(|s| {
            let slot = s.types.iter().position(|t| *t == name)?;
            Some(json!({"slot": slot + 1, "pokemon": dex.link("pokemon", s.name, s.id)}))
        })
        .collect();
    Ok(Json(json!({
        "id": id,
        "name": name,
        "pokemon": pokemon,
    })))
}

/// Species are listed alphabetically, not by id, like the real API which
/// makes no ordering promise for this list.
async fn get_generation(
    State(dex): State<SharedDex>,
    Path(key): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    let &(id, name, region) = fixtures::find_generation(&key).ok_or(StatusCode::NOT_FOUND)?;
    let mut members: Vec<&SpeciesEntry> =
        fixtures::SPECIES.iter().filter(|s| s.generation == id).collect();
    members.sort_by_key(|s| s.name);
    let pokemon_species: Vec<Value> = members.iter().map(|s| dex.species_link(s)).collect();

    Ok(Json(json!({
        "id": id,
        "name": name,
        "main_region": {"name": region, "url": format!("{}/region/{region}/", dex.base_url)},
        "pokemon_species": pokemon_species,
    })))
}
