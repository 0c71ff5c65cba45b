//! Blocking client for the PokeAPI REST service.
//!
//! # Design
//! `PokeClient` holds a base URL and a `Transport`, nothing else; no state
//! carries over between calls. Requests are built as `HttpRequest` values
//! (`build_*`) and responses are parsed from `HttpResponse` values
//! (`parse_json`), with the transport executing the round-trip in between.
//! Higher-level operations compose those two halves with the pure helpers in
//! `query`.

use std::collections::HashSet;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::{ClientConfig, USER_AGENT};
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::query::{clean_flavor_text, flatten_chain, select_generation_members};
use crate::stream::{ResourceStream, TypeMembers};
use crate::transport::{Transport, UreqTransport};
use crate::types::{
    EvolutionChain, Generation, Identifier, NamedResource, Page, Species, TypeRecord,
};

pub const DEFAULT_PAGE_LIMIT: u32 = 20;
pub const DEFAULT_STREAM_PAGE_SIZE: u32 = 100;
pub const DEFAULT_FLAVOR_VERSION: &str = "sword";
pub const DEFAULT_FLAVOR_LANGUAGE: &str = "en";

/// Options for [`PokeClient::get_generation_members`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationQuery {
    pub limit: Option<usize>,
    pub offset: usize,
    /// Keep only members that also appear in this type's member list.
    pub type_filter: Option<String>,
}

impl GenerationQuery {
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn type_filter(mut self, type_name: &str) -> Self {
        self.type_filter = Some(type_name.to_string());
        self
    }
}

/// Client for the PokeAPI.
///
/// The transport is the session: with the default `UreqTransport` its
/// connection pool lives exactly as long as the client. Call
/// [`close`](Self::close) to release it explicitly, or let the client drop
/// at the end of its scope.
#[derive(Debug, Clone)]
pub struct PokeClient<T = UreqTransport> {
    base_url: String,
    transport: T,
}

impl PokeClient<UreqTransport> {
    /// Client for the public API with the default 10 second timeout.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Self {
        let transport = UreqTransport::new(config.timeout);
        Self::with_transport(&config.base_url, transport)
    }
}

impl Default for PokeClient<UreqTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> PokeClient<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // -----------------------------------------------------------------------
    // Request building and response parsing
    // -----------------------------------------------------------------------

    /// Request for a path relative to the base URL, e.g. `pokemon/ditto`.
    pub fn build_endpoint_request(&self, endpoint: &str, query: &[(&str, String)]) -> HttpRequest {
        let url = format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'));
        self.build_url_request(&url, query)
    }

    /// Request for an absolute URL, as found in links between resources.
    pub fn build_url_request(&self, url: &str, query: &[(&str, String)]) -> HttpRequest {
        HttpRequest {
            url: url.to_string(),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
            headers: vec![("user-agent".to_string(), USER_AGENT.to_string())],
        }
    }

    /// Require a 2xx status, then deserialize the body.
    pub fn parse_json<D: DeserializeOwned>(&self, response: HttpResponse) -> Result<D, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::MalformedResponse(format!("{}: {e}", response.url)))
    }

    fn send<D: DeserializeOwned>(&self, request: HttpRequest) -> Result<D, ApiError> {
        tracing::debug!(url = %request.full_url(), "GET");
        let response = self.transport.execute(&request)?;
        self.parse_json(response)
    }

    fn request_json<D: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<D, ApiError> {
        self.send(self.build_endpoint_request(endpoint, query))
    }

    fn request_url_json<D: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<D, ApiError> {
        self.send(self.build_url_request(url, query))
    }

    // -----------------------------------------------------------------------
    // Single resources
    // -----------------------------------------------------------------------

    /// Full record for `{collection}/{identifier}`. Names are lower-cased.
    pub fn get_resource(
        &self,
        collection: &str,
        identifier: impl Into<Identifier>,
    ) -> Result<Value, ApiError> {
        let identifier = identifier.into();
        self.request_json(&format!("{collection}/{identifier}"), &[])
    }

    pub fn get_pokemon(&self, identifier: impl Into<Identifier>) -> Result<Value, ApiError> {
        self.get_resource("pokemon", identifier)
    }

    pub fn get_generation(&self, identifier: impl Into<Identifier>) -> Result<Value, ApiError> {
        self.get_resource("generation", identifier)
    }

    pub fn get_species(&self, identifier: impl Into<Identifier>) -> Result<Value, ApiError> {
        self.get_resource("pokemon-species", identifier)
    }

    // -----------------------------------------------------------------------
    // Collections
    // -----------------------------------------------------------------------

    /// One page of `collection`. See [`DEFAULT_PAGE_LIMIT`].
    pub fn get_page(&self, collection: &str, limit: u32, offset: u32) -> Result<Page, ApiError> {
        self.request_json(
            collection,
            &[("limit", limit.to_string()), ("offset", offset.to_string())],
        )
    }

    /// Lazily walk every summary in `collection`, `page_size` at a time.
    ///
    /// `page_size` must be positive; zero is treated as one.
    pub fn stream_all(&self, collection: &str, page_size: u32) -> ResourceStream<'_, T> {
        ResourceStream::new(self, collection, page_size)
    }

    pub fn stream_all_pokemon(&self) -> ResourceStream<'_, T> {
        self.stream_all("pokemon", DEFAULT_STREAM_PAGE_SIZE)
    }

    /// Pokémon of the given type, in the API's order. One request total.
    pub fn find_by_type(&self, type_name: &str) -> Result<TypeMembers, ApiError> {
        let record: TypeRecord =
            self.request_json(&format!("type/{}", type_name.to_lowercase()), &[])?;
        Ok(TypeMembers::new(record.pokemon))
    }

    // -----------------------------------------------------------------------
    // Species details
    // -----------------------------------------------------------------------

    /// First flavor text matching `version` and `language` exactly, with
    /// line breaks flattened to spaces. `Ok(None)` if there is no such entry.
    pub fn get_flavor_text(
        &self,
        identifier: impl Into<Identifier>,
        version: &str,
        language: &str,
    ) -> Result<Option<String>, ApiError> {
        let identifier = identifier.into();
        let species: Species = self.request_json(&format!("pokemon-species/{identifier}"), &[])?;
        Ok(species
            .flavor_text_entries
            .iter()
            .find(|entry| entry.language.name == language && entry.version.name == version)
            .map(|entry| clean_flavor_text(&entry.flavor_text)))
    }

    /// Species names of the whole evolution family, in pre-order.
    ///
    /// `Ok(None)` when the species does not exist (404) or has no chain.
    pub fn get_evolution_chain(
        &self,
        identifier: impl Into<Identifier>,
    ) -> Result<Option<Vec<String>>, ApiError> {
        let identifier = identifier.into();
        let species: Species =
            match self.request_json(&format!("pokemon-species/{identifier}"), &[]) {
                Ok(species) => species,
                Err(e) if e.is_not_found() => {
                    tracing::debug!(%identifier, "species not found, no evolution chain");
                    return Ok(None);
                }
                Err(e) => return Err(e),
            };

        let Some(link) = species.evolution_chain else {
            return Ok(None);
        };
        tracing::debug!(url = %link.url, "evolution chain");

        let chain: EvolutionChain = self.request_url_json(&link.url, &[])?;
        Ok(Some(flatten_chain(&chain.chain)))
    }

    // -----------------------------------------------------------------------
    // Generations
    // -----------------------------------------------------------------------

    /// Species of a generation ordered by id, optionally restricted to a type,
    /// then windowed by `offset` and `limit`.
    pub fn get_generation_members(
        &self,
        identifier: impl Into<Identifier>,
        query: &GenerationQuery,
    ) -> Result<Vec<NamedResource>, ApiError> {
        let identifier = identifier.into();
        let generation: Generation = self.request_json(&format!("generation/{identifier}"), &[])?;

        let type_names = match query.type_filter.as_deref() {
            Some(type_name) if !type_name.is_empty() => Some(
                self.find_by_type(type_name)?
                    .map(|member| member.name)
                    .collect::<HashSet<_>>(),
            ),
            _ => None,
        };

        select_generation_members(
            generation.pokemon_species,
            type_names.as_ref(),
            query.offset,
            query.limit,
        )
    }

    /// Release the transport and its pooled connections.
    pub fn close(self) {
        tracing::debug!(base_url = %self.base_url, "closing client");
    }
}

/// Map non-2xx statuses to `RemoteRequestFailed`.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::RemoteRequestFailed {
        status: response.status,
        url: response.url.clone(),
    })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::iter::FusedIterator;

    use serde_json::json;

    use super::*;

    const BASE: &str = "http://dex.test/api/v2";

    /// Answers from a fixed table keyed by full URL and records every request.
    #[derive(Default)]
    struct ScriptedTransport {
        routes: HashMap<String, (u16, String)>,
        seen: RefCell<Vec<HttpRequest>>,
    }

    impl ScriptedTransport {
        fn route(mut self, url: &str, status: u16, body: impl Into<String>) -> Self {
            self.routes.insert(url.to_string(), (status, body.into()));
            self
        }

        fn json(self, url: &str, body: Value) -> Self {
            self.route(url, 200, body.to_string())
        }

        fn urls(&self) -> Vec<String> {
            self.seen.borrow().iter().map(HttpRequest::full_url).collect()
        }
    }

    impl Transport for ScriptedTransport {
        fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
            self.seen.borrow_mut().push(request.clone());
            let url = request.full_url();
            let (status, body) = self
                .routes
                .get(&url)
                .cloned()
                .unwrap_or((404, "Not Found".to_string()));
            Ok(HttpResponse { status, url, body })
        }
    }

    fn summary(collection: &str, name: &str, id: u32) -> Value {
        json!({"name": name, "url": format!("{BASE}/{collection}/{id}/")})
    }

    fn page(results: Vec<Value>) -> Value {
        json!({"count": 3, "next": null, "previous": null, "results": results})
    }

    #[test]
    fn build_endpoint_request_sets_user_agent() {
        let client = PokeClient::with_transport(BASE, ScriptedTransport::default());
        let req = client.build_endpoint_request("pokemon/ditto", &[]);
        assert_eq!(req.url, "http://dex.test/api/v2/pokemon/ditto");
        assert!(req.query.is_empty());
        assert_eq!(
            req.headers,
            vec![("user-agent".to_string(), "pokeapi-rs-sdk".to_string())]
        );
    }

    #[test]
    fn build_url_request_keeps_absolute_url() {
        let client = PokeClient::with_transport(BASE, ScriptedTransport::default());
        let req = client.build_url_request(
            "https://pokeapi.co/api/v2/evolution-chain/2/",
            &[("limit", "5".to_string())],
        );
        assert_eq!(req.full_url(), "https://pokeapi.co/api/v2/evolution-chain/2/?limit=5");
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = PokeClient::with_transport("http://dex.test/api/v2/", ScriptedTransport::default());
        assert_eq!(client.base_url(), BASE);
    }

    #[test]
    fn get_resource_lower_cases_name() {
        let transport = ScriptedTransport::default()
            .json(&format!("{BASE}/pokemon/ditto"), json!({"id": 132, "name": "ditto"}));
        let client = PokeClient::with_transport(BASE, &transport);

        let ditto = client.get_pokemon("DiTTo").unwrap();
        assert_eq!(ditto["id"], 132);
        assert_eq!(transport.urls(), [format!("{BASE}/pokemon/ditto")]);
    }

    #[test]
    fn get_resource_is_refetched_every_call() {
        let transport = ScriptedTransport::default()
            .json(&format!("{BASE}/generation/1"), json!({"id": 1, "name": "generation-i"}));
        let client = PokeClient::with_transport(BASE, &transport);

        let first = client.get_generation(1).unwrap();
        let second = client.get_generation(1).unwrap();
        assert_eq!(first, second);
        assert_eq!(transport.seen.borrow().len(), 2);
    }

    #[test]
    fn non_success_status_carries_status_and_url() {
        let client = PokeClient::with_transport(BASE, ScriptedTransport::default());
        let err = client.get_pokemon("missingno").unwrap_err();
        match err {
            ApiError::RemoteRequestFailed { status, url } => {
                assert_eq!(status, 404);
                assert_eq!(url, format!("{BASE}/pokemon/missingno"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn invalid_json_is_malformed() {
        let transport =
            ScriptedTransport::default().route(&format!("{BASE}/pokemon/1"), 200, "<html>");
        let client = PokeClient::with_transport(BASE, &transport);
        assert!(matches!(
            client.get_pokemon(1).unwrap_err(),
            ApiError::MalformedResponse(_)
        ));
    }

    #[test]
    fn get_page_sends_limit_and_offset() {
        let transport = ScriptedTransport::default().json(
            &format!("{BASE}/pokemon?limit=2&offset=4"),
            page(vec![summary("pokemon", "charmeleon", 5)]),
        );
        let client = PokeClient::with_transport(BASE, &transport);

        let page = client.get_page("pokemon", 2, 4).unwrap();
        assert_eq!(page.count, 3);
        assert_eq!(page.results[0].name, "charmeleon");
    }

    #[test]
    fn stream_all_fetches_pages_until_empty() {
        let transport = ScriptedTransport::default()
            .json(
                &format!("{BASE}/pokemon?limit=2&offset=0"),
                page(vec![summary("pokemon", "bulbasaur", 1), summary("pokemon", "ivysaur", 2)]),
            )
            .json(
                &format!("{BASE}/pokemon?limit=2&offset=2"),
                page(vec![summary("pokemon", "venusaur", 3)]),
            )
            .json(&format!("{BASE}/pokemon?limit=2&offset=4"), page(vec![]));
        let client = PokeClient::with_transport(BASE, &transport);

        let names: Vec<String> = client
            .stream_all("pokemon", 2)
            .map(|r| r.unwrap().name)
            .collect();
        assert_eq!(names, ["bulbasaur", "ivysaur", "venusaur"]);
        assert_eq!(transport.seen.borrow().len(), 3);
    }

    #[test]
    fn stream_all_is_lazy() {
        let transport = ScriptedTransport::default().json(
            &format!("{BASE}/pokemon?limit=2&offset=0"),
            page(vec![summary("pokemon", "bulbasaur", 1), summary("pokemon", "ivysaur", 2)]),
        );
        let client = PokeClient::with_transport(BASE, &transport);

        let mut stream = client.stream_all("pokemon", 2);
        assert!(transport.seen.borrow().is_empty());

        let first_two: Vec<_> = stream.by_ref().take(2).collect();
        assert_eq!(first_two.len(), 2);
        assert_eq!(transport.seen.borrow().len(), 1);
        assert_eq!(stream.offset(), 2);
    }

    #[test]
    fn stream_all_yields_error_once_then_ends() {
        let transport = ScriptedTransport::default()
            .route(&format!("{BASE}/pokemon?limit=100&offset=0"), 503, "busy");
        let client = PokeClient::with_transport(BASE, &transport);

        let mut stream = client.stream_all_pokemon();
        assert!(matches!(
            stream.next(),
            Some(Err(ApiError::RemoteRequestFailed { status: 503, .. }))
        ));
        assert!(stream.next().is_none());
        assert_eq!(transport.seen.borrow().len(), 1);
    }

    #[test]
    fn stream_all_ends_when_cursor_cannot_advance() {
        let transport = ScriptedTransport::default().json(
            &format!("{BASE}/pokemon?limit={}&offset=0", u32::MAX),
            page(vec![summary("pokemon", "bulbasaur", 1), summary("pokemon", "ivysaur", 2)]),
        );
        let client = PokeClient::with_transport(BASE, &transport);

        let mut stream = client.stream_all("pokemon", u32::MAX);
        let names: Vec<String> = stream.by_ref().map(|r| r.unwrap().name).collect();
        assert_eq!(names, ["bulbasaur", "ivysaur"]);
        assert!(stream.next().is_none());
        assert_eq!(transport.seen.borrow().len(), 1);
    }

    fn assert_fused<I: FusedIterator>(_: &I) {}

    #[test]
    fn streams_stay_exhausted() {
        let transport = ScriptedTransport::default()
            .json(
                &format!("{BASE}/pokemon?limit=2&offset=0"),
                page(vec![summary("pokemon", "bulbasaur", 1)]),
            )
            .json(&format!("{BASE}/pokemon?limit=2&offset=2"), page(vec![]))
            .json(
                &format!("{BASE}/type/ice"),
                json!({"name": "ice", "pokemon": [{"slot": 1, "pokemon": summary("pokemon", "jynx", 124)}]}),
            );
        let client = PokeClient::with_transport(BASE, &transport);

        let mut stream = client.stream_all("pokemon", 2);
        assert_fused(&stream);
        assert_eq!(stream.by_ref().count(), 1);
        for _ in 0..3 {
            assert!(stream.next().is_none());
        }
        assert_eq!(transport.seen.borrow().len(), 2);

        let mut members = client.find_by_type("ice").unwrap();
        assert_fused(&members);
        assert_eq!(members.next().map(|m| m.name).as_deref(), Some("jynx"));
        assert!(members.next().is_none());
        assert!(members.next().is_none());
    }

    #[test]
    fn find_by_type_yields_inner_summaries_in_order() {
        let transport = ScriptedTransport::default().json(
            &format!("{BASE}/type/fire"),
            json!({
                "name": "fire",
                "pokemon": [
                    {"slot": 1, "pokemon": summary("pokemon", "charmander", 4)},
                    {"slot": 1, "pokemon": summary("pokemon", "vulpix", 37)},
                ]
            }),
        );
        let client = PokeClient::with_transport(BASE, &transport);

        let members = client.find_by_type("Fire").unwrap();
        assert_eq!(members.len(), 2);
        let names: Vec<_> = members.map(|m| m.name).collect();
        assert_eq!(names, ["charmander", "vulpix"]);
        assert_eq!(transport.seen.borrow().len(), 1);
    }

    fn pikachu_species() -> Value {
        json!({
            "id": 25,
            "name": "pikachu",
            "flavor_text_entries": [
                {
                    "flavor_text": "Its nature is to store up\nelectricity.",
                    "language": {"name": "en", "url": ""},
                    "version": {"name": "red", "url": ""}
                },
                {
                    "flavor_text": "ピカチュウ",
                    "language": {"name": "ja", "url": ""},
                    "version": {"name": "sword", "url": ""}
                },
                {
                    "flavor_text": "Pikachu that can generate\npowerful electricity\x0chave cheek sacs.",
                    "language": {"name": "en", "url": ""},
                    "version": {"name": "sword", "url": ""}
                }
            ],
            "evolution_chain": {"url": "http://other.test/evolution-chain/10/"}
        })
    }

    #[test]
    fn flavor_text_matches_version_and_language() {
        let transport = ScriptedTransport::default()
            .json(&format!("{BASE}/pokemon-species/pikachu"), pikachu_species());
        let client = PokeClient::with_transport(BASE, &transport);

        let text = client
            .get_flavor_text("pikachu", DEFAULT_FLAVOR_VERSION, DEFAULT_FLAVOR_LANGUAGE)
            .unwrap()
            .unwrap();
        assert_eq!(
            text,
            "Pikachu that can generate powerful electricity have cheek sacs."
        );
    }

    #[test]
    fn flavor_text_absent_is_none() {
        let transport = ScriptedTransport::default()
            .json(&format!("{BASE}/pokemon-species/pikachu"), pikachu_species());
        let client = PokeClient::with_transport(BASE, &transport);

        assert_eq!(client.get_flavor_text("pikachu", "Sword", "en").unwrap(), None);
        assert_eq!(client.get_flavor_text("pikachu", "red", "fr").unwrap(), None);
    }

    #[test]
    fn evolution_chain_follows_absolute_url() {
        let transport = ScriptedTransport::default()
            .json(&format!("{BASE}/pokemon-species/pikachu"), pikachu_species())
            .json(
                "http://other.test/evolution-chain/10/",
                json!({
                    "id": 10,
                    "chain": {
                        "species": summary("pokemon-species", "pichu", 172),
                        "evolves_to": [{
                            "species": summary("pokemon-species", "pikachu", 25),
                            "evolves_to": [{
                                "species": summary("pokemon-species", "raichu", 26),
                                "evolves_to": []
                            }]
                        }]
                    }
                }),
            );
        let client = PokeClient::with_transport(BASE, &transport);

        let chain = client.get_evolution_chain("Pikachu").unwrap().unwrap();
        assert_eq!(chain, ["pichu", "pikachu", "raichu"]);
        assert_eq!(
            transport.urls(),
            [
                format!("{BASE}/pokemon-species/pikachu"),
                "http://other.test/evolution-chain/10/".to_string()
            ]
        );
    }

    #[test]
    fn evolution_chain_of_unknown_species_is_none() {
        let client = PokeClient::with_transport(BASE, ScriptedTransport::default());
        assert_eq!(client.get_evolution_chain("missingno").unwrap(), None);
    }

    #[test]
    fn evolution_chain_propagates_other_failures() {
        let transport = ScriptedTransport::default()
            .route(&format!("{BASE}/pokemon-species/eevee"), 500, "oops");
        let client = PokeClient::with_transport(BASE, &transport);
        assert!(matches!(
            client.get_evolution_chain("eevee").unwrap_err(),
            ApiError::RemoteRequestFailed { status: 500, .. }
        ));
    }

    fn generation_transport() -> ScriptedTransport {
        ScriptedTransport::default()
            .json(
                &format!("{BASE}/generation/6"),
                json!({
                    "id": 6,
                    "name": "generation-vi",
                    "pokemon_species": [
                        summary("pokemon-species", "fennekin", 653),
                        summary("pokemon-species", "quilladin", 651),
                        summary("pokemon-species", "chespin", 650),
                        summary("pokemon-species", "chesnaught", 652),
                    ]
                }),
            )
            .json(
                &format!("{BASE}/type/grass"),
                json!({
                    "name": "grass",
                    "pokemon": [
                        {"slot": 1, "pokemon": summary("pokemon", "bulbasaur", 1)},
                        {"slot": 1, "pokemon": summary("pokemon", "chespin", 650)},
                        {"slot": 1, "pokemon": summary("pokemon", "quilladin", 651)},
                        {"slot": 1, "pokemon": summary("pokemon", "chesnaught", 652)},
                    ]
                }),
            )
    }

    #[test]
    fn generation_members_sorted_by_id() {
        let transport = generation_transport();
        let client = PokeClient::with_transport(BASE, &transport);

        let members = client
            .get_generation_members(6, &GenerationQuery::default())
            .unwrap();
        let names: Vec<_> = members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["chespin", "quilladin", "chesnaught", "fennekin"]);
        assert_eq!(transport.seen.borrow().len(), 1);
    }

    #[test]
    fn generation_members_with_type_filter_and_window() {
        let transport = generation_transport();
        let client = PokeClient::with_transport(BASE, &transport);

        let query = GenerationQuery::default().type_filter("grass").offset(1).limit(1);
        let members = client.get_generation_members(6, &query).unwrap();
        let names: Vec<_> = members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["quilladin"]);
    }

    #[test]
    fn generation_members_empty_type_filter_is_ignored() {
        let transport = generation_transport();
        let client = PokeClient::with_transport(BASE, &transport);

        let query = GenerationQuery::default().type_filter("");
        let members = client.get_generation_members(6, &query).unwrap();
        assert_eq!(members.len(), 4);
        assert_eq!(transport.seen.borrow().len(), 1);
    }

    #[test]
    fn generation_members_offset_past_end_is_empty() {
        let transport = generation_transport();
        let client = PokeClient::with_transport(BASE, &transport);

        let query = GenerationQuery::default().offset(50);
        assert!(client.get_generation_members(6, &query).unwrap().is_empty());
    }
}
