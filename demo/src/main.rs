//! Walks every `PokeClient` operation and prints what comes back.
//!
//! Talks to the public API unless `POKEAPI_BASE_URL` points elsewhere (e.g.
//! at the mock server). A failing section is reported and the walk
//! continues.

use anyhow::Context;
use pokeapi_core::{
    ClientConfig, GenerationQuery, PokeClient, DEFAULT_FLAVOR_LANGUAGE, DEFAULT_FLAVOR_VERSION,
    DEFAULT_PAGE_LIMIT,
};
use tracing_subscriber::EnvFilter;

fn config_from_env() -> anyhow::Result<ClientConfig> {
    let mut config = ClientConfig::default();
    if let Ok(base_url) = std::env::var("POKEAPI_BASE_URL") {
        config = config.with_base_url(&base_url);
    }
    if let Ok(secs) = std::env::var("POKEAPI_TIMEOUT_SECS") {
        let secs = secs
            .parse::<u64>()
            .with_context(|| format!("POKEAPI_TIMEOUT_SECS must be a whole number, got {secs:?}"))?;
        config = config.with_timeout_secs(secs);
    }
    Ok(config)
}

fn section(title: &str, body: impl FnOnce() -> anyhow::Result<()>) {
    println!("\n--- {title} ---");
    if let Err(e) = body() {
        tracing::error!(section = title, "{e:#}");
        println!("Error: {e:#}");
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let config = config_from_env()?;
    tracing::info!(base_url = %config.base_url, timeout = ?config.timeout, "starting demo");
    let client = PokeClient::with_config(config);

    section("Pokémon by name (pikachu)", || {
        let pikachu = client.get_pokemon("pikachu")?;
        println!("Name: {}", capitalize(pikachu["name"].as_str().unwrap_or_default()));
        println!("ID: {}", pikachu["id"]);
        let types: Vec<&str> = pikachu["types"]
            .as_array()
            .map(|types| types.iter().filter_map(|t| t["type"]["name"].as_str()).collect())
            .unwrap_or_default();
        println!("Types: {}", types.join(", "));
        Ok(())
    });

    section("Generation by id (1)", || {
        let generation = client.get_generation(1)?;
        println!("Generation: {}", generation["name"].as_str().unwrap_or_default().to_uppercase());
        println!("Main region: {}", capitalize(generation["main_region"]["name"].as_str().unwrap_or_default()));
        let count = generation["pokemon_species"].as_array().map_or(0, Vec::len);
        println!("Number of species: {count}");
        Ok(())
    });

    section("First page of Pokémon", || {
        let page = client.get_page("pokemon", DEFAULT_PAGE_LIMIT, 0)?;
        println!("Total Pokémon count: {}", page.count);
        for pokemon in &page.results {
            println!("- {}", capitalize(&pokemon.name));
        }
        Ok(())
    });

    section("Pages at several offsets", || {
        let page_size = 3;
        for offset in [0, 7, 13] {
            let page = client.get_page("pokemon", page_size, offset)?;
            println!("Offset {offset}:");
            for (i, pokemon) in page.results.iter().enumerate() {
                println!("  {:3}. {}", offset as usize + i + 1, capitalize(&pokemon.name));
            }
        }
        Ok(())
    });

    section("Streaming the first 10 Pokémon", || {
        for pokemon in client.stream_all_pokemon().take(10) {
            println!("- {}", capitalize(&pokemon?.name));
        }
        println!("... and so on, without loading everything at once.");
        Ok(())
    });

    section("Fire type (first 5)", || {
        let names: Vec<String> = client.find_by_type("fire")?.take(5).map(|p| p.name).collect();
        println!("{}", names.join(", "));
        Ok(())
    });

    section("Flavor text (pikachu, sword)", || {
        match client.get_flavor_text("pikachu", DEFAULT_FLAVOR_VERSION, DEFAULT_FLAVOR_LANGUAGE)? {
            Some(text) => println!("{text}"),
            None => println!("No entry for that version and language."),
        }
        Ok(())
    });

    section("Evolution chains", || {
        for name in ["charmander", "eevee", "missingno"] {
            match client.get_evolution_chain(name)? {
                Some(chain) => println!("{name}: {}", chain.join(" -> ")),
                None => println!("{name}: no evolution chain"),
            }
        }
        Ok(())
    });

    section("Generation I, offset 10, limit 5", || {
        let query = GenerationQuery::default().offset(10).limit(5);
        for species in client.get_generation_members(1, &query)? {
            println!("{:4} {}", species.id()?, capitalize(&species.name));
        }
        Ok(())
    });

    section("Generation VI grass types", || {
        let query = GenerationQuery::default().type_filter("grass");
        let names: Vec<String> = client
            .get_generation_members(6, &query)?
            .into_iter()
            .map(|s| s.name)
            .collect();
        println!("{}", names.join(", "));
        Ok(())
    });

    client.close();
    Ok(())
}
