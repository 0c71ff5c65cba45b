//! Fixed dataset served by the mock API.
//!
//! A small slice of the real PokeAPI data: enough species to exercise
//! pagination, branching evolution chains, type membership spanning several
//! generations, and flavor text in more than one language and version.

pub struct SpeciesEntry {
    pub id: u32,
    pub name: &'static str,
    pub generation: u32,
    pub types: &'static [&'static str],
    pub evolves_from: Option<&'static str>,
    pub chain: u32,
}

const fn species(
    id: u32,
    name: &'static str,
    generation: u32,
    types: &'static [&'static str],
    evolves_from: Option<&'static str>,
    chain: u32,
) -> SpeciesEntry {
    SpeciesEntry { id, name, generation, types, evolves_from, chain }
}

/// Ordered by id.
pub const SPECIES: &[SpeciesEntry] = &[
    species(1, "bulbasaur", 1, &["grass", "poison"], None, 1),
    species(2, "ivysaur", 1, &["grass", "poison"], Some("bulbasaur"), 1),
    species(3, "venusaur", 1, &["grass", "poison"], Some("ivysaur"), 1),
    species(4, "charmander", 1, &["fire"], None, 2),
    species(5, "charmeleon", 1, &["fire"], Some("charmander"), 2),
    species(6, "charizard", 1, &["fire", "flying"], Some("charmeleon"), 2),
    species(25, "pikachu", 1, &["electric"], Some("pichu"), 10),
    species(26, "raichu", 1, &["electric"], Some("pikachu"), 10),
    species(133, "eevee", 1, &["normal"], None, 67),
    species(134, "vaporeon", 1, &["water"], Some("eevee"), 67),
    species(135, "jolteon", 1, &["electric"], Some("eevee"), 67),
    species(136, "flareon", 1, &["fire"], Some("eevee"), 67),
    species(172, "pichu", 2, &["electric"], None, 10),
    species(196, "espeon", 2, &["psychic"], Some("eevee"), 67),
    species(197, "umbreon", 2, &["dark"], Some("eevee"), 67),
    species(650, "chespin", 6, &["grass"], None, 325),
    species(651, "quilladin", 6, &["grass"], Some("chespin"), 325),
    species(652, "chesnaught", 6, &["grass", "fighting"], Some("quilladin"), 325),
    species(653, "fennekin", 6, &["fire"], None, 326),
    species(700, "sylveon", 6, &["fairy"], Some("eevee"), 67),
];

/// (id, name, main region)
pub const GENERATIONS: &[(u32, &str, &str)] = &[
    (1, "generation-i", "kanto"),
    (2, "generation-ii", "johto"),
    (6, "generation-vi", "kalos"),
];

pub const TYPES: &[(u32, &str)] = &[
    (1, "normal"),
    (2, "fighting"),
    (3, "flying"),
    (4, "poison"),
    (10, "fire"),
    (11, "water"),
    (12, "grass"),
    (13, "electric"),
    (14, "psychic"),
    (17, "dark"),
    (18, "fairy"),
];

/// (species, language, version, text) in the order the API lists them.
pub const FLAVOR_TEXT: &[(&str, &str, &str, &str)] = &[
    (
        "pikachu",
        "en",
        "red",
        "When several of\nthese POKéMON\ngather, their\x0celectricity could\nbuild and cause\nlightning storms.",
    ),
    ("pikachu", "ja", "sword", "ほっぺたの　りょうがわに\nちいさい　でんきぶくろを　もつ。"),
    (
        "pikachu",
        "en",
        "sword",
        "Pikachu that can generate powerful\nelectricity have cheek sacs that\x0care extra soft and super stretchy.",
    ),
    (
        "charmander",
        "en",
        "sword",
        "It has a preference for hot things.\nWhen it rains, steam is said to spout\nfrom the tip of its tail.",
    ),
    (
        "eevee",
        "en",
        "shield",
        "Its ability to evolve into many forms\nallows it to adapt smoothly\x0cand perfectly to any environment.",
    ),
];

fn by_key<'a, T>(items: &'a [T], key: &str, id: impl Fn(&T) -> u32, name: impl Fn(&T) -> &str) -> Option<&'a T> {
    match key.parse::<u32>() {
        Ok(n) => items.iter().find(|item| id(item) == n),
        Err(_) => items.iter().find(|item| name(item) == key),
    }
}

pub fn find_species(key: &str) -> Option<&'static SpeciesEntry> {
    by_key(SPECIES, key, |s| s.id, |s| s.name)
}

pub fn find_generation(key: &str) -> Option<&'static (u32, &'static str, &'static str)> {
    by_key(GENERATIONS, key, |g| g.0, |g| g.1)
}

pub fn find_type(key: &str) -> Option<&'static (u32, &'static str)> {
    by_key(TYPES, key, |t| t.0, |t| t.1)
}

/// Species that evolve directly from `name`, by id.
pub fn children_of(name: &str) -> impl Iterator<Item = &'static SpeciesEntry> + '_ {
    SPECIES.iter().filter(move |s| s.evolves_from == Some(name))
}

/// The base species of an evolution chain.
pub fn chain_root(chain: u32) -> Option<&'static SpeciesEntry> {
    SPECIES
        .iter()
        .find(|s| s.chain == chain && s.evolves_from.is_none())
}
