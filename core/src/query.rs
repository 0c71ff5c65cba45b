//! Pure shaping logic applied to fetched records.
//!
//! Nothing here performs I/O, so each function can be driven directly from
//! test vectors.

use std::collections::HashSet;

use crate::error::ApiError;
use crate::types::{ChainLink, NamedResource};

/// Species names of an evolution tree in pre-order: a node, then each of its
/// branches fully, left to right.
pub fn flatten_chain(root: &ChainLink) -> Vec<String> {
    let mut names = Vec::new();
    let mut stack = vec![root];
    while let Some(link) = stack.pop() {
        names.push(link.species.name.clone());
        stack.extend(link.evolves_to.iter().rev());
    }
    names
}

/// Replace the line feeds and form feeds PokeAPI embeds in flavor text.
pub fn clean_flavor_text(text: &str) -> String {
    text.replace(['\n', '\x0c'], " ")
}

/// Filter, order and window a generation's member list.
///
/// When `type_names` is given, only members whose name is in the set are
/// kept. Names are compared exactly, without case folding. The result is
/// sorted by the id embedded in each member's URL, then `offset` leading
/// entries are dropped and the rest truncated to `limit`.
pub fn select_generation_members(
    members: Vec<NamedResource>,
    type_names: Option<&HashSet<String>>,
    offset: usize,
    limit: Option<usize>,
) -> Result<Vec<NamedResource>, ApiError> {
    let mut keyed = members
        .into_iter()
        .filter(|m| type_names.is_none_or(|names| names.contains(&m.name)))
        .map(|m| m.id().map(|id| (id, m)))
        .collect::<Result<Vec<_>, _>>()?;
    keyed.sort_by_key(|(id, _)| *id);

    tracing::trace!(kept = keyed.len(), offset, ?limit, "selecting generation members");

    Ok(keyed
        .into_iter()
        .map(|(_, m)| m)
        .skip(offset)
        .take(limit.unwrap_or(usize::MAX))
        .collect())
}
