//! Pull-based iterators over collections.
//!
//! # Design
//! `ResourceStream` holds its cursor explicitly (next offset, the buffered
//! page, whether the end was seen). A page is fetched only when the buffer
//! runs dry and the consumer asks for another element, so stopping early
//! never costs an extra request. Restarting means calling
//! `PokeClient::stream_all` again.

use std::iter::FusedIterator;
use std::vec;

use crate::client::PokeClient;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{NamedResource, TypeSlot};

/// Every summary of a paginated collection, fetched one page at a time.
///
/// Ends when a page comes back with no results. A failed page fetch is
/// yielded once as `Err`, after which the stream is exhausted.
pub struct ResourceStream<'a, T: Transport> {
    client: &'a PokeClient<T>,
    collection: String,
    page_size: u32,
    offset: u32,
    buffer: vec::IntoIter<NamedResource>,
    finished: bool,
}

impl<'a, T: Transport> ResourceStream<'a, T> {
    pub(crate) fn new(client: &'a PokeClient<T>, collection: &str, page_size: u32) -> Self {
        Self {
            client,
            collection: collection.to_string(),
            page_size: page_size.max(1),
            offset: 0,
            buffer: Vec::new().into_iter(),
            finished: false,
        }
    }

    /// Offset the next page fetch will start at.
    pub fn offset(&self) -> u32 {
        self.offset
    }
}

impl<T: Transport> Iterator for ResourceStream<'_, T> {
    type Item = Result<NamedResource, ApiError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(item) = self.buffer.next() {
            return Some(Ok(item));
        }
        if self.finished {
            return None;
        }

        match self.client.get_page(&self.collection, self.page_size, self.offset) {
            Ok(page) if page.results.is_empty() => {
                self.finished = true;
                None
            }
            Ok(page) => {
                tracing::debug!(
                    collection = %self.collection,
                    offset = self.offset,
                    received = page.results.len(),
                    "fetched page"
                );
                // A cursor that cannot advance has reached the end of the index.
                match self.offset.checked_add(self.page_size) {
                    Some(next) => self.offset = next,
                    None => self.finished = true,
                }
                self.buffer = page.results.into_iter();
                self.buffer.next().map(Ok)
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

impl<T: Transport> FusedIterator for ResourceStream<'_, T> {}

/// Members of one type, in the order the API lists them.
///
/// The type record is fetched before this iterator is created; iterating
/// never touches the network.
#[derive(Debug)]
pub struct TypeMembers {
    slots: vec::IntoIter<TypeSlot>,
}

impl TypeMembers {
    pub(crate) fn new(slots: Vec<TypeSlot>) -> Self {
        Self {
            slots: slots.into_iter(),
        }
    }
}

impl Iterator for TypeMembers {
    type Item = NamedResource;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().map(|slot| slot.pokemon)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl ExactSizeIterator for TypeMembers {}

impl FusedIterator for TypeMembers {}
