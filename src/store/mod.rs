//! In-memory beer record store backed by a [`ResourceActor`].

mod client;
mod entity;

pub use client::BeerStore;

use crate::actor_framework::ResourceActor;
use crate::domain::{Beer, BeerId};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Creates a beer store actor and its client. Ids start at 1.
pub fn new(buffer_size: usize) -> (ResourceActor<Beer>, BeerStore) {
    let beer_id_counter = Arc::new(AtomicU64::new(1));
    let next_beer_id = move || -> BeerId { beer_id_counter.fetch_add(1, Ordering::SeqCst) };

    let (actor, generic_client) = ResourceActor::new(buffer_size, next_beer_id);
    let client = BeerStore::new(generic_client);

    (actor, client)
}
