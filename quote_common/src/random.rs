//! Random quote selection.
//!
//! Every pattern picks quotes the same way: uniformly over the loaded
//! collection. Screens own their generator; `quote_rng` builds one, seeded
//! when a deterministic sequence is wanted.
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::quote::Quote;

/// Builds the random generator for one screen.
///
/// With a seed the sequence is reproducible; without one the thread-local
/// generator is used.
pub fn quote_rng(seed: Option<u64>) -> Box<dyn RngCore> {
    match seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::rng()),
    }
}

/// Picks one quote uniformly at random, or `None` for an empty collection.
pub fn pick_quote<'a, R: Rng + ?Sized>(quotes: &'a [Quote], rng: &mut R) -> Option<&'a Quote> {
    if quotes.is_empty() {
        return None;
    }
    let index = rng.random_range(0..quotes.len());
    quotes.get(index)
}
