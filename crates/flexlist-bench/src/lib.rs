//! Benchmark input builders for the flexlist container.
//!
//! All pseudo-random inputs come from a seeded ChaCha8 RNG, so runs are
//! reproducible across machines and invocations.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use flexlist::FlexList;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Build `len` uniformly random `u64` values from the given seed.
pub fn random_values(len: usize, seed: u64) -> Vec<u64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.random::<u64>()).collect()
}

/// Build a list of `len` uniformly random `u64` values.
pub fn random_list(len: usize, seed: u64) -> FlexList<u64> {
    random_values(len, seed).into_iter().collect()
}

/// Build an ascending list of `len` values.
///
/// Already-ordered input is the sort's pathological case: the last-element
/// pivot splits maximally unevenly, giving quadratic behaviour.
pub fn sorted_list(len: usize) -> FlexList<u64> {
    (0..len as u64).collect()
}

/// Build a descending list of `len` values.
pub fn reversed_list(len: usize) -> FlexList<u64> {
    (0..len as u64).rev().collect()
}
