//! # Assignment Engine
//!
//! Computes a randomized giver→receiver mapping over a set of participant
//! names. The mapping is always a derangement: nobody is assigned to
//! themselves.
//!
//! ## Method
//! The engine draws a uniformly random permutation of the names
//! (Fisher–Yates via [`SliceRandom::shuffle`]) and then closes it into a
//! single cycle: position `i` gives to position `(i + 1) % n`. For `n ≥ 2`
//! this can never produce a fixed point, so the derangement property holds
//! by construction.
//!
//! ## Distribution
//! Because every result is one n-cycle, the engine samples uniformly over
//! *single-cycle* derangements, not over all derangements. Callers that need
//! the full derangement distribution would have to replace this method; the
//! single-cycle behavior is part of the contract.

use fxhash::FxHashMap;
use rand::seq::SliceRandom;

/// Computes a giver→receiver derangement over `names`.
///
/// Returns `None` when fewer than two names are supplied; callers rely on
/// this to keep any previously computed mapping untouched when invoked
/// speculatively. Every call draws fresh randomness; there is no seeding
/// contract.
#[must_use]
pub fn assign(names: &[String]) -> Option<FxHashMap<String, String>> {
    if names.len() < 2 {
        return None;
    }

    let mut order: Vec<&str> = names.iter().map(String::as_str).collect();
    order.shuffle(&mut rand::rng());

    let mapping = order
        .iter()
        .enumerate()
        .map(|(i, giver)| ((*giver).to_owned(), order[(i + 1) % order.len()].to_owned()))
        .collect();

    Some(mapping)
}
