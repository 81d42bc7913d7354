//! Prime-implicant derivation
//!
//! Quine-McCluskey merging, run as an explicit fixpoint: each sweep merges
//! every adjacent pair of the current level into the next level, and every
//! implicant of the level that found no partner at all is prime.

use super::Implicant;
use std::collections::BTreeSet;

/// Compute the prime implicants of a set of minterms
///
/// # Examples
///
/// ```
/// use qmc_logic::cover::{prime_implicants, Implicant};
/// use std::collections::BTreeSet;
///
/// let minterms: BTreeSet<Implicant> = ["10", "11"]
///     .iter()
///     .filter_map(|p| Implicant::from_pattern(p))
///     .collect();
/// let primes = prime_implicants(&minterms);
/// assert_eq!(primes.len(), 1);
/// assert_eq!(primes.iter().next().unwrap().to_string(), "1-");
/// ```
pub fn prime_implicants(minterms: &BTreeSet<Implicant>) -> BTreeSet<Implicant> {
    debug_assert!(
        minterms.iter().all(Implicant::is_minterm),
        "prime implicants start from complete assignments"
    );
    let mut primes = BTreeSet::new();
    let mut level: Vec<Implicant> = minterms.iter().cloned().collect();
    let mut depth = 0usize;

    while !level.is_empty() {
        let mut merged = vec![false; level.len()];
        let mut next = BTreeSet::new();

        for i in 0..level.len() {
            for j in (i + 1)..level.len() {
                if let Some(combined) = level[i].merge(&level[j]) {
                    next.insert(combined);
                    merged[i] = true;
                    merged[j] = true;
                }
            }
        }

        let before = primes.len();
        primes.extend(
            level
                .iter()
                .zip(merged.iter())
                .filter(|&(_, &was_merged)| !was_merged)
                .map(|(implicant, _)| implicant.clone()),
        );

        log::trace!(
            "merge level {}: {} implicants, {} merged, {} prime",
            depth,
            level.len(),
            next.len(),
            primes.len() - before
        );

        level = next.into_iter().collect();
        depth += 1;
    }

    primes
}
