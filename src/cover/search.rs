//! Minimum-size cover selection
//!
//! Candidate subsets of the prime implicants are enumerated by increasing
//! size, and within one size in lexicographic index order over the sorted
//! implicants. The first candidate that passes the coverage check wins.

use super::{CoverCheck, Implicant};
use std::collections::BTreeSet;

/// Index-based generator of the `k`-element subsets of `0..n`
///
/// Yields subsets in lexicographic order, e.g. for `n = 4, k = 2`:
/// `[0,1] [0,2] [0,3] [1,2] [1,3] [2,3]`.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    exhausted: bool,
}

impl Combinations {
    /// Subsets of size `k` drawn from `0..n`
    pub fn new(n: usize, k: usize) -> Self {
        Combinations {
            n,
            indices: (0..k).collect(),
            exhausted: k > n,
        }
    }

    fn advance(&mut self) {
        let k = self.indices.len();
        // Rightmost index that can still move
        let Some(pos) = (0..k).rev().find(|&i| self.indices[i] < self.n - k + i) else {
            self.exhausted = true;
            return;
        };
        self.indices[pos] += 1;
        for i in (pos + 1)..k {
            self.indices[i] = self.indices[i - 1] + 1;
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let current = self.indices.clone();
        self.advance();
        Some(current)
    }
}

/// Coverage of each implicant, precomputed once per search
enum Coverage {
    Mask { masks: Vec<u64>, target: u64 },
    Exact { sets: Vec<Vec<u64>>, target: Vec<u64> },
}

impl Coverage {
    fn new(implicants: &[Implicant], minterms: &BTreeSet<Implicant>, check: CoverCheck) -> Self {
        match check {
            CoverCheck::Mask => Coverage::Mask {
                masks: implicants.iter().map(Implicant::mask).collect(),
                target: minterms.iter().fold(0, |acc, m| acc | m.mask()),
            },
            CoverCheck::Exact => {
                let words = minterms.len().div_ceil(64);
                let mut target = vec![0u64; words];
                for idx in 0..minterms.len() {
                    target[idx / 64] |= 1 << (idx % 64);
                }
                let sets = implicants
                    .iter()
                    .map(|implicant| {
                        let mut set = vec![0u64; words];
                        for (idx, minterm) in minterms.iter().enumerate() {
                            if implicant.covers(minterm) {
                                set[idx / 64] |= 1 << (idx % 64);
                            }
                        }
                        set
                    })
                    .collect();
                Coverage::Exact { sets, target }
            }
        }
    }

    fn is_cover(&self, candidate: &[usize]) -> bool {
        match self {
            Coverage::Mask { masks, target } => {
                candidate.iter().fold(0, |acc, &i| acc | masks[i]) == *target
            }
            Coverage::Exact { sets, target } => {
                let mut covered = vec![0u64; target.len()];
                for &i in candidate {
                    for (word, bits) in covered.iter_mut().zip(sets[i].iter()) {
                        *word |= bits;
                    }
                }
                covered == *target
            }
        }
    }
}

/// Select a smallest subset of `implicants` that covers `minterms`
///
/// Subsets are tried by increasing size; ties go to the first subset in
/// enumeration order. When `limit` is set and more than `limit` candidates
/// would have to be examined, or when no proper subset passes the check,
/// the whole implicant set is returned.
///
/// With [`CoverCheck::Mask`] coverage is judged by comparing integer OR-masks
/// (`-` read as `0`), which can accept a subset that misses minterms.
/// [`CoverCheck::Exact`] compares the covered minterm sets.
pub fn minimum_cover(
    implicants: &BTreeSet<Implicant>,
    minterms: &BTreeSet<Implicant>,
    check: CoverCheck,
    limit: Option<u64>,
) -> BTreeSet<Implicant> {
    let ordered: Vec<Implicant> = implicants.iter().cloned().collect();
    let coverage = Coverage::new(&ordered, minterms, check);
    let mut examined: u64 = 0;

    for size in 1..=ordered.len() {
        for candidate in Combinations::new(ordered.len(), size) {
            examined += 1;
            if limit.is_some_and(|max| examined > max) {
                log::warn!(
                    "cover search stopped after {} candidates; keeping all {} prime implicants",
                    examined - 1,
                    ordered.len()
                );
                return implicants.clone();
            }
            if coverage.is_cover(&candidate) {
                log::debug!(
                    "cover of size {} found after {} candidates",
                    size,
                    examined
                );
                return candidate.into_iter().map(|i| ordered[i].clone()).collect();
            }
        }
    }

    log::debug!("no subset passed the {:?} check; keeping all implicants", check);
    implicants.clone()
}
