//! Quine-McCluskey reduction
//!
//! Turns a set of minterms into a small sum-of-products cover in two steps:
//!
//! 1. [`prime_implicants`] merges adjacent implicants until no merge is left
//! 2. [`minimum_cover`] picks a smallest subset of the primes that covers
//!    every minterm
//!
//! ```
//! use qmc_logic::cover::{minimum_cover, prime_implicants, CoverCheck, Implicant};
//! use std::collections::BTreeSet;
//!
//! // a&b | a&~b
//! let minterms: BTreeSet<Implicant> = ["10", "11"]
//!     .iter()
//!     .filter_map(|p| Implicant::from_pattern(p))
//!     .collect();
//! let primes = prime_implicants(&minterms);
//! let cover = minimum_cover(&primes, &minterms, CoverCheck::Exact, None);
//! assert_eq!(cover.iter().map(|i| i.to_string()).collect::<Vec<_>>(), vec!["1-"]);
//! ```

mod implicant;
mod prime;
mod search;

pub use implicant::Implicant;
pub use prime::prime_implicants;
pub use search::{minimum_cover, Combinations};

/// How the cover search decides that a subset covers every minterm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoverCheck {
    /// Compare the OR of the implicants' masks (`-` read as `0`) with the
    /// OR of the minterm masks
    ///
    /// Cheap, but accepts covers that miss minterms whenever the masks of
    /// a smaller subset happen to OR to the same value.
    Mask,
    /// Compare the sets of covered minterms
    #[default]
    Exact,
}
