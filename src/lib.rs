//! # Quine-McCluskey Formula Simplifier
//!
//! This crate takes a propositional formula over the variables `a`-`z` and
//! produces an equivalent formula that is never longer. It prefers a minimal
//! sum-of-products form, and recognizes formulas that collapse to a constant
//! or to a single XOR, implication or NAND between two variables.
//!
//! ## Quick Start
//!
//! ```
//! use qmc_logic::simplify;
//!
//! # fn main() -> Result<(), qmc_logic::FormulaError> {
//! assert_eq!(simplify("a&b|a&~b")?, "a");
//! assert_eq!(simplify("a&~a")?, "F");
//! assert_eq!(simplify("~a|b|(~a&b)")?, "a>b");
//! assert!(simplify("(a&b").is_err());
//! # Ok(())
//! # }
//! ```
//!
//! ## Syntax
//!
//! | Symbol | Meaning |
//! |--------|---------|
//! | `a`-`z` | variables |
//! | `T`, `F` | constants |
//! | `~` | negation, binds tightest |
//! | `^` | exclusive or |
//! | `&` | and |
//! | `\|`, `/` | or, `a/b = ~(a&b)` (one shared priority) |
//! | `>` | implication, loosest |
//!
//! All binary operators are left-associative, so `a>b>c` means `(a>b)>c`
//! and `a|b/c` means `(a|b)/c`.
//!
//! ## Pipeline
//!
//! 1. [`Formula::parse`] validates the text with a two-state machine
//! 2. [`minterms`] enumerates the truth table through the postfix form
//! 3. [`cover::prime_implicants`] and [`cover::minimum_cover`] reduce it
//! 4. [`simplify::to_expression`] writes the cover back as text
//! 5. The shorter of that text and the input is kept, then checked against
//!    the two-variable forms `x^y`, `x>y` and `x/y`
//!
//! Each stage is available on its own; [`Simplifier::analyze`] returns all
//! intermediate results at once.
//!
//! ## Compile-time Literals
//!
//! ```
//! use qmc_logic::{formula, Simplifier};
//!
//! let f = formula!("(a & ~b) | (~a & b)");
//! assert_eq!(Simplifier::default().simplify(&f), "a^b");
//! ```

extern crate self as qmc_logic;

pub mod cover;
pub mod error;
pub mod formula;
pub mod io;
pub mod simplify;
pub mod truth_table;

pub use cover::CoverCheck;
pub use error::FormulaError;
pub use formula::Formula;
pub use qmc_logic_macros::formula;
pub use simplify::{Simplification, Simplifier};
pub use truth_table::minterms;

/// Configuration for the simplifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimplifyConfig {
    /// How the cover search checks candidate covers
    pub cover_check: CoverCheck,
    /// Give up the cover search after this many candidate subsets and keep
    /// every prime implicant
    pub max_cover_candidates: Option<u64>,
    /// Replace results that match `x^y`, `x>y` or `x/y` by that form
    pub recognize_two_variable_forms: bool,
    /// Reject a shorter candidate that is not equivalent to the input
    pub verify: bool,
}

impl Default for SimplifyConfig {
    fn default() -> Self {
        SimplifyConfig {
            cover_check: CoverCheck::Exact,
            max_cover_candidates: None,
            recognize_two_variable_forms: true,
            verify: false,
        }
    }
}

impl SimplifyConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }
}

/// Remove every whitespace character
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Validate and simplify a whitespace-free formula with the default settings
pub fn simplify(text: &str) -> Result<String, FormulaError> {
    let formula = Formula::parse(text)?;
    Ok(Simplifier::default().simplify(&formula))
}
