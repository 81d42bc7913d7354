//! Propositional formulas over the variables `a`-`z`
//!
//! A [`Formula`] is the validated text of a formula together with its
//! sorted variable set. Everything downstream of [`Formula::parse`] assumes
//! validity and has no error path of its own.
//!
//! # Grammar
//!
//! | Symbol | Meaning | Priority |
//! |--------|---------|----------|
//! | `~` | negation (prefix) | 5 |
//! | `^` | exclusive or | 4 |
//! | `&` | and | 3 |
//! | `\|` `/` | or, `a/b = ~(a&b)` | 2 |
//! | `>` | implication | 1 |
//!
//! Variables are single lowercase letters, `T` and `F` are the constants.
//! All binary operators are left-associative.
//!
//! ```
//! use qmc_logic::Formula;
//!
//! let formula = Formula::parse("(c|a)&~b")?;
//! assert_eq!(formula.variables(), &['a', 'b', 'c']);
//! assert_eq!(formula.to_postfix().to_string(), "ca|b~&");
//! # Ok::<(), qmc_logic::FormulaError>(())
//! ```

mod postfix;
mod symbols;
mod tree;
mod validate;

pub use postfix::{eval_literal, strip_brackets, to_postfix, Postfix};
pub use symbols::{tokenize, BinaryOp, Token};
pub use tree::FormulaTree;
pub use validate::{ensure_valid, validate};

use crate::error::FormulaError;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// A validated, whitespace-free formula
///
/// Immutable. The variable set is derived once at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Formula {
    text: Arc<str>,
    variables: Arc<[char]>,
}

impl Formula {
    /// Validate `text` and build a formula from it
    ///
    /// `text` must not contain whitespace; see
    /// [`strip_whitespace`](crate::strip_whitespace).
    pub fn parse(text: &str) -> Result<Self, FormulaError> {
        ensure_valid(text)?;
        Ok(Self::from_validated(text))
    }

    /// Build a formula from text that is already known to be valid
    ///
    /// Used by the `formula!` macro, which validates at compile time.
    #[doc(hidden)]
    pub fn from_validated(text: &str) -> Self {
        let mut variables: Vec<char> = text.chars().filter(char::is_ascii_lowercase).collect();
        variables.sort_unstable();
        variables.dedup();
        Formula {
            text: Arc::from(text),
            variables: variables.into(),
        }
    }

    /// The formula text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Distinct variables, ascending
    pub fn variables(&self) -> &[char] {
        &self.variables
    }

    /// Number of characters in the formula
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; a valid formula holds at least one operand
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Postfix form of the formula
    pub fn to_postfix(&self) -> Postfix {
        to_postfix(&self.text)
    }

    /// Tree form of the formula
    pub fn to_tree(&self) -> FormulaTree {
        FormulaTree::parse(&self.text)
            .unwrap_or_else(|e| unreachable!("validated formula rejected by tree parser: {}", e))
    }

    /// Check whether two formulas agree on every assignment
    ///
    /// Both formulas are evaluated over the union of their variables with
    /// the tree evaluator, independently of the postfix machinery.
    pub fn equivalent_to(&self, other: &Formula) -> bool {
        let mut variables: Vec<char> = self
            .variables
            .iter()
            .chain(other.variables.iter())
            .copied()
            .collect();
        variables.sort_unstable();
        variables.dedup();

        let lhs = self.to_tree();
        let rhs = other.to_tree();
        crate::truth_table::assignments(variables.len())
            .all(|bits| lhs.evaluate(&variables, &bits) == rhs.evaluate(&variables, &bits))
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for Formula {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Formula::parse(s)
    }
}

impl AsRef<str> for Formula {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variables_sorted_and_distinct() {
        let formula = Formula::parse("z&a|a>T&m").unwrap();
        assert_eq!(formula.variables(), &['a', 'm', 'z']);
    }

    #[test]
    fn test_constant_formula_has_no_variables() {
        let formula = Formula::parse("T>F").unwrap();
        assert!(formula.variables().is_empty());
        assert_eq!(formula.len(), 3);
    }

    #[test]
    fn test_parse_rejects_invalid() {
        let err = Formula::parse("(a&b").unwrap_err();
        assert!(matches!(err, FormulaError::InvalidFormula { position: None, .. }));

        let err: FormulaError = "a&&b".parse::<Formula>().unwrap_err();
        assert!(matches!(
            err,
            FormulaError::InvalidFormula {
                position: Some(2),
                ..
            }
        ));
    }

    #[test]
    fn test_display_round_trip() {
        let formula: Formula = "~(a^b)".parse().unwrap();
        assert_eq!(formula.to_string(), "~(a^b)");
        assert_eq!(formula.text(), "~(a^b)");
    }

    #[test]
    fn test_equivalent_to() {
        let xor = Formula::parse("a^b").unwrap();
        let expanded = Formula::parse("(a&~b)|(~a&b)").unwrap();
        let xnor = Formula::parse("(a&b)|(~a&~b)").unwrap();
        assert!(xor.equivalent_to(&expanded));
        assert!(!xor.equivalent_to(&xnor));
        // & binds tighter than |
        assert!(xor.equivalent_to(&Formula::parse("a&~b|~a&b").unwrap()));
        assert!(!xor.equivalent_to(&Formula::parse("a&(~b|~a)&b").unwrap()));
        // Different variable sets are compared over their union
        assert!(Formula::parse("a|~a").unwrap().equivalent_to(&Formula::parse("T").unwrap()));
    }

    #[test]
    fn test_macro_literal() {
        let formula = crate::formula!("a & (b | c)");
        assert_eq!(formula.text(), "a&(b|c)");
        assert_eq!(formula.variables(), &['a', 'b', 'c']);
    }
}
