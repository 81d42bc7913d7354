//! Truth-table enumeration
//!
//! Assignments are enumerated in ascending numeric order. The first variable
//! (in sorted order) is the most significant bit, so for `a, b` the rows are
//! `00, 01, 10, 11`.

use crate::cover::Implicant;
use crate::formula::Formula;
use std::collections::BTreeSet;

/// Iterator over all `2^n` assignments of `n` variables
#[derive(Debug, Clone)]
pub struct Assignments {
    width: usize,
    next: u64,
    end: u64,
}

impl Iterator for Assignments {
    type Item = Vec<bool>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let row = self.next;
        self.next += 1;
        Some(
            (0..self.width)
                .map(|i| (row >> (self.width - 1 - i)) & 1 == 1)
                .collect(),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.end - self.next).ok();
        (remaining.unwrap_or(usize::MAX), remaining)
    }
}

/// Enumerate every assignment of `width` variables
///
/// `width` is at most 26 in practice (one variable per letter).
pub fn assignments(width: usize) -> Assignments {
    debug_assert!(width < 64, "too many variables for a truth table");
    Assignments {
        width,
        next: 0,
        end: 1u64 << width,
    }
}

/// The satisfying assignments of a formula
///
/// Each minterm has one position per variable of `formula`, in the order of
/// [`Formula::variables`]. A formula without variables yields either the
/// single empty minterm (true) or nothing (false).
///
/// # Examples
///
/// ```
/// use qmc_logic::{minterms, Formula};
///
/// let formula = Formula::parse("a>b")?;
/// let rows: Vec<String> = minterms(&formula).iter().map(|m| m.to_string()).collect();
/// assert_eq!(rows, vec!["00", "01", "11"]);
/// # Ok::<(), qmc_logic::FormulaError>(())
/// ```
pub fn minterms(formula: &Formula) -> BTreeSet<Implicant> {
    minterms_over(formula, formula.variables())
}

/// The satisfying assignments of `formula`, enumerated over `variables`
///
/// `variables` may list letters that do not occur in the formula; those
/// positions then take both values. Letters of the formula missing from
/// `variables` are not substituted, so `variables` must include all of them.
pub fn minterms_over(formula: &Formula, variables: &[char]) -> BTreeSet<Implicant> {
    let postfix = formula.to_postfix();
    let satisfying: BTreeSet<Implicant> = assignments(variables.len())
        .filter(|bits| postfix.substitute(variables, bits).evaluate())
        .map(|bits| Implicant::from_assignment(&bits))
        .collect();

    log::trace!(
        "{}: {} of {} assignments satisfy",
        formula,
        satisfying.len(),
        1u64 << variables.len()
    );
    satisfying
}

/// Evaluate a formula that has no variables
pub fn evaluate_constant(formula: &Formula) -> bool {
    debug_assert!(formula.variables().is_empty());
    formula.to_postfix().substitute(&[], &[]).evaluate()
}
