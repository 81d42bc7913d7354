//! Recognition of formulas that are a single two-variable relation

use crate::cover::Implicant;
use crate::formula::{BinaryOp, Formula};
use crate::truth_table::minterms;
use std::collections::BTreeSet;
use std::fmt;

/// A two-variable connective with a compact notation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TwoVariableForm {
    /// `x^y`
    Xor,
    /// `x>y`
    Implication,
    /// `x/y`
    Nand,
}

impl TwoVariableForm {
    /// Forms in the order they are tried
    pub const ALL: [TwoVariableForm; 3] = [
        TwoVariableForm::Xor,
        TwoVariableForm::Implication,
        TwoVariableForm::Nand,
    ];

    fn operator(self) -> BinaryOp {
        match self {
            TwoVariableForm::Xor => BinaryOp::Xor,
            TwoVariableForm::Implication => BinaryOp::Implies,
            TwoVariableForm::Nand => BinaryOp::Nand,
        }
    }

    /// Whether swapping the operands changes the meaning
    pub fn is_ordered(self) -> bool {
        self == TwoVariableForm::Implication
    }

    /// The form written over two variables
    pub fn render(self, lhs: char, rhs: char) -> String {
        format!("{}{}{}", lhs, self.operator().symbol(), rhs)
    }

    /// Truth table of the canonical form over `a, b`
    fn canonical_minterms(self) -> BTreeSet<Implicant> {
        minterms(&Formula::from_validated(&self.render('a', 'b')))
    }
}

impl fmt::Display for TwoVariableForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render('a', 'b'))
    }
}

/// Precomputed truth tables of the canonical two-variable forms
pub struct PatternMatcher {
    tables: Vec<(TwoVariableForm, BTreeSet<Implicant>)>,
}

impl Default for PatternMatcher {
    fn default() -> Self {
        PatternMatcher {
            tables: TwoVariableForm::ALL
                .iter()
                .map(|&form| (form, form.canonical_minterms()))
                .collect(),
        }
    }
}

impl PatternMatcher {
    /// Build the matcher
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a two-variable form with the same truth table as `formula`
    ///
    /// `minterms` must be the minterms of `formula` over its own variables.
    /// Constant tables come back as `F` and `T`. Pairs are tried in
    /// variable order, and for each pair `^`, `>` (both directions) and `/`.
    pub fn recognize(&self, formula: &Formula, minterms: &BTreeSet<Implicant>) -> Option<String> {
        let variables = formula.variables();
        let width = variables.len();

        if minterms.is_empty() {
            return Some(String::from("F"));
        }
        if width < 64 && minterms.len() as u64 == 1u64 << width {
            return Some(String::from("T"));
        }
        if width < 2 {
            return None;
        }

        for i in 0..width {
            for j in (i + 1)..width {
                for (form, table) in &self.tables {
                    let mut orders = vec![(i, j)];
                    if form.is_ordered() {
                        orders.push((j, i));
                    }
                    for (x, y) in orders {
                        if matches_on_pair(minterms, table, width, x, y) {
                            let rendered = form.render(variables[x], variables[y]);
                            log::debug!("{} has the truth table of {}", formula, rendered);
                            return Some(rendered);
                        }
                    }
                }
            }
        }
        None
    }
}

/// True if the minterms are exactly the assignments whose projection onto
/// positions `(x, y)` lies in the two-variable `table`
fn matches_on_pair(
    minterms: &BTreeSet<Implicant>,
    table: &BTreeSet<Implicant>,
    width: usize,
    x: usize,
    y: usize,
) -> bool {
    // Every free position doubles the size of the table
    let expected = (table.len() as u64) << (width - 2);
    if minterms.len() as u64 != expected {
        return false;
    }
    minterms.iter().all(|minterm| {
        let inputs = minterm.inputs();
        let projected = Implicant::new(&[inputs[x], inputs[y]]);
        table.contains(&projected)
    })
}
