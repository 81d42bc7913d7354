//! The simplification pipeline
//!
//! validated formula → truth table → prime implicants → minimum cover →
//! sum-of-products candidate → shorter of candidate and input →
//! two-variable pattern pass.

mod patterns;
mod reconstruct;

pub use patterns::{PatternMatcher, TwoVariableForm};
pub use reconstruct::to_expression;

use crate::cover::{minimum_cover, prime_implicants, Implicant};
use crate::formula::{validate, Formula};
use crate::truth_table::{evaluate_constant, minterms};
use crate::SimplifyConfig;
use std::collections::BTreeSet;

/// Every intermediate result of one simplification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Simplification {
    /// Variables of the input, ascending
    pub variables: Vec<char>,
    /// Satisfying assignments of the input
    pub minterms: BTreeSet<Implicant>,
    /// Prime implicants of the minterms
    pub prime_implicants: BTreeSet<Implicant>,
    /// The selected cover
    pub cover: BTreeSet<Implicant>,
    /// Sum-of-products text of the cover, if the input was not constant
    pub minimized: Option<String>,
    /// The final answer
    pub result: String,
}

/// Runs the pipeline with a fixed configuration
///
/// # Examples
///
/// ```
/// use qmc_logic::{Formula, Simplifier, SimplifyConfig};
///
/// let simplifier = Simplifier::new(SimplifyConfig::default());
/// let formula = Formula::parse("a&b|a&~b")?;
/// assert_eq!(simplifier.simplify(&formula), "a");
/// # Ok::<(), qmc_logic::FormulaError>(())
/// ```
pub struct Simplifier {
    config: SimplifyConfig,
    patterns: PatternMatcher,
}

impl Default for Simplifier {
    fn default() -> Self {
        Self::new(SimplifyConfig::default())
    }
}

impl Simplifier {
    /// Create a simplifier
    pub fn new(config: SimplifyConfig) -> Self {
        Simplifier {
            config,
            patterns: PatternMatcher::new(),
        }
    }

    /// Simplify a formula, returning only the result text
    pub fn simplify(&self, formula: &Formula) -> String {
        self.analyze(formula).result
    }

    /// Simplify a formula, keeping every intermediate result
    pub fn analyze(&self, formula: &Formula) -> Simplification {
        let variables = formula.variables().to_vec();
        log::debug!("simplifying {} over {:?}", formula, variables);

        if variables.is_empty() {
            let value = evaluate_constant(formula);
            return Simplification {
                variables,
                minterms: minterms(formula),
                prime_implicants: BTreeSet::new(),
                cover: BTreeSet::new(),
                minimized: None,
                result: constant(value),
            };
        }

        let minterms = minterms(formula);
        log::debug!("{} minterms", minterms.len());

        if minterms.is_empty() || minterms.len() as u64 == 1u64 << variables.len() {
            let value = !minterms.is_empty();
            return Simplification {
                variables,
                minterms,
                prime_implicants: BTreeSet::new(),
                cover: BTreeSet::new(),
                minimized: None,
                result: constant(value),
            };
        }

        let primes = prime_implicants(&minterms);
        log::debug!("prime implicants: {:?}", primes);

        let cover = minimum_cover(
            &primes,
            &minterms,
            self.config.cover_check,
            self.config.max_cover_candidates,
        );
        log::debug!("cover: {:?}", cover);

        let minimized = to_expression(&cover, &variables);
        debug_assert!(validate(&minimized), "reconstructed {:?} is not a formula", minimized);

        let reduced = self.choose(formula, &minimized);
        let result = if self.config.recognize_two_variable_forms {
            let reduced_minterms = if reduced.text() == formula.text() {
                minterms.clone()
            } else {
                crate::truth_table::minterms(&reduced)
            };
            self.patterns
                .recognize(&reduced, &reduced_minterms)
                .unwrap_or_else(|| reduced.text().to_string())
        } else {
            reduced.text().to_string()
        };

        Simplification {
            variables,
            minterms,
            prime_implicants: primes,
            cover,
            minimized: Some(minimized),
            result,
        }
    }

    /// Keep the candidate only if it is strictly shorter than the input
    fn choose(&self, formula: &Formula, minimized: &str) -> Formula {
        log::debug!(
            "candidate {:?} ({} chars) vs input ({} chars)",
            minimized,
            minimized.len(),
            formula.len()
        );
        if minimized.len() >= formula.len() {
            return formula.clone();
        }

        let candidate = Formula::from_validated(minimized);
        if self.config.verify && !candidate.equivalent_to(formula) {
            log::warn!(
                "{} is not equivalent to {}; keeping the input",
                candidate,
                formula
            );
            return formula.clone();
        }
        candidate
    }
}

fn constant(value: bool) -> String {
    String::from(if value { "T" } else { "F" })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cover::CoverCheck;

    fn run(text: &str) -> String {
        Simplifier::default().simplify(&Formula::parse(text).unwrap())
    }

    #[test]
    fn test_constants() {
        assert_eq!(run("a&~a"), "F");
        assert_eq!(run("a|~a"), "T");
        assert_eq!(run("T&~F"), "T");
        assert_eq!(run("F"), "F");
    }

    #[test]
    fn test_merge_to_single_variable() {
        assert_eq!(run("a&b|a&~b"), "a");
    }

    #[test]
    fn test_minimal_input_is_kept() {
        assert_eq!(run("a^b"), "a^b");
        assert_eq!(run("a&b"), "a&b");
        assert_eq!(run("a|b"), "a|b");
    }

    #[test]
    fn test_xnor_is_not_a_pattern() {
        // Same length as the sum of products, so the input wins
        assert_eq!(run("(a&b)|(~a&~b)"), "(a&b)|(~a&~b)");
        assert_eq!(run("((a&b)|(~a&~b))"), "(a&b)|(~a&~b)");
    }

    #[test]
    fn test_pattern_after_reduction() {
        assert_eq!(run("(a&~b)|(~a&b)"), "a^b");
        assert_eq!(run("~a|b|(~a&b)"), "a>b");
        assert_eq!(run("~(a&b)&(c|~c)"), "a/b");
    }

    #[test]
    fn test_patterns_can_be_disabled() {
        let simplifier = Simplifier::new(SimplifyConfig {
            recognize_two_variable_forms: false,
            ..Default::default()
        });
        let formula = Formula::parse("(a&~b)|(~a&b)").unwrap();
        assert_eq!(simplifier.simplify(&formula), "(a&~b)|(~a&b)");
    }

    #[test]
    fn test_analyze_records_every_stage() {
        let formula = Formula::parse("a&b|a&~b").unwrap();
        let report = Simplifier::default().analyze(&formula);
        let show = |set: &BTreeSet<Implicant>| -> Vec<String> {
            set.iter().map(|i| i.to_string()).collect()
        };
        assert_eq!(report.variables, vec!['a', 'b']);
        assert_eq!(show(&report.minterms), vec!["10", "11"]);
        assert_eq!(show(&report.prime_implicants), vec!["1-"]);
        assert_eq!(show(&report.cover), vec!["1-"]);
        assert_eq!(report.minimized.as_deref(), Some("a"));
        assert_eq!(report.result, "a");
    }

    #[test]
    fn test_mask_check_with_verification_keeps_input() {
        // Under the mask check the parity function collapses to a&b&c
        let formula = Formula::parse("((a^b)^c)").unwrap();
        let unchecked = Simplifier::new(SimplifyConfig {
            cover_check: CoverCheck::Mask,
            ..Default::default()
        });
        assert_eq!(unchecked.simplify(&formula), "a&b&c");

        let verified = Simplifier::new(SimplifyConfig {
            cover_check: CoverCheck::Mask,
            verify: true,
            ..Default::default()
        });
        assert_eq!(verified.simplify(&formula), "((a^b)^c)");
    }

    #[test]
    fn test_redundant_consensus_term_removed() {
        assert_eq!(run("(a&b)|(~a&c)|(b&c)"), "(a&b)|(~a&c)");
    }
}
