//! Tree form of a formula, used as an independent reference evaluator
//!
//! The tree is produced by a lalrpop grammar that encodes the same operator
//! precedence as the postfix converter. Evaluating the tree and evaluating
//! the postfix form must always agree; the property tests rely on this.

use super::symbols::BinaryOp;
use crate::error::FormulaError;
use lalrpop_util::ParseError;
use std::mem;

// Lalrpop-generated parser module (generated in OUT_DIR at build time)
#[allow(clippy::all)]
mod parser_impl {
    #![allow(clippy::all)]
    #![allow(dead_code)]
    #![allow(unused_variables)]
    #![allow(unused_imports)]
    #![allow(non_snake_case)]
    #![allow(non_camel_case_types)]
    #![allow(non_upper_case_globals)]
    include!(concat!(env!("OUT_DIR"), "/formula/formula.rs"));
}

/// A parsed formula
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormulaTree {
    /// A variable `a`-`z`
    Variable(char),
    /// `T` or `F`
    Constant(bool),
    /// `~x`
    Not(Box<FormulaTree>),
    /// `lhs op rhs`
    Binary(BinaryOp, Box<FormulaTree>, Box<FormulaTree>),
}

impl FormulaTree {
    /// Parse formula text into a tree
    ///
    /// Accepts exactly the formulas that pass
    /// [`validate`](super::validate::validate).
    pub fn parse(text: &str) -> Result<Self, FormulaError> {
        parser_impl::FormulaParser::new()
            .parse(text)
            .map_err(|e| {
                let position = match e {
                    ParseError::InvalidToken { location } => Some(location),
                    ParseError::UnrecognizedToken { token: (start, _, _), .. }
                    | ParseError::ExtraToken { token: (start, _, _) } => Some(start),
                    ParseError::UnrecognizedEof { .. } | ParseError::User { .. } => None,
                };
                FormulaError::invalid(text, position)
            })
    }

    pub(crate) fn binary(op: BinaryOp, lhs: FormulaTree, rhs: FormulaTree) -> Self {
        FormulaTree::Binary(op, Box::new(lhs), Box::new(rhs))
    }

    pub(crate) fn variable(token: &str) -> Self {
        FormulaTree::Variable(token.chars().next().unwrap_or_default())
    }

    /// Evaluate under an assignment
    ///
    /// `assignment[i]` is the value of `variables[i]`; variables not listed
    /// evaluate to false. Runs on an explicit stack, so nesting depth is
    /// bounded by memory rather than by the call stack.
    pub fn evaluate(&self, variables: &[char], assignment: &[bool]) -> bool {
        let mut pending = vec![Step::Visit(self)];
        let mut values: Vec<bool> = Vec::new();

        while let Some(step) = pending.pop() {
            match step {
                Step::Visit(FormulaTree::Variable(v)) => values.push(
                    variables
                        .iter()
                        .position(|candidate| candidate == v)
                        .and_then(|idx| assignment.get(idx).copied())
                        .unwrap_or(false),
                ),
                Step::Visit(FormulaTree::Constant(value)) => values.push(*value),
                Step::Visit(FormulaTree::Not(inner)) => {
                    pending.push(Step::Negate);
                    pending.push(Step::Visit(inner));
                }
                Step::Visit(FormulaTree::Binary(op, lhs, rhs)) => {
                    // lhs is visited first and so lands lower on the value stack
                    pending.push(Step::Apply(*op));
                    pending.push(Step::Visit(rhs));
                    pending.push(Step::Visit(lhs));
                }
                Step::Negate => {
                    let operand = values.pop().expect("negation without operand");
                    values.push(!operand);
                }
                Step::Apply(op) => {
                    let rhs = values.pop().expect("binary operator without right operand");
                    let lhs = values.pop().expect("binary operator without left operand");
                    values.push(op.apply(lhs, rhs));
                }
            }
        }

        values.pop().expect("empty formula tree")
    }

    /// Move the children of `node` into `into`, leaving constants behind
    fn detach_children(node: &mut FormulaTree, into: &mut Vec<FormulaTree>) {
        let placeholder = || FormulaTree::Constant(false);
        match node {
            FormulaTree::Not(inner) => into.push(mem::replace(&mut **inner, placeholder())),
            FormulaTree::Binary(_, lhs, rhs) => {
                into.push(mem::replace(&mut **lhs, placeholder()));
                into.push(mem::replace(&mut **rhs, placeholder()));
            }
            FormulaTree::Variable(_) | FormulaTree::Constant(_) => {}
        }
    }
}

impl Drop for FormulaTree {
    // Tear deep trees down iteratively; the derived drop would recurse
    fn drop(&mut self) {
        let mut detached = Vec::new();
        FormulaTree::detach_children(self, &mut detached);
        while let Some(mut node) = detached.pop() {
            FormulaTree::detach_children(&mut node, &mut detached);
        }
    }
}

/// Work item of the iterative evaluator
enum Step<'a> {
    Visit(&'a FormulaTree),
    Negate,
    Apply(BinaryOp),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(c: char) -> Box<FormulaTree> {
        Box::new(FormulaTree::Variable(c))
    }

    #[test]
    fn test_parse_precedence() {
        let tree = FormulaTree::parse("a|b^c").unwrap();
        assert_eq!(
            tree,
            FormulaTree::Binary(
                BinaryOp::Or,
                var('a'),
                Box::new(FormulaTree::Binary(BinaryOp::Xor, var('b'), var('c')))
            )
        );
    }

    #[test]
    fn test_parse_conjunction_before_disjunction() {
        let tree = FormulaTree::parse("a|b&c").unwrap();
        assert_eq!(
            tree,
            FormulaTree::Binary(
                BinaryOp::Or,
                var('a'),
                Box::new(FormulaTree::Binary(BinaryOp::And, var('b'), var('c')))
            )
        );
        // | and / share a level
        let tree = FormulaTree::parse("a/b|c").unwrap();
        assert_eq!(
            tree,
            FormulaTree::Binary(
                BinaryOp::Or,
                Box::new(FormulaTree::Binary(BinaryOp::Nand, var('a'), var('b'))),
                var('c')
            )
        );
    }

    #[test]
    fn test_parse_left_associative_implication() {
        let tree = FormulaTree::parse("a>b>c").unwrap();
        assert_eq!(
            tree,
            FormulaTree::Binary(
                BinaryOp::Implies,
                Box::new(FormulaTree::Binary(BinaryOp::Implies, var('a'), var('b'))),
                var('c')
            )
        );
    }

    #[test]
    fn test_parse_negation_and_constants() {
        let tree = FormulaTree::parse("~~T&F").unwrap();
        assert!(!tree.evaluate(&[], &[]));
        assert!(FormulaTree::parse("~(T&F)").unwrap().evaluate(&[], &[]));
    }

    #[test]
    fn test_evaluate() {
        let tree = FormulaTree::parse("a/b").unwrap();
        let vars = ['a', 'b'];
        assert!(tree.evaluate(&vars, &[false, true]));
        assert!(!tree.evaluate(&vars, &[true, true]));
    }

    #[test]
    fn test_evaluate_operand_order() {
        let tree = FormulaTree::parse("a>b").unwrap();
        let vars = ['a', 'b'];
        assert!(!tree.evaluate(&vars, &[true, false]));
        assert!(tree.evaluate(&vars, &[false, true]));
        let nested = FormulaTree::parse("(a>b)>c").unwrap();
        assert!(nested.evaluate(&['a', 'b', 'c'], &[true, false, false]));
        assert!(!nested.evaluate(&['a', 'b', 'c'], &[true, true, false]));
    }

    #[test]
    fn test_deep_nesting() {
        let depth = 200_000;
        let negations = format!("{}a", "~".repeat(depth));
        let tree = FormulaTree::parse(&negations).unwrap();
        assert!(tree.evaluate(&['a'], &[true]));
        assert!(!tree.evaluate(&['a'], &[false]));
        drop(tree);

        let chain = format!("a{}", "&a".repeat(depth));
        let tree = FormulaTree::parse(&chain).unwrap();
        assert!(tree.evaluate(&['a'], &[true]));
        assert!(!tree.evaluate(&['a'], &[false]));
    }

    #[test]
    fn test_parse_rejects_invalid() {
        assert!(FormulaTree::parse("a&").is_err());
        assert!(FormulaTree::parse("(a").is_err());
        assert!(FormulaTree::parse("a b").is_err());
    }
}
