//! Grammar check for formula text
//!
//! Validity is decided by a two-state machine over the token stream plus a
//! running count of open brackets. No recursion is involved: a `(` simply
//! opens a nested operand context and is only tracked by the counter.

use super::symbols::{tokenize, Token};
use crate::error::FormulaError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    ExpectingOperand,
    ExpectingOperator,
}

/// Check a whitespace-free string against the formula grammar
///
/// Returns the position of the first character outside the alphabet if
/// there is one, else of the first character that breaks the grammar, or
/// `Err(None)` when the text ends mid-operand or with open brackets.
pub(crate) fn check(text: &str) -> Result<(), Option<usize>> {
    let mut state = State::ExpectingOperand;
    let mut open_brackets: usize = 0;

    // Every token is one ASCII character, so its index is its byte position
    for (pos, token) in tokenize(text).map_err(Some)?.into_iter().enumerate() {
        state = match (state, token) {
            (State::ExpectingOperand, Token::Not | Token::Open) => State::ExpectingOperand,
            (State::ExpectingOperand, t) if t.is_operand() => State::ExpectingOperator,
            (State::ExpectingOperand, _) => return Err(Some(pos)),

            (State::ExpectingOperator, Token::Binary(_)) => State::ExpectingOperand,
            (State::ExpectingOperator, Token::Close) => State::ExpectingOperator,
            (State::ExpectingOperator, _) => return Err(Some(pos)),
        };

        match token {
            Token::Open => open_brackets += 1,
            Token::Close => {
                open_brackets = open_brackets.checked_sub(1).ok_or(Some(pos))?;
            }
            _ => {}
        }
    }

    if open_brackets == 0 && state == State::ExpectingOperator {
        Ok(())
    } else {
        Err(None)
    }
}

/// Report whether `text` is a well-formed formula
///
/// `text` must already be free of whitespace.
///
/// # Examples
///
/// ```
/// use qmc_logic::formula::validate;
///
/// assert!(validate("~(a&b)>c"));
/// assert!(!validate("(a&b"));
/// assert!(!validate("a&"));
/// ```
pub fn validate(text: &str) -> bool {
    check(text).is_ok()
}

/// Like [`validate`], but returns a [`FormulaError`] describing the failure
pub fn ensure_valid(text: &str) -> Result<(), FormulaError> {
    check(text).map_err(|position| FormulaError::invalid(text, position))
}
