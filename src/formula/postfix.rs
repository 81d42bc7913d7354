//! Conversion to postfix (reverse Polish) order and stack evaluation

use super::symbols::{tokenize, Token};
use super::validate::validate;
use std::fmt;

/// A formula in postfix order
///
/// Contains no brackets. Every variable occurrence is still symbolic until
/// [`Postfix::substitute`] replaces it with a constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Postfix {
    tokens: Vec<Token>,
}

impl Postfix {
    /// Replace every variable with its assigned value
    ///
    /// `assignment[i]` is the value of `variables[i]`. Variables missing from
    /// `variables` are left untouched.
    pub fn substitute(&self, variables: &[char], assignment: &[bool]) -> Postfix {
        let tokens = self
            .tokens
            .iter()
            .map(|&token| match token {
                Token::Variable(v) => variables
                    .iter()
                    .position(|&candidate| candidate == v)
                    .and_then(|idx| assignment.get(idx))
                    .map_or(token, |&value| Token::Constant(value)),
                other => other,
            })
            .collect();
        Postfix { tokens }
    }

    /// Evaluate a fully substituted postfix formula
    ///
    /// # Panics
    ///
    /// Panics if a variable is still present or the sequence is not a
    /// well-formed postfix formula. Neither can happen for the output of
    /// [`to_postfix`] on validated text after [`Postfix::substitute`].
    pub fn evaluate(&self) -> bool {
        evaluate_tokens(&self.tokens)
    }
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

/// Remove outer brackets that wrap the whole formula
///
/// A pair is only removed while the text between it is itself a valid
/// formula, so `(a&b)|(c&d)` is left as it is.
pub fn strip_brackets(text: &str) -> &str {
    let mut text = text;
    while text.len() >= 2 && text.starts_with('(') && text.ends_with(')') {
        let inner = &text[1..text.len() - 1];
        if !validate(inner) {
            break;
        }
        text = inner;
    }
    text
}

/// Convert a valid infix formula to postfix order
///
/// Uses the shunting-yard algorithm. `~` is treated as a prefix function:
/// it is stacked without popping anything and leaves the stack when a binary
/// operator, a closing bracket or the end of input unwinds it.
///
/// # Panics
///
/// Panics on a character outside the alphabet. `text` must satisfy
/// [`validate`].
///
/// # Examples
///
/// ```
/// use qmc_logic::formula::to_postfix;
///
/// assert_eq!(to_postfix("a|b&c").to_string(), "abc&|");
/// assert_eq!(to_postfix("~(a^b)>c").to_string(), "ab^~c>");
/// ```
pub fn to_postfix(text: &str) -> Postfix {
    let tokens = tokenize(strip_brackets(text))
        .unwrap_or_else(|pos| panic!("unexpected character at position {} of {:?}", pos, text));
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for token in tokens {
        match token {
            Token::Variable(_) | Token::Constant(_) => output.push(token),
            Token::Not | Token::Open => stack.push(token),
            Token::Binary(op) => {
                while let Some(&top) = stack.last() {
                    if top.priority() < op.priority() {
                        break;
                    }
                    output.push(top);
                    stack.pop();
                }
                stack.push(token);
            }
            Token::Close => {
                while let Some(top) = stack.pop() {
                    if top == Token::Open {
                        break;
                    }
                    output.push(top);
                }
            }
        }
    }

    while let Some(top) = stack.pop() {
        if top != Token::Open {
            output.push(top);
        }
    }

    Postfix { tokens: output }
}

/// Evaluate a postfix string made only of `0`/`1` literals and operators
///
/// `T`/`F` are accepted as literals too.
///
/// # Panics
///
/// Panics on a variable, a foreign character or a malformed sequence.
///
/// # Examples
///
/// ```
/// use qmc_logic::formula::eval_literal;
///
/// assert!(eval_literal("01>"));
/// assert!(!eval_literal("10>"));
/// assert!(eval_literal("11&0|"));
/// ```
pub fn eval_literal(postfix: &str) -> bool {
    let tokens: Vec<Token> = postfix
        .chars()
        .map(|c| {
            Token::from_literal_char(c)
                .unwrap_or_else(|| panic!("unexpected character {:?} in postfix literal", c))
        })
        .collect();
    evaluate_tokens(&tokens)
}

fn evaluate_tokens(tokens: &[Token]) -> bool {
    let mut stack: Vec<bool> = Vec::with_capacity(tokens.len() / 2 + 1);
    for token in tokens {
        match *token {
            Token::Constant(value) => stack.push(value),
            Token::Not => {
                let operand = stack.pop().expect("negation without operand");
                stack.push(!operand);
            }
            Token::Binary(op) => {
                let rhs = stack.pop().expect("binary operator without right operand");
                let lhs = stack.pop().expect("binary operator without left operand");
                stack.push(op.apply(lhs, rhs));
            }
            Token::Variable(v) => panic!("unsubstituted variable '{}' in postfix formula", v),
            Token::Open | Token::Close => panic!("bracket in postfix formula"),
        }
    }

    assert_eq!(stack.len(), 1, "postfix formula not fully reduced");
    stack[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rpn(text: &str) -> String {
        to_postfix(text).to_string()
    }

    #[test]
    fn test_precedence() {
        assert_eq!(rpn("a&b"), "ab&");
        assert_eq!(rpn("a^b&c"), "ab^c&");
        assert_eq!(rpn("a&b^c"), "abc^&");
        assert_eq!(rpn("a>b|c"), "abc|>");
        assert_eq!(rpn("a|b>c"), "ab|c>");
        assert_eq!(rpn("a|b&c"), "abc&|");
        assert_eq!(rpn("a&b|c&d"), "ab&cd&|");
        assert_eq!(rpn("a/b&c"), "abc&/");
    }

    #[test]
    fn test_left_associative() {
        assert_eq!(rpn("a>b>c"), "ab>c>");
        assert_eq!(rpn("a&b|c/d"), "ab&c|d/");
        assert_eq!(rpn("a^b^c"), "ab^c^");
    }

    #[test]
    fn test_negation_binds_tightest() {
        assert_eq!(rpn("~a&b"), "a~b&");
        assert_eq!(rpn("a&~b"), "ab~&");
        assert_eq!(rpn("~~a"), "a~~");
        assert_eq!(rpn("~a^b"), "a~b^");
        assert_eq!(rpn("~(a&b)"), "ab&~");
    }

    #[test]
    fn test_brackets() {
        assert_eq!(rpn("(a|b)&c"), "ab|c&");
        assert_eq!(rpn("((a))"), "a");
        assert_eq!(rpn("(a&b)|(c&d)"), "ab&cd&|");
        assert_eq!(rpn("~(~a)"), "a~~");
    }

    #[test]
    fn test_strip_brackets() {
        assert_eq!(strip_brackets("((a&b))"), "a&b");
        assert_eq!(strip_brackets("(a&b)|(c&d)"), "(a&b)|(c&d)");
        assert_eq!(strip_brackets("(a)"), "a");
        assert_eq!(strip_brackets("a"), "a");
    }

    #[test]
    fn test_substitute_and_evaluate() {
        let postfix = to_postfix("a>b");
        let vars = ['a', 'b'];
        assert!(postfix.substitute(&vars, &[false, false]).evaluate());
        assert!(postfix.substitute(&vars, &[false, true]).evaluate());
        assert!(!postfix.substitute(&vars, &[true, false]).evaluate());
        assert!(postfix.substitute(&vars, &[true, true]).evaluate());
    }

    #[test]
    fn test_constants() {
        assert!(to_postfix("T").evaluate());
        assert!(!to_postfix("T&F").evaluate());
        assert!(to_postfix("F>F").evaluate());
    }

    #[test]
    fn test_eval_literal_operand_order() {
        // The operand pushed first is the left-hand side
        assert!(!eval_literal("10>"));
        assert!(eval_literal("01>"));
        assert!(!eval_literal("11/"));
        assert!(eval_literal("01/"));
        assert!(eval_literal("0~"));
        assert!(!eval_literal("11^"));
    }

    #[test]
    #[should_panic(expected = "unexpected character at position 1")]
    fn test_foreign_character_panics() {
        to_postfix("a+b");
    }

    #[test]
    #[should_panic(expected = "unsubstituted variable")]
    fn test_evaluate_with_free_variable_panics() {
        to_postfix("a").evaluate();
    }
}
