use proc_macro::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream, Result};
use syn::{parse_macro_input, LitStr};

/// Where the grammar check currently stands
#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    ExpectingOperand,
    ExpectingOperator,
}

/// Why a literal was rejected
enum Rejection {
    Character(usize, char),
    Unexpected(usize, char),
    Unbalanced(usize),
    Incomplete,
}

impl Rejection {
    fn message(&self) -> String {
        match self {
            Rejection::Character(pos, c) => {
                format!("'{}' at position {} is not part of the formula alphabet", c, pos)
            }
            Rejection::Unexpected(pos, c) => format!("unexpected '{}' at position {}", c, pos),
            Rejection::Unbalanced(pos) => format!("unmatched ')' at position {}", pos),
            Rejection::Incomplete => {
                "formula ends with an operator or an unclosed bracket".to_string()
            }
        }
    }
}

/// The same two-state check the library runs on input text
fn check(text: &str) -> std::result::Result<(), Rejection> {
    let mut state = State::ExpectingOperand;
    let mut open: usize = 0;

    for (pos, c) in text.chars().enumerate() {
        let operand = c.is_ascii_lowercase() || c == 'T' || c == 'F';
        let binary = matches!(c, '^' | '&' | '|' | '/' | '>');
        if !(operand || binary || matches!(c, '~' | '(' | ')')) {
            return Err(Rejection::Character(pos, c));
        }

        state = match state {
            State::ExpectingOperand if c == '~' || c == '(' => State::ExpectingOperand,
            State::ExpectingOperand if operand => State::ExpectingOperator,
            State::ExpectingOperator if binary => State::ExpectingOperand,
            State::ExpectingOperator if c == ')' => State::ExpectingOperator,
            _ => return Err(Rejection::Unexpected(pos, c)),
        };

        if c == '(' {
            open += 1;
        } else if c == ')' {
            open = open.checked_sub(1).ok_or(Rejection::Unbalanced(pos))?;
        }
    }

    if open == 0 && state == State::ExpectingOperator {
        Ok(())
    } else {
        Err(Rejection::Incomplete)
    }
}

/// A formula literal with its whitespace removed
struct FormulaLiteral {
    text: String,
}

impl FormulaLiteral {
    /// Expansion of the checked literal
    fn to_tokens(&self) -> proc_macro2::TokenStream {
        let text = &self.text;
        quote! {
            ::qmc_logic::Formula::from_validated(#text)
        }
    }
}

impl Parse for FormulaLiteral {
    fn parse(input: ParseStream) -> Result<Self> {
        let lit: LitStr = input.parse()?;
        let text: String = lit.value().chars().filter(|c| !c.is_whitespace()).collect();
        check(&text).map_err(|rejection| syn::Error::new(lit.span(), rejection.message()))?;
        Ok(FormulaLiteral { text })
    }
}

/// The `formula!` procedural macro
///
/// Checks a formula string literal at compile time and expands to a
/// `qmc_logic::Formula`. Whitespace inside the literal is ignored. An
/// invalid literal is a compile error pointing at the string.
///
/// # Examples
///
/// ```ignore
/// use qmc_logic::formula;
///
/// let f = formula!("(a & b) | ~c");
/// assert_eq!(f.text(), "(a&b)|~c");
///
/// // Does not compile: trailing operator
/// // let g = formula!("a &");
/// ```
#[proc_macro]
pub fn formula(input: TokenStream) -> TokenStream {
    let literal = parse_macro_input!(input as FormulaLiteral);
    TokenStream::from(literal.to_tokens())
}
