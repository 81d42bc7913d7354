//! The fixed alphabet of propositional formulas
//!
//! Every character of a formula maps to exactly one [`Token`]. The operator
//! priorities used by the postfix converter live here as well, so that the
//! validator and the converter read from the same table.

use std::fmt;

/// Binary connectives, in the order of their input symbols `^ & | / >`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// `^` - exclusive or
    Xor,
    /// `&` - conjunction
    And,
    /// `|` - disjunction
    Or,
    /// `/` - disjunction of negations, `a / b = ~(a & b)`
    Nand,
    /// `>` - implication, `a > b = ~a | b`
    Implies,
}

impl BinaryOp {
    /// All binary connectives
    pub const ALL: [BinaryOp; 5] = [
        BinaryOp::Xor,
        BinaryOp::And,
        BinaryOp::Or,
        BinaryOp::Nand,
        BinaryOp::Implies,
    ];

    /// Shunting-yard priority; higher binds tighter
    pub fn priority(self) -> u8 {
        match self {
            BinaryOp::Xor => 4,
            BinaryOp::And => 3,
            BinaryOp::Or | BinaryOp::Nand => 2,
            BinaryOp::Implies => 1,
        }
    }

    /// The input symbol of this connective
    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Xor => '^',
            BinaryOp::And => '&',
            BinaryOp::Or => '|',
            BinaryOp::Nand => '/',
            BinaryOp::Implies => '>',
        }
    }

    /// Apply the connective; `lhs` is the operand written first
    pub fn apply(self, lhs: bool, rhs: bool) -> bool {
        match self {
            BinaryOp::Xor => lhs ^ rhs,
            BinaryOp::And => lhs && rhs,
            BinaryOp::Or => lhs || rhs,
            BinaryOp::Nand => !(lhs && rhs),
            BinaryOp::Implies => !lhs || rhs,
        }
    }

    fn from_symbol(c: char) -> Option<Self> {
        BinaryOp::ALL.into_iter().find(|op| op.symbol() == c)
    }
}

/// One symbol of a formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// A variable `a`-`z`
    Variable(char),
    /// `T` or `F`; also the `1`/`0` literals of a substituted postfix form
    Constant(bool),
    /// `~`
    Not,
    /// One of `^ & | / >`
    Binary(BinaryOp),
    /// `(`
    Open,
    /// `)`
    Close,
}

impl Token {
    /// Priority of `(` while it sits on the operator stack
    pub const OPEN_PRIORITY: u8 = 0;
    /// Priority of `)`, which only acts as a sentinel and is never stacked
    pub const CLOSE_PRIORITY: u8 = 1;
    /// Priority of `~`, above every binary operator
    pub const NOT_PRIORITY: u8 = 5;

    /// Classify a character of the input alphabet
    ///
    /// Returns `None` for anything outside `a-z T F ~ ^ & | / > ( )`.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'a'..='z' => Some(Token::Variable(c)),
            'T' => Some(Token::Constant(true)),
            'F' => Some(Token::Constant(false)),
            '~' => Some(Token::Not),
            '(' => Some(Token::Open),
            ')' => Some(Token::Close),
            _ => BinaryOp::from_symbol(c).map(Token::Binary),
        }
    }

    /// Classify a character of a substituted postfix string
    ///
    /// Accepts `0`/`1` literals on top of the input alphabet.
    pub fn from_literal_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Token::Constant(false)),
            '1' => Some(Token::Constant(true)),
            _ => Token::from_char(c),
        }
    }

    /// Operator-stack priority
    pub fn priority(self) -> u8 {
        match self {
            Token::Not => Self::NOT_PRIORITY,
            Token::Binary(op) => op.priority(),
            Token::Open => Self::OPEN_PRIORITY,
            Token::Close => Self::CLOSE_PRIORITY,
            Token::Variable(_) | Token::Constant(_) => 0,
        }
    }

    /// True for variables and constants
    pub fn is_operand(self) -> bool {
        matches!(self, Token::Variable(_) | Token::Constant(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Variable(v) => write!(f, "{}", v),
            Token::Constant(true) => write!(f, "T"),
            Token::Constant(false) => write!(f, "F"),
            Token::Not => write!(f, "~"),
            Token::Binary(op) => write!(f, "{}", op.symbol()),
            Token::Open => write!(f, "("),
            Token::Close => write!(f, ")"),
        }
    }
}

/// Tokenize a string, stopping at the first character outside the alphabet
///
/// The error carries the byte position of the offending character.
pub fn tokenize(text: &str) -> Result<Vec<Token>, usize> {
    text.char_indices()
        .map(|(pos, c)| Token::from_char(c).ok_or(pos))
        .collect()
}
