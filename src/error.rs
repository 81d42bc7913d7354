//! Error types for formula handling
//!
//! There is a single failure mode: the input text is not a formula. Every
//! stage after validation is total over valid input.

use std::fmt;
use std::io;
use std::sync::Arc;

/// The error reported for text that is not a well-formed formula
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormulaError {
    /// The text breaks the grammar
    InvalidFormula {
        /// The rejected text
        input: Arc<str>,
        /// Byte position of the first offending character, or `None` when
        /// the text ends mid-operand or with unclosed brackets
        position: Option<usize>,
    },
}

impl FormulaError {
    pub(crate) fn invalid(input: &str, position: Option<usize>) -> Self {
        FormulaError::InvalidFormula {
            input: Arc::from(input),
            position,
        }
    }
}

impl fmt::Display for FormulaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormulaError::InvalidFormula {
                input,
                position: Some(pos),
            } => write!(f, "Invalid formula at position {}. Input: {:?}", pos, input),
            FormulaError::InvalidFormula {
                input,
                position: None,
            } => write!(f, "Invalid formula: incomplete. Input: {:?}", input),
        }
    }
}

impl std::error::Error for FormulaError {}

impl From<FormulaError> for io::Error {
    fn from(err: FormulaError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_position() {
        let err = FormulaError::invalid("a&&b", Some(2));
        let msg = err.to_string();
        assert!(msg.contains("position 2"));
        assert!(msg.contains("a&&b"));
    }

    #[test]
    fn test_display_without_position() {
        let err = FormulaError::invalid("(a", None);
        let msg = err.to_string();
        assert!(!msg.contains("position"));
        assert!(msg.contains("incomplete"));
    }

    #[test]
    fn test_to_io_error() {
        let io_err: io::Error = FormulaError::invalid("&", Some(0)).into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    }
}
