//! Bit-strings over `{0, 1, -}`

use std::fmt;
use std::sync::Arc;

/// A product term over an ordered variable list
///
/// Each position is one variable:
/// - `Some(false)` - the variable appears negated (`0`)
/// - `Some(true)` - the variable appears plain (`1`)
/// - `None` - don't care, the position was merged out (`-`)
///
/// A minterm is an implicant without don't-care positions. Ordering is
/// lexicographic with `- < 0 < 1`, the same as comparing the pattern strings.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Implicant {
    inputs: Arc<[Option<bool>]>,
}

impl Implicant {
    /// Build an implicant from its positions
    pub fn new(inputs: &[Option<bool>]) -> Self {
        Implicant {
            inputs: inputs.into(),
        }
    }

    /// The minterm of a complete assignment
    pub fn from_assignment(bits: &[bool]) -> Self {
        Implicant {
            inputs: bits.iter().map(|&b| Some(b)).collect(),
        }
    }

    /// Parse a pattern such as `"01-"`
    ///
    /// Returns `None` if the pattern contains anything but `0`, `1` and `-`.
    pub fn from_pattern(pattern: &str) -> Option<Self> {
        let inputs = pattern
            .chars()
            .map(|c| match c {
                '0' => Some(Some(false)),
                '1' => Some(Some(true)),
                '-' => Some(None),
                _ => None,
            })
            .collect::<Option<Arc<[Option<bool>]>>>()?;
        Some(Implicant { inputs })
    }

    /// The positions of this implicant
    pub fn inputs(&self) -> &[Option<bool>] {
        &self.inputs
    }

    /// Number of positions (the variable count)
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    /// True for the implicant of a formula without variables
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// True if no position is a don't care
    pub fn is_minterm(&self) -> bool {
        self.inputs.iter().all(Option::is_some)
    }

    /// Number of positions that are not don't cares
    pub fn literal_count(&self) -> usize {
        self.inputs.iter().filter(|p| p.is_some()).count()
    }

    /// Number of positions in which the two implicants differ
    ///
    /// A don't care differs from both `0` and `1`.
    pub fn differences(&self, other: &Implicant) -> usize {
        self.inputs
            .iter()
            .zip(other.inputs.iter())
            .filter(|(a, b)| a != b)
            .count()
    }

    /// Combine two implicants that differ in exactly one specified position
    ///
    /// The result has a don't care at that position, e.g. `0100 + 1100 = -100`.
    /// Returns `None` when the implicants are not adjacent.
    pub fn merge(&self, other: &Implicant) -> Option<Implicant> {
        if self.len() != other.len() || self.differences(other) != 1 {
            return None;
        }

        let idx = self
            .inputs
            .iter()
            .zip(other.inputs.iter())
            .position(|(a, b)| a != b)?;
        // Don't cares must line up: the one difference is between 0 and 1
        if self.inputs[idx].is_none() || other.inputs[idx].is_none() {
            return None;
        }

        let mut inputs = self.inputs.to_vec();
        inputs[idx] = None;
        Some(Implicant {
            inputs: inputs.into(),
        })
    }

    /// Check whether this implicant covers a minterm
    pub fn covers(&self, minterm: &Implicant) -> bool {
        self.len() == minterm.len()
            && self
                .inputs
                .iter()
                .zip(minterm.inputs.iter())
                .all(|(p, m)| p.is_none() || p == m)
    }

    /// The pattern read as a binary number with `-` taken as `0`
    ///
    /// The first position is the most significant bit.
    pub fn mask(&self) -> u64 {
        self.inputs
            .iter()
            .fold(0u64, |acc, p| (acc << 1) | u64::from(*p == Some(true)))
    }
}

impl fmt::Display for Implicant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for p in self.inputs.iter() {
            let c = match p {
                Some(false) => '0',
                Some(true) => '1',
                None => '-',
            };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Implicant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Implicant({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn imp(pattern: &str) -> Implicant {
        Implicant::from_pattern(pattern).unwrap()
    }

    #[test]
    fn test_pattern_round_trip() {
        assert_eq!(imp("01-").to_string(), "01-");
        assert!(Implicant::from_pattern("012").is_none());
        assert_eq!(imp("").len(), 0);
    }

    #[test]
    fn test_merge_adjacent() {
        assert_eq!(imp("0100").merge(&imp("1100")), Some(imp("-100")));
        assert_eq!(imp("1-0").merge(&imp("1-1")), Some(imp("1--")));
    }

    #[test]
    fn test_merge_rejects_non_adjacent() {
        assert_eq!(imp("00").merge(&imp("11")), None);
        assert_eq!(imp("01").merge(&imp("01")), None);
        // Don't-care positions must line up
        assert_eq!(imp("0-").merge(&imp("00")), None);
        assert_eq!(imp("-0").merge(&imp("0-")), None);
    }

    #[test]
    fn test_differences() {
        assert_eq!(imp("0-1").differences(&imp("011")), 1);
        assert_eq!(imp("0-1").differences(&imp("1-0")), 2);
    }

    #[test]
    fn test_covers() {
        assert!(imp("1-").covers(&imp("10")));
        assert!(imp("1-").covers(&imp("11")));
        assert!(!imp("1-").covers(&imp("01")));
        assert!(imp("--").covers(&imp("01")));
    }

    #[test]
    fn test_mask_treats_dont_care_as_zero() {
        assert_eq!(imp("101").mask(), 0b101);
        assert_eq!(imp("1-1").mask(), 0b101);
        assert_eq!(imp("---").mask(), 0);
    }

    #[test]
    fn test_ordering_matches_pattern_strings() {
        let mut sorted = vec![imp("1-"), imp("01"), imp("-1"), imp("00")];
        sorted.sort();
        let as_strings: Vec<String> = sorted.iter().map(|i| i.to_string()).collect();
        assert_eq!(as_strings, vec!["-1", "00", "01", "1-"]);
    }

    #[test]
    fn test_literal_count() {
        assert_eq!(imp("1-0-").literal_count(), 2);
        assert!(imp("10").is_minterm());
        assert!(!imp("1-").is_minterm());
    }
}
