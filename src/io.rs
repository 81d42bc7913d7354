//! Line-in, line-out driver
//!
//! Each input line is one formula. Whitespace is removed, blank lines are
//! skipped, and every other line produces exactly one output line: the
//! simplified formula or [`ERROR_MARKER`].

use crate::formula::Formula;
use crate::simplify::Simplifier;
use crate::strip_whitespace;
use std::io::{self, BufRead, Write};

/// Printed in place of a result when the input is not a formula
pub const ERROR_MARKER: &str = "ERROR";

/// Simplify one line of raw input
///
/// Returns `None` for a blank line.
pub fn simplify_line(simplifier: &Simplifier, line: &str) -> Option<String> {
    let text = strip_whitespace(line);
    if text.is_empty() {
        return None;
    }
    Some(match Formula::parse(&text) {
        Ok(formula) => simplifier.simplify(&formula),
        Err(e) => {
            log::debug!("{}", e);
            ERROR_MARKER.to_string()
        }
    })
}

/// Simplify every line of `reader`, writing one result line per formula
///
/// Returns the number of formulas processed.
pub fn simplify_lines<R: BufRead, W: Write>(
    simplifier: &Simplifier,
    reader: R,
    mut writer: W,
) -> io::Result<usize> {
    let mut count = 0;
    for line in reader.lines() {
        if let Some(result) = simplify_line(simplifier, &line?) {
            writeln!(writer, "{}", result)?;
            count += 1;
        }
    }
    writer.flush()?;
    Ok(count)
}
