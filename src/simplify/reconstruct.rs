//! Sum-of-products text from a cover

use crate::cover::Implicant;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Render a cover as an infix sum of products
///
/// Each implicant becomes a conjunction of its literals. Terms with more
/// than one literal are bracketed when the cover has several terms; a
/// cover of a single term is returned without brackets.
///
/// Terms are written plain literals first, so `{-1, 1-}` over `a, b`
/// reads `a|b`.
///
/// # Examples
///
/// ```
/// use qmc_logic::cover::Implicant;
/// use qmc_logic::simplify::to_expression;
/// use std::collections::BTreeSet;
///
/// let cover: BTreeSet<Implicant> = ["11", "00"]
///     .iter()
///     .filter_map(|p| Implicant::from_pattern(p))
///     .collect();
/// assert_eq!(to_expression(&cover, &['a', 'b']), "(a&b)|(~a&~b)");
/// ```
pub fn to_expression(implicants: &BTreeSet<Implicant>, variables: &[char]) -> String {
    let mut ordered: Vec<&Implicant> = implicants.iter().collect();
    ordered.sort_by(|a, b| display_order(a, b));

    let terms: Vec<String> = ordered
        .iter()
        .map(|implicant| product_term(implicant, variables))
        .collect();

    match terms.as_slice() {
        [] => String::from("F"),
        [only] => only.clone(),
        _ => terms
            .iter()
            .zip(ordered.iter())
            .map(|(term, implicant)| {
                if implicant.literal_count() > 1 {
                    format!("({})", term)
                } else {
                    term.clone()
                }
            })
            .collect::<Vec<_>>()
            .join("|"),
    }
}

/// The conjunction of an implicant's literals, `T` if it has none
fn product_term(implicant: &Implicant, variables: &[char]) -> String {
    let literals: Vec<String> = implicant
        .inputs()
        .iter()
        .zip(variables.iter())
        .filter_map(|(position, var)| match position {
            Some(true) => Some(var.to_string()),
            Some(false) => Some(format!("~{}", var)),
            None => None,
        })
        .collect();

    if literals.is_empty() {
        String::from("T")
    } else {
        literals.join("&")
    }
}

/// Per position: plain literal, then negated literal, then absent
fn display_order(a: &Implicant, b: &Implicant) -> Ordering {
    fn rank(position: &Option<bool>) -> u8 {
        match position {
            Some(true) => 0,
            Some(false) => 1,
            None => 2,
        }
    }

    a.inputs()
        .iter()
        .map(rank)
        .cmp(b.inputs().iter().map(rank))
}
