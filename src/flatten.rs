use crate::clause::Clause;
use crate::error::{Error, Result};

/// Turn a normalized (DNF) clause into its list of branches, each an
/// ordered list of leaves that must all be satisfied together.
///
/// Requires `clause` to already be in disjunctive normal form — an `Or`
/// found underneath an `And` is reported as [`Error::NotNormalized`] rather
/// than silently mis-flattened.
pub fn flatten(clause: Clause) -> Result<Vec<Vec<Clause>>> {
    match clause {
        Clause::And(a, b) => {
            if matches!(a.as_ref(), Clause::Or(..)) || matches!(b.as_ref(), Clause::Or(..)) {
                return Err(Error::NotNormalized {
                    clause: format!("{}", Clause::And(a, b)),
                });
            }
            let mut left = flatten(*a)?;
            let mut right = flatten(*b)?;
            if left.len() != 1 || right.len() != 1 {
                return Err(Error::NotNormalized {
                    clause: "And(..)".to_string(),
                });
            }
            let mut conjunction = left.remove(0);
            conjunction.extend(right.remove(0));
            Ok(vec![conjunction])
        }
        Clause::Or(a, b) => {
            let mut left = flatten(*a)?;
            let right = flatten(*b)?;
            left.extend(right);
            Ok(left)
        }
        leaf => Ok(vec![vec![leaf]]),
    }
}
