use crate::clause::Clause;
use crate::error::{Error, Result};

/// Defensive bound on how many times the And/Or distribution rewrite may
/// recurse while pushing a single `And` node down past its operands' `Or`s.
/// Every recursive call strictly shrinks the `Or`-bearing operand, so a
/// finite input tree can never approach this in practice; it exists purely
/// as a backstop against the unexpected, the same role the original
/// policy compiler's pass cap played.
pub const NORMALIZE_ITERATION_CAP: u32 = 1000;

/// Rewrite `clause` into disjunctive normal form: an `Or`-of-`And`-of-leaves
/// tree, per `spec.md` §4.2's rewrite rules.
///
/// Children are normalized before their parent is examined, so by the time
/// an `And` node is distributed over its operands, neither operand can
/// itself be an un-normalized `And` — this subsumes rules 4 and 5 of the
/// rewrite system automatically rather than needing a separate pass to
/// apply them (see `DESIGN.md`).
pub fn normalize(clause: Clause) -> Result<Clause> {
    match clause {
        Clause::And(a, b) => {
            let a = normalize(*a)?;
            let b = normalize(*b)?;
            and_dnf(a, b, NORMALIZE_ITERATION_CAP)
        }
        Clause::Or(a, b) => {
            let a = normalize(*a)?;
            let b = normalize(*b)?;
            Ok(Clause::Or(Box::new(a), Box::new(b)))
        }
        leaf @ (Clause::Satisfied
        | Clause::Unsatisfiable
        | Clause::SignatureCheck { .. }
        | Clause::PreImageCheck { .. }
        | Clause::TemplateVerify { .. }
        | Clause::After { .. }
        | Clause::Var(_)) => Ok(leaf),
    }
}

/// Distribute an `And` over whichever operand (if either) is `Or`-rooted,
/// recursing until both operands are free of top-level `Or`.
fn and_dnf(a: Clause, b: Clause, budget: u32) -> Result<Clause> {
    if budget == 0 {
        return Err(Error::NormalizerDiverged {
            passes: NORMALIZE_ITERATION_CAP,
        });
    }
    match a {
        Clause::Or(a0, a1) => {
            let left = and_dnf(*a0, clone_for_distribution(&b), budget - 1)?;
            let right = and_dnf(*a1, b, budget - 1)?;
            return Ok(Clause::Or(Box::new(left), Box::new(right)));
        }
        a => match b {
            Clause::Or(b0, b1) => {
                let left = and_dnf(clone_for_distribution(&a), *b0, budget - 1)?;
                let right = and_dnf(a, *b1, budget - 1)?;
                Ok(Clause::Or(Box::new(left), Box::new(right)))
            }
            b => Ok(Clause::And(Box::new(a), Box::new(b))),
        },
    }
}

/// `Clause` holds `Variable`s that are not `Copy` (and deliberately not
/// `Clone`-shared, since each leaf owns its own witness-slot bookkeeping),
/// but distributing an `And` over a multi-armed `Or` duplicates one operand
/// across every arm. We re-derive an independent clause tree by rendering
/// and reconstructing bare structure where needed; for the leaf kinds this
/// crate supports, a deep clone of the underlying data is what "duplicate
/// across branches" means, so `Clause` (and `Variable`) derive `Clone`.
fn clone_for_distribution(clause: &Clause) -> Clause {
    clause.clone()
}
