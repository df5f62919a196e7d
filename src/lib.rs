//! Compiles an algebraic spending policy — a tree of signature checks,
//! hash-preimage checks, lock-times, and CHECKTEMPLATEVERIFY commitments
//! combined with `And`/`Or` — into a single Bitcoin Script locking script
//! plus one witness template per satisfying branch.
//!
//! The pipeline is three passes over the policy tree:
//!
//! 1. [`normalize`] rewrites it into disjunctive normal form.
//! 2. [`flatten`] turns the DNF tree into a flat list of branches, each an
//!    ordered list of leaves that must all be satisfied together.
//! 3. [`selector::build`] wraps those branches in whichever selector
//!    strategy their count calls for, and emits each leaf's script
//!    fragment, recording witness slots as it goes.

pub mod clause;
pub mod error;
mod emit;
mod flatten;
mod normalize;
mod opcode;
mod script;
mod selector;
pub mod value;
pub mod variable;
pub mod witness;

// Core policy algebra
pub use clause::{after, and, or, preimage_check, signature_check, template_verify, var, Clause};
// Errors
pub use error::{Error, Result};
// Compiler passes, exposed for callers who want to inspect intermediate state
pub use flatten::flatten;
pub use normalize::{normalize, NORMALIZE_ITERATION_CAP};
// Script substrate
pub use opcode::Opcode;
pub use script::Script;
// Inputs and outputs
pub use value::{Hash, Key};
pub use variable::{TimeSpec, Variable};
pub use witness::{WitnessItem, WitnessTemplate};

/// Compile `clause` into a locking script and the witness template for
/// each of its satisfying branches.
///
/// The returned `Vec<WitnessTemplate>` has one entry per branch, in the
/// same order the branches appear in the script's selector ladder (branch
/// `i`'s template selects itself with `WitnessItem::Selector(i + 1)` for
/// three or more branches, or a boolean selector for exactly two).
pub fn compile(clause: Clause) -> Result<(Script, Vec<WitnessTemplate>)> {
    let normalized = normalize(clause)?;
    log::debug!("policy_compiler: normalized to {normalized}");
    let branches = flatten(normalized)?;
    log::info!("policy_compiler: compiling {} branch(es)", branches.len());
    selector::build(branches)
}
