use std::fmt;

use crate::value::{Hash, Key};
use crate::variable::{TimeSpec, Variable};

/// A node in the spending-policy algebra.
///
/// This is a closed set: every clause a caller can construct is one of the
/// variants below. Downstream passes (normalize, flatten, emit) match on it
/// exhaustively, so adding a variant here is a breaking, compile-checked
/// change everywhere a `Clause` is consumed.
#[derive(Debug, Clone)]
pub enum Clause {
    /// Always satisfiable; compiles to an empty fragment.
    Satisfied,
    /// Never satisfiable; compiles to a fragment that always fails.
    Unsatisfiable,
    /// Both sides must be satisfiable with the same witness.
    And(Box<Clause>, Box<Clause>),
    /// Either side, chosen by the spender, must be satisfiable.
    Or(Box<Clause>, Box<Clause>),
    /// A signature under `key`, supplied at spend time as `signature`.
    SignatureCheck { key: Variable<Key>, signature: Variable<Key> },
    /// A preimage of `hash`, supplied at spend time as `preimage`.
    PreImageCheck { hash: Variable<Hash>, preimage: Variable<Hash> },
    /// A CHECKTEMPLATEVERIFY commitment hash, bound before compilation.
    TemplateVerify { template: Variable<Hash> },
    /// A lock-time floor, absolute or relative.
    After { time: Variable<TimeSpec> },
    /// A bare witness-supplied value with no further structure.
    Var(Variable<Vec<u8>>),
}

impl Clause {
    /// Arity, for display and metadata purposes only — it plays no role in
    /// compilation.
    pub fn n_args(&self) -> usize {
        match self {
            Clause::Satisfied | Clause::Unsatisfiable => 0,
            Clause::And(..) | Clause::Or(..) => 2,
            Clause::SignatureCheck { .. }
            | Clause::PreImageCheck { .. }
            | Clause::TemplateVerify { .. }
            | Clause::After { .. }
            | Clause::Var(_) => 1,
        }
    }

    /// Infix symbol used when rendering a binary clause, if any.
    pub fn symbol(&self) -> Option<&'static str> {
        match self {
            Clause::And(..) => Some("*"),
            Clause::Or(..) => Some("+"),
            _ => None,
        }
    }

    pub(crate) fn kind_name(&self) -> &'static str {
        match self {
            Clause::Satisfied => "Satisfied",
            Clause::Unsatisfiable => "Unsatisfiable",
            Clause::And(..) => "And",
            Clause::Or(..) => "Or",
            Clause::SignatureCheck { .. } => "SignatureCheck",
            Clause::PreImageCheck { .. } => "PreImageCheck",
            Clause::TemplateVerify { .. } => "TemplateVerify",
            Clause::After { .. } => "After",
            Clause::Var(_) => "Var",
        }
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Clause::Satisfied => write!(f, "Satisfied()"),
            Clause::Unsatisfiable => write!(f, "Unsatisfiable()"),
            Clause::And(a, b) => write!(f, "{a}*{b}"),
            Clause::Or(a, b) => write!(f, "{a}+{b}"),
            Clause::SignatureCheck { key, .. } => write!(f, "SignatureCheck({key})"),
            Clause::PreImageCheck { hash, .. } => write!(f, "PreImageCheck({hash})"),
            Clause::TemplateVerify { template } => write!(f, "TemplateVerify({template})"),
            Clause::After { time } => write!(f, "After({time})"),
            Clause::Var(v) => write!(f, "{v}"),
        }
    }
}

/// Construct a conjunction. Both `a` and `b` must hold for the conjunction
/// to be satisfiable.
pub fn and(a: Clause, b: Clause) -> Clause {
    Clause::And(Box::new(a), Box::new(b))
}

/// Construct a disjunction. Either `a` or `b` suffices.
pub fn or(a: Clause, b: Clause) -> Clause {
    Clause::Or(Box::new(a), Box::new(b))
}

/// A signature-check leaf over `key`. The signature itself is a derived
/// sub-variable, unbound by construction — it is only ever discovered at
/// spend time.
pub fn signature_check(mut key: Variable<Key>) -> Clause {
    let signature = key.derive("signature", None);
    Clause::SignatureCheck { key, signature }
}

/// A hash-preimage leaf over `hash`. The preimage is a derived sub-variable,
/// unbound by construction.
pub fn preimage_check(mut hash: Variable<Hash>) -> Clause {
    let preimage = hash.derive("preimage", None);
    Clause::PreImageCheck { hash, preimage }
}

/// A CHECKTEMPLATEVERIFY leaf. `template` must be bound before compilation —
/// there is no witness-time discovery path for a transaction template hash.
pub fn template_verify(template: Variable<Hash>) -> Clause {
    Clause::TemplateVerify { template }
}

/// A lock-time leaf. `time` must be bound before compilation.
pub fn after(time: Variable<TimeSpec>) -> Clause {
    Clause::After { time }
}

/// A bare witness-supplied value, pushed as-is if bound, or left as a
/// witness slot if not.
pub fn var(variable: Variable<Vec<u8>>) -> Clause {
    Clause::Var(variable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_check_derives_signature_from_key() {
        let key = Variable::<Key>::new("alice");
        let clause = signature_check(key);
        match clause {
            Clause::SignatureCheck { key, signature } => {
                assert_eq!(key.name(), "alice");
                assert_eq!(signature.name(), "alice_0_signature");
            }
            _ => panic!("expected SignatureCheck"),
        }
    }

    #[test]
    fn display_renders_and_with_infix_star() {
        let left = Clause::Var(Variable::new("a"));
        let right = Clause::Var(Variable::new("b"));
        let rendered = format!("{}", and(left, right));
        assert_eq!(rendered, "Variable('a', None)*Variable('b', None)");
    }

    #[test]
    fn n_args_matches_variant_arity() {
        assert_eq!(Clause::Satisfied.n_args(), 0);
        assert_eq!(and(Clause::Satisfied, Clause::Unsatisfiable).n_args(), 2);
        assert_eq!(after(Variable::new("t")).n_args(), 1);
    }
}
