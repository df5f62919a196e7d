use std::fmt;

use serde::{Deserialize, Serialize};

/// A named, optionally-bound cell carrying a value of a specific semantic type.
///
/// `Variable` is the front end's handle on a policy input (a key, a hash, a
/// time spec, or a bare witness-supplied value). It is created unbound and may
/// be bound exactly once, at any point before compilation, via [`Variable::assign`].
/// Binding twice is a caller logic error — as in the implementation this crate
/// is grounded on, `assign` is a plain overwrite, not a checked transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable<T> {
    name: String,
    value: Option<T>,
    child_counter: u64,
}

impl<T> Variable<T> {
    /// Create a new unbound variable with the given provenance name.
    pub fn new(name: impl Into<String>) -> Self {
        Variable {
            name: name.into(),
            value: None,
            child_counter: 0,
        }
    }

    /// Create a variable that is already bound to `value`.
    pub fn bound(name: impl Into<String>, value: T) -> Self {
        Variable {
            name: name.into(),
            value: Some(value),
            child_counter: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn is_bound(&self) -> bool {
        self.value.is_some()
    }

    /// Bind `value` to this variable. Intended to be called at most once
    /// between construction and compilation; calling it again simply
    /// overwrites the previous value.
    pub fn assign(&mut self, value: T) {
        self.value = Some(value);
    }

    /// Derive a new child variable named `"{parent}_{counter}_{purpose}"`,
    /// incrementing this variable's child counter. Used to pair a leaf's
    /// primary variable (a key, a hash) with a secret discovered at spend
    /// time (a signature, a preimage).
    pub fn derive<U>(&mut self, purpose: &str, value: Option<U>) -> Variable<U> {
        let child_name = format!("{}_{}_{}", self.name, self.child_counter, purpose);
        self.child_counter += 1;
        Variable {
            name: child_name,
            value,
            child_counter: 0,
        }
    }
}

impl<T: fmt::Debug> fmt::Display for Variable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Variable('{}', {:?})", self.name, self.value)
    }
}

/// An absolute (block height / unix time) or relative (sequence-locked delta)
/// lock-time. The compiler only selects which lock-time opcode to emit; the
/// integer's interpretation belongs to the caller and the opcode it targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeSpec {
    Absolute(u32),
    Relative(u32),
}

impl TimeSpec {
    pub fn absolute(value: u32) -> Self {
        TimeSpec::Absolute(value)
    }

    pub fn relative(value: u32) -> Self {
        TimeSpec::Relative(value)
    }

    /// Convenience constructor matching the original policy language's
    /// `Weeks(n)` helper: a named, pre-bound relative time-spec variable.
    /// The value stored is `n` itself — unit conversion (weeks to the
    /// sequence-lock integer an `After` clause ultimately emits) is left to
    /// the caller, matching `spec.md` §3's delegation of integer
    /// interpretation to the external lock-time opcodes.
    pub fn weeks(n: u32) -> Variable<TimeSpec> {
        Variable::bound(format!("RelativeTimeSpec({n} Weeks)"), TimeSpec::Relative(n))
    }
}
