use thiserror::Error;

/// Errors produced while normalizing, flattening, or emitting a [`crate::clause::Clause`].
///
/// All errors are fatal to the compilation in progress: `compile` never returns
/// a partial script or a partial set of witness templates.
#[derive(Debug, Error)]
pub enum Error {
    #[error("clause variant has no matching {stage} arm: {clause}")]
    UnsupportedClause { stage: &'static str, clause: String },

    #[error("flattener found an Or below an And (clause was not normalized): {clause}")]
    NotNormalized { clause: String },

    #[error("{clause_kind} clause requires variable '{variable}' to be bound before emission")]
    UnboundRequiredValue {
        clause_kind: &'static str,
        variable: String,
    },

    #[error("normalizer did not reach a fixed point within {passes} passes")]
    NormalizerDiverged { passes: u32 },

    #[error("After clause variable '{variable}' holds a value that is neither Absolute nor Relative")]
    InvalidTimeSpec { variable: String },
}

pub type Result<T> = std::result::Result<T, Error>;
