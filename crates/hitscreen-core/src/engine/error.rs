use thiserror::Error;

/// Errors raised by the screening engine.
///
/// Every variant is a structural fault: a precondition the caller was
/// supposed to uphold was violated, or an internal invariant broke. None of
/// these are user-recoverable conditions; the workflow layer maps them to a
/// generic failure without leaking internals.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error("Structure '{name}' has no atoms; screening requires at least one")]
    EmptyStructure { name: String },

    #[error("Target structure '{name}' is not in the pool; presence must be checked before screening")]
    TargetNotFound { name: String },

    #[error("Screening threshold must be finite and non-negative (got {value})")]
    InvalidThreshold { value: f64 },

    #[error("Internal logic error: {0}")]
    Internal(String),
}
