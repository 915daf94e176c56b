//! Engine error types.
//!
//! Every failure mode has a named variant. Validation problems never show
//! up here — they are structured pass/fail results in `validation`. An
//! engine error is only reachable when validation was bypassed, and should
//! be treated as a programming error by the caller, not a user message.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("Neither gross profit nor gross profit margin was supplied")]
    MissingProfitData,

    #[error("Unknown industry id: {0}")]
    UnknownIndustry(u32),
}

/// Result type alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
