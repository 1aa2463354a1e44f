//! Precondition failures surfaced by the search engine.

use crate::search::MAX_RESISTORS;

/// The only fatal failure modes of a search. Once a request passes
/// validation the search itself is pure arithmetic over a finite pool and
/// cannot fail; an unmet tolerance is reported through the result, never as
/// an error.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum SearchError {
    /// Target resistance was zero, negative or not a number.
    #[error("target resistance must be greater than zero, got {0}")]
    InvalidTarget(f64),

    /// Tolerance was negative or not a number.
    #[error("tolerance must be zero or greater, got {0}%")]
    InvalidTolerance(f64),

    /// Count bounds were inverted, zero, or above the hard ceiling.
    #[error("resistor count range {min}..={max} is outside 1..={MAX_RESISTORS}")]
    InvalidCountRange { min: usize, max: usize },
}
