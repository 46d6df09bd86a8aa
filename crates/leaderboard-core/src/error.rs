//! Error types for leaderboard rankings

use thiserror::Error;

/// Main error type for ranking operations.
///
/// Ranking operations are total for well-formed input, so the only failure
/// class is a caller supplying input that breaks a precondition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankingError {
    /// The input ranking or boost source broke a precondition
    #[error("Precondition violation: {0}")]
    PreconditionViolation(#[from] Violation),
}

/// The precondition a caller broke.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("ranking is empty")]
    Empty,

    #[error("entry '{name}' has rank {rank}, expected 1..={len}")]
    RankOutOfRange { name: String, rank: u32, len: usize },

    #[error("rank {rank} is assigned more than once")]
    DuplicateRank { rank: u32 },

    #[error("name '{name}' appears more than once")]
    DuplicateName { name: String },

    #[error("boost {boost} is outside [0, {bound})")]
    BoostOutOfRange { boost: u64, bound: u64 },

    #[error("boost bound must be positive")]
    ZeroBound,

    #[error("score of '{name}' overflows")]
    ScoreOverflow { name: String },
}

/// Result type alias for ranking operations
pub type Result<T> = std::result::Result<T, RankingError>;
