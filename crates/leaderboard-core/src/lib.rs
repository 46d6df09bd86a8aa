//! Leaderboard Core - Ranking types shared by every leaderboard crate
//!
//! This crate provides:
//! - `RankEntry`: one participant's name, score, rank and change indicator
//! - `Ranking`: a validated, non-empty, densely ranked sequence of entries
//! - The seed dataset shown before any refresh
//! - `ChangePolicy`: whether rank deltas are decoration or tracked
//! - The error taxonomy for malformed rankings

pub mod entry;
pub mod error;
pub mod policy;
pub mod ranking;
pub mod seed;

pub use entry::{ChangeDirection, RankEntry};
pub use error::{RankingError, Violation};
pub use policy::ChangePolicy;
pub use ranking::{assign_ranks, validate, Ranking};
pub use seed::{seed_entries, seed_ranking};
