//! Ranking recomputation engine for the mini leaderboard.
//!
//! A refresh adds a random, non-negative boost to every score, re-sorts the
//! entries by descending score (keeping input order among ties) and
//! reassigns dense ranks.
//!
//! # Architecture
//!
//! - [`boost`]: The injectable source of bounded random boosts
//! - [`recompute`]: The pure recompute operation over a slice of entries
//! - [`recomputer`]: Owns the current ranking and threads it across refreshes
//!
//! # Example
//!
//! ```
//! use leaderboard_core::seed_ranking;
//! use leaderboard_ranking::{RankingRecomputer, ScriptedBoosts};
//!
//! let mut recomputer = RankingRecomputer::new(
//!     seed_ranking(),
//!     ScriptedBoosts::new([0, 0, 0, 0, 0, 2000]),
//! ).with_bound(5000);
//!
//! let ranking = recomputer.refresh().unwrap();
//! assert_eq!(ranking.get("ZetaZen").unwrap().rank(), 5);
//! ```

pub mod boost;
pub mod recompute;
pub mod recomputer;

pub use boost::{BoostSource, NoBoost, RandomBoost, ScriptedBoosts};
pub use leaderboard_config::DEFAULT_BOOST_BOUND;
pub use recompute::{recompute, recompute_with_bound, track_changes};
pub use recomputer::RankingRecomputer;
