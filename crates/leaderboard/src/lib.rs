//! Mini Leaderboard - Ranked scores with a simulated refresh
//!
//! The seed ranking is shown after a simulated load; each refresh adds a
//! random boost to every score and re-ranks.
//!
//! # Example
//!
//! ```rust
//! use leaderboard::prelude::*;
//!
//! let mut recomputer = RankingRecomputer::new(seed_ranking(), NoBoost);
//! let ranking = recomputer.refresh().unwrap();
//! assert_eq!(ranking.leader().name(), "AlphaUser");
//! ```

// Core types
pub use leaderboard_core::{
    seed_entries, seed_ranking, ChangeDirection, ChangePolicy, RankEntry, Ranking, RankingError,
    Violation,
};

// Recompute engine
pub use leaderboard_ranking::{
    recompute, recompute_with_bound, track_changes, BoostSource, NoBoost, RandomBoost,
    RankingRecomputer, ScriptedBoosts, DEFAULT_BOOST_BOUND,
};

// Configuration
pub use leaderboard_config::{
    ConfigError, DisplayConfig, LeaderboardConfig, RankingConfig, TimingConfig,
};

#[cfg(feature = "console")]
pub use leaderboard_console as console;

mod session;
pub use session::{LeaderboardSession, LeaderboardView, SessionError};

pub mod prelude {
    pub use super::{
        recompute, seed_ranking, BoostSource, ChangePolicy, LeaderboardConfig,
        LeaderboardSession, LeaderboardView, NoBoost, RandomBoost, RankEntry, Ranking,
        RankingError, RankingRecomputer, ScriptedBoosts, SessionError,
    };
}
