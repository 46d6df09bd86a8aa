//! RankEntry - One participant's standing

use std::fmt;

/// One participant's standing on the leaderboard.
///
/// `rank` is derived from the position of the entry inside a [`Ranking`]
/// and is only assigned by ranking operations.
///
/// # Examples
///
/// ```
/// use leaderboard_core::{ChangeDirection, RankEntry};
///
/// let entry = RankEntry::new("AlphaUser", 9850, 1, 1);
/// assert_eq!(entry.name(), "AlphaUser");
/// assert_eq!(entry.direction(), ChangeDirection::Up);
/// ```
///
/// [`Ranking`]: crate::Ranking
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankEntry {
    name: String,
    score: u64,
    rank: u32,
    change: i32,
}

impl RankEntry {
    /// Creates an entry with an explicit rank.
    pub fn new(name: impl Into<String>, score: u64, rank: u32, change: i32) -> Self {
        RankEntry {
            name: name.into(),
            score,
            rank,
            change,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn score(&self) -> u64 {
        self.score
    }

    #[inline]
    pub fn rank(&self) -> u32 {
        self.rank
    }

    /// Rank delta against a previous ranking. Positive means moved up.
    #[inline]
    pub fn change(&self) -> i32 {
        self.change
    }

    /// Returns the display direction derived from the sign of `change`.
    pub fn direction(&self) -> ChangeDirection {
        ChangeDirection::of(self.change)
    }

    /// Returns a copy of this entry with a new score and rank.
    ///
    /// Name and change pass through unchanged.
    pub fn rescored(&self, score: u64, rank: u32) -> Self {
        RankEntry {
            name: self.name.clone(),
            score,
            rank,
            change: self.change,
        }
    }

    /// Returns a copy of this entry with a new change value.
    pub fn with_change(mut self, change: i32) -> Self {
        self.change = change;
        self
    }

    pub(crate) fn set_rank(&mut self, rank: u32) {
        self.rank = rank;
    }
}

impl fmt::Display for RankEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} ({}, {:+})",
            self.rank, self.name, self.score, self.change
        )
    }
}

/// Visual direction of a rank change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChangeDirection {
    /// The entry climbed (`change > 0`).
    Up,
    /// The entry held its position (`change == 0`).
    Steady,
    /// The entry dropped (`change < 0`).
    Down,
}

impl ChangeDirection {
    pub fn of(change: i32) -> Self {
        match change.signum() {
            1 => ChangeDirection::Up,
            -1 => ChangeDirection::Down,
            _ => ChangeDirection::Steady,
        }
    }
}
