//! Ranking fixtures.
//!
//! # Example
//!
//! ```
//! use leaderboard_test::fixtures::{ranking_of, tied_trio};
//!
//! let trio = tied_trio();
//! assert_eq!(trio[0].name(), "A");
//!
//! let custom = ranking_of(&[("P", 3), ("Q", 9)]);
//! assert_eq!(custom.leader().name(), "Q");
//! ```

use leaderboard_core::{seed_entries, RankEntry, Ranking};

/// The six seed entries in rank order.
pub fn seed() -> Vec<RankEntry> {
    seed_entries()
}

/// `A:100`, `B:100`, `C:50` ranked 1, 2, 3.
///
/// A and B tie, so any order-preserving recompute with zero boosts
/// must return this exact ranking.
pub fn tied_trio() -> Vec<RankEntry> {
    vec![
        RankEntry::new("A", 100, 1, 0),
        RankEntry::new("B", 100, 2, 0),
        RankEntry::new("C", 50, 3, 0),
    ]
}

/// Builds a ranking from `(name, score)` pairs with zero change.
///
/// # Panics
///
/// Panics if the pairs are empty or names repeat.
pub fn ranking_of(pairs: &[(&str, u64)]) -> Ranking {
    Ranking::from_scores(pairs.iter().map(|&(name, score)| (name, score, 0)))
        .expect("fixture pairs must form a valid ranking")
}
