//! Assertions for ranking invariants.

use leaderboard_core::RankEntry;

/// Asserts that entries, in order, carry ranks `1..=N`.
#[track_caller]
pub fn assert_dense_ranks(entries: &[RankEntry]) {
    assert!(!entries.is_empty(), "ranking must not be empty");
    for (position, entry) in entries.iter().enumerate() {
        assert_eq!(
            entry.rank() as usize,
            position + 1,
            "entry '{}' at position {} has rank {}",
            entry.name(),
            position,
            entry.rank()
        );
    }
}

/// Asserts that no lower-ranked entry outscores a higher-ranked one.
#[track_caller]
pub fn assert_descending_scores(entries: &[RankEntry]) {
    for pair in entries.windows(2) {
        assert!(
            pair[0].score() >= pair[1].score(),
            "'{}' ({}) is ranked above '{}' ({})",
            pair[0].name(),
            pair[0].score(),
            pair[1].name(),
            pair[1].score()
        );
    }
}

/// Both [`assert_dense_ranks`] and [`assert_descending_scores`].
#[track_caller]
pub fn assert_well_ranked(entries: &[RankEntry]) {
    assert_dense_ranks(entries);
    assert_descending_scores(entries);
}
