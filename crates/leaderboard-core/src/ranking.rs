//! Ranking - A validated, densely ranked sequence of entries

use std::collections::HashSet;
use std::ops::Index;

use crate::entry::RankEntry;
use crate::error::{RankingError, Result, Violation};

/// A non-empty sequence of [`RankEntry`] whose ranks are exactly `1..=N`.
///
/// Entries are stored in rank order. A `Ranking` can only be built through
/// validation, so holders never observe gaps or duplicate ranks.
///
/// # Examples
///
/// ```
/// use leaderboard_core::Ranking;
///
/// let ranking = Ranking::from_scores([
///     ("C", 50, 0),
///     ("A", 100, 0),
///     ("B", 100, 0),
/// ]).unwrap();
///
/// let names: Vec<_> = ranking.iter().map(|e| e.name()).collect();
/// assert_eq!(names, ["A", "B", "C"]);
/// assert_eq!(ranking.leader().score(), 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<RankEntry>", into = "Vec<RankEntry>")
)]
pub struct Ranking {
    entries: Vec<RankEntry>,
}

impl Ranking {
    /// Validates already ranked entries.
    ///
    /// Entries may arrive in any order; they are stored by rank.
    ///
    /// # Errors
    ///
    /// Returns [`RankingError::PreconditionViolation`] if the entries are
    /// empty, ranks are not dense `1..=N`, or names repeat.
    pub fn new(mut entries: Vec<RankEntry>) -> Result<Self> {
        validate(&entries)?;
        entries.sort_by_key(RankEntry::rank);
        Ok(Ranking { entries })
    }

    /// Ranks `(name, score, change)` records by descending score.
    ///
    /// Records with equal scores keep their relative input order.
    pub fn from_scores<N, I>(records: I) -> Result<Self>
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, u64, i32)>,
    {
        let mut entries: Vec<RankEntry> = records
            .into_iter()
            .map(|(name, score, change)| RankEntry::new(name, score, 0, change))
            .collect();
        assign_ranks(&mut entries);
        Self::new(entries)
    }

    #[inline]
    pub fn entries(&self) -> &[RankEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankEntry> {
        self.entries.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with slices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the rank 1 entry.
    pub fn leader(&self) -> &RankEntry {
        &self.entries[0]
    }

    /// Looks up an entry by name.
    pub fn get(&self, name: &str) -> Option<&RankEntry> {
        self.entries.iter().find(|e| e.name() == name)
    }

    /// Sum of all scores.
    pub fn total_score(&self) -> u64 {
        self.entries.iter().map(RankEntry::score).sum()
    }

    pub fn into_entries(self) -> Vec<RankEntry> {
        self.entries
    }
}

impl Index<usize> for Ranking {
    type Output = RankEntry;

    fn index(&self, index: usize) -> &RankEntry {
        &self.entries[index]
    }
}

impl<'a> IntoIterator for &'a Ranking {
    type Item = &'a RankEntry;
    type IntoIter = std::slice::Iter<'a, RankEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl TryFrom<Vec<RankEntry>> for Ranking {
    type Error = RankingError;

    fn try_from(entries: Vec<RankEntry>) -> Result<Self> {
        Ranking::new(entries)
    }
}

impl From<Ranking> for Vec<RankEntry> {
    fn from(ranking: Ranking) -> Self {
        ranking.entries
    }
}

/// Checks that `entries` form a well-formed ranking.
///
/// Order is not checked; only that ranks are a permutation of `1..=N` and
/// names are unique.
pub fn validate(entries: &[RankEntry]) -> Result<()> {
    if entries.is_empty() {
        return Err(Violation::Empty.into());
    }

    let len = entries.len();
    let mut seen_ranks = vec![false; len];
    let mut seen_names = HashSet::with_capacity(len);

    for entry in entries {
        let rank = entry.rank();
        if rank == 0 || rank as usize > len {
            return Err(Violation::RankOutOfRange {
                name: entry.name().to_string(),
                rank,
                len,
            }
            .into());
        }
        let slot = &mut seen_ranks[rank as usize - 1];
        if *slot {
            return Err(Violation::DuplicateRank { rank }.into());
        }
        *slot = true;

        if !seen_names.insert(entry.name()) {
            return Err(Violation::DuplicateName {
                name: entry.name().to_string(),
            }
            .into());
        }
    }

    Ok(())
}

/// Stable-sorts entries by descending score and assigns ranks `1..=N`.
pub fn assign_ranks(entries: &mut [RankEntry]) {
    // sort_by is stable, so equal scores keep input order
    entries.sort_by(|a, b| b.score().cmp(&a.score()));
    for (position, entry) in entries.iter_mut().enumerate() {
        entry.set_rank(position as u32 + 1);
    }
}

#[cfg(test)]
#[path = "ranking_tests.rs"]
mod tests;
