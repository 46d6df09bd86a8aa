//! The recompute operation: boost, re-sort, re-rank.

use std::collections::HashMap;

use leaderboard_core::{assign_ranks, validate, RankEntry, RankingError, Violation};

use crate::boost::BoostSource;
use crate::DEFAULT_BOOST_BOUND;

/// Boosts every score by a value in `[0, 500)` and re-ranks.
///
/// See [`recompute_with_bound`].
pub fn recompute<B>(current: &[RankEntry], boosts: &mut B) -> Result<Vec<RankEntry>, RankingError>
where
    B: BoostSource + ?Sized,
{
    recompute_with_bound(current, boosts, DEFAULT_BOOST_BOUND)
}

/// Boosts every score by a value in `[0, bound)` and re-ranks.
///
/// One boost is drawn per entry, in input order. The boosted entries are
/// sorted by descending score; entries with equal scores keep their input
/// order. Ranks are reassigned `1..=N`. Names and change values pass through.
///
/// The input is never mutated.
///
/// # Errors
///
/// Returns [`RankingError::PreconditionViolation`] if `current` is empty or
/// not densely ranked, if `bound` is zero, if the source yields a boost
/// outside `[0, bound)`, or if a boosted score overflows.
///
/// # Examples
///
/// ```
/// use leaderboard_core::RankEntry;
/// use leaderboard_ranking::{recompute, ScriptedBoosts};
///
/// let current = vec![
///     RankEntry::new("A", 100, 1, 0),
///     RankEntry::new("B", 90, 2, 0),
/// ];
/// let next = recompute(&current, &mut ScriptedBoosts::new([0, 20])).unwrap();
///
/// assert_eq!(next[0].name(), "B");
/// assert_eq!(next[0].score(), 110);
/// assert_eq!(next[1].rank(), 2);
/// ```
pub fn recompute_with_bound<B>(
    current: &[RankEntry],
    boosts: &mut B,
    bound: u64,
) -> Result<Vec<RankEntry>, RankingError>
where
    B: BoostSource + ?Sized,
{
    if bound == 0 {
        return Err(Violation::ZeroBound.into());
    }
    validate(current)?;

    let mut boost_total: u64 = 0;
    let mut next = Vec::with_capacity(current.len());
    for entry in current {
        let boost = boosts.next_boost(bound);
        if boost >= bound {
            return Err(Violation::BoostOutOfRange { boost, bound }.into());
        }
        let score = entry
            .score()
            .checked_add(boost)
            .ok_or_else(|| Violation::ScoreOverflow {
                name: entry.name().to_string(),
            })?;
        boost_total = boost_total.saturating_add(boost);
        next.push(entry.rescored(score, 0));
    }

    assign_ranks(&mut next);

    let leader = &next[0];
    tracing::debug!(
        event = "recompute",
        entries = next.len() as u64,
        leader = leader.name(),
        top_score = leader.score(),
        boost_total,
    );

    Ok(next)
}

/// Replaces each entry's change with `previous_rank - new_rank`.
///
/// Entries missing from `previous` get a change of zero.
pub fn track_changes(previous: &[RankEntry], next: Vec<RankEntry>) -> Vec<RankEntry> {
    let previous_ranks: HashMap<&str, u32> =
        previous.iter().map(|e| (e.name(), e.rank())).collect();

    next.into_iter()
        .map(|entry| {
            let change = previous_ranks
                .get(entry.name())
                .map_or(0, |&before| before as i32 - entry.rank() as i32);
            entry.with_change(change)
        })
        .collect()
}
