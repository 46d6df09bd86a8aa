//! RankingRecomputer - Threads the current ranking across refreshes.

use leaderboard_config::RankingConfig;
use leaderboard_core::{seed_ranking, ChangePolicy, Ranking, RankingError};

use crate::boost::{BoostSource, RandomBoost};
use crate::recompute::{recompute_with_bound, track_changes};
use crate::DEFAULT_BOOST_BOUND;

/// Owns the authoritative ranking between refreshes.
///
/// Each [`refresh`](Self::refresh) recomputes from the previous result, not
/// from the seed. The seed is kept untouched for [`reset`](Self::reset).
///
/// Calls are not synchronized; callers that can trigger refreshes
/// concurrently must serialize them.
#[derive(Debug)]
pub struct RankingRecomputer<B: BoostSource> {
    seed: Ranking,
    current: Ranking,
    boosts: B,
    bound: u64,
    policy: ChangePolicy,
    refresh_count: u64,
}

impl<B: BoostSource> RankingRecomputer<B> {
    /// Creates a recomputer starting at `seed` with the default bound and
    /// cosmetic change policy.
    pub fn new(seed: Ranking, boosts: B) -> Self {
        Self {
            current: seed.clone(),
            seed,
            boosts,
            bound: DEFAULT_BOOST_BOUND,
            policy: ChangePolicy::Cosmetic,
            refresh_count: 0,
        }
    }

    pub fn with_bound(mut self, bound: u64) -> Self {
        self.bound = bound;
        self
    }

    pub fn with_change_policy(mut self, policy: ChangePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn current(&self) -> &Ranking {
        &self.current
    }

    pub fn seed(&self) -> &Ranking {
        &self.seed
    }

    pub fn bound(&self) -> u64 {
        self.bound
    }

    pub fn change_policy(&self) -> ChangePolicy {
        self.policy
    }

    /// Number of successful refreshes since creation or the last reset.
    pub fn refresh_count(&self) -> u64 {
        self.refresh_count
    }

    /// Boosts and re-ranks the current ranking, then stores the result.
    ///
    /// On error the current ranking is left as it was.
    pub fn refresh(&mut self) -> Result<&Ranking, RankingError> {
        let mut next = recompute_with_bound(self.current.entries(), &mut self.boosts, self.bound)?;
        if self.policy == ChangePolicy::Tracked {
            next = track_changes(self.current.entries(), next);
        }

        self.current = Ranking::new(next)?;
        self.refresh_count += 1;

        tracing::debug!(
            event = "refresh",
            refresh = self.refresh_count,
            leader = self.current.leader().name(),
            total_score = self.current.total_score(),
        );

        Ok(&self.current)
    }

    /// Restores the seed ranking.
    pub fn reset(&mut self) {
        self.current = self.seed.clone();
        self.refresh_count = 0;
    }

    pub fn into_current(self) -> Ranking {
        self.current
    }
}

impl RankingRecomputer<RandomBoost> {
    /// Creates a recomputer over the seed dataset from configuration.
    pub fn from_config(config: &RankingConfig) -> Self {
        RankingRecomputer::new(seed_ranking(), RandomBoost::from_seed(config.random_seed))
            .with_bound(config.boost_bound)
            .with_change_policy(config.change_policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boost::ScriptedBoosts;
    use leaderboard_core::Violation;
    use leaderboard_test::{assert_well_ranked, ranking_of};

    #[test]
    fn test_state_threads_forward() {
        let seed = ranking_of(&[("A", 100), ("B", 90)]);
        let mut recomputer = RankingRecomputer::new(seed, ScriptedBoosts::new([0, 6]));

        // B: 90 + 6 = 96, still second
        let first = recomputer.refresh().unwrap().clone();
        assert_eq!(first.get("B").unwrap().score(), 96);
        assert_eq!(first.leader().name(), "A");

        // builds on 96, not on the seed's 90
        let second = recomputer.refresh().unwrap();
        assert_eq!(second.leader().name(), "B");
        assert_eq!(second.leader().score(), 102);
        assert_eq!(recomputer.refresh_count(), 2);

        assert_eq!(recomputer.seed().get("B").unwrap().score(), 90);
    }

    #[test]
    fn test_cosmetic_policy_keeps_change() {
        let boosts = ScriptedBoosts::new([0, 0, 0, 0, 0, 1200]);
        let mut recomputer = RankingRecomputer::new(seed_ranking(), boosts).with_bound(2000);

        let ranking = recomputer.refresh().unwrap();
        // ZetaZen climbs to 5th but keeps its seeded -3
        assert_eq!(ranking.get("ZetaZen").unwrap().rank(), 5);
        for entry in seed_ranking().iter() {
            assert_eq!(ranking.get(entry.name()).unwrap().change(), entry.change());
        }
    }

    #[test]
    fn test_tracked_policy_computes_deltas() {
        let mut recomputer = RankingRecomputer::new(
            ranking_of(&[("A", 100), ("B", 90), ("C", 80)]),
            ScriptedBoosts::new([0, 0, 30]),
        )
        .with_change_policy(ChangePolicy::Tracked);

        let ranking = recomputer.refresh().unwrap();
        assert_eq!(ranking.leader().name(), "C");
        assert_eq!(ranking.get("C").unwrap().change(), 2);
        assert_eq!(ranking.get("A").unwrap().change(), -1);
        assert_eq!(ranking.get("B").unwrap().change(), -1);
    }

    #[test]
    fn test_failed_refresh_keeps_state() {
        let mut recomputer =
            RankingRecomputer::new(ranking_of(&[("A", 100)]), ScriptedBoosts::new([5]))
                .with_bound(5);

        let err = recomputer.refresh().unwrap_err();
        assert_eq!(
            err,
            RankingError::PreconditionViolation(Violation::BoostOutOfRange { boost: 5, bound: 5 })
        );
        assert_eq!(recomputer.current().leader().score(), 100);
        assert_eq!(recomputer.refresh_count(), 0);
    }

    #[test]
    fn test_reset_restores_seed() {
        let mut recomputer = RankingRecomputer::new(seed_ranking(), ScriptedBoosts::new([1]));
        recomputer.refresh().unwrap();
        assert_ne!(recomputer.current(), &seed_ranking());

        recomputer.reset();
        assert_eq!(recomputer.current(), &seed_ranking());
        assert_eq!(recomputer.refresh_count(), 0);
    }

    #[test]
    fn test_from_config_is_reproducible() {
        let config = RankingConfig {
            random_seed: Some(11),
            boost_bound: 300,
            change_policy: ChangePolicy::Tracked,
        };
        let mut a = RankingRecomputer::from_config(&config);
        let mut b = RankingRecomputer::from_config(&config);

        assert_eq!(a.bound(), 300);
        assert_eq!(a.change_policy(), ChangePolicy::Tracked);
        for _ in 0..5 {
            let left = a.refresh().unwrap().clone();
            let right = b.refresh().unwrap();
            assert_eq!(&left, right);
            assert_well_ranked(left.entries());
        }
    }
}
