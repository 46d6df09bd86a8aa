//! The seed dataset shown before the first refresh.

use crate::entry::RankEntry;
use crate::ranking::Ranking;

const SEED: [(&str, u64, i32); 6] = [
    ("AlphaUser", 9850, 1),
    ("BetaBuster", 8730, 0),
    ("GammaGuru", 7612, -1),
    ("DeltaDev", 6590, 2),
    ("EpsilonEng", 5400, 0),
    ("ZetaZen", 4321, -3),
];

/// Returns the six seed entries in rank order.
pub fn seed_entries() -> Vec<RankEntry> {
    SEED.iter()
        .enumerate()
        .map(|(i, &(name, score, change))| RankEntry::new(name, score, i as u32 + 1, change))
        .collect()
}

/// Returns the seed dataset as a validated ranking.
pub fn seed_ranking() -> Ranking {
    // SEED is hand-ordered by descending score with distinct names
    Ranking::new(seed_entries()).unwrap_or_else(|_| unreachable!("seed dataset is well-formed"))
}
