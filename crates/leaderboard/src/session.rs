//! LeaderboardSession - Simulated loading around the recompute engine.
//!
//! The session owns the single authoritative [`RankingRecomputer`] and the
//! view shown to the display layer. It adds the artificial delays of the
//! page and refuses overlapping refreshes, the same way the refresh button
//! is disabled while loading.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use thiserror::Error;
use tokio::sync::{watch, Mutex};
use tokio::time::{sleep, Instant};

use leaderboard_config::{LeaderboardConfig, TimingConfig};
use leaderboard_core::{Ranking, RankingError};
use leaderboard_ranking::{BoostSource, RandomBoost, RankingRecomputer};

/// Errors surfaced by a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// A load or refresh is still outstanding
    #[error("a refresh is already in progress")]
    Busy,

    #[error(transparent)]
    Ranking(#[from] RankingError),
}

/// What the display layer should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeaderboardView {
    /// Skeleton rows; no ranking is displayed.
    Loading,
    Ready(Ranking),
}

impl LeaderboardView {
    pub fn is_loading(&self) -> bool {
        matches!(self, LeaderboardView::Loading)
    }

    pub fn ranking(&self) -> Option<&Ranking> {
        match self {
            LeaderboardView::Loading => None,
            LeaderboardView::Ready(ranking) => Some(ranking),
        }
    }
}

/// A leaderboard page session.
///
/// Starts in [`LeaderboardView::Loading`] and busy until [`load`] completes.
///
/// [`load`]: LeaderboardSession::load
pub struct LeaderboardSession<B: BoostSource> {
    recomputer: Mutex<RankingRecomputer<B>>,
    timing: TimingConfig,
    view: watch::Sender<LeaderboardView>,
    // held for the whole initial load; only its holder may publish it
    load_gate: Mutex<()>,
    loaded: AtomicBool,
    busy: AtomicBool,
    refreshes: AtomicU64,
}

impl<B: BoostSource> LeaderboardSession<B> {
    pub fn new(recomputer: RankingRecomputer<B>, timing: TimingConfig) -> Self {
        let (view, _) = watch::channel(LeaderboardView::Loading);
        Self {
            recomputer: Mutex::new(recomputer),
            timing,
            view,
            load_gate: Mutex::new(()),
            loaded: AtomicBool::new(false),
            busy: AtomicBool::new(true),
            refreshes: AtomicU64::new(0),
        }
    }

    /// Returns the current view.
    pub fn view(&self) -> LeaderboardView {
        self.view.borrow().clone()
    }

    /// Subscribes to view changes.
    pub fn subscribe(&self) -> watch::Receiver<LeaderboardView> {
        self.view.subscribe()
    }

    pub fn timing(&self) -> &TimingConfig {
        &self.timing
    }

    /// Waits the initial delay, then shows the recomputer's current ranking.
    ///
    /// Returns the current ranking without delay if the session is already
    /// loaded. Overlapping calls wait for the first one and leave the view
    /// and the busy flag alone.
    pub async fn load(&self) -> Ranking {
        let _gate = self.load_gate.lock().await;
        if self.loaded.load(Ordering::Acquire) {
            return self.recomputer.lock().await.current().clone();
        }

        let started = Instant::now();
        sleep(self.timing.initial_load_delay()).await;

        let ranking = self.recomputer.lock().await.current().clone();
        self.view.send_replace(LeaderboardView::Ready(ranking.clone()));
        self.loaded.store(true, Ordering::Release);
        self.busy.store(false, Ordering::Release);

        let leader = ranking.leader();
        tracing::info!(
            event = "initial_load",
            entries = ranking.len() as u64,
            leader = leader.name(),
            top_score = leader.score(),
            duration_ms = started.elapsed().as_millis() as u64,
        );

        ranking
    }

    /// Clears the view, waits the refresh delay, then recomputes once.
    ///
    /// # Errors
    ///
    /// - [`SessionError::Busy`] if the initial load or another refresh is
    ///   outstanding.
    /// - [`SessionError::Ranking`] if the recompute fails; the previous
    ///   view is restored.
    ///
    /// Dropping the future before it completes also restores the previous
    /// view.
    pub async fn refresh(&self) -> Result<Ranking, SessionError> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::info!(event = "refresh_busy");
            return Err(SessionError::Busy);
        }

        let previous = self.view.send_replace(LeaderboardView::Loading);
        let mut guard = RefreshGuard {
            busy: &self.busy,
            view: &self.view,
            restore: Some(previous),
        };

        let refresh = self.refreshes.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::info!(event = "refresh_start", refresh);

        let started = Instant::now();
        sleep(self.timing.refresh_delay()).await;

        let result = {
            let mut recomputer = self.recomputer.lock().await;
            recomputer.refresh().cloned()
        };

        match result {
            Ok(ranking) => {
                guard.restore = None;
                self.view.send_replace(LeaderboardView::Ready(ranking.clone()));

                let leader = ranking.leader();
                tracing::info!(
                    event = "refresh_end",
                    refresh,
                    leader = leader.name(),
                    top_score = leader.score(),
                    duration_ms = started.elapsed().as_millis() as u64,
                );
                Ok(ranking)
            }
            Err(err) => {
                tracing::warn!(event = "refresh_failed", refresh, error = %err);
                Err(err.into())
            }
        }
    }

    /// Number of refreshes started so far.
    pub fn refresh_count(&self) -> u64 {
        self.refreshes.load(Ordering::Relaxed)
    }
}

#[cfg(feature = "console")]
impl<B: BoostSource> LeaderboardSession<B> {
    /// Renders the current view for the terminal.
    pub fn render(&self, display: &leaderboard_config::DisplayConfig) -> String {
        leaderboard_console::render_frame(self.view().ranking(), display)
    }
}

impl LeaderboardSession<RandomBoost> {
    /// Creates a session over the seed dataset from configuration.
    pub fn from_config(config: &LeaderboardConfig) -> Self {
        LeaderboardSession::new(
            RankingRecomputer::from_config(&config.ranking),
            config.timing,
        )
    }
}

// Releases the busy flag and restores the previous view unless disarmed.
struct RefreshGuard<'a> {
    busy: &'a AtomicBool,
    view: &'a watch::Sender<LeaderboardView>,
    restore: Option<LeaderboardView>,
}

impl Drop for RefreshGuard<'_> {
    fn drop(&mut self) {
        if let Some(previous) = self.restore.take() {
            self.view.send_replace(previous);
        }
        self.busy.store(false, Ordering::Release);
    }
}
