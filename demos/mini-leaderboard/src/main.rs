//! Mini Leaderboard Demo
//!
//! Shows the loading skeleton, the seed ranking, and a few refreshes in the
//! terminal. Settings come from `leaderboard.toml` in the working directory
//! when present.

use leaderboard::console;
use leaderboard::prelude::*;
use leaderboard::ConfigError;

const CONFIG_PATH: &str = "leaderboard.toml";
const REFRESHES: usize = 3;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    console::init();

    let config = match LeaderboardConfig::load(CONFIG_PATH) {
        Ok(config) => config,
        Err(ConfigError::Io(_)) => LeaderboardConfig::default(),
        Err(err) => {
            tracing::warn!(target: "leaderboard", "Ignoring {}: {}", CONFIG_PATH, err);
            LeaderboardConfig::default()
        }
    };

    let session = LeaderboardSession::from_config(&config);
    println!("{}\n", session.render(&config.display));

    session.load().await;
    println!("{}\n", session.render(&config.display));

    for _ in 0..REFRESHES {
        // a second click while loading is ignored
        let (result, ignored) = tokio::join!(session.refresh(), session.refresh());
        debug_assert!(matches!(ignored, Err(SessionError::Busy)));

        if let Err(err) = result {
            tracing::error!(target: "leaderboard", "Refresh failed: {}", err);
        }
        println!("{}\n", session.render(&config.display));
    }
}
