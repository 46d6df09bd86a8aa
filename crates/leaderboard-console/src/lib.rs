//! Colorful console output for the mini leaderboard.
//!
//! Provides terminal rendering of the leaderboard (see [`render`]) and a
//! custom `tracing` layer that formats leaderboard events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (initial load, refresh start/end)
//! - **DEBUG**: Each recompute and stored refresh with boost totals

pub mod render;

pub use render::{
    format_score, render_footer, render_frame, render_header, render_ranking, render_row,
    render_skeleton,
};

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes leaderboard console logging.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the banner and sets up tracing. `RUST_LOG` overrides the default
/// `leaderboard=info` filter.
pub fn init() {
    INIT.get_or_init(|| {
        EPOCH.get_or_init(Instant::now);
        print_banner();

        let filter = EnvFilter::builder()
            .with_default_directive("leaderboard=info".parse().unwrap())
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(LeaderboardConsoleLayer)
            .try_init();
    });
}

// Returns elapsed time since init.
fn elapsed_secs() -> f64 {
    EPOCH
        .get()
        .map_or(0.0, |epoch| epoch.elapsed().as_secs_f64())
}

fn print_banner() {
    let banner = format!("  ★ Mini Leaderboard v{}", VERSION);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats leaderboard events with colors.
pub struct LeaderboardConsoleLayer;

impl<S: Subscriber> Layer<S> for LeaderboardConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let target = event.metadata().target();

        // Accept events from leaderboard crates only
        if !target.starts_with("leaderboard") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *event.metadata().level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    leader: Option<String>,
    entries: Option<u64>,
    top_score: Option<u64>,
    total_score: Option<u64>,
    boost_total: Option<u64>,
    refresh: Option<u64>,
    duration_ms: Option<u64>,
    error: Option<String>,
    message: Option<String>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "leader" => self.leader = Some(s.trim_matches('"').to_string()),
            "error" => self.error = Some(s.trim_matches('"').to_string()),
            "message" => self.message = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "entries" => self.entries = Some(value),
            "top_score" => self.top_score = Some(value),
            "total_score" => self.total_score = Some(value),
            "boost_total" => self.boost_total = Some(value),
            "refresh" => self.refresh = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "leader" => self.leader = Some(value.to_string()),
            "error" => self.error = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref().unwrap_or("") {
        "initial_load" => format_initial_load(v),
        "refresh_start" => format_refresh_start(v),
        "refresh_end" => format_refresh_end(v),
        "refresh_busy" => format_refresh_busy(),
        "refresh_failed" => format_refresh_failed(v),
        "recompute" => format_recompute(v),
        "refresh" => format_stored(v),
        "" => format_message(v, level),
        _ => String::new(),
    }
}

// Plain messages are shown only for warnings and errors.
fn format_message(v: &EventVisitor, level: Level) -> String {
    let Some(message) = v.message.as_deref() else {
        return String::new();
    };
    match level {
        Level::ERROR => format!(
            "{} {} {}",
            format_elapsed(),
            "✗".bright_red().bold(),
            message.bright_red()
        ),
        Level::WARN => format!("{} {} {}", format_elapsed(), "!".yellow().bold(), message.yellow()),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_leader(v: &EventVisitor) -> String {
    let leader = v.leader.as_deref().unwrap_or("?");
    match v.top_score {
        Some(score) => format!(
            "leader {} ({})",
            leader.white().bold(),
            score.to_formatted_string(&Locale::en).bright_yellow()
        ),
        None => format!("leader {}", leader.white().bold()),
    }
}

fn format_initial_load(v: &EventVisitor) -> String {
    format!(
        "{} {} Loaded │ {} entries │ {} │ {}",
        format_elapsed(),
        "▶".bright_green().bold(),
        v.entries.unwrap_or(0).to_formatted_string(&Locale::en).bright_yellow(),
        format_leader(v),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow()
    )
}

fn format_refresh_start(v: &EventVisitor) -> String {
    format!(
        "{} {} Refresh #{} requested",
        format_elapsed(),
        "⟳".bright_blue(),
        v.refresh.unwrap_or(0)
    )
}

fn format_refresh_end(v: &EventVisitor) -> String {
    format!(
        "{} {} Refresh #{} done │ {} │ {}",
        format_elapsed(),
        "◀".bright_blue(),
        v.refresh.unwrap_or(0),
        format_leader(v),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow()
    )
}

fn format_refresh_busy() -> String {
    format!(
        "{} {} Refresh ignored │ already loading",
        format_elapsed(),
        "✗".bright_red()
    )
}

fn format_refresh_failed(v: &EventVisitor) -> String {
    format!(
        "{} {} Refresh failed │ {}",
        format_elapsed(),
        "✗".bright_red().bold(),
        v.error.as_deref().unwrap_or("unknown error").bright_red()
    )
}

fn format_recompute(v: &EventVisitor) -> String {
    format!(
        "{} {} Recompute │ {} entries │ +{} boost │ {}",
        format_elapsed(),
        "⚡".bright_cyan(),
        v.entries.unwrap_or(0).to_formatted_string(&Locale::en).white(),
        v.boost_total
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_magenta()
            .bold(),
        format_leader(v)
    )
}

fn format_stored(v: &EventVisitor) -> String {
    format!(
        "{} {} Ranking #{} stored │ total {}",
        format_elapsed(),
        "↻".bright_black(),
        v.refresh.unwrap_or(0),
        v.total_score
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_black()
    )
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else {
        format!("{:.2}s", ms as f64 / 1000.0)
    }
}
