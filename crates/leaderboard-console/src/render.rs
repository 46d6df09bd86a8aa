//! Terminal rendering of the leaderboard.
//!
//! Every function returns a `String` so callers decide where it goes.
//! Output always carries ANSI colors.

use leaderboard_config::DisplayConfig;
use leaderboard_core::{ChangeDirection, RankEntry, Ranking};
use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;

const WIDTH: usize = 56;
const NAME_WIDTH: usize = 18;
const SCORE_WIDTH: usize = 12;

/// Formats a score with grouping separators, e.g. `9,850`.
pub fn format_score(score: u64) -> String {
    score.to_formatted_string(&Locale::en)
}

/// Renders the title bar with the refresh button.
///
/// While `loading`, the button reads `Loading...` and is dimmed.
pub fn render_header(title: &str, loading: bool) -> String {
    let label = if loading { "[⟳ Loading...]" } else { "[⟳ Refresh]" };
    let pad = WIDTH.saturating_sub(title.chars().count() + label.chars().count());
    let button = if loading {
        label.bright_black().to_string()
    } else {
        label.bright_white().bold().to_string()
    };

    let mut output = String::new();
    output.push_str(&"═".repeat(WIDTH).bright_blue().to_string());
    output.push('\n');
    output.push_str(&format!(
        "{}{}{}",
        title.bright_blue().bold(),
        " ".repeat(pad),
        button
    ));
    output.push('\n');
    output.push_str(&"═".repeat(WIDTH).bright_blue().to_string());
    output
}

/// Renders one entry as two lines: rank, name, score and change badge,
/// then the handle.
pub fn render_row(entry: &RankEntry, display: &DisplayConfig) -> String {
    let top = entry.rank() <= display.highlight_top;
    let star = if top {
        "★".bright_yellow().to_string()
    } else {
        " ".to_string()
    };
    let rank = format!("{:>2}", entry.rank());
    let rank = if top {
        rank.bright_yellow().bold().to_string()
    } else {
        rank.bright_black().to_string()
    };

    format!(
        "{} {}  {:<name_width$}{:>score_width$}  {}\n      {}",
        star,
        rank,
        entry.name().white().bold(),
        format_score(entry.score()).bright_magenta().bold(),
        change_badge(entry.change()),
        display.handle.bright_black(),
        name_width = NAME_WIDTH,
        score_width = SCORE_WIDTH,
    )
}

fn change_badge(change: i32) -> String {
    match ChangeDirection::of(change) {
        ChangeDirection::Up => format!("▲ {:+}", change).bright_green().to_string(),
        ChangeDirection::Down => format!("▼ {:+}", change).bright_red().to_string(),
        ChangeDirection::Steady => "● 0".bright_black().to_string(),
    }
}

/// Renders all rows separated by thin rules.
pub fn render_ranking(ranking: &Ranking, display: &DisplayConfig) -> String {
    let separator = format!("\n{}\n", "─".repeat(WIDTH).bright_black());
    ranking
        .iter()
        .map(|entry| render_row(entry, display))
        .collect::<Vec<_>>()
        .join(separator.as_str())
}

/// Renders `rows` pulsing placeholder rows.
pub fn render_skeleton(rows: usize) -> String {
    let bar = format!(
        "   {}{}{}",
        "░".repeat(WIDTH / 4),
        " ".repeat(WIDTH - WIDTH / 4 - WIDTH / 6 - 3),
        "░".repeat(WIDTH / 6)
    );
    let line = bar.bright_black().to_string();
    vec![line; rows].join("\n")
}

/// Renders the note printed under the ranking.
pub fn render_footer(footer: &str) -> String {
    let pad = WIDTH.saturating_sub(footer.chars().count()) / 2;
    format!("{}{}", " ".repeat(pad), footer.bright_black().italic())
}

/// Renders a full screen: the header, then either the skeleton (no ranking
/// yet) or the ranking and footer.
pub fn render_frame(ranking: Option<&Ranking>, display: &DisplayConfig) -> String {
    let header = render_header(&display.title, ranking.is_none());
    match ranking {
        None => format!("{}\n{}", header, render_skeleton(display.skeleton_rows)),
        Some(ranking) => format!(
            "{}\n{}\n\n{}",
            header,
            render_ranking(ranking, display),
            render_footer(&display.footer)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leaderboard_core::seed_ranking;
    use leaderboard_test::ranking_of;

    // Drops `ESC [ ... m` sequences.
    fn strip_ansi(s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn test_format_score_groups_thousands() {
        assert_eq!(format_score(9850), "9,850");
        assert_eq!(format_score(999), "999");
        assert_eq!(format_score(1_234_567), "1,234,567");
    }

    #[test]
    fn test_header_button_state() {
        let idle = strip_ansi(&render_header("Ranking", false));
        let busy = strip_ansi(&render_header("Ranking", true));

        assert!(idle.contains("[⟳ Refresh]"));
        assert!(busy.contains("[⟳ Loading...]"));
        assert!(idle.lines().nth(1).unwrap().starts_with("Ranking"));
    }

    #[test]
    fn test_header_button_is_right_aligned() {
        for loading in [false, true] {
            let header = strip_ansi(&render_header("Ranking", loading));
            let title_line = header.lines().nth(1).unwrap();
            let rule = header.lines().next().unwrap();

            assert_eq!(title_line.chars().count(), WIDTH);
            assert_eq!(rule.chars().count(), WIDTH);
            assert!(title_line.ends_with(']'));
        }
    }

    #[test]
    fn test_top_rows_have_star() {
        let display = DisplayConfig::default();
        let ranking = seed_ranking();

        let third = strip_ansi(&render_row(&ranking[2], &display));
        let fourth = strip_ansi(&render_row(&ranking[3], &display));

        assert!(third.starts_with("★  3  GammaGuru"));
        assert!(fourth.starts_with("   4  DeltaDev"));
    }

    #[test]
    fn test_row_contents() {
        let display = DisplayConfig::default();
        let ranking = seed_ranking();
        let row = strip_ansi(&render_row(ranking.leader(), &display));

        assert!(row.contains("AlphaUser"));
        assert!(row.contains("9,850"));
        assert!(row.contains("▲ +1"));
        assert!(row.ends_with("@farcaster_user"));
    }

    #[test]
    fn test_change_badges() {
        assert_eq!(strip_ansi(&change_badge(2)), "▲ +2");
        assert_eq!(strip_ansi(&change_badge(-3)), "▼ -3");
        assert_eq!(strip_ansi(&change_badge(0)), "● 0");
    }

    #[test]
    fn test_skeleton_rows() {
        let skeleton = render_skeleton(6);
        assert_eq!(skeleton.lines().count(), 6);
        assert!(strip_ansi(&skeleton).lines().all(|line| line.contains('░')));
    }

    #[test]
    fn test_frame_loading_shows_skeleton() {
        let display = DisplayConfig::default();
        let frame = strip_ansi(&render_frame(None, &display));

        assert!(frame.contains("Loading..."));
        assert!(frame.contains('░'));
        assert!(!frame.contains(&display.footer));
    }

    #[test]
    fn test_frame_ready_shows_rows_in_rank_order() {
        let display = DisplayConfig::default();
        let ranking = ranking_of(&[("Low", 5), ("High", 50_000)]);
        let frame = strip_ansi(&render_frame(Some(&ranking), &display));

        let high = frame.find("High").unwrap();
        let low = frame.find("Low").unwrap();
        assert!(high < low);
        assert!(frame.contains("50,000"));
        assert!(frame.contains("[⟳ Refresh]"));
        assert!(frame.contains(&display.footer));
    }
}
