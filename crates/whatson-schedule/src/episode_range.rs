//! Compact textual ranges for multi-episode runs of one show.
//!
//! When several same-day episodes of one show collapse to a single output
//! line, their `(season, number)` pairs become a range list such as
//! `"S1E1-3, S1E5"`.

use std::collections::BTreeMap;

/// Formats one episode as a zero-padded tag (`S01E05`), used by the
/// column-layout console backends.
#[must_use]
pub fn episode_code(season: u32, number: u32) -> String {
    format!("S{season:02}E{number:02}")
}

/// Collapses a set of same-show episodes into a range list.
///
/// Episodes sort by `(season, number)` first. Consecutive numbers within
/// one season collapse to `S{season}E{first}-{last}` (unpadded), gaps
/// split runs, and chunks join with `", "` in season order. A single
/// episode yields its single tag; empty input yields an empty string.
#[must_use]
pub fn format_episode_ranges(episodes: &[(u32, u32)]) -> String {
    let mut by_season: BTreeMap<u32, Vec<u32>> = BTreeMap::new();
    for &(season, number) in episodes {
        by_season.entry(season).or_default().push(number);
    }

    let mut chunks: Vec<String> = Vec::new();
    for (season, mut numbers) in by_season {
        numbers.sort_unstable();
        numbers.dedup();

        let mut run: Option<(u32, u32)> = None;
        for number in numbers {
            run = match run {
                Some((first, last)) if number == last.saturating_add(1) => Some((first, number)),
                Some(finished) => {
                    chunks.push(render_run(season, finished));
                    Some((number, number))
                }
                None => Some((number, number)),
            };
        }
        if let Some(finished) = run {
            chunks.push(render_run(season, finished));
        }
    }

    chunks.join(", ")
}

/// Renders one consecutive run within a season.
fn render_run(season: u32, (first, last): (u32, u32)) -> String {
    if first == last {
        format!("S{season}E{first}")
    } else {
        format!("S{season}E{first}-{last}")
    }
}
