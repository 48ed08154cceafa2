//! Deduplication of shows repeated across the two source feeds.
//!
//! The broadcast and web schedules can both list the same episode; the
//! `(id, season, number)` triple identifies a repeat.

use std::collections::HashSet;

use crate::show::Show;

/// Removes exact `(id, season, number)` repeats, first occurrence wins.
///
/// Survivor order matches first-seen order across the concatenated input;
/// no sorting happens here. Empty input yields an empty list, since either
/// upstream fetch may have degraded to nothing.
#[must_use]
pub fn dedup_shows(shows: Vec<Show>) -> Vec<Show> {
    let mut seen: HashSet<(u64, u32, u32)> = HashSet::new();
    shows
        .into_iter()
        .filter(|show| seen.insert(show.dedup_key()))
        .collect()
}
