//! Schema normalizer: raw schedule items to unified `Show` records.
//!
//! The TVMaze feeds disagree on where show data lives: the broadcast feed
//! puts it directly under `show`, the web feed nests it under
//! `_embedded.show`. Detection is structural, and downstream code never
//! branches on the source shape again.

use whatson_api::tvmaze::{RawShow, ScheduleItem};

use crate::show::{Show, UNKNOWN_NETWORK, UNKNOWN_TYPE};
use crate::timeutil::parse_time_of_day;

/// Streaming/network brands treated as home-country services even when
/// their broadcast network entry carries a foreign country. Hand-maintained
/// and intentionally non-exhaustive; matching is heuristic (see
/// `is_home_brand`).
const HOME_BRANDS: &[&str] = &[
    "Netflix",
    "Hulu",
    "Prime Video",
    "HBO Max",
    "Max",
    "Disney+",
    "Apple TV+",
    "Paramount+",
    "Peacock",
    "CBS All Access",
];

/// Lowercases and strips `+` and whitespace for brand comparison.
fn normalize_brand(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '+' && !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

/// Heuristic brand membership: containment in either direction after
/// normalization, with an empty-string guard.
fn is_home_brand(name: &str) -> bool {
    let needle = normalize_brand(name);
    if needle.is_empty() {
        return false;
    }
    HOME_BRANDS.iter().any(|brand| {
        let brand = normalize_brand(brand);
        brand.contains(&needle) || needle.contains(&brand)
    })
}

/// Resolves the display network string for a show.
///
/// Precedence: broadcast network, then web channel, then the sentinel.
/// A network from a country other than `home_country` gets a `" (CC)"`
/// suffix unless the paired web channel is a recognized home brand. Web
/// channels are never suffixed.
fn resolve_network(show: &RawShow, home_country: &str) -> String {
    if let Some(ref network) = show.network {
        let foreign_code = network
            .country
            .as_ref()
            .and_then(|c| c.code.as_deref())
            .filter(|code| *code != home_country);
        let suppressed = show
            .web_channel
            .as_ref()
            .is_some_and(|wc| is_home_brand(&wc.name));

        return match foreign_code {
            Some(code) if !suppressed => format!("{} ({code})", network.name),
            _ => network.name.clone(),
        };
    }

    show.web_channel
        .as_ref()
        .map_or_else(|| String::from(UNKNOWN_NETWORK), |wc| wc.name.clone())
}

/// Converts one raw schedule item into a `Show`.
///
/// `_embedded.show` (web feed) is checked first, then a top-level `show`
/// (broadcast feed). Items carrying neither yield `None` and fall out of
/// the run; a single malformed row never aborts the pipeline. Pure: the
/// same item always yields the same `Show`.
#[must_use]
pub fn normalize_item(item: &ScheduleItem, home_country: &str) -> Option<Show> {
    let show = item
        .embedded
        .as_ref()
        .and_then(|e| e.show.as_ref())
        .or(item.show.as_ref());
    let Some(show) = show else {
        tracing::debug!(item_id = item.id, "schedule item carries no show data, dropping");
        return None;
    };

    // A non-empty but unparseable air time degrades to "no fixed time",
    // keeping the invariant that a present airtime always parses.
    let airtime = item
        .airtime
        .clone()
        .filter(|t| parse_time_of_day(t).is_some());

    Some(Show {
        id: show.id,
        name: show.name.clone(),
        kind: show
            .kind
            .clone()
            .unwrap_or_else(|| String::from(UNKNOWN_TYPE)),
        language: show.language.clone(),
        genres: show.genres.clone(),
        network: resolve_network(show, home_country),
        summary: show.summary.clone(),
        airtime,
        season: item.season,
        number: item.number,
    })
}

/// Normalizes a whole batch, dropping unusable items.
#[must_use]
pub fn normalize_items(items: &[ScheduleItem], home_country: &str) -> Vec<Show> {
    items
        .iter()
        .filter_map(|item| normalize_item(item, home_country))
        .collect()
}
