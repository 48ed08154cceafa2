//! Filter engine: conjunctive dimension filters over a show list.
//!
//! Dimensions AND together; the allowed values inside one dimension OR.
//! Filtering removes rows, it never reorders them.

use std::sync::LazyLock;

use regex::Regex;

use crate::options::ShowOptions;
use crate::show::Show;
use crate::timeutil::parse_time_of_day;

/// Trailing `" (CC)"` country suffix on a resolved network string.
#[allow(clippy::expect_used)]
static NETWORK_SUFFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s\([A-Z]{2}\)$").expect("failed to compile network suffix regex")
});

/// Case-insensitive string equality.
fn eq_ci(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Case-insensitive membership; an empty list means "no filter".
fn matches_any(value: &str, allowed: &[String]) -> bool {
    allowed.is_empty() || allowed.iter().any(|a| eq_ci(a, value))
}

/// Applies every configured dimension to `shows`.
///
/// Rows whose episode number is not a positive integer are dropped before
/// anything else, which removes specials and non-episodic rows from the
/// base feed.
#[must_use]
pub fn filter_shows(shows: Vec<Show>, options: &ShowOptions) -> Vec<Show> {
    let min_airtime = options.min_airtime.as_deref().and_then(parse_time_of_day);
    shows
        .into_iter()
        .filter(|show| passes(show, options, min_airtime))
        .collect()
}

/// One show against every dimension.
fn passes(show: &Show, options: &ShowOptions, min_airtime: Option<u32>) -> bool {
    if show.number == 0 {
        return false;
    }

    if !matches_any(&show.kind, &options.types) {
        return false;
    }

    // Network matching ignores any country suffix the normalizer added.
    let network = NETWORK_SUFFIX_RE.replace(&show.network, "");
    if !matches_any(&network, &options.networks) {
        return false;
    }

    if !options.genres.is_empty()
        && !show
            .genres
            .iter()
            .any(|genre| options.genres.iter().any(|req| eq_ci(genre, req)))
    {
        return false;
    }

    if !options.languages.is_empty() {
        // A show without a language never passes a language filter.
        let Some(ref language) = show.language else {
            return false;
        };
        if !options.languages.iter().any(|l| eq_ci(l, language)) {
            return false;
        }
    }

    // Untimed shows cannot be time-compared and always pass.
    if let Some(min) = min_airtime
        && let Some(minutes) = show.airtime.as_deref().and_then(parse_time_of_day)
        && minutes < min
    {
        return false;
    }

    if options.exclude_show_names.iter().any(|name| name == &show.name) {
        return false;
    }

    true
}
