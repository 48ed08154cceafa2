//! Grouping and chronological ordering.

use crate::show::{NetworkGroup, Show};
use crate::timeutil::parse_time_of_day;

/// Sort key: timed shows first (by minutes since midnight), untimed last.
fn time_sort_key(show: &Show) -> (bool, u32) {
    show.airtime
        .as_deref()
        .and_then(parse_time_of_day)
        .map_or((true, 0), |minutes| (false, minutes))
}

/// Sorts shows chronologically.
///
/// All timed shows precede all untimed shows regardless of other fields;
/// ties and untimed runs keep their input order (stable sort).
#[must_use]
pub fn sort_shows_by_time(mut shows: Vec<Show>) -> Vec<Show> {
    shows.sort_by_key(time_sort_key);
    shows
}

/// Partitions shows into network buckets in first-seen network order.
///
/// The resolved network string (country suffix included) is the bucket
/// key, so same-named networks from different countries stay in separate
/// buckets on purpose.
#[must_use]
pub fn group_shows_by_network(shows: &[Show]) -> Vec<NetworkGroup> {
    let mut groups: Vec<NetworkGroup> = Vec::new();
    for show in shows {
        if let Some(group) = groups.iter_mut().find(|g| g.network == show.network) {
            group.shows.push(show.clone());
        } else {
            groups.push(NetworkGroup {
                network: show.network.clone(),
                shows: vec![show.clone()],
            });
        }
    }
    groups
}
