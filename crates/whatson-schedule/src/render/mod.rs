//! Render backends for grouped schedules.
//!
//! One shared contract (`ScheduleRenderer`) with interchangeable
//! implementations: fixed-column console text (plain or ANSI-styled) and
//! Slack Block Kit messages.

mod slack;
mod style;
mod text;

use std::collections::HashSet;

#[allow(clippy::module_name_repetitions)]
pub use slack::SlackRenderer;
pub use style::{AnsiStyler, PlainStyler, Styler};
#[allow(clippy::module_name_repetitions)]
pub use text::TextRenderer;

use crate::group::sort_shows_by_time;
use crate::show::{NetworkGroup, Show};

/// Line shown when filtering legitimately yields zero rows. A normal
/// output line, not an error.
pub const NO_SHOWS_MESSAGE: &str = "No shows found for the specified criteria.";

/// Shared contract for schedule output backends.
///
/// `format_network_groups` drives a whole rendering pass; the per-line
/// methods and the header/footer/separator hooks are the variation points.
pub trait ScheduleRenderer {
    /// Formats one show with a fixed air time.
    fn format_timed_show(&self, show: &Show) -> String;

    /// Formats one show without an air time (streaming drop, TBA slot).
    fn format_untimed_show(&self, show: &Show) -> String;

    /// Formats several same-day episodes of one show as a single line.
    fn format_multiple_episodes(&self, shows: &[Show]) -> String;

    /// Formats the header line opening a network bucket.
    fn format_network_header(&self, network: &str, count: usize) -> String;

    /// Line emitted when the whole run matched nothing.
    fn format_no_shows(&self) -> String {
        String::from(NO_SHOWS_MESSAGE)
    }

    /// Optional content emitted before the first bucket.
    fn header(&self) -> Option<String> {
        None
    }

    /// Optional content emitted after the last bucket.
    fn footer(&self) -> Option<String> {
        None
    }

    /// Optional content emitted between buckets.
    fn network_separator(&self) -> Option<String> {
        None
    }

    /// Renders every bucket into an ordered line sequence.
    ///
    /// Per bucket: the network header, then one line per show or collapsed
    /// multi-episode run (chronological when `sort_by_time`, input order
    /// otherwise), then the separator before the next bucket. Buckets with
    /// zero shows still emit their header; an empty group list renders the
    /// single no-shows line.
    fn format_network_groups(&self, groups: &[NetworkGroup], sort_by_time: bool) -> Vec<String> {
        if groups.is_empty() {
            return vec![self.format_no_shows()];
        }

        let mut lines: Vec<String> = Vec::new();
        if let Some(header) = self.header() {
            lines.push(header);
        }

        for (index, group) in groups.iter().enumerate() {
            if index > 0
                && let Some(separator) = self.network_separator()
            {
                lines.push(separator);
            }
            lines.push(self.format_network_header(&group.network, group.shows.len()));

            let shows = if sort_by_time {
                sort_shows_by_time(group.shows.clone())
            } else {
                group.shows.clone()
            };

            let mut emitted: HashSet<u64> = HashSet::new();
            for show in &shows {
                if !emitted.insert(show.id) {
                    continue;
                }
                let run: Vec<Show> = shows.iter().filter(|s| s.id == show.id).cloned().collect();
                if run.len() > 1 {
                    lines.push(self.format_multiple_episodes(&run));
                } else if show.airtime.is_some() {
                    lines.push(self.format_timed_show(show));
                } else {
                    lines.push(self.format_untimed_show(show));
                }
            }
        }

        if let Some(footer) = self.footer() {
            lines.push(footer);
        }
        lines
    }
}
