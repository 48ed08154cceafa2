//! Fixed-column console renderer.

use crate::episode_range::{episode_code, format_episode_ranges};
use crate::show::Show;
use crate::timeutil::{format_time_of_day, parse_time_of_day};

use super::{NO_SHOWS_MESSAGE, ScheduleRenderer, Styler};

/// Width of the time column (`"HH:MM"` / `"TBA"`).
const TIME_WIDTH: usize = 5;

/// Width of the show-name column.
const NAME_WIDTH: usize = 32;

/// Width of the episode-tag column.
const TAG_WIDTH: usize = 8;

/// Console renderer with a fixed column layout.
///
/// Cells are padded before the styler wraps them, so visual emphasis never
/// shifts the layout. Padding and truncation stay cosmetic; grouping and
/// sorting happened upstream.
#[derive(Debug)]
pub struct TextRenderer<S: Styler> {
    /// Field styling hooks (identity for the plain backend).
    styler: S,
}

impl<S: Styler> TextRenderer<S> {
    /// Creates a renderer over the given styler.
    pub const fn new(styler: S) -> Self {
        Self { styler }
    }

    /// Canonical time cell: re-formatted `HH:MM`, or `TBA` when unfixed.
    fn time_cell(show: &Show) -> String {
        show.airtime
            .as_deref()
            .and_then(parse_time_of_day)
            .map_or_else(|| String::from("TBA"), format_time_of_day)
    }

    /// Pads (and truncates) a name to the fixed column width.
    fn name_cell(name: &str) -> String {
        let truncated: String = name.chars().take(NAME_WIDTH).collect();
        format!("{truncated:<width$}", width = NAME_WIDTH)
    }

    /// Assembles one output line from pre-formatted cells.
    fn line(&self, time: &str, show: &Show, tag: &str) -> String {
        format!(
            "{}  {}  {}  {} ({})",
            self.styler
                .time(&format!("{time:<width$}", width = TIME_WIDTH)),
            self.styler.name(&Self::name_cell(&show.name)),
            self.styler
                .episode(&format!("{tag:<width$}", width = TAG_WIDTH)),
            self.styler.network(&show.network),
            self.styler.show_type(&show.kind),
        )
    }
}

impl<S: Styler> ScheduleRenderer for TextRenderer<S> {
    fn format_timed_show(&self, show: &Show) -> String {
        self.line(
            &Self::time_cell(show),
            show,
            &episode_code(show.season, show.number),
        )
    }

    fn format_untimed_show(&self, show: &Show) -> String {
        self.line("TBA", show, &episode_code(show.season, show.number))
    }

    fn format_multiple_episodes(&self, shows: &[Show]) -> String {
        let Some(first) = shows.first() else {
            return String::new();
        };
        let pairs: Vec<(u32, u32)> = shows.iter().map(|s| (s.season, s.number)).collect();
        self.line(&Self::time_cell(first), first, &format_episode_ranges(&pairs))
    }

    fn format_network_header(&self, network: &str, count: usize) -> String {
        format!("{} ({count})", self.styler.network(network))
    }

    fn format_no_shows(&self) -> String {
        self.styler.notice(NO_SHOWS_MESSAGE)
    }

    fn network_separator(&self) -> Option<String> {
        Some(String::new())
    }
}
