//! Slack Block Kit renderer.

use whatson_api::slack::{Block, SlackMessage, TextObject};

use crate::episode_range::{episode_code, format_episode_ranges};
use crate::show::{NetworkGroup, Show};
use crate::timeutil::{format_time_of_day, parse_time_of_day};

use super::ScheduleRenderer;

/// Renderer producing mrkdwn schedule lines and whole Block Kit messages.
///
/// Line-level output follows the shared contract; `build_message` wraps a
/// rendered run into header/section/divider blocks for delivery.
#[derive(Debug)]
pub struct SlackRenderer {
    /// Title used for the header block and the notification fallback text.
    title: String,
}

impl SlackRenderer {
    /// Creates a renderer with the given message title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Canonical time prefix: `HH:MM`, or `TBA` when unfixed.
    fn time_prefix(show: &Show) -> String {
        show.airtime
            .as_deref()
            .and_then(parse_time_of_day)
            .map_or_else(|| String::from("TBA"), format_time_of_day)
    }

    /// One mrkdwn bullet line.
    fn bullet(show: &Show, tag: &str) -> String {
        format!(
            "• `{}`  *{}*  {}  _{}_",
            Self::time_prefix(show),
            show.name,
            tag,
            show.kind,
        )
    }

    /// Assembles the full Block Kit message for a rendered run: a header
    /// block, one section per network bucket, dividers in between.
    #[must_use]
    pub fn build_message(&self, groups: &[NetworkGroup], sort_by_time: bool) -> SlackMessage {
        let mut blocks = vec![Block::Header {
            text: TextObject::plain(self.title.clone()),
        }];

        if groups.is_empty() {
            blocks.push(Block::Section {
                text: TextObject::mrkdwn(self.format_no_shows()),
            });
            return SlackMessage {
                text: self.title.clone(),
                blocks,
            };
        }

        for (index, group) in groups.iter().enumerate() {
            if index > 0 {
                blocks.push(Block::Divider);
            }
            let lines = self.format_network_groups(std::slice::from_ref(group), sort_by_time);
            blocks.push(Block::Section {
                text: TextObject::mrkdwn(lines.join("\n")),
            });
        }

        SlackMessage {
            text: self.title.clone(),
            blocks,
        }
    }
}

impl ScheduleRenderer for SlackRenderer {
    fn format_timed_show(&self, show: &Show) -> String {
        Self::bullet(show, &episode_code(show.season, show.number))
    }

    fn format_untimed_show(&self, show: &Show) -> String {
        Self::bullet(show, &episode_code(show.season, show.number))
    }

    fn format_multiple_episodes(&self, shows: &[Show]) -> String {
        let Some(first) = shows.first() else {
            return String::new();
        };
        let pairs: Vec<(u32, u32)> = shows.iter().map(|s| (s.season, s.number)).collect();
        Self::bullet(first, &format_episode_ranges(&pairs))
    }

    fn format_network_header(&self, network: &str, count: usize) -> String {
        format!("*{network}* ({count})")
    }
}
