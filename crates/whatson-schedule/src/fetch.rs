//! The fetch→normalize→dedup→filter pipeline entry point.

use tracing::instrument;

use whatson_api::tvmaze::{LocalTvMazeApi, ScheduleItem, ScheduleParams};

use crate::dedup::dedup_shows;
use crate::filter::filter_shows;
use crate::normalize::normalize_items;
use crate::options::{FetchSource, ShowOptions};
use crate::show::Show;

/// Runs the full pipeline: fetch the configured feeds, normalize both raw
/// shapes, dedupe overlaps, and filter.
///
/// With `FetchSource::All` the two requests are issued together and
/// awaited jointly; a transport failure in one feed degrades that feed to
/// an empty list (logged) without cancelling or failing the other. The run
/// itself never fails on partial data.
#[instrument(skip_all)]
pub async fn fetch_shows(api: &(impl LocalTvMazeApi + Sync), options: &ShowOptions) -> Vec<Show> {
    let params = ScheduleParams::new(options.date, Some(options.country.clone()));

    let (broadcast, web) = match options.fetch {
        FetchSource::All => {
            let (broadcast, web) = tokio::join!(api.schedule(&params), api.web_schedule(&params));
            (degrade("schedule", broadcast), degrade("schedule/web", web))
        }
        FetchSource::Network => (degrade("schedule", api.schedule(&params).await), Vec::new()),
        FetchSource::Web => (
            Vec::new(),
            degrade("schedule/web", api.web_schedule(&params).await),
        ),
    };

    tracing::debug!(
        broadcast = broadcast.len(),
        web = web.len(),
        "schedule feeds fetched"
    );

    // Broadcast items come first so the dedup keeps their rendition of an
    // episode listed by both feeds.
    let mut shows = normalize_items(&broadcast, &options.country);
    shows.extend(normalize_items(&web, &options.country));

    filter_shows(dedup_shows(shows), options)
}

/// Turns a failed feed fetch into an empty list, keeping the run alive.
fn degrade(feed: &str, result: anyhow::Result<Vec<ScheduleItem>>) -> Vec<ScheduleItem> {
    result.unwrap_or_else(|e| {
        tracing::warn!(%feed, error = %e, "feed fetch failed, continuing with empty list");
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use std::sync::atomic::{AtomicU32, Ordering};

    use anyhow::{Result, bail};
    use whatson_api::tvmaze::{RawNetwork, RawShow, RawWebChannel};

    use super::*;

    /// Mock API with independently failable feeds and call counters.
    struct MockTvMazeApi {
        broadcast: Vec<ScheduleItem>,
        web: Vec<ScheduleItem>,
        fail_broadcast: bool,
        fail_web: bool,
        broadcast_calls: AtomicU32,
        web_calls: AtomicU32,
    }

    impl MockTvMazeApi {
        fn new(broadcast: Vec<ScheduleItem>, web: Vec<ScheduleItem>) -> Self {
            Self {
                broadcast,
                web,
                fail_broadcast: false,
                fail_web: false,
                broadcast_calls: AtomicU32::new(0),
                web_calls: AtomicU32::new(0),
            }
        }
    }

    impl LocalTvMazeApi for MockTvMazeApi {
        async fn schedule(&self, _params: &ScheduleParams) -> Result<Vec<ScheduleItem>> {
            self.broadcast_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_broadcast {
                bail!("TVMaze API error (HTTP 503): upstream down");
            }
            Ok(self.broadcast.clone())
        }

        async fn web_schedule(&self, _params: &ScheduleParams) -> Result<Vec<ScheduleItem>> {
            self.web_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_web {
                bail!("TVMaze API error (HTTP 503): upstream down");
            }
            Ok(self.web.clone())
        }
    }

    /// Helper building a broadcast-shape item.
    fn broadcast_item(show_id: u64, name: &str, season: u32, number: u32) -> ScheduleItem {
        ScheduleItem {
            id: show_id.saturating_mul(1000).saturating_add(u64::from(number)),
            name: Some(format!("{name} {season}x{number}")),
            season,
            number,
            airtime: Some(String::from("20:00")),
            airdate: Some(String::from("2024-01-15")),
            summary: None,
            show: Some(RawShow {
                id: show_id,
                name: String::from(name),
                kind: Some(String::from("Scripted")),
                language: Some(String::from("English")),
                genres: vec![String::from("Drama")],
                network: Some(RawNetwork {
                    id: 2,
                    name: String::from("CBS"),
                    country: None,
                }),
                web_channel: None,
                summary: None,
            }),
            embedded: None,
        }
    }

    /// Helper rebuilding the same episode in the web feed shape.
    fn web_item(show_id: u64, name: &str, season: u32, number: u32) -> ScheduleItem {
        let mut item = broadcast_item(show_id, name, season, number);
        let mut show = item.show.take().unwrap();
        show.network = None;
        show.web_channel = Some(RawWebChannel {
            id: 1,
            name: String::from("Netflix"),
            country: None,
        });
        item.embedded = Some(whatson_api::tvmaze::Embedded { show: Some(show) });
        item.airtime = None;
        item
    }

    #[tokio::test]
    async fn test_overlapping_feeds_dedupe_to_one_show() {
        // Arrange: the same (show, season, episode) in both feeds
        let api = MockTvMazeApi::new(
            vec![broadcast_item(1, "NCIS", 1, 1)],
            vec![web_item(1, "NCIS", 1, 1)],
        );

        // Act
        let shows = fetch_shows(&api, &ShowOptions::default()).await;

        // Assert: one survivor, the broadcast rendition
        assert_eq!(shows.len(), 1);
        assert_eq!(shows[0].network, "CBS");
    }

    #[tokio::test]
    async fn test_broadcast_failure_keeps_web_results() {
        // Arrange
        let mut api = MockTvMazeApi::new(Vec::new(), vec![web_item(5, "Stranger Things", 5, 1)]);
        api.fail_broadcast = true;

        // Act
        let shows = fetch_shows(&api, &ShowOptions::default()).await;

        // Assert
        assert_eq!(shows.len(), 1);
        assert_eq!(shows[0].network, "Netflix");
    }

    #[tokio::test]
    async fn test_web_failure_keeps_broadcast_results() {
        // Arrange
        let mut api = MockTvMazeApi::new(vec![broadcast_item(1, "NCIS", 1, 1)], Vec::new());
        api.fail_web = true;

        // Act
        let shows = fetch_shows(&api, &ShowOptions::default()).await;

        // Assert
        assert_eq!(shows.len(), 1);
        assert_eq!(shows[0].name, "NCIS");
    }

    #[tokio::test]
    async fn test_both_feeds_failing_yields_empty_list() {
        // Arrange
        let mut api = MockTvMazeApi::new(Vec::new(), Vec::new());
        api.fail_broadcast = true;
        api.fail_web = true;

        // Act
        let shows = fetch_shows(&api, &ShowOptions::default()).await;

        // Assert
        assert!(shows.is_empty());
    }

    #[tokio::test]
    async fn test_network_source_skips_web_feed() {
        // Arrange
        let api = MockTvMazeApi::new(
            vec![broadcast_item(1, "NCIS", 1, 1)],
            vec![web_item(5, "Stranger Things", 5, 1)],
        );
        let options = ShowOptions {
            fetch: FetchSource::Network,
            ..ShowOptions::default()
        };

        // Act
        let shows = fetch_shows(&api, &options).await;

        // Assert
        assert_eq!(shows.len(), 1);
        assert_eq!(api.web_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_web_source_skips_broadcast_feed() {
        // Arrange
        let api = MockTvMazeApi::new(
            vec![broadcast_item(1, "NCIS", 1, 1)],
            vec![web_item(5, "Stranger Things", 5, 1)],
        );
        let options = ShowOptions {
            fetch: FetchSource::Web,
            ..ShowOptions::default()
        };

        // Act
        let shows = fetch_shows(&api, &options).await;

        // Assert
        assert_eq!(shows.len(), 1);
        assert_eq!(api.broadcast_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_all_source_queries_each_feed_once() {
        // Arrange
        let api = MockTvMazeApi::new(Vec::new(), Vec::new());

        // Act
        fetch_shows(&api, &ShowOptions::default()).await;

        // Assert
        assert_eq!(api.broadcast_calls.load(Ordering::SeqCst), 1);
        assert_eq!(api.web_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_filters_apply_to_fetched_shows() {
        // Arrange: an episode-zero special in the broadcast feed
        let mut special = broadcast_item(1, "Awards Night", 9, 0);
        special.number = 0;
        let api = MockTvMazeApi::new(vec![special, broadcast_item(2, "NCIS", 1, 1)], Vec::new());

        // Act
        let shows = fetch_shows(&api, &ShowOptions::default()).await;

        // Assert
        assert_eq!(shows.len(), 1);
        assert_eq!(shows[0].name, "NCIS");
    }
}
