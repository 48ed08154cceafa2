//! `TvMazeApi` trait definition.
#![allow(clippy::future_not_send)]

use anyhow::Result;

use super::params::ScheduleParams;
use super::types::ScheduleItem;

/// TVMaze schedule API trait.
///
/// Abstracts API operations for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(TvMazeApi: Send)]
pub trait LocalTvMazeApi {
    /// Fetches the broadcast schedule for a date and country.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    async fn schedule(&self, params: &ScheduleParams) -> Result<Vec<ScheduleItem>>;

    /// Fetches the web/streaming schedule for a date.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    async fn web_schedule(&self, params: &ScheduleParams) -> Result<Vec<ScheduleItem>>;
}
