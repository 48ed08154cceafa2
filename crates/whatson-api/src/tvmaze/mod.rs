//! TVMaze schedule API client module.
//!
//! Handles HTTP requests to the TVMaze `/schedule` (broadcast) and
//! `/schedule/web` (streaming) endpoints and decodes the raw payloads.

mod api;
mod client;
mod params;
mod types;

#[allow(clippy::module_name_repetitions)]
pub use api::{LocalTvMazeApi, TvMazeApi};
#[allow(clippy::module_name_repetitions)]
pub use client::{TvMazeClient, TvMazeClientBuilder};
pub use params::{ScheduleParams, resolve_schedule_date};
pub use types::{Embedded, RawCountry, RawNetwork, RawShow, RawWebChannel, ScheduleItem};
