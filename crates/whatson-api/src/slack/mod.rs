//! Slack incoming-webhook client module.
//!
//! Serializes Block Kit payloads and posts them to a configured webhook URL.

mod client;
mod types;

#[allow(clippy::module_name_repetitions)]
pub use client::{SlackClient, SlackClientBuilder};
#[allow(clippy::module_name_repetitions)]
pub use types::{Block, SlackMessage, TextObject};
