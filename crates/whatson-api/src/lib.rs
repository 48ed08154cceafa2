//! API client library for whatson.
//!
//! Provides clients for the TVMaze schedule API and Slack incoming webhooks.

/// Slack incoming-webhook client.
pub mod slack;

/// TVMaze schedule API client.
pub mod tvmaze;
