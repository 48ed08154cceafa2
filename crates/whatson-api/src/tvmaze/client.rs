//! `TvMazeClient` - TVMaze schedule API client implementation.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use reqwest::Client;
use tracing::instrument;
use url::Url;

use super::api::LocalTvMazeApi;
use super::params::ScheduleParams;
use super::types::ScheduleItem;

/// Default base URL for the TVMaze API.
const DEFAULT_BASE_URL: &str = "https://api.tvmaze.com/";

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// TVMaze API client.
///
/// Transport only: a non-2xx response surfaces as an error with the HTTP
/// status embedded in the message. There are no retries; callers own the
/// degradation policy when a fetch fails.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TvMazeClient {
    /// HTTP client (reqwest, gzip enabled).
    http_client: Client,
    /// Base URL.
    base_url: Url,
}

/// Builder for `TvMazeClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TvMazeClientBuilder {
    base_url: Option<Url>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl TvMazeClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            user_agent: None,
            timeout: None,
        }
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the User-Agent (required).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Sets the request timeout (default: 30s).
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - `user_agent` is not set.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<TvMazeClient> {
        let user_agent = self.user_agent.context("user_agent is required")?;

        let base_url = if let Some(url) = self.base_url {
            url
        } else {
            let result = Url::parse(DEFAULT_BASE_URL);
            result.context("invalid default base URL")?
        };

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .gzip(true)
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .context("failed to build HTTP client")?;

        Ok(TvMazeClient {
            http_client,
            base_url,
        })
    }
}

impl TvMazeClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> TvMazeClientBuilder {
        TvMazeClientBuilder::new()
    }

    /// Sends a GET request and decodes the JSON response.
    #[instrument(skip_all)]
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = self
            .base_url
            .join(path)
            .with_context(|| format!("failed to join URL path: {path}"))?;

        let request = self
            .http_client
            .get(url)
            .query(query)
            .build()
            .with_context(|| format!("failed to build request: {path}"))?;

        tracing::debug!(url = %request.url(), "TVMaze API request");

        let result = self.http_client.execute(request).await;
        let response = result.with_context(|| format!("request failed: {path}"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("<failed to read body>"));
            bail!("TVMaze API error (HTTP {status}): {body}");
        }

        let body = response
            .text()
            .await
            .with_context(|| format!("failed to read response body: {path}"))?;
        tracing::debug!(%path, body_len = body.len(), "Response body received");

        let raw_result: std::result::Result<T, _> = serde_json::from_str(&body);
        raw_result.with_context(|| format!("failed to decode JSON response: {path}"))
    }

    /// Builds query parameters for a schedule request.
    ///
    /// The country filter is only honoured by the broadcast endpoint, so
    /// `include_country` is false for `/schedule/web`.
    fn build_schedule_query(
        params: &ScheduleParams,
        include_country: bool,
    ) -> Vec<(&'static str, String)> {
        let mut query: Vec<(&'static str, String)> = Vec::new();

        if let Some(date) = params.date {
            query.push(("date", date.format("%Y-%m-%d").to_string()));
        }

        if include_country
            && let Some(ref country) = params.country
        {
            query.push(("country", country.clone()));
        }

        query
    }
}

impl LocalTvMazeApi for TvMazeClient {
    #[instrument(skip_all)]
    async fn schedule(&self, params: &ScheduleParams) -> Result<Vec<ScheduleItem>> {
        let query = Self::build_schedule_query(params, true);
        self.get_json("schedule", &query).await
    }

    #[instrument(skip_all)]
    async fn web_schedule(&self, params: &ScheduleParams) -> Result<Vec<ScheduleItem>> {
        let query = Self::build_schedule_query(params, false);
        self.get_json("schedule/web", &query).await
    }
}
