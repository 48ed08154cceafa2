//! `SlackClient` - Slack incoming-webhook client implementation.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use reqwest::Client;
use tracing::instrument;
use url::Url;

use super::types::SlackMessage;

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Slack incoming-webhook client.
///
/// Posts one Block Kit payload per call. Single attempt; a non-2xx
/// response surfaces as an error with the HTTP status embedded.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct SlackClient {
    /// HTTP client.
    http_client: Client,
    /// Webhook URL (carries the secret path).
    webhook_url: Url,
}

/// Builder for `SlackClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct SlackClientBuilder {
    webhook_url: Option<Url>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl SlackClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            webhook_url: None,
            user_agent: None,
            timeout: None,
        }
    }

    /// Sets the webhook URL (required).
    #[must_use]
    pub fn webhook_url(mut self, url: Url) -> Self {
        self.webhook_url = Some(url);
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
    /// - `webhook_url` is not set.
    /// - `user_agent` is not set.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<SlackClient> {
        let webhook_url = self.webhook_url.context("webhook_url is required")?;
        let user_agent = self.user_agent.context("user_agent is required")?;

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .context("failed to build HTTP client")?;

        Ok(SlackClient {
            http_client,
            webhook_url,
        })
    }
}

impl SlackClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> SlackClientBuilder {
        SlackClientBuilder::new()
    }

    /// Posts a message to the webhook.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or Slack responds with a
    /// non-2xx status.
    #[instrument(skip_all)]
    pub async fn post_message(&self, message: &SlackMessage) -> Result<()> {
        let result = self
            .http_client
            .post(self.webhook_url.clone())
            .json(message)
            .send()
            .await;
        let response = result.context("Slack webhook request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("<failed to read body>"));
            bail!("Slack webhook error (HTTP {status}): {body}");
        }

        tracing::debug!(blocks = message.blocks.len(), "Slack message delivered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::super::types::{Block, TextObject};
    use super::*;

    /// Helper to build a one-section message.
    fn make_message(text: &str) -> SlackMessage {
        SlackMessage {
            text: String::from(text),
            blocks: vec![Block::Section {
                text: TextObject::mrkdwn(text),
            }],
        }
    }

    #[test]
    fn test_builder_requires_webhook_url() {
        // Arrange & Act
        let result = SlackClient::builder().user_agent("test/0.0.0").build();

        // Assert
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("webhook_url is required")
        );
    }

    #[test]
    fn test_builder_requires_user_agent() {
        // Arrange
        let url = Url::parse("https://hooks.slack.com/services/T/B/x").unwrap();

        // Act
        let result = SlackClient::builder().webhook_url(url).build();

        // Assert
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("user_agent is required")
        );
    }

    #[tokio::test]
    async fn test_post_message_sends_json_body() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("POST"))
            .and(wiremock::matchers::path("/services/T/B/x"))
            .and(wiremock::matchers::body_partial_json(serde_json::json!({
                "text": "20:00 NCIS",
                "blocks": [{"type": "section"}],
            })))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let webhook_url = format!("{}/services/T/B/x", mock_server.uri());
        let client = SlackClient::builder()
            .webhook_url(webhook_url.parse().unwrap())
            .user_agent("test/0.0.0")
            .build()
            .unwrap();

        // Act & Assert (mock expect(1) + body matcher verify the payload)
        client.post_message(&make_message("20:00 NCIS")).await.unwrap();
    }

    #[tokio::test]
    async fn test_post_message_error_embeds_status() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("POST"))
            .respond_with(wiremock::ResponseTemplate::new(404).set_body_string("no_team"))
            .mount(&mock_server)
            .await;

        let webhook_url = format!("{}/services/T/B/x", mock_server.uri());
        let client = SlackClient::builder()
            .webhook_url(webhook_url.parse().unwrap())
            .user_agent("test/0.0.0")
            .build()
            .unwrap();

        // Act
        let result = client.post_message(&make_message("line")).await;

        // Assert
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("404"));
        assert!(err.contains("Slack webhook error"));
    }
}
