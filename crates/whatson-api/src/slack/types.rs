//! Slack Block Kit message types.

use serde::Serialize;

/// A message payload for a Slack incoming webhook.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SlackMessage {
    /// Fallback text shown in notifications.
    pub text: String,
    /// Block Kit blocks.
    pub blocks: Vec<Block>,
}

/// A Block Kit layout block.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Large header text (plain text only).
    Header {
        /// Header text.
        text: TextObject,
    },
    /// A mrkdwn-capable section.
    Section {
        /// Section text.
        text: TextObject,
    },
    /// Horizontal rule between sections.
    Divider,
}

/// A Block Kit text object.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TextObject {
    /// Text type (`plain_text` or `mrkdwn`).
    #[serde(rename = "type")]
    pub kind: String,
    /// Text content.
    pub text: String,
}

impl TextObject {
    /// Creates a `plain_text` object.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            kind: String::from("plain_text"),
            text: text.into(),
        }
    }

    /// Creates a `mrkdwn` object.
    #[must_use]
    pub fn mrkdwn(text: impl Into<String>) -> Self {
        Self {
            kind: String::from("mrkdwn"),
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_serialize_divider() {
        // Arrange & Act
        let value = serde_json::to_value(Block::Divider).unwrap();

        // Assert
        assert_eq!(value, serde_json::json!({"type": "divider"}));
    }

    #[test]
    fn test_serialize_section() {
        // Arrange
        let block = Block::Section {
            text: TextObject::mrkdwn("*CBS*"),
        };

        // Act
        let value = serde_json::to_value(block).unwrap();

        // Assert
        assert_eq!(
            value,
            serde_json::json!({
                "type": "section",
                "text": {"type": "mrkdwn", "text": "*CBS*"},
            })
        );
    }

    #[test]
    fn test_serialize_message() {
        // Arrange
        let message = SlackMessage {
            text: String::from("TV schedule"),
            blocks: vec![
                Block::Header {
                    text: TextObject::plain("TV schedule"),
                },
                Block::Divider,
            ],
        };

        // Act
        let value = serde_json::to_value(&message).unwrap();

        // Assert
        assert_eq!(value["text"], "TV schedule");
        assert_eq!(value["blocks"][0]["type"], "header");
        assert_eq!(value["blocks"][0]["text"]["type"], "plain_text");
        assert_eq!(value["blocks"][1]["type"], "divider");
    }
}
