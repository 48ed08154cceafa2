//! TVMaze schedule API response types.
//!
//! One `ScheduleItem` type covers both feed shapes: the broadcast feed
//! carries show data directly under `show`, the web feed nests it under
//! `_embedded.show`. Both fields are optional here; shape detection is the
//! normalizer's job.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserializes an optional string, mapping empty strings to `None`.
pub(crate) fn deserialize_empty_string_as_none<'de, D>(
    deserializer: D,
) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

/// Deserializes an episode/season number that may arrive as a JSON number,
/// a numeric string, or null. Non-numeric and missing values coerce to `0`.
pub(crate) fn deserialize_flexible_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

/// One row of a TVMaze schedule response, in either feed shape.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleItem {
    /// Episode ID.
    pub id: u64,
    /// Episode title (may be empty).
    #[serde(default, deserialize_with = "deserialize_empty_string_as_none")]
    pub name: Option<String>,
    /// Season number (`0` = unknown). Arrives as a number or numeric string.
    #[serde(default, deserialize_with = "deserialize_flexible_number")]
    pub season: u32,
    /// Episode number (`0` = unknown). Arrives as a number or numeric string.
    #[serde(default, deserialize_with = "deserialize_flexible_number")]
    pub number: u32,
    /// Local air time (`"HH:MM"`; empty for streaming drops and TBA slots).
    #[serde(default, deserialize_with = "deserialize_empty_string_as_none")]
    pub airtime: Option<String>,
    /// Air date (`"YYYY-MM-DD"`).
    #[serde(default)]
    pub airdate: Option<String>,
    /// Episode summary (HTML).
    #[serde(default, deserialize_with = "deserialize_empty_string_as_none")]
    pub summary: Option<String>,
    /// Show data in the broadcast feed shape.
    #[serde(default)]
    pub show: Option<RawShow>,
    /// Show data in the web feed shape (`_embedded.show`).
    #[serde(default, rename = "_embedded")]
    pub embedded: Option<Embedded>,
}

/// `_embedded` wrapper used by the web schedule feed.
#[derive(Debug, Clone, Deserialize)]
pub struct Embedded {
    /// The embedded show record.
    #[serde(default)]
    pub show: Option<RawShow>,
}

/// Show data shared by both feed shapes.
#[derive(Debug, Clone, Deserialize)]
pub struct RawShow {
    /// Show ID.
    pub id: u64,
    /// Show name.
    pub name: String,
    /// Show classification (e.g. "Scripted", "Reality").
    #[serde(
        default,
        rename = "type",
        deserialize_with = "deserialize_empty_string_as_none"
    )]
    pub kind: Option<String>,
    /// Spoken language.
    #[serde(default, deserialize_with = "deserialize_empty_string_as_none")]
    pub language: Option<String>,
    /// Genre list (may be empty).
    #[serde(default)]
    pub genres: Vec<String>,
    /// Broadcast network, if any.
    #[serde(default)]
    pub network: Option<RawNetwork>,
    /// Streaming channel, if any.
    #[serde(default, rename = "webChannel")]
    pub web_channel: Option<RawWebChannel>,
    /// Show summary (HTML).
    #[serde(default, deserialize_with = "deserialize_empty_string_as_none")]
    pub summary: Option<String>,
}

/// A broadcast network attached to a show.
#[derive(Debug, Clone, Deserialize)]
pub struct RawNetwork {
    /// Network ID.
    pub id: u64,
    /// Network display name.
    pub name: String,
    /// Country the network broadcasts in.
    #[serde(default)]
    pub country: Option<RawCountry>,
}

/// A streaming channel attached to a show.
#[derive(Debug, Clone, Deserialize)]
pub struct RawWebChannel {
    /// Web channel ID.
    pub id: u64,
    /// Web channel display name.
    pub name: String,
    /// Country the channel is tied to (`None` = global).
    #[serde(default)]
    pub country: Option<RawCountry>,
}

/// A country record attached to a network or web channel.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCountry {
    /// Country display name.
    #[serde(default)]
    pub name: Option<String>,
    /// ISO country code (e.g. "US", "GB").
    #[serde(default)]
    pub code: Option<String>,
}
