//! Unified domain records produced by the pipeline.

use serde::Serialize;

/// Sentinel used when a show has no classification.
pub const UNKNOWN_TYPE: &str = "Unknown Type";

/// Sentinel used when a show carries neither network nor web channel.
pub const UNKNOWN_NETWORK: &str = "Unknown Network";

/// One scheduled episode, reconciled from either feed shape.
///
/// Constructed once by the normalizer and never mutated afterwards;
/// filtering and grouping select and re-bucket, they do not edit.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Show {
    /// Stable show identifier from the source API.
    pub id: u64,
    /// Show display name.
    pub name: String,
    /// Classification (e.g. "Scripted"); `UNKNOWN_TYPE` when absent upstream.
    pub kind: String,
    /// Spoken language, if known.
    pub language: Option<String>,
    /// Genre list (may be empty).
    pub genres: Vec<String>,
    /// Resolved network display string. Never empty; broadcast networks
    /// outside the home country may carry a `" (CC)"` suffix, web channels
    /// never do.
    pub network: String,
    /// HTML-bearing description.
    pub summary: Option<String>,
    /// `"HH:MM"` air time; `None` = no fixed time (streaming drop, TBA).
    /// When present, always parseable.
    pub airtime: Option<String>,
    /// Season number (`0` = unknown).
    pub season: u32,
    /// Episode number (`0` = unknown).
    pub number: u32,
}

impl Show {
    /// The `(id, season, number)` identity used for deduplication.
    #[must_use]
    pub const fn dedup_key(&self) -> (u64, u32, u32) {
        (self.id, self.season, self.number)
    }
}

/// One network bucket: the network display string and its shows.
///
/// Buckets keep first-seen order so render backends can iterate networks
/// in discovery order.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NetworkGroup {
    /// Resolved network display string (country suffix included).
    pub network: String,
    /// Shows airing on this network, in bucket insertion order.
    pub shows: Vec<Show>,
}
