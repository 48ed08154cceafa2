//! Pipeline configuration.

use chrono::NaiveDate;

/// Default home country code.
pub const DEFAULT_COUNTRY: &str = "US";

/// Which upstream feeds a pipeline run consumes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchSource {
    /// Broadcast and web schedules, fetched jointly.
    #[default]
    All,
    /// Broadcast schedule only.
    Network,
    /// Web/streaming schedule only.
    Web,
}

/// Filter and fetch configuration for one pipeline run.
///
/// Arrives already merged (CLI > config file > defaults); the pipeline
/// performs no merging. Empty lists mean "no filter on this dimension",
/// not "exclude everything".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowOptions {
    /// Schedule date (`None` = let the API default to today).
    pub date: Option<NaiveDate>,
    /// Home country code; drives the broadcast feed and the suffix logic.
    pub country: String,
    /// Allowed show types (OR within the list).
    pub types: Vec<String>,
    /// Allowed networks, matched with any country suffix stripped.
    pub networks: Vec<String>,
    /// Allowed genres (a show passes if any genre matches any entry).
    pub genres: Vec<String>,
    /// Allowed languages.
    pub languages: Vec<String>,
    /// Minimum air time; untimed shows always pass.
    pub min_airtime: Option<String>,
    /// Show names dropped from the result.
    pub exclude_show_names: Vec<String>,
    /// Which feeds to fetch.
    pub fetch: FetchSource,
}

impl Default for ShowOptions {
    fn default() -> Self {
        Self {
            date: None,
            country: String::from(DEFAULT_COUNTRY),
            types: Vec::new(),
            networks: Vec::new(),
            genres: Vec::new(),
            languages: Vec::new(),
            min_airtime: None,
            exclude_show_names: Vec::new(),
            fetch: FetchSource::All,
        }
    }
}
