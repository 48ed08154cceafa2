//! TVMaze schedule request parameter types.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};

/// Request parameters for the schedule endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleParams {
    /// Schedule date (`None` = let the API default to today).
    pub date: Option<NaiveDate>,
    /// ISO country code filter (honoured by the broadcast schedule only).
    pub country: Option<String>,
}

impl ScheduleParams {
    /// Creates parameters for the given date and country.
    #[must_use]
    pub const fn new(date: Option<NaiveDate>, country: Option<String>) -> Self {
        Self { date, country }
    }
}

/// Resolves the schedule date from an optional `--date` string.
///
/// Accepts `%Y-%m-%d`; defaults to today (local timezone) when `None`.
///
/// # Errors
///
/// Returns an error if the string does not match `YYYY-MM-DD`.
pub fn resolve_schedule_date(date: Option<&str>) -> Result<NaiveDate> {
    date.map_or_else(
        || Ok(Local::now().date_naive()),
        |s| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .with_context(|| format!("invalid date format: {s} (expected YYYY-MM-DD)"))
        },
    )
}
