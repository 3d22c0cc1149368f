//! Calendar date parsing for record date fields.
//!
//! The collector emits dates in a handful of shapes; anything else is a
//! data-quality error that must surface to the caller rather than be
//! silently excluded, since dropped rows would skew downstream statistics.

use chrono::NaiveDate;
use thiserror::Error;

/// Date representations accepted for `arrest_date` and `birth`.
///
/// Order matters: the first matching format wins.
const DATE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d", "%d/%m/%Y"];

/// A record date field that could not be parsed with any accepted format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{value}` is not a recognised calendar date")]
pub struct DateParseError {
    /// The raw value that failed to parse.
    pub value: String,
}

/// Parses a raw record date field into a [`NaiveDate`].
///
/// Leading and trailing whitespace is ignored. Fails loudly on anything
/// that does not match one of the accepted formats.
pub fn parse_record_date(raw: &str) -> Result<NaiveDate, DateParseError> {
    let trimmed = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| DateParseError {
            value: raw.to_string(),
        })
}
