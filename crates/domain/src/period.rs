use chrono::{DateTime, Datelike, Month, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::AppError;

pub const MIN_YEAR: i32 = 1900;

/// Inclusive reporting window `[year-01-01 00:00:00, year-12-31 23:59:59]` in UTC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearWindow {
    pub year: i32,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl YearWindow {
    pub fn new(year: i32) -> Result<Self, AppError> {
        let invalid = || AppError::bad_request(format!("Invalid year: {year}"));

        let start = NaiveDate::from_ymd_opt(year, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .ok_or_else(invalid)?;
        let end = NaiveDate::from_ymd_opt(year, 12, 31)
            .and_then(|d| d.and_hms_opt(23, 59, 59))
            .ok_or_else(invalid)?;

        Ok(Self {
            year,
            start: Utc.from_utc_datetime(&start),
            end: Utc.from_utc_datetime(&end),
        })
    }

    pub fn contains(&self, instant: &DateTime<Utc>) -> bool {
        *instant >= self.start && *instant <= self.end
    }
}

/// Check a requested report year against `[1900, current year]`
pub fn validate_report_year(year: i32, today: NaiveDate) -> Result<i32, AppError> {
    let current = today.year();
    if !(MIN_YEAR..=current).contains(&year) {
        return Err(AppError::bad_request(format!(
            "Year must be between {MIN_YEAR} and {current}"
        )));
    }
    Ok(year)
}

/// English month name ("January") for a month number 1-12
pub fn month_name(month: u32) -> Option<&'static str> {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
}

/// Parse an instant sent by a client.
///
/// RFC 3339 strings keep their offset. ISO datetimes without an offset and
/// bare dates are read as UTC.
pub fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Some(instant.with_timezone(&Utc));
    }
    if let Ok(naive) = value.parse::<NaiveDateTime>() {
        return Some(naive.and_utc());
    }
    value
        .parse::<NaiveDate>()
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// `deserialize_with` target for required instants, see [`parse_instant`]
pub fn deserialize_instant<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_instant(&raw).ok_or_else(|| D::Error::custom(format!("invalid datetime: {raw}")))
}

/// `deserialize_with` target for optional instants; pair with `#[serde(default)]`
pub fn deserialize_optional_instant<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| {
            parse_instant(&raw).ok_or_else(|| D::Error::custom(format!("invalid datetime: {raw}")))
        })
        .transpose()
}

/// Round half away from zero to two decimals
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
