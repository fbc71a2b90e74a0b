//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone};

/// Date format matching an en-US `toLocaleString()`, e.g. `3/5/2024, 2:30:00 PM`.
const LOCALE_DATETIME_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Format a timestamp as a locale date-time string in the given zone.
#[must_use]
pub fn format_locale_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    dt.format(LOCALE_DATETIME_FORMAT).to_string()
}

/// Renders an RFC 3339 timestamp in the server's local time zone.
///
/// Values that do not parse are rendered unchanged.
///
/// Usage in templates: `{{ row.created_at|locale_datetime }}`
#[askama::filter_fn]
pub fn locale_datetime(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    let raw = value.to_string();
    Ok(DateTime::parse_from_rfc3339(&raw).map_or(raw, |dt| {
        format_locale_datetime(&dt.with_timezone(&Local))
    }))
}

/// Returns the first character of a name, upper-cased, for avatar fallbacks.
///
/// Usage in templates: `{{ row.username|initial }}`
#[askama::filter_fn]
pub fn initial(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(value
        .to_string()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{FixedOffset, Utc};

    use super::*;

    #[test]
    fn test_format_locale_datetime_afternoon() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap();
        assert_eq!(format_locale_datetime(&dt), "3/5/2024, 2:30:00 PM");
    }

    #[test]
    fn test_format_locale_datetime_midnight() {
        let dt = Utc.with_ymd_and_hms(2023, 12, 31, 0, 5, 9).unwrap();
        assert_eq!(format_locale_datetime(&dt), "12/31/2023, 12:05:09 AM");
    }

    #[test]
    fn test_format_locale_datetime_respects_zone() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 5, 23, 0, 0).unwrap();
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(
            format_locale_datetime(&dt.with_timezone(&tz)),
            "3/6/2024, 1:00:00 AM"
        );
    }
}
