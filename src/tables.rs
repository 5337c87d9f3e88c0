// SPDX-License-Identifier: MPL-2.0
//! Display formatting for line-list table cells.
//!
//! The server reports timestamps as epoch milliseconds; table cells show
//! them in a configurable human-readable format. A timestamp chrono
//! cannot represent falls back to the raw value as text, so a bad row
//! never blanks a cell.

use crate::config::{Config, DEFAULT_DATE_FORMAT};
use chrono::{TimeZone, Utc};

/// Formats an epoch-milliseconds timestamp for a table cell.
///
/// `format` is a `chrono` strftime string; when `None`, the default
/// format is used.
///
/// # Example
///
/// ```
/// use line_lens::tables::format_date;
///
/// // 2013-04-30T08:19:00Z
/// assert_eq!(format_date(1_367_309_940_000, None), "30 Apr 2013");
/// assert_eq!(
///     format_date(1_367_309_940_000, Some("%Y-%m-%d")),
///     "2013-04-30"
/// );
/// ```
#[must_use]
pub fn format_date(timestamp_ms: i64, format: Option<&str>) -> String {
    match Utc.timestamp_millis_opt(timestamp_ms).single() {
        Some(datetime) => datetime
            .format(format.unwrap_or(DEFAULT_DATE_FORMAT))
            .to_string(),
        None => timestamp_ms.to_string(),
    }
}

/// Formats a timestamp using the date format from configuration.
#[must_use]
pub fn format_date_with_config(timestamp_ms: i64, config: &Config) -> String {
    format_date(timestamp_ms, config.date_format.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2013-04-30T08:19:00Z
    const SAMPLE_TS_MS: i64 = 1_367_309_940_000;

    #[test]
    fn formats_with_default_format() {
        assert_eq!(format_date(SAMPLE_TS_MS, None), "30 Apr 2013");
    }

    #[test]
    fn formats_with_explicit_format() {
        assert_eq!(
            format_date(SAMPLE_TS_MS, Some("%Y-%m-%d %H:%M")),
            "2013-04-30 08:19"
        );
    }

    #[test]
    fn epoch_zero_formats_cleanly() {
        assert_eq!(format_date(0, Some("%Y-%m-%d")), "1970-01-01");
    }

    #[test]
    fn unrepresentable_timestamp_falls_back_to_raw_value() {
        assert_eq!(format_date(i64::MAX, None), i64::MAX.to_string());
    }

    #[test]
    fn config_format_is_applied() {
        let config = Config {
            date_format: Some("%d/%m/%Y".to_string()),
            ..Config::default()
        };
        assert_eq!(format_date_with_config(SAMPLE_TS_MS, &config), "30/04/2013");
    }

    #[test]
    fn missing_config_format_uses_default() {
        let config = Config {
            date_format: None,
            ..Config::default()
        };
        assert_eq!(format_date_with_config(SAMPLE_TS_MS, &config), "30 Apr 2013");
    }
}
