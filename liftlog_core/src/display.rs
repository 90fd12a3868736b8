//! Presentation helpers. Not used for sorting or equality.

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use std::fmt::Write;

/// Month/day/year label, e.g. "Jan 05, 2024"
pub const DEFAULT_DATE_FORMAT: &str = "%b %d, %Y";

/// Format a calendar date for display ("Jan 05, 2024")
pub fn format_date(date: NaiveDate) -> String {
    format_date_with(date, DEFAULT_DATE_FORMAT)
}

/// Format a calendar date using a chrono format string
///
/// An invalid format string falls back to the default label.
pub fn format_date_with(date: NaiveDate, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(format)).is_err() {
        tracing::warn!("Invalid date format {:?}, using default", format);
        return format_date(date);
    }
    out
}

/// True when `format` is a usable chrono format string
pub fn is_valid_date_format(format: &str) -> bool {
    !format.trim().is_empty() && !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

/// Format a session duration label. Exported labels are already readable.
pub fn format_duration(duration: &str) -> String {
    duration.to_string()
}

/// Render a metric without trailing zeros ("110", "102.5", "133.33")
pub fn format_number(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{:.0}", rounded)
    } else {
        let text = format!("{:.2}", rounded);
        text.trim_end_matches('0').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_date(date), "Jan 05, 2024");
        assert_eq!(format_date_with(date, "%Y/%m/%d"), "2024/01/05");
        assert_eq!(format_date_with(date, "%Q"), "Jan 05, 2024");
    }

    #[test]
    fn test_is_valid_date_format() {
        assert!(is_valid_date_format(DEFAULT_DATE_FORMAT));
        assert!(is_valid_date_format("%d.%m.%Y"));
        assert!(!is_valid_date_format("%Q"));
        assert!(!is_valid_date_format(" "));
    }

    #[test]
    fn test_format_duration_passes_through() {
        assert_eq!(format_duration("1h 5m"), "1h 5m");
        assert_eq!(format_duration(""), "");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(110.0), "110");
        assert_eq!(format_number(102.5), "102.5");
        assert_eq!(format_number(100.0 * (1.0 + 10.0 / 30.0)), "133.33");
        assert_eq!(format_number(0.0), "0");
    }
}
