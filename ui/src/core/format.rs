//! Formatting helpers for dates and deviation values.

use time::{macros::format_description, Date};

/// Parse an ISO `YYYY-MM-DD` date string; `None` on malformed input.
pub fn parse_iso_date(raw: &str) -> Option<Date> {
    Date::parse(raw, &format_description!("[year]-[month]-[day]")).ok()
}

/// Axis label like `4/12` (month/day, no padding).
pub fn format_month_day(date: Date) -> String {
    format!("{}/{}", date.month() as u8, date.day())
}

/// Integral deviations render without a decimal (`52`), others with one (`48.5`).
pub fn format_deviation(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        let date = parse_iso_date("2025-04-12").unwrap();
        assert_eq!(format_month_day(date), "4/12");
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(parse_iso_date("").is_none());
        assert!(parse_iso_date("04/12/2025").is_none());
        assert!(parse_iso_date("2025-13-01").is_none());
    }

    #[test]
    fn deviation_labels_trim_integral_values() {
        assert_eq!(format_deviation(52.0), "52");
        assert_eq!(format_deviation(48.5), "48.5");
        assert_eq!(format_deviation(61.25), "61.2");
    }
}
