//! ISO date helpers shared by warranties and preventive maintenance

use chrono::{Months, NaiveDate};

/// Parse the date part of an ISO string ("2024-03-15" or "2024-03-15T10:00:00Z").
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.trim().get(..10)?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Format a date as `YYYY-MM-DD`.
pub fn format_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Add calendar months, clamping to the last day of the target month.
pub fn add_months(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(months))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_date() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 15);
        assert_eq!(parse_iso_date("2024-03-15"), expected);
        assert_eq!(parse_iso_date("2024-03-15T23:59:59.000Z"), expected);
        assert_eq!(parse_iso_date(" 2024-03-15 "), expected);
        assert_eq!(parse_iso_date("15/03/2024"), None);
        assert_eq!(parse_iso_date("2024"), None);
    }

    #[test]
    fn test_add_months_clamps() {
        let jan31 = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert_eq!(add_months(jan31, 1), NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(add_months(jan31, 12), NaiveDate::from_ymd_opt(2025, 1, 31));
    }
}
