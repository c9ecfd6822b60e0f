/// Utilities for date and time formatting
///
/// Backend dates are ISO strings; the UI shows them as DD/MM/YYYY.
use chrono::NaiveDate;

/// Format ISO datetime string to DD/MM/YYYY HH:MM format
/// Example: "2024-03-15T14:02:26.123Z" -> "15/03/2024 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once(['T', ' ']) {
        let date = format_date(date_part);
        let time: String = time_part.chars().take(5).collect();
        if date != date_part && time.len() == 5 {
            return format!("{} {}", date, time);
        }
    }
    format_date(datetime_str)
}

/// Format ISO date string to DD/MM/YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15/03/2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split(['T', ' ']).next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}/{}/{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Optional ISO date for table cells, "—" when empty.
pub fn format_date_opt(date_str: Option<&str>) -> String {
    match date_str.map(str::trim) {
        Some(s) if !s.is_empty() => format_date(s),
        _ => "—".to_string(),
    }
}

/// Local calendar date of the browser
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn format_naive(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Value for `<input type="date">`, which only accepts YYYY-MM-DD.
pub fn to_input_value(date_str: Option<&str>) -> String {
    date_str
        .map(|s| s.chars().take(10).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "15/03/2024 14:02");
        assert_eq!(format_datetime("2024-12-31 23:59:59"), "31/12/2024 23:59");
        assert_eq!(format_datetime("2024-12-31"), "31/12/2024");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15/03/2024");
        assert_eq!(format_date_opt(None), "—");
        assert_eq!(format_date_opt(Some(" ")), "—");
        assert_eq!(format_naive(NaiveDate::from_ymd_opt(2025, 1, 9).unwrap()), "09/01/2025");
    }

    #[test]
    fn test_input_value() {
        assert_eq!(to_input_value(Some("2024-03-15T00:00:00Z")), "2024-03-15");
        assert_eq!(to_input_value(None), "");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }
}
