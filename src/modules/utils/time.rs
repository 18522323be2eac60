use chrono::{Local, NaiveDate, NaiveDateTime};

/// Formats accepted for a due date that carries a time of day
const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Parse a due date typed at the console.
///
/// Accepts `YYYY-MM-DD` (midnight) or a date followed by a time. Returns
/// `None` for anything else so the caller can ask again.
pub fn parse_due_date(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
}

/// Short date form used when listing tasks
pub fn format_due_date(due_date: &NaiveDateTime) -> String {
    due_date.format("%Y-%m-%d").to_string()
}

/// Current local time as a readable timestamp
pub fn current_timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
