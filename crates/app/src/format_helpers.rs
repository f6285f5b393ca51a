//! Display formatting for backend dates.

use shared_types::{parse_calendar_date, MISSING_DATE};

/// Format a backend date as "April 21, 2025".
///
/// Missing dates stay "N/A"; values that do not parse are shown verbatim.
pub fn format_long_date(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed == MISSING_DATE {
        return MISSING_DATE.to_string();
    }
    match parse_calendar_date(trimmed) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => trimmed.to_string(),
    }
}
