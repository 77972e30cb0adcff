/// Utilities for date formatting
///
/// Form fields keep dates as ISO strings (yyyy-mm-dd), tables show DD.MM.YYYY

use chrono::{Local, NaiveDate};

/// ISO format used by `<input type="date">`
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Today's local calendar date in yyyy-mm-dd format
pub fn today_iso() -> String {
    format_iso(Local::now().date_naive())
}

pub fn format_iso(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Format ISO date string to DD.MM.YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15.03.2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}.{}.{}", day, month, year);
        }
    }
    date_str.to_string()
}
