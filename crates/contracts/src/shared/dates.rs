//! Date helpers shared by the week and dashboard models.

use chrono::NaiveDate;

/// Parse the date part of an ISO string ("2025-01-06" or
/// "2025-01-06T00:00:00.000Z")
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.trim().split('T').next()?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Midnight UTC timestamp in the shape the API stores ("2025-01-06T00:00:00.000Z")
pub fn to_iso_midnight(date: NaiveDate) -> String {
    format!("{}T00:00:00.000Z", date.format("%Y-%m-%d"))
}
