/// Utilities for date formatting
///
/// API dates arrive as ISO strings ("2025-01-06" or "2025-01-06T00:00:00.000Z");
/// the workshop reads them day-first.

/// Format ISO date string to DD/MM/YYYY format
/// Example: "2025-01-06" or "2025-01-06T00:00:00.000Z" -> "06/01/2025"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}/{}/{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Optional date cell: missing dates render as a dash
pub fn format_opt_date(date_str: Option<&str>) -> String {
    match date_str {
        Some(s) if !s.trim().is_empty() => format_date(s),
        _ => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-01-06"), "06/01/2025");
        assert_eq!(format_date("2025-01-06T00:00:00.000Z"), "06/01/2025");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_opt_date(None), "—");
        assert_eq!(format_opt_date(Some(" ")), "—");
    }
}
