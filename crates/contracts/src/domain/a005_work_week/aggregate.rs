use crate::aggregate_id;
use crate::domain::common::AggregateRoot;
use crate::shared::dates::{parse_iso_date, to_iso_midnight};
use crate::shared::lenient::null_as_default;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

aggregate_id!(
    /// Идентификатор рабочей недели
    WorkWeekId
);

/// Length of a payroll week, start day included
pub const WEEK_LENGTH_DAYS: i64 = 7;

/// A payroll period; tasks and pay assignments hang off it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkWeek {
    pub id: WorkWeekId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub starts_on: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ends_on: String,
}

impl WorkWeek {
    pub fn start_date(&self) -> Option<NaiveDate> {
        parse_iso_date(&self.starts_on)
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        parse_iso_date(&self.ends_on)
    }

    /// Selector label, "Week Starting: 06 Jan"
    pub fn label(&self) -> String {
        match self.start_date() {
            Some(d) => format!("Week Starting: {}", d.format("%d %b")),
            None => format!("Week #{}", self.id),
        }
    }

    /// "06/01/2025 - 12/01/2025"
    pub fn range_label(&self) -> String {
        let fmt = |d: Option<NaiveDate>, raw: &str| {
            d.map(|d| d.format("%d/%m/%Y").to_string())
                .unwrap_or_else(|| raw.to_string())
        };
        format!(
            "{} - {}",
            fmt(self.start_date(), &self.starts_on),
            fmt(self.end_date(), &self.ends_on)
        )
    }
}

impl AggregateRoot for WorkWeek {
    fn collection_name() -> &'static str {
        "hr/weeks"
    }

    fn list_name() -> &'static str {
        "Work Weeks"
    }
}

/// DTO для открытия новой недели
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkWeekDto {
    pub starts_on: String,
    pub ends_on: String,
}

impl WorkWeekDto {
    /// Week opening on `start`; the end date is computed so the period
    /// covers seven days.
    pub fn starting(start: NaiveDate) -> Self {
        let end = start + Duration::days(WEEK_LENGTH_DAYS - 1);
        Self {
            starts_on: to_iso_midnight(start),
            ends_on: to_iso_midnight(end),
        }
    }

    /// Parse the value of a date input ("2025-01-06")
    pub fn from_input(value: &str) -> Result<Self, String> {
        parse_iso_date(value)
            .map(Self::starting)
            .ok_or_else(|| format!("Invalid start date: '{}'", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_spans_seven_days() {
        let dto = WorkWeekDto::starting(NaiveDate::from_ymd_opt(2025, 1, 6).unwrap());
        assert_eq!(dto.starts_on, "2025-01-06T00:00:00.000Z");
        assert_eq!(dto.ends_on, "2025-01-12T00:00:00.000Z");

        // across a month boundary
        let dto = WorkWeekDto::from_input("2025-01-29").unwrap();
        assert_eq!(dto.ends_on, "2025-02-04T00:00:00.000Z");

        assert!(WorkWeekDto::from_input("").is_err());
    }

    #[test]
    fn test_labels() {
        let week: WorkWeek = serde_json::from_str(
            r#"{"id": 3, "startsOn": "2025-01-06T00:00:00.000Z", "endsOn": "2025-01-12T00:00:00.000Z"}"#,
        )
        .unwrap();
        assert_eq!(week.label(), "Week Starting: 06 Jan");
        assert_eq!(week.range_label(), "06/01/2025 - 12/01/2025");

        let broken: WorkWeek = serde_json::from_str(r#"{"id": 4, "startsOn": null}"#).unwrap();
        assert_eq!(broken.label(), "Week #4");
    }
}
