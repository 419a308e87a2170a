use crate::aggregate_id;
use crate::domain::a005_work_week::aggregate::WorkWeekId;
use crate::domain::common::AggregateRoot;
use crate::shared::lenient::{lenient_amount, null_as_default};
use crate::shared::table::{SortValue, Sortable};
use serde::{Deserialize, Serialize};

aggregate_id!(
    /// Идентификатор производственной задачи
    TaskId
);

/// Production job planned for a work week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Allocated labour budget
    #[serde(default, deserialize_with = "lenient_amount")]
    pub cost: f64,
    pub week_id: Option<WorkWeekId>,
}

impl AggregateRoot for Task {
    fn collection_name() -> &'static str {
        "hr/tasks"
    }

    fn list_name() -> &'static str {
        "Production Tasks"
    }
}

impl Sortable for Task {
    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "id" => SortValue::number(self.id.0 as f64),
            "title" => SortValue::text(self.title.clone()),
            "cost" => SortValue::number(self.cost),
            _ => SortValue::Missing,
        }
    }
}

/// Σ cost over the given tasks
pub fn total_budget(tasks: &[Task]) -> f64 {
    tasks.iter().map(|t| t.cost).sum()
}

/// DTO для создания задачи
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
    pub title: String,
    pub cost: f64,
    pub week_id: WorkWeekId,
}

impl TaskDto {
    /// Build from raw form input
    pub fn from_form(title: &str, cost: &str, week_id: WorkWeekId) -> Result<Self, String> {
        let title = title.trim();
        if title.is_empty() {
            return Err("Job title is required".into());
        }
        let cost: f64 = cost
            .trim()
            .parse()
            .map_err(|_| format!("Invalid labour budget: '{}'", cost.trim()))?;
        if !cost.is_finite() || cost < 0.0 {
            return Err("Labour budget must be a positive amount".into());
        }
        Ok(Self {
            title: title.to_string(),
            cost,
            week_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_budget() {
        let tasks: Vec<Task> = serde_json::from_str(
            r#"[
                {"id": 1, "title": "Varnishing Dining Tables", "cost": "5000", "weekId": 3},
                {"id": 2, "title": "Door frames", "cost": 7500.5, "weekId": 3},
                {"id": 3, "title": "Broken row", "cost": null}
            ]"#,
        )
        .unwrap();
        assert_eq!(total_budget(&tasks), 12500.5);
        assert_eq!(total_budget(&[]), 0.0);
    }

    #[test]
    fn test_task_form() {
        let dto = TaskDto::from_form(" Sanding ", "5000", WorkWeekId(3)).unwrap();
        assert_eq!(dto.title, "Sanding");
        assert_eq!(dto.cost, 5000.0);
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["weekId"], 3);

        assert!(TaskDto::from_form("", "5000", WorkWeekId(3)).is_err());
        assert!(TaskDto::from_form("Sanding", "lots", WorkWeekId(3)).is_err());
        assert!(TaskDto::from_form("Sanding", "-1", WorkWeekId(3)).is_err());
    }
}
