use crate::shared::api_client::{get_json, post_json};
use contracts::domain::a005_work_week::aggregate::WorkWeekId;
use contracts::domain::a006_task::aggregate::{Task, TaskDto};
use contracts::domain::common::AggregateRoot;
use contracts::shared::api_error::ApiError;

/// Tasks planned for one week
pub async fn fetch_tasks(week_id: WorkWeekId) -> Result<Vec<Task>, ApiError> {
    get_json(&format!("{}?weekId={}", Task::list_path(), week_id)).await
}

pub async fn create_task(dto: &TaskDto) -> Result<(), ApiError> {
    post_json(&Task::list_path(), dto).await
}

/// Every task regardless of week
pub async fn fetch_all_tasks() -> Result<Vec<Task>, ApiError> {
    get_json(&Task::list_path()).await
}
