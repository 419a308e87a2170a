use crate::shared::api_client::{get_json, post_json};
use contracts::domain::a005_work_week::aggregate::{WorkWeek, WorkWeekDto};
use contracts::domain::common::AggregateRoot;
use contracts::shared::api_error::ApiError;

pub async fn fetch_weeks() -> Result<Vec<WorkWeek>, ApiError> {
    get_json(&WorkWeek::list_path()).await
}

pub async fn create_week(dto: &WorkWeekDto) -> Result<(), ApiError> {
    post_json(&WorkWeek::list_path(), dto).await
}
