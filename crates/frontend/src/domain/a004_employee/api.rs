use crate::shared::api_client::{get_json, post_json};
use contracts::domain::a004_employee::aggregate::{Employee, EmployeeDto};
use contracts::domain::common::AggregateRoot;
use contracts::shared::api_error::ApiError;

pub async fn fetch_employees() -> Result<Vec<Employee>, ApiError> {
    get_json(&Employee::list_path()).await
}

pub async fn register_employee(dto: &EmployeeDto) -> Result<(), ApiError> {
    post_json(&Employee::list_path(), dto).await
}
