use crate::shared::api_client::get_json;
use contracts::domain::a005_work_week::aggregate::WorkWeekId;
use contracts::projections::p900_weekly_payroll::dto::{payroll_path, PayrollAssignment};
use contracts::shared::api_error::ApiError;

/// Pay rows of one week, one per (employee, task)
pub async fn fetch_payroll(week_id: WorkWeekId) -> Result<Vec<PayrollAssignment>, ApiError> {
    get_json(&payroll_path(week_id)).await
}
