use crate::domain::a001_client::api::fetch_clients;
use crate::domain::a002_invoice::api::fetch_invoices;
use crate::domain::a004_employee::api::fetch_employees;
use crate::domain::a006_task::api::fetch_all_tasks;
use contracts::dashboards::d400_business_overview::BusinessOverview;
use contracts::shared::api_error::ApiError;

/// Load the four source lists and compute the KPIs.
///
/// The first failing list fails the whole overview.
pub async fn fetch_overview() -> Result<BusinessOverview, ApiError> {
    let clients = fetch_clients().await?;
    let invoices = fetch_invoices().await?;
    let employees = fetch_employees().await?;
    let tasks = fetch_all_tasks().await?;

    Ok(BusinessOverview::compute(&clients, &invoices, &employees, &tasks))
}
