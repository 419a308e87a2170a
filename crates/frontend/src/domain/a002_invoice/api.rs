use crate::shared::api_client::get_json;
use contracts::domain::a002_invoice::aggregate::Invoice;
use contracts::domain::common::AggregateRoot;
use contracts::shared::api_error::ApiError;

pub async fn fetch_invoices() -> Result<Vec<Invoice>, ApiError> {
    get_json(&Invoice::list_path()).await
}
