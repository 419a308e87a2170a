use crate::shared::api_client::{delete, get_json};
use contracts::domain::a003_quotation::aggregate::{Quotation, QuotationId};
use contracts::domain::common::{AggregateId, AggregateRoot};
use contracts::shared::api_error::ApiError;

pub async fn fetch_quotations() -> Result<Vec<Quotation>, ApiError> {
    get_json(&Quotation::list_path()).await
}

pub async fn delete_quotation(id: QuotationId) -> Result<(), ApiError> {
    delete(&Quotation::item_path(&id.as_string())).await
}
