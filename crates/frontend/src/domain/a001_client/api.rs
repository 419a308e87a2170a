use crate::shared::api_client::{delete, get_json};
use contracts::domain::a001_client::aggregate::{Client, ClientId};
use contracts::domain::common::{AggregateId, AggregateRoot};
use contracts::shared::api_error::ApiError;

pub async fn fetch_clients() -> Result<Vec<Client>, ApiError> {
    get_json(&Client::list_path()).await
}

pub async fn delete_client(id: ClientId) -> Result<(), ApiError> {
    delete(&Client::item_path(&id.as_string())).await
}
