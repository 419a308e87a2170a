use crate::aggregate_id;
use crate::domain::common::AggregateRoot;
use crate::shared::search::{contains_ci, Searchable};
use crate::shared::table::{SortValue, Sortable};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

aggregate_id!(
    /// Уникальный идентификатор клиента
    ClientId
);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Customer of the workshop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: ClientId,
    #[serde(default)]
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub po_box: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

impl Client {
    /// Reference printed under the client name ("REF-CL-12")
    pub fn reference(&self) -> String {
        format!("REF-CL-{}", self.id)
    }

    pub fn country_or_default(&self) -> &str {
        self.country
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or("Kenya")
    }

    /// "00100 Nairobi"; empty parts are skipped
    pub fn locality(&self) -> String {
        [self.postal_code.as_deref(), self.city.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl AggregateRoot for Client {
    fn collection_name() -> &'static str {
        "clients"
    }

    fn list_name() -> &'static str {
        "Clients"
    }
}

impl Sortable for Client {
    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "id" => SortValue::number(self.id.0 as f64),
            "name" => SortValue::text(self.name.clone()),
            "email" => SortValue::opt_text(self.email.as_deref()),
            "city" => SortValue::opt_text(self.city.as_deref()),
            _ => SortValue::Missing,
        }
    }
}

impl Searchable for Client {
    fn matches_filter(&self, query: &str) -> bool {
        contains_ci(&self.name, query)
            || self.email.as_deref().is_some_and(|e| contains_ci(e, query))
            || self.phone.as_deref().is_some_and(|p| p.contains(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_sparse_client() {
        let c: Client = serde_json::from_str(r#"{"id": 7, "name": "Acacia Interiors", "postalCode": "00100", "city": "Nairobi"}"#).unwrap();
        assert_eq!(c.id, ClientId(7));
        assert_eq!(c.reference(), "REF-CL-7");
        assert_eq!(c.locality(), "00100 Nairobi");
        assert_eq!(c.country_or_default(), "Kenya");
        assert_eq!(c.email, None);
    }

    #[test]
    fn test_metadata() {
        assert_eq!(Client::list_path(), "/clients");
        assert_eq!(Client::item_path("7"), "/clients/7");
    }
}
