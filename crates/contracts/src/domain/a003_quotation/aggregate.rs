use crate::aggregate_id;
use crate::domain::a001_client::aggregate::ClientId;
use crate::domain::a002_invoice::aggregate::ClientRef;
use crate::domain::common::AggregateRoot;
use crate::shared::lenient::{lenient_amount, null_as_default};
use crate::shared::table::{SortValue, Sortable};
use serde::{Deserialize, Serialize};

aggregate_id!(QuotationId);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationItem {
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub quantity: f64,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub unit_price: f64,
}

impl QuotationItem {
    pub fn line_total(&self) -> f64 {
        self.quantity * self.unit_price
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quotation {
    pub id: QuotationId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub quotation_number: String,
    pub client_id: Option<ClientId>,
    pub client: Option<ClientRef>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub subtotal: f64,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub tax_total: f64,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub total: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    pub issue_date: Option<String>,
    pub expiry_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<QuotationItem>,
}

impl Quotation {
    pub fn client_name(&self) -> &str {
        self.client
            .as_ref()
            .map(|c| c.name.as_str())
            .filter(|n| !n.is_empty())
            .unwrap_or("Unknown client")
    }

    /// Σ quantity × unit price over the line items
    pub fn items_total(&self) -> f64 {
        self.items.iter().map(QuotationItem::line_total).sum()
    }
}

impl AggregateRoot for Quotation {
    fn collection_name() -> &'static str {
        "quotations"
    }

    fn list_name() -> &'static str {
        "Quotations"
    }
}

impl Sortable for Quotation {
    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "quotationNumber" => SortValue::text(self.quotation_number.clone()),
            "clientName" => SortValue::opt_text(self.client.as_ref().map(|c| c.name.as_str())),
            "total" => SortValue::number(self.total),
            "status" => SortValue::text(self.status.clone()),
            "issueDate" => SortValue::opt_text(self.issue_date.as_deref()),
            _ => SortValue::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_total() {
        let q: Quotation = serde_json::from_str(
            r#"{
                "id": 4,
                "quotationNumber": "QT-2025-004",
                "clientId": 7,
                "client": {"id": 7, "name": "Acacia Interiors"},
                "subtotal": "30000.00",
                "taxTotal": "4800.00",
                "total": "34800.00",
                "status": "draft",
                "issueDate": "2025-02-01",
                "items": [
                    {"id": 1, "description": "Mahogany door", "quantity": 2, "unitPrice": "12000.00"},
                    {"id": 2, "description": "Fitting", "quantity": "3", "unitPrice": 2000}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(q.items_total(), 30000.0);
        assert_eq!(q.total, 34800.0);
        assert_eq!(q.client_name(), "Acacia Interiors");
        assert_eq!(q.sort_value("issueDate"), SortValue::text("2025-02-01"));
    }

    #[test]
    fn test_items_default_to_empty() {
        let q: Quotation = serde_json::from_str(r#"{"id": 5, "items": null}"#).unwrap();
        assert!(q.items.is_empty());
        assert_eq!(q.items_total(), 0.0);
    }
}
