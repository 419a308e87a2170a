use crate::aggregate_id;
use crate::domain::a001_client::aggregate::ClientId;
use crate::domain::common::AggregateRoot;
use crate::shared::lenient::{lenient_amount, null_as_default};
use crate::shared::table::{SortValue, Sortable};
use serde::{Deserialize, Serialize};

aggregate_id!(
    /// Уникальный идентификатор счёта
    InvoiceId
);

/// Client summary embedded in invoices and quotations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientRef {
    pub id: ClientId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: InvoiceId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub invoice_number: String,
    pub client_id: Option<ClientId>,
    pub client: Option<ClientRef>,
    /// Some endpoints still call this `totalAmount`
    #[serde(default, alias = "totalAmount", deserialize_with = "lenient_amount")]
    pub total: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    pub issue_date: Option<String>,
    pub due_date: Option<String>,
    pub created_at: Option<String>,
}

impl Invoice {
    pub fn is_paid(&self) -> bool {
        self.status.trim().eq_ignore_ascii_case("paid")
    }

    pub fn client_name(&self) -> &str {
        self.client
            .as_ref()
            .map(|c| c.name.as_str())
            .filter(|n| !n.is_empty())
            .unwrap_or("Unknown client")
    }
}

impl AggregateRoot for Invoice {
    fn collection_name() -> &'static str {
        "invoices"
    }

    fn list_name() -> &'static str {
        "Invoices"
    }
}

impl Sortable for Invoice {
    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "invoiceNumber" => SortValue::text(self.invoice_number.clone()),
            "clientName" => SortValue::opt_text(self.client.as_ref().map(|c| c.name.as_str())),
            "total" => SortValue::number(self.total),
            "status" => SortValue::text(self.status.clone()),
            "issueDate" => SortValue::opt_text(self.issue_date.as_deref()),
            "createdAt" => SortValue::opt_text(self.created_at.as_deref()),
            _ => SortValue::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_total_variants() {
        let a: Invoice = serde_json::from_str(
            r#"{"id": 1, "invoiceNumber": "INV-001", "total": "12500.50", "status": "Paid"}"#,
        )
        .unwrap();
        assert_eq!(a.total, 12500.5);
        assert!(a.is_paid());

        let b: Invoice =
            serde_json::from_str(r#"{"id": 2, "totalAmount": 800, "status": "pending"}"#).unwrap();
        assert_eq!(b.total, 800.0);
        assert!(!b.is_paid());
        assert_eq!(b.invoice_number, "");
        assert_eq!(b.client_name(), "Unknown client");
    }

    #[test]
    fn test_sort_values() {
        let inv: Invoice = serde_json::from_str(r#"{"id": 3, "total": 10}"#).unwrap();
        assert_eq!(inv.sort_value("total"), SortValue::Number(10.0));
        assert_eq!(inv.sort_value("createdAt"), SortValue::Missing);
    }
}
