use crate::domain::a001_client::aggregate::Client;
use crate::domain::a002_invoice::aggregate::Invoice;
use crate::domain::a004_employee::aggregate::Employee;
use crate::domain::a006_task::aggregate::Task;
use crate::shared::dates::parse_iso_date;

/// How many of the latest invoices feed the revenue trend
pub const TREND_LENGTH: usize = 6;

/// One point of the revenue trend
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    /// "Jan 6"
    pub label: String,
    pub amount: f64,
}

/// KPIs of the dashboard home page
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BusinessOverview {
    /// Σ invoice totals
    pub revenue: f64,
    /// Σ totals of invoices not marked paid
    pub pending: f64,
    pub staff_count: usize,
    pub task_count: usize,
    pub client_count: usize,
    /// Last invoices in API order
    pub trend: Vec<TrendPoint>,
}

impl BusinessOverview {
    pub fn compute(
        clients: &[Client],
        invoices: &[Invoice],
        employees: &[Employee],
        tasks: &[Task],
    ) -> Self {
        let revenue = invoices.iter().map(|i| i.total).sum();
        let pending = invoices
            .iter()
            .filter(|i| !i.is_paid())
            .map(|i| i.total)
            .sum();

        let skip = invoices.len().saturating_sub(TREND_LENGTH);
        let trend = invoices
            .iter()
            .skip(skip)
            .map(|i| TrendPoint {
                label: i
                    .created_at
                    .as_deref()
                    .and_then(parse_iso_date)
                    .map(|d| d.format("%b %-d").to_string())
                    .unwrap_or_else(|| "N/A".to_string()),
                amount: i.total,
            })
            .collect();

        Self {
            revenue,
            pending,
            staff_count: employees.len(),
            task_count: tasks.len(),
            client_count: clients.len(),
            trend,
        }
    }

    /// Share of revenue still outstanding, in percent
    pub fn pending_share(&self) -> Option<f64> {
        if self.revenue > 0.0 {
            Some(self.pending / self.revenue * 100.0)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoices() -> Vec<Invoice> {
        serde_json::from_str(
            r#"[
                {"id": 1, "total": "1000", "status": "Paid", "createdAt": "2025-01-02T10:00:00Z"},
                {"id": 2, "total": 2500, "status": "pending", "createdAt": "2025-01-06T10:00:00Z"},
                {"id": 3, "total": "500.50", "status": "PAID", "createdAt": "2025-01-09"},
                {"id": 4, "total": 300, "status": "overdue"},
                {"id": 5, "total": 100, "status": "paid", "createdAt": "2025-02-01"},
                {"id": 6, "total": 100, "status": "draft", "createdAt": "2025-02-03"},
                {"id": 7, "total": 100, "status": "paid", "createdAt": "2025-02-10"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_revenue_and_pending() {
        let overview = BusinessOverview::compute(&[], &invoices(), &[], &[]);
        assert_eq!(overview.revenue, 4600.5);
        // pending excludes every casing of "paid"
        assert_eq!(overview.pending, 2900.0);
        assert!(overview.pending_share().unwrap() > 63.0);
    }

    #[test]
    fn test_trend_takes_last_six() {
        let overview = BusinessOverview::compute(&[], &invoices(), &[], &[]);
        let labels: Vec<&str> = overview.trend.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Jan 6", "Jan 9", "N/A", "Feb 1", "Feb 3", "Feb 10"]);
    }

    #[test]
    fn test_empty_inputs() {
        let overview = BusinessOverview::compute(&[], &[], &[], &[]);
        assert_eq!(overview, BusinessOverview::default());
        assert_eq!(overview.pending_share(), None);
    }
}
