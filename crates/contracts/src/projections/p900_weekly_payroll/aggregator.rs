//! Weekly payroll consolidation: per-employee totals and the grand total.

use super::dto::PayrollAssignment;
use crate::domain::a004_employee::aggregate::EmployeeId;
use crate::shared::table::{SortValue, Sortable};
use std::collections::HashMap;

/// Display name of the bucket for rows without an employee reference
pub const UNASSIGNED_NAME: &str = "Unassigned";

/// Pay totals of one employee across the week
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeSummary {
    /// `None` collects the rows that carried no employee reference
    pub employee_id: Option<EmployeeId>,
    pub name: String,
    pub phone: String,
    pub total_base: f64,
    pub total_allowance: f64,
    pub total_deduction: f64,
    pub task_count: usize,
}

impl EmployeeSummary {
    fn seed(row: &PayrollAssignment) -> Self {
        Self {
            employee_id: row.employee_id,
            name: row.employee.name.clone(),
            phone: row.employee.phone.clone(),
            total_base: 0.0,
            total_allowance: 0.0,
            total_deduction: 0.0,
            task_count: 0,
        }
    }

    fn add(&mut self, row: &PayrollAssignment) {
        self.total_base += row.base_pay;
        self.total_allowance += row.allowance;
        self.total_deduction += row.deduction;
        self.task_count += 1;
    }

    /// Base pay plus allowances
    pub fn gross(&self) -> f64 {
        self.total_base + self.total_allowance
    }

    pub fn net(&self) -> f64 {
        self.total_base + self.total_allowance - self.total_deduction
    }

    /// Name to show; rows with no name fall back to the employee id
    pub fn display_name(&self) -> String {
        if !self.name.trim().is_empty() {
            return self.name.clone();
        }
        match self.employee_id {
            Some(id) => format!("Employee #{}", id),
            None => UNASSIGNED_NAME.to_string(),
        }
    }
}

impl Sortable for EmployeeSummary {
    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "name" => SortValue::text(self.display_name()),
            "taskCount" => SortValue::number(self.task_count as f64),
            "gross" => SortValue::number(self.gross()),
            "net" => SortValue::number(self.net()),
            _ => SortValue::Missing,
        }
    }
}

/// Consolidated payroll of one week
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PayrollSummary {
    /// In order of first appearance in the input
    pub employees: Vec<EmployeeSummary>,
    pub grand_total: f64,
}

impl PayrollSummary {
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn headcount(&self) -> usize {
        self.employees.len()
    }

    /// Σ task count
    pub fn total_units(&self) -> usize {
        self.employees.iter().map(|e| e.task_count).sum()
    }
}

/// Group the week's assignments by employee.
///
/// Never fails: malformed rows only affect display names, and amounts have
/// already been defaulted to zero during decoding. Rows without an employee
/// id share one "Unassigned" bucket.
pub fn aggregate_payroll(rows: &[PayrollAssignment]) -> PayrollSummary {
    let mut index: HashMap<Option<EmployeeId>, usize> = HashMap::new();
    let mut employees: Vec<EmployeeSummary> = Vec::new();

    for row in rows {
        let slot = *index.entry(row.employee_id).or_insert_with(|| {
            match row.employee_id {
                None => log::warn!(
                    "payroll rows without employee id are grouped as {}, first task {:?}",
                    UNASSIGNED_NAME,
                    row.task_id
                ),
                Some(id) if row.employee.name.trim().is_empty() => log::warn!(
                    "payroll row for employee {} has no name, task {:?}",
                    id,
                    row.task_id
                ),
                Some(_) => {}
            }
            employees.push(EmployeeSummary::seed(row));
            employees.len() - 1
        });
        employees[slot].add(row);
    }

    let grand_total = employees.iter().map(EmployeeSummary::net).sum();

    PayrollSummary {
        employees,
        grand_total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table::{sort_rows, SortState};
    use crate::projections::p900_weekly_payroll::dto::AssignmentEmployee;

    fn row(emp: i64, base: f64, allowance: f64, deduction: f64) -> PayrollAssignment {
        PayrollAssignment {
            employee_id: Some(EmployeeId(emp)),
            employee: AssignmentEmployee {
                name: format!("Worker {}", emp),
                phone: format!("07000000{:02}", emp),
            },
            task_id: None,
            base_pay: base,
            allowance,
            deduction,
        }
    }

    #[test]
    fn test_empty_week() {
        let summary = aggregate_payroll(&[]);
        assert!(summary.is_empty());
        assert_eq!(summary.grand_total, 0.0);
        assert_eq!(summary.total_units(), 0);
    }

    #[test]
    fn test_three_assignments_one_employee() {
        let rows = vec![
            row(1, 1000.0, 200.0, 50.0),
            row(1, 1000.0, 200.0, 50.0),
            row(1, 1000.0, 200.0, 50.0),
        ];
        let summary = aggregate_payroll(&rows);
        assert_eq!(summary.headcount(), 1);
        let emp = &summary.employees[0];
        assert_eq!(emp.total_base, 3000.0);
        assert_eq!(emp.total_allowance, 600.0);
        assert_eq!(emp.total_deduction, 150.0);
        assert_eq!(emp.task_count, 3);
        assert_eq!(emp.gross(), 3600.0);
        assert_eq!(emp.net(), 3450.0);
        assert_eq!(summary.grand_total, 3450.0);
    }

    #[test]
    fn test_first_appearance_order() {
        let rows = vec![row(2, 100.0, 0.0, 0.0), row(1, 50.0, 0.0, 0.0), row(2, 100.0, 0.0, 0.0)];
        let summary = aggregate_payroll(&rows);
        let ids: Vec<Option<EmployeeId>> = summary.employees.iter().map(|e| e.employee_id).collect();
        assert_eq!(ids, vec![Some(EmployeeId(2)), Some(EmployeeId(1))]);
        assert_eq!(summary.employees[0].task_count, 2);
        assert_eq!(summary.employees[1].task_count, 1);
        assert_eq!(summary.total_units(), 3);
    }

    #[test]
    fn test_grand_total_matches_raw_rows() {
        let rows = vec![
            row(3, 1250.0, 150.0, 75.5),
            row(1, 800.0, 0.0, 0.0),
            row(3, 900.0, 100.0, 20.0),
            row(2, 1000.0, 250.0, -30.0),
            row(1, 640.25, 35.75, 12.0),
        ];
        let summary = aggregate_payroll(&rows);
        let raw: f64 = rows.iter().map(PayrollAssignment::net).sum();
        assert!((summary.grand_total - raw).abs() < 1e-9);
        let summed: usize = summary.employees.iter().map(|e| e.task_count).sum();
        assert_eq!(summed, rows.len());
    }

    #[test]
    fn test_negative_deduction_raises_net() {
        let summary = aggregate_payroll(&[row(1, 100.0, 0.0, -25.0)]);
        assert_eq!(summary.grand_total, 125.0);
    }

    #[test]
    fn test_nameless_employee_is_still_accumulated() {
        let mut nameless = row(9, 500.0, 0.0, 0.0);
        nameless.employee = AssignmentEmployee::default();
        let summary = aggregate_payroll(&[nameless.clone(), nameless]);
        assert_eq!(summary.headcount(), 1);
        assert_eq!(summary.employees[0].task_count, 2);
        assert_eq!(summary.employees[0].display_name(), "Employee #9");
        assert_eq!(summary.grand_total, 1000.0);
    }

    #[test]
    fn test_rows_without_employee_id_are_grouped() {
        let mut orphan = row(0, 50.0, 0.0, 0.0);
        orphan.employee_id = None;
        orphan.employee = AssignmentEmployee::default();
        let rows = vec![row(2, 100.0, 0.0, 0.0), orphan.clone(), row(2, 10.0, 0.0, 0.0), orphan];

        let summary = aggregate_payroll(&rows);
        assert_eq!(summary.headcount(), 2);
        assert_eq!(summary.employees[0].employee_id, Some(EmployeeId(2)));
        assert_eq!(summary.employees[0].net(), 110.0);
        assert_eq!(summary.employees[1].employee_id, None);
        assert_eq!(summary.employees[1].task_count, 2);
        assert_eq!(summary.employees[1].display_name(), UNASSIGNED_NAME);
        assert_eq!(summary.grand_total, 210.0);
    }

    #[test]
    fn test_decoded_week_with_bad_ids_aggregates() {
        let rows: Vec<PayrollAssignment> = serde_json::from_str(
            r#"[
                {"employeeId": 2, "employee": {"name": "Grace Wanjiru"}, "basePay": 100},
                {"employeeId": null, "employee": null, "basePay": 50},
                {"employeeId": "2", "basePay": 30}
            ]"#,
        )
        .unwrap();
        let summary = aggregate_payroll(&rows);
        assert_eq!(summary.headcount(), 2);
        assert_eq!(summary.employees[0].display_name(), "Grace Wanjiru");
        assert_eq!(summary.employees[0].net(), 130.0);
        assert_eq!(summary.employees[1].display_name(), UNASSIGNED_NAME);
        assert_eq!(summary.grand_total, 180.0);
    }

    #[test]
    fn test_summaries_sort_by_net() {
        let summary = aggregate_payroll(&[
            row(1, 100.0, 0.0, 0.0),
            row(2, 300.0, 0.0, 0.0),
            row(3, 200.0, 0.0, 0.0),
        ]);
        let mut rows: Vec<&EmployeeSummary> = summary.employees.iter().collect();
        sort_rows(&mut rows, Some(&SortState::desc("net")));
        let ids: Vec<Option<EmployeeId>> = rows.iter().map(|e| e.employee_id).collect();
        assert_eq!(ids, vec![Some(EmployeeId(2)), Some(EmployeeId(3)), Some(EmployeeId(1))]);
    }
}
