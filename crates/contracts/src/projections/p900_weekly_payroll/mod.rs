pub mod aggregator;
pub mod dto;

pub use aggregator::{aggregate_payroll, EmployeeSummary, PayrollSummary};
pub use dto::{AssignmentEmployee, PayrollAssignment};
