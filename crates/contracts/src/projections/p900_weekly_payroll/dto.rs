use crate::domain::a004_employee::aggregate::EmployeeId;
use crate::domain::a005_work_week::aggregate::WorkWeekId;
use crate::domain::a006_task::aggregate::TaskId;
use crate::shared::lenient::{lenient_amount, lenient_id, null_as_default};
use serde::{Deserialize, Deserializer, Serialize};

/// Employee details embedded in a payroll row
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AssignmentEmployee {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
}

/// One employee's pay for one task of the selected week
/// (row of `GET /hr/weeks/{id}/payroll`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollAssignment {
    /// `None` when the row arrives without a usable employee reference
    #[serde(default, deserialize_with = "lenient_employee_id")]
    pub employee_id: Option<EmployeeId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub employee: AssignmentEmployee,
    pub task_id: Option<TaskId>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub base_pay: f64,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub allowance: f64,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub deduction: f64,
}

impl PayrollAssignment {
    /// basePay + allowance - deduction
    pub fn net(&self) -> f64 {
        self.base_pay + self.allowance - self.deduction
    }
}

fn lenient_employee_id<'de, D>(deserializer: D) -> Result<Option<EmployeeId>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_id(deserializer)?.map(EmployeeId))
}

/// API path of a week's payroll rows
pub fn payroll_path(week_id: WorkWeekId) -> String {
    format!("/hr/weeks/{}/payroll", week_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_assignment() {
        let rows: Vec<PayrollAssignment> = serde_json::from_str(
            r#"[
                {"employeeId": 2, "employee": {"name": "Grace Wanjiru", "phone": "0722000111"},
                 "taskId": 9, "basePay": "1000.00", "allowance": "200.00", "deduction": "50.00"},
                {"employeeId": 5, "employee": null, "taskId": 9, "basePay": 700}
            ]"#,
        )
        .unwrap();
        assert_eq!(rows[0].employee.name, "Grace Wanjiru");
        assert_eq!(rows[0].net(), 1150.0);
        assert_eq!(rows[1].employee, AssignmentEmployee::default());
        assert_eq!(rows[1].allowance, 0.0);
        assert_eq!(rows[1].net(), 700.0);
    }

    #[test]
    fn test_bad_employee_ids_keep_the_rest_of_the_week() {
        let rows: Vec<PayrollAssignment> = serde_json::from_str(
            r#"[
                {"employeeId": 2, "employee": {"name": "Grace Wanjiru"}, "basePay": 100},
                {"employeeId": null, "employee": null, "basePay": 50},
                {"employee": {"name": "Juma"}, "basePay": 25},
                {"employeeId": "2", "basePay": "10"},
                {"employeeId": "two", "basePay": 5}
            ]"#,
        )
        .unwrap();
        let ids: Vec<Option<EmployeeId>> = rows.iter().map(|r| r.employee_id).collect();
        assert_eq!(
            ids,
            vec![Some(EmployeeId(2)), None, None, Some(EmployeeId(2)), None]
        );
        assert_eq!(rows[0].net(), 100.0);
        assert_eq!(rows[3].net(), 10.0);
    }

    #[test]
    fn test_payroll_path() {
        assert_eq!(payroll_path(WorkWeekId(12)), "/hr/weeks/12/payroll");
    }
}
