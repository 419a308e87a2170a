use crate::aggregate_id;
use crate::domain::common::AggregateRoot;
use crate::shared::lenient::null_as_default;
use crate::shared::search::{contains_ci, Searchable};
use crate::shared::table::{SortValue, Sortable};
use serde::{Deserialize, Serialize};

aggregate_id!(
    /// Уникальный идентификатор сотрудника
    EmployeeId
);

/// Production staff member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub national_id: String,
}

impl AggregateRoot for Employee {
    fn collection_name() -> &'static str {
        "hr/employees"
    }

    fn list_name() -> &'static str {
        "Workforce Registry"
    }
}

impl Sortable for Employee {
    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "name" => SortValue::text(self.name.clone()),
            "phone" => SortValue::text(self.phone.clone()),
            "nationalId" => SortValue::text(self.national_id.clone()),
            _ => SortValue::Missing,
        }
    }
}

impl Searchable for Employee {
    /// Name is matched case-insensitively, the national id verbatim
    fn matches_filter(&self, query: &str) -> bool {
        contains_ci(&self.name, query) || self.national_id.contains(query)
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для регистрации сотрудника
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    pub name: String,
    pub phone: String,
    pub national_id: String,
}

impl EmployeeDto {
    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Full name is required".into());
        }
        if self.phone.trim().is_empty() {
            return Err("Phone number is required".into());
        }
        if self.national_id.trim().is_empty() {
            return Err("National ID / Passport is required".into());
        }
        Ok(())
    }

    /// Copy with surrounding whitespace removed from every field
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            national_id: self.national_id.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::search::filter_list;

    fn employee(id: i64, name: &str, national_id: &str) -> Employee {
        Employee {
            id: EmployeeId(id),
            name: name.into(),
            phone: "0712345678".into(),
            national_id: national_id.into(),
        }
    }

    #[test]
    fn test_search_by_name_or_national_id() {
        let staff = vec![
            employee(1, "Samuel Okoth", "28471193"),
            employee(2, "Grace Wanjiru", "31002456"),
        ];
        assert_eq!(filter_list(&staff, "okoth").len(), 1);
        assert_eq!(filter_list(&staff, "3100")[0].id, EmployeeId(2));
        assert_eq!(filter_list(&staff, "").len(), 2);
    }

    #[test]
    fn test_dto_validation_and_wire_shape() {
        assert!(EmployeeDto::default().validate().is_err());
        let dto = EmployeeDto {
            name: " Samuel Okoth ".into(),
            phone: "0712345678".into(),
            national_id: "28471193".into(),
        }
        .trimmed();
        assert!(dto.validate().is_ok());
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["nationalId"], "28471193");
        assert_eq!(json["name"], "Samuel Okoth");
    }

    #[test]
    fn test_api_path() {
        assert_eq!(Employee::list_path(), "/hr/employees");
    }
}
