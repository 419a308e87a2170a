/// Column descriptor of a data table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnConfig {
    pub label: String,
    /// Field the column sorts by; `None` for non-sortable columns
    pub sort_key: Option<String>,
}

impl ColumnConfig {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            sort_key: None,
        }
    }

    pub fn sortable(label: impl Into<String>, sort_key: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            sort_key: Some(sort_key.into()),
        }
    }
}
