use crate::shared::api_error::ApiError;
use thiserror::Error;

/// A row renderer could not turn a record into a table row
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cannot render row: {0}")]
pub struct RowRenderError(pub String);

impl RowRenderError {
    pub fn missing_field(field: &str) -> Self {
        Self(format!("field '{}' is missing", field))
    }
}

/// Anything that makes a table fall back to its error panel
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableFault {
    #[error(transparent)]
    Fetch(#[from] ApiError),
    #[error(transparent)]
    Render(#[from] RowRenderError),
}

impl TableFault {
    pub fn title(&self) -> &'static str {
        match self {
            TableFault::Fetch(e) => e.title(),
            TableFault::Render(_) => "Display Issue",
        }
    }

    /// Hint shown under the title
    pub fn hint(&self) -> &'static str {
        match self {
            TableFault::Fetch(ApiError::Network(_)) => {
                "We couldn't reach the workshop records. Please check that the API server is running."
            }
            TableFault::Fetch(_) => "The server could not return these records.",
            TableFault::Render(_) => "Some records could not be displayed.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fault_messages() {
        let fault = TableFault::from(RowRenderError::missing_field("invoiceNumber"));
        assert_eq!(fault.to_string(), "Cannot render row: field 'invoiceNumber' is missing");
        assert_eq!(fault.title(), "Display Issue");

        let fault = TableFault::from(ApiError::Network("Failed to fetch".into()));
        assert_eq!(fault.title(), "Connection Issue");
        assert!(fault.hint().contains("API server"));
    }
}
