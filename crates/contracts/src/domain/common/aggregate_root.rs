/// Трейт для корня агрегата
///
/// Every entity the dashboards list carries the same static metadata: where
/// it lives on the API and how the UI names it.
pub trait AggregateRoot {
    // ============================================================================
    // Метаданные класса агрегата (статические данные)
    // ============================================================================

    /// Collection path on the API, relative to the configured prefix
    /// (for example "clients" or "hr/employees")
    fn collection_name() -> &'static str;

    /// Имя списка для UI (множественное число)
    fn list_name() -> &'static str;

    /// API path of a single record
    fn item_path(id: &str) -> String {
        format!("/{}/{}", Self::collection_name(), id)
    }

    /// API path of the collection
    fn list_path() -> String {
        format!("/{}", Self::collection_name())
    }
}
