pub mod data_error;
pub mod data_table;
pub mod date_input;
pub mod page_header;
pub mod pagination_controls;
pub mod stat_card;
pub mod table;
pub mod week_selector;

pub use data_error::DataError;
pub use data_table::{row_renderer, DataTable, RowRenderer};
pub use date_input::DateInput;
pub use page_header::PageHeader;
pub use pagination_controls::PaginationControls;
pub use stat_card::{StatCard, StatTone};
pub use week_selector::WeekSelector;
