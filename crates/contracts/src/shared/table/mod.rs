pub mod column;
pub mod fault;
pub mod model;
pub mod page;
pub mod sort;

pub use column::ColumnConfig;
pub use fault::{RowRenderError, TableFault};
pub use model::{
    DataTableModel, PaginationInfo, RenderedBody, TableBody, DEFAULT_EMPTY_MESSAGE, DEFAULT_LOADING_MESSAGE,
};
pub use page::{PageSize, PageState, DEFAULT_PAGE_SIZE};
pub use sort::{cycle_sort, sort_rows, SortDirection, SortState, SortValue, Sortable};
