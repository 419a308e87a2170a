//! Local state of one data table and the pure derivation of what it shows.

use super::column::ColumnConfig;
use super::fault::{RowRenderError, TableFault};
use super::page::{PageSize, PageState};
use super::sort::{cycle_sort, sort_rows, SortState, Sortable};
use crate::shared::api_error::ApiError;
use crate::shared::resource::ResourceState;

pub const DEFAULT_LOADING_MESSAGE: &str = "Loading workshop records...";
pub const DEFAULT_EMPTY_MESSAGE: &str = "No records found.";

/// What occupies the body of the table
#[derive(Debug, PartialEq)]
pub enum TableBody<'a, T> {
    Loading,
    Empty,
    Rows(Vec<&'a T>),
    Failed(&'a ApiError),
}

/// Table body after the row renderer has run
#[derive(Debug, PartialEq)]
pub enum RenderedBody<V> {
    Loading,
    Empty,
    Rows(Vec<V>),
}

/// Data for the pagination footer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationInfo {
    pub page: usize,
    pub total_pages: usize,
    pub shown: usize,
    pub total_count: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DataTableModel {
    sort: Option<SortState>,
    page: PageState,
}

impl DataTableModel {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            sort: None,
            page: PageState::new(page_size),
        }
    }

    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    pub fn page(&self) -> &PageState {
        &self.page
    }

    /// Header click. Non-sortable columns are ignored.
    pub fn toggle_sort(&mut self, column: &ColumnConfig) {
        if let Some(key) = column.sort_key.as_deref() {
            self.sort_by_key(key);
        }
    }

    pub fn sort_by_key(&mut self, key: &str) {
        self.sort = cycle_sort(self.sort.as_ref(), key);
        self.page.reset();
    }

    pub fn next_page(&mut self, total_count: usize) {
        self.page.next(total_count);
    }

    pub fn prev_page(&mut self, total_count: usize) {
        self.page.prev(total_count);
    }

    /// Retry after a failure: back to the first page, then ask for fresh
    /// data. The active sort is kept.
    pub fn retry(&mut self, refetch: impl FnOnce()) {
        self.page.reset();
        refetch();
    }

    /// Sorted rows of the current page
    pub fn visible<'a, T: Sortable>(&self, items: &'a [T]) -> Vec<&'a T> {
        let mut rows: Vec<&T> = items.iter().collect();
        sort_rows(&mut rows, self.sort.as_ref());
        let range = self.page.range(rows.len());
        rows.drain(range).collect()
    }

    pub fn body<'a, T: Sortable>(&self, state: &'a ResourceState<Vec<T>>) -> TableBody<'a, T> {
        match state {
            ResourceState::Loading => TableBody::Loading,
            ResourceState::Failed(e) => TableBody::Failed(e),
            ResourceState::Ready(items) if items.is_empty() => TableBody::Empty,
            ResourceState::Ready(items) => TableBody::Rows(self.visible(items)),
        }
    }

    /// Run `render` over the visible rows.
    ///
    /// All or nothing: the first row that fails turns the whole body into a
    /// [`TableFault::Render`], as does a failed fetch into [`TableFault::Fetch`].
    pub fn render_body<T, V, F>(
        &self,
        state: &ResourceState<Vec<T>>,
        render: F,
    ) -> Result<RenderedBody<V>, TableFault>
    where
        T: Sortable,
        F: FnMut(&T) -> Result<V, RowRenderError>,
    {
        match self.body(state) {
            TableBody::Loading => Ok(RenderedBody::Loading),
            TableBody::Empty => Ok(RenderedBody::Empty),
            TableBody::Failed(e) => Err(TableFault::Fetch(e.clone())),
            TableBody::Rows(rows) => rows
                .into_iter()
                .map(render)
                .collect::<Result<Vec<V>, RowRenderError>>()
                .map(RenderedBody::Rows)
                .map_err(TableFault::Render),
        }
    }

    /// Footer data, `None` while loading, on failure, or with a single page
    pub fn pagination<T>(&self, state: &ResourceState<Vec<T>>) -> Option<PaginationInfo> {
        let total_count = state.value()?.len();
        if !self.page.needs_controls(total_count) {
            return None;
        }
        Some(PaginationInfo {
            page: self.page.current(total_count),
            total_pages: self.page.total_pages(total_count),
            shown: self.page.range(total_count).len(),
            total_count,
            has_prev: self.page.has_prev(total_count),
            has_next: self.page.has_next(total_count),
        })
    }
}
