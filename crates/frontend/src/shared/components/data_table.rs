//! Generic sortable, paginated table over a remote list.
//!
//! ```ignore
//! <DataTable
//!     columns=vec![ColumnConfig::sortable("Client", "name"), ColumnConfig::new("Email")]
//!     resource=clients.state()
//!     on_refetch=clients.refetch_callback()
//!     render_row=row_renderer(|c: &Client| Ok(view! { <TableRow>...</TableRow> }.into_any()))
//! />
//! ```
//!
//! A failed fetch or a row that cannot be rendered replaces this table with a
//! [`DataError`] panel; sibling regions of the page are untouched.

use super::data_error::DataError;
use super::pagination_controls::PaginationControls;
use super::table::SortableHeaderCell;
use crate::shared::api_utils::CONFIG;
use contracts::shared::resource::ResourceState;
use contracts::shared::table::{
    ColumnConfig, DataTableModel, PageSize, RenderedBody, RowRenderError, Sortable, TableFault,
};
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

/// Turns one record into a `<TableRow>`
pub type RowRenderer<T> = Arc<dyn Fn(&T) -> Result<AnyView, RowRenderError> + Send + Sync>;

pub fn row_renderer<T, F>(f: F) -> RowRenderer<T>
where
    F: Fn(&T) -> Result<AnyView, RowRenderError> + Send + Sync + 'static,
{
    Arc::new(f)
}

fn message_row(colspan: usize, class: &'static str, text: String) -> AnyView {
    view! {
        <TableRow>
            <TableCell attr:colspan=colspan.to_string()>
                <div class=class>{text}</div>
            </TableCell>
        </TableRow>
    }
    .into_any()
}

#[component]
pub fn DataTable<T>(
    columns: Vec<ColumnConfig>,

    #[prop(into)]
    resource: Signal<ResourceState<Vec<T>>>,

    render_row: RowRenderer<T>,

    /// Asks the owner of `resource` for fresh data
    on_refetch: Callback<()>,

    /// `None` uses the configured page size, `<= 0` shows every row
    #[prop(optional)]
    items_per_page: Option<i64>,

    #[prop(optional, into)]
    loading_message: Option<String>,

    #[prop(optional, into)]
    empty_message: Option<String>,
) -> impl IntoView
where
    T: Sortable + Clone + Send + Sync + 'static,
{
    let page_size = PageSize::from_items_per_page(items_per_page.or(Some(CONFIG.table.page_size)));
    let model = RwSignal::new(DataTableModel::new(page_size));

    let colspan = columns.len().max(1);
    let columns = StoredValue::new(columns);
    let loading_message = loading_message.unwrap_or_else(|| CONFIG.table.loading_message.clone());
    let empty_message = empty_message.unwrap_or_else(|| CONFIG.table.empty_message.clone());

    let current_sort = Signal::derive(move || model.with(|m| m.sort().cloned()));
    let on_sort = Callback::new(move |column: ColumnConfig| {
        model.update(|m| m.toggle_sort(&column));
    });

    let total_count = move || resource.with_untracked(|s| s.value().map_or(0, Vec::len));
    let on_prev = Callback::new(move |_| {
        let total = total_count();
        model.update(|m| m.prev_page(total));
    });
    let on_next = Callback::new(move |_| {
        let total = total_count();
        model.update(|m| m.next_page(total));
    });
    let on_retry = Callback::new(move |_| {
        model.update(|m| m.retry(|| on_refetch.run(())));
    });

    let pagination = Signal::derive(move || {
        resource.with(|state| model.with(|m| m.pagination(state)))
    });

    let body = move || -> Result<AnyView, TableFault> {
        let rendered = resource.with(|state| model.with(|m| m.render_body(state, |row| render_row(row))));
        match rendered {
            Ok(RenderedBody::Loading) => Ok(message_row(colspan, "table__loading", loading_message.clone())),
            Ok(RenderedBody::Empty) => Ok(message_row(colspan, "table__empty", empty_message.clone())),
            Ok(RenderedBody::Rows(views)) => Ok(views.into_iter().collect_view().into_any()),
            Err(fault) => {
                if let TableFault::Render(e) = &fault {
                    log::warn!("table row could not be rendered: {}", e);
                }
                Err(fault)
            }
        }
    };

    move || match body() {
        Ok(rows) => view! {
            <div class="data-table">
                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                {columns
                                    .get_value()
                                    .into_iter()
                                    .map(|column| view! {
                                        <SortableHeaderCell
                                            column=column
                                            current_sort=current_sort
                                            on_sort=on_sort
                                        />
                                    })
                                    .collect_view()}
                            </TableRow>
                        </TableHeader>
                        <TableBody>{rows}</TableBody>
                    </Table>
                </div>
                <PaginationControls info=pagination on_prev=on_prev on_next=on_next />
            </div>
        }
        .into_any(),
        Err(fault) => view! { <DataError fault=fault on_retry=on_retry /> }.into_any(),
    }
}
