//! Ячейка заголовка таблицы с сортировкой
//!
//! # Примеры
//!
//! ```ignore
//! <SortableHeaderCell
//!     column=ColumnConfig::sortable("Client", "name")
//!     current_sort=Signal::derive(move || model.with(|m| m.sort().cloned()))
//!     on_sort=Callback::new(move |column: ColumnConfig| model.update(|m| m.toggle_sort(&column)))
//! />
//! ```

use contracts::shared::table::{ColumnConfig, SortDirection, SortState};
use leptos::prelude::*;
use thaw::*;

/// Glyph shown next to a header label
pub fn sort_indicator(current: Option<&SortState>, key: &str) -> &'static str {
    match current {
        Some(s) if s.key == key => match s.direction {
            SortDirection::Asc => " ▲",
            SortDirection::Desc => " ▼",
        },
        _ => " ⇅",
    }
}

fn sort_class(current: Option<&SortState>, key: &str) -> &'static str {
    match current {
        Some(s) if s.key == key => "sort-icon active",
        _ => "sort-icon",
    }
}

/// Header cell; only columns with a sort key react to clicks
#[component]
pub fn SortableHeaderCell(
    column: ColumnConfig,

    #[prop(into)]
    current_sort: Signal<Option<SortState>>,

    on_sort: Callback<ColumnConfig>,

    /// Выравнивание заголовка (left/right)
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let header_style = if align == "right" {
        "justify-content: flex-end; padding-right: 12px;"
    } else {
        "padding-right: 12px;"
    };

    let Some(key) = column.sort_key.clone() else {
        return view! {
            <TableHeaderCell>
                <div class="table__header" style=header_style>{column.label}</div>
            </TableHeaderCell>
        }
        .into_any();
    };

    let label = column.label.clone();
    let key_for_class = key.clone();
    let handle_click = move |_| on_sort.run(column.clone());

    view! {
        <TableHeaderCell>
            <div
                class="table__sortable-header"
                style=format!("cursor: pointer; {}", header_style)
                on:click=handle_click
            >
                {label}
                <span class=move || current_sort.with(|s| sort_class(s.as_ref(), &key_for_class))>
                    {move || current_sort.with(|s| sort_indicator(s.as_ref(), &key))}
                </span>
            </div>
        </TableHeaderCell>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indicator() {
        let asc = SortState::asc("name");
        let desc = SortState::desc("name");
        assert_eq!(sort_indicator(Some(&asc), "name"), " ▲");
        assert_eq!(sort_indicator(Some(&desc), "name"), " ▼");
        assert_eq!(sort_indicator(Some(&asc), "total"), " ⇅");
        assert_eq!(sort_indicator(None, "name"), " ⇅");
    }
}
