//! Ячейка таблицы для денежных значений
//!
//! ```ignore
//! <TableCellMoney value=invoice.total />
//! <TableCellMoney value=summary.net() bold=true show_currency=true />
//! ```

use super::number_format::format_money;
use crate::shared::api_utils::currency;
use leptos::prelude::*;
use thaw::*;

/// Right-aligned money cell with thousands separator
#[component]
pub fn TableCellMoney(
    value: f64,

    /// Prefix the configured currency label
    #[prop(optional)]
    show_currency: bool,

    /// Negative amounts in red
    #[prop(optional, default = true)]
    color_by_sign: bool,

    #[prop(optional)]
    bold: bool,
) -> impl IntoView {
    let formatted = if show_currency {
        format!("{} {}", currency(), format_money(value))
    } else {
        format_money(value)
    };

    let mut styles = Vec::new();
    if color_by_sign && value < 0.0 {
        styles.push("color: var(--color-error-700)");
    }
    if bold {
        styles.push("font-weight: 600");
    }

    view! {
        <TableCell class="text-right">
            <span style=styles.join("; ")>{formatted}</span>
        </TableCell>
    }
}
