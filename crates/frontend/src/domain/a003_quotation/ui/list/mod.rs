use crate::domain::a003_quotation::api::{delete_quotation, fetch_quotations};
use crate::shared::components::table::TableCellMoney;
use crate::shared::components::{row_renderer, DataTable, PageHeader};
use crate::shared::date_utils::format_opt_date;
use crate::shared::ListResource;
use contracts::domain::a003_quotation::aggregate::{Quotation, QuotationId};
use contracts::domain::common::AggregateRoot;
use contracts::shared::table::ColumnConfig;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn QuotationList() -> impl IntoView {
    let quotations = ListResource::new(fetch_quotations);
    let (action_error, set_action_error) = signal::<Option<String>>(None);

    let handle_delete = move |id: QuotationId, number: String| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message(&format!("Delete quotation {}?", number)).ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match delete_quotation(id).await {
                // drop the row locally, the list itself is still valid
                Ok(()) => quotations.mutate(|list| list.retain(|q| q.id != id)),
                Err(e) => set_action_error.set(Some(format!("Delete failed: {}", e))),
            }
        });
    };

    let columns = vec![
        ColumnConfig::sortable("Number", "quotationNumber"),
        ColumnConfig::sortable("Client", "clientName"),
        ColumnConfig::sortable("Issued", "issueDate"),
        ColumnConfig::sortable("Total", "total"),
        ColumnConfig::sortable("Status", "status"),
        ColumnConfig::new("Actions"),
    ];

    let render_row = row_renderer(move |q: &Quotation| {
        let id = q.id;
        let number = q.quotation_number.clone();
        let number_for_delete = number.clone();
        let client = q.client_name().to_string();
        let issued = format_opt_date(q.issue_date.as_deref());
        let expires = format_opt_date(q.expiry_date.as_deref());
        let lines = match q.items.len() {
            1 => "1 item".to_string(),
            n => format!("{} items", n),
        };
        let status = q.status.clone();
        let total = q.total;

        Ok(view! {
            <TableRow>
                <TableCell>
                    <div class="cell-title">{number}</div>
                    <div class="cell-subtitle">{lines}</div>
                </TableCell>
                <TableCell>{client}</TableCell>
                <TableCell>
                    <div>{issued}</div>
                    <div class="cell-subtitle">{format!("Valid until {}", expires)}</div>
                </TableCell>
                <TableCellMoney value=total show_currency=true />
                <TableCell>
                    <span class="badge">{status}</span>
                </TableCell>
                <TableCell>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| handle_delete(id, number_for_delete.clone())
                    >
                        "Delete"
                    </Button>
                </TableCell>
            </TableRow>
        }
        .into_any())
    });

    view! {
        <div class="page">
            <PageHeader
                title=Quotation::list_name()
                subtitle="Review workshop estimates and client orders.".to_string()
            />

            {move || action_error.get().map(|e| view! {
                <div class="alert alert--error">{e}</div>
            })}

            <DataTable
                columns=columns
                resource=quotations.state()
                on_refetch=quotations.refetch_callback()
                render_row=render_row
            />
        </div>
    }
}
