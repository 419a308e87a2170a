use crate::domain::a002_invoice::api::fetch_invoices;
use crate::shared::components::table::TableCellMoney;
use crate::shared::components::{row_renderer, DataTable, PageHeader};
use crate::shared::date_utils::format_opt_date;
use crate::shared::ListResource;
use contracts::domain::a002_invoice::aggregate::Invoice;
use contracts::domain::common::AggregateRoot;
use contracts::shared::table::{ColumnConfig, RowRenderError};
use leptos::prelude::*;
use thaw::*;

/// Badge class for an invoice status
fn status_class(invoice: &Invoice) -> &'static str {
    if invoice.is_paid() {
        "badge badge--success"
    } else if invoice.status.trim().eq_ignore_ascii_case("overdue") {
        "badge badge--error"
    } else {
        "badge badge--warning"
    }
}

fn render_invoice(invoice: &Invoice) -> Result<AnyView, RowRenderError> {
    if invoice.invoice_number.trim().is_empty() {
        return Err(RowRenderError::missing_field("invoiceNumber"));
    }

    let number = invoice.invoice_number.clone();
    let client = invoice.client_name().to_string();
    let issued = format_opt_date(invoice.issue_date.as_deref());
    let due = format_opt_date(invoice.due_date.as_deref());
    let status = if invoice.status.is_empty() {
        "Draft".to_string()
    } else {
        invoice.status.clone()
    };
    let badge = status_class(invoice);
    let total = invoice.total;

    Ok(view! {
        <TableRow>
            <TableCell>
                <TableCellLayout>
                    <span class="cell-title">{number}</span>
                </TableCellLayout>
            </TableCell>
            <TableCell>{client}</TableCell>
            <TableCellMoney value=total show_currency=true />
            <TableCell>
                <div>{issued}</div>
                <div class="cell-subtitle">{format!("Due {}", due)}</div>
            </TableCell>
            <TableCell>
                <span class=badge>{status}</span>
            </TableCell>
        </TableRow>
    }
    .into_any())
}

#[component]
#[allow(non_snake_case)]
pub fn InvoiceList() -> impl IntoView {
    let invoices = ListResource::new(fetch_invoices);

    let columns = vec![
        ColumnConfig::sortable("Invoice #", "invoiceNumber"),
        ColumnConfig::sortable("Client", "clientName"),
        ColumnConfig::sortable("Amount", "total"),
        ColumnConfig::new("Issued / Due"),
        ColumnConfig::new("Status"),
    ];

    view! {
        <div class="page">
            <PageHeader
                title=Invoice::list_name()
                subtitle="Track billing, payments, and outstanding balances.".to_string()
            >
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| invoices.refetch()>
                    "Refresh"
                </Button>
            </PageHeader>

            <DataTable
                columns=columns
                resource=invoices.state()
                on_refetch=invoices.refetch_callback()
                render_row=row_renderer(render_invoice)
                empty_message="No invoices issued yet."
            />
        </div>
    }
}
