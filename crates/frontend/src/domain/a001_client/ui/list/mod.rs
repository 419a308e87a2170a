use crate::domain::a001_client::api::{delete_client, fetch_clients};
use crate::shared::components::{row_renderer, DataTable, PageHeader};
use crate::shared::ListResource;
use contracts::domain::a001_client::aggregate::Client;
use contracts::domain::common::AggregateRoot;
use contracts::shared::table::ColumnConfig;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[component]
#[allow(non_snake_case)]
pub fn ClientList() -> impl IntoView {
    let clients = ListResource::new(fetch_clients);
    let (action_error, set_action_error) = signal::<Option<String>>(None);

    let handle_delete = move |client: Client| {
        if !confirm(&format!("Delete client \"{}\"? This cannot be undone.", client.name)) {
            return;
        }
        spawn_local(async move {
            match delete_client(client.id).await {
                Ok(()) => {
                    log::info!("client {} deleted", client.id);
                    set_action_error.set(None);
                    clients.refetch();
                }
                Err(e) => set_action_error.set(Some(format!("Delete failed: {}", e))),
            }
        });
    };

    let columns = vec![
        ColumnConfig::sortable("Client Name", "name"),
        ColumnConfig::new("Contact Info"),
        ColumnConfig::new("Address (P.O. Box)"),
        ColumnConfig::new("Actions"),
    ];

    let render_row = row_renderer(move |client: &Client| {
        let c = client.clone();
        let email = c.email.clone().unwrap_or_else(|| "—".to_string());
        let phone = c.phone.clone().unwrap_or_default();
        let po_box = c
            .po_box
            .clone()
            .filter(|p| !p.trim().is_empty())
            .map(|p| format!("P.O. Box {}", p))
            .unwrap_or_else(|| "—".to_string());
        let locality = format!("{}, {}", c.locality(), c.country_or_default());
        let name = c.name.clone();
        let reference = c.reference();

        Ok(view! {
            <TableRow>
                <TableCell>
                    <TableCellLayout>
                        <div class="cell-title">{name}</div>
                        <div class="cell-subtitle">{reference}</div>
                    </TableCellLayout>
                </TableCell>
                <TableCell>
                    <div>{email}</div>
                    <div class="cell-subtitle">{phone}</div>
                </TableCell>
                <TableCell>
                    <div>{po_box}</div>
                    <div class="cell-subtitle">{locality}</div>
                </TableCell>
                <TableCell>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| handle_delete(c.clone())
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
                title=Client::list_name()
                subtitle="Manage your customer directory and billing addresses.".to_string()
            >
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| clients.refetch()>
                    "Refresh"
                </Button>
            </PageHeader>

            {move || action_error.get().map(|e| view! {
                <div class="alert alert--error">{e}</div>
            })}

            <DataTable
                columns=columns
                resource=clients.state()
                on_refetch=clients.refetch_callback()
                render_row=render_row
                empty_message="No clients registered yet."
            />
        </div>
    }
}
