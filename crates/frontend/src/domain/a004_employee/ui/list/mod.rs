use crate::domain::a004_employee::api::{fetch_employees, register_employee};
use crate::shared::components::{row_renderer, DataTable, PageHeader};
use crate::shared::ListResource;
use contracts::domain::a004_employee::aggregate::{Employee, EmployeeDto};
use contracts::domain::common::AggregateRoot;
use contracts::shared::resource::ResourceState;
use contracts::shared::search::filter_list;
use contracts::shared::table::{ColumnConfig, RowRenderError};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn render_employee(emp: &Employee) -> Result<AnyView, RowRenderError> {
    let initial = emp
        .name
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .ok_or_else(|| RowRenderError::missing_field("name"))?;
    let name = emp.name.clone();
    let national_id = emp.national_id.clone();
    let phone = emp.phone.clone();

    Ok(view! {
        <TableRow>
            <TableCell>
                <TableCellLayout>
                    <span class="avatar">{initial}</span>
                    <span class="cell-title">{name}</span>
                </TableCellLayout>
            </TableCell>
            <TableCell>{national_id}</TableCell>
            <TableCell>{phone}</TableCell>
            <TableCell>
                <span class="badge badge--success">"Production"</span>
            </TableCell>
        </TableRow>
    }
    .into_any())
}

/// Registration panel; calls `on_saved` after the API accepted the record
#[component]
fn RegisterEmployeeForm(on_saved: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let national_id = RwSignal::new(String::new());
    let saving = RwSignal::new(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let submit = move |_| {
        let dto = EmployeeDto {
            name: name.get_untracked(),
            phone: phone.get_untracked(),
            national_id: national_id.get_untracked(),
        }
        .trimmed();
        if let Err(e) = dto.validate() {
            set_error.set(Some(e));
            return;
        }

        saving.set(true);
        spawn_local(async move {
            match register_employee(&dto).await {
                Ok(()) => {
                    log::info!("employee registered: {}", dto.name);
                    name.set(String::new());
                    phone.set(String::new());
                    national_id.set(String::new());
                    set_error.set(None);
                    on_saved.run(());
                }
                Err(e) => set_error.set(Some(format!(
                    "Failed to register employee. Check if National ID is unique. ({})",
                    e
                ))),
            }
            saving.set(false);
        });
    };

    view! {
        <div class="form-panel">
            <h2 class="form-panel__title">"New Employee"</h2>
            <div class="form__group">
                <label class="form__label">"Full Official Name"</label>
                <Input value=name placeholder="e.g. Samuel Okoth" />
            </div>
            <div class="form__group">
                <label class="form__label">"Phone Number"</label>
                <Input value=phone placeholder="07XX XXX XXX" />
            </div>
            <div class="form__group">
                <label class="form__label">"National ID / Passport"</label>
                <Input value=national_id placeholder="12345678" />
            </div>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <div class="form-panel__actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=submit
                    disabled=Signal::derive(move || saving.get())
                >
                    {move || if saving.get() { "Processing..." } else { "Initialize Profile" }}
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                    "Cancel"
                </Button>
            </div>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn EmployeeList() -> impl IntoView {
    let employees = ListResource::new(fetch_employees);
    let search_query = RwSignal::new(String::new());
    let show_form = RwSignal::new(false);

    // фильтрация поверх загруженного списка, без повторного запроса
    let filtered = Signal::derive(move || {
        let query = search_query.get();
        match employees.get() {
            ResourceState::Ready(list) => ResourceState::Ready(filter_list(&list, &query)),
            ResourceState::Loading => ResourceState::Loading,
            ResourceState::Failed(e) => ResourceState::Failed(e),
        }
    });

    let staff_count = move || {
        filtered.with(|state| match state {
            ResourceState::Ready(list) => format!("{} Active Staff Members", list.len()),
            _ => String::new(),
        })
    };

    let on_saved = Callback::new(move |_| {
        show_form.set(false);
        employees.refetch();
    });
    let on_cancel = Callback::new(move |_| show_form.set(false));

    let columns = vec![
        ColumnConfig::sortable("Name", "name"),
        ColumnConfig::sortable("National ID", "nationalId"),
        ColumnConfig::new("Phone"),
        ColumnConfig::new("Deployment"),
    ];

    view! {
        <div class="page">
            <PageHeader
                title=Employee::list_name()
                subtitle="Manage production staff profiles and deployment status".to_string()
            >
                <Button appearance=ButtonAppearance::Primary on_click=move |_| show_form.set(true)>
                    "Register Employee"
                </Button>
            </PageHeader>

            <Show when=move || show_form.get()>
                <RegisterEmployeeForm on_saved=on_saved on_cancel=on_cancel />
            </Show>

            <div class="filter-bar">
                <Input value=search_query placeholder="Search by name or national ID..." />
                <span class="filter-bar__count">{staff_count}</span>
            </div>

            <DataTable
                columns=columns
                resource=filtered
                on_refetch=employees.refetch_callback()
                render_row=row_renderer(render_employee)
                empty_message="No personnel found matching your search criteria."
            />
        </div>
    }
}
