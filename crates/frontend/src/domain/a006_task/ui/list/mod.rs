use crate::domain::a005_work_week::api::fetch_weeks;
use crate::domain::a006_task::api::{create_task, fetch_tasks};
use crate::shared::api_utils::currency;
use crate::shared::components::table::{format_currency, TableCellMoney};
use crate::shared::components::{row_renderer, DataTable, PageHeader, StatCard, StatTone, WeekSelector};
use crate::shared::ListResource;
use contracts::domain::a005_work_week::aggregate::WorkWeekId;
use contracts::domain::a006_task::aggregate::{total_budget, Task, TaskDto};
use contracts::domain::common::AggregateRoot;
use contracts::shared::table::{ColumnConfig, RowRenderError};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn render_task(task: &Task) -> Result<AnyView, RowRenderError> {
    let title = task.title.clone();
    let reference = format!("TASK-{}", task.id);
    let cost = task.cost;

    Ok(view! {
        <TableRow>
            <TableCell>
                <div class="cell-title">{title}</div>
                <div class="cell-subtitle">{reference}</div>
            </TableCell>
            <TableCellMoney value=cost show_currency=true />
        </TableRow>
    }
    .into_any())
}

#[component]
fn CreateTaskForm(
    #[prop(into)]
    week: Signal<Option<WorkWeekId>>,
    on_created: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let title = RwSignal::new(String::new());
    let cost = RwSignal::new(String::new());
    let saving = RwSignal::new(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let submit = move |_| {
        let Some(week_id) = week.get_untracked() else {
            set_error.set(Some("Choose a work week first".to_string()));
            return;
        };
        let dto = match TaskDto::from_form(&title.get_untracked(), &cost.get_untracked(), week_id) {
            Ok(dto) => dto,
            Err(e) => {
                set_error.set(Some(e));
                return;
            }
        };

        saving.set(true);
        spawn_local(async move {
            match create_task(&dto).await {
                Ok(()) => {
                    title.set(String::new());
                    cost.set(String::new());
                    set_error.set(None);
                    on_created.run(());
                }
                Err(e) => {
                    log::warn!("failed to save task: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            saving.set(false);
        });
    };

    view! {
        <div class="form-panel">
            <h2 class="form-panel__title">"Add Production Task"</h2>
            <p class="form-panel__hint">"Define the scope and labor budget for this job."</p>
            <div class="form__group">
                <label class="form__label">"Job Title"</label>
                <Input value=title placeholder="e.g. Varnishing Dining Tables" />
            </div>
            <div class="form__group">
                <label class="form__label">{format!("Allocated Labor Budget ({})", currency())}</label>
                <Input value=cost placeholder="5000" />
            </div>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <div class="form-panel__actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=submit
                    disabled=Signal::derive(move || saving.get())
                >
                    {move || if saving.get() { "Saving Task..." } else { "Create Task" }}
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
pub fn TaskList() -> impl IntoView {
    let weeks = ListResource::new(fetch_weeks);
    let selected = RwSignal::new(None::<WorkWeekId>);
    let show_form = RwSignal::new(false);

    let tasks = ListResource::idle(move || {
        let week = selected.get_untracked();
        async move {
            match week {
                Some(id) => fetch_tasks(id).await,
                None => Ok(Vec::new()),
            }
        }
    });

    // смена недели перезапрашивает задачи; поздние ответы старой недели отбрасываются
    Effect::new(move |_| match selected.get() {
        Some(_) => tasks.refetch(),
        None => tasks.set_ready(Vec::new()),
    });

    let task_count = Signal::derive(move || {
        tasks.with(|s| s.value().map(|list| list.len().to_string()))
    });
    let budget = Signal::derive(move || {
        tasks.with(|s| s.value().map(|list| format_currency(currency(), total_budget(list))))
    });

    let on_created = Callback::new(move |_| {
        show_form.set(false);
        tasks.refetch();
    });
    let on_cancel = Callback::new(move |_| show_form.set(false));

    let columns = vec![
        ColumnConfig::sortable("Job", "title"),
        ColumnConfig::sortable("Labor Budget", "cost"),
    ];

    view! {
        <div class="page">
            <PageHeader
                title=Task::list_name()
                subtitle="Plan and budget jobs for the workshop floor".to_string()
            >
                <WeekSelector
                    weeks=weeks.state()
                    selected=selected
                    show_range=true
                    placeholder="Choose Work Week..."
                />
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || selected.get().is_none())
                    on_click=move |_| show_form.set(true)
                >
                    "New Task"
                </Button>
            </PageHeader>

            <Show when=move || show_form.get()>
                <CreateTaskForm week=selected on_created=on_created on_cancel=on_cancel />
            </Show>

            <Show
                when=move || selected.get().is_some()
                fallback=|| view! {
                    <div class="placeholder">
                        <p class="placeholder__title">"No Week Selected"</p>
                        <p class="placeholder__hint">"Choose a work week to plan its production tasks."</p>
                    </div>
                }
            >
                <div class="stat-grid">
                    <StatCard label="Active Tasks" value=task_count />
                    <StatCard label="Total Labor Budget" value=budget tone=StatTone::Success />
                </div>

                <DataTable
                    columns=columns.clone()
                    resource=tasks.state()
                    on_refetch=tasks.refetch_callback()
                    render_row=row_renderer(render_task)
                    empty_message="No tasks planned for this week."
                />
            </Show>
        </div>
    }
}
