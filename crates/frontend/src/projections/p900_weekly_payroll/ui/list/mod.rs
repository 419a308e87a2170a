//! Weekly payroll: per-employee consolidation of the week's pay rows.

use crate::domain::a005_work_week::api::fetch_weeks;
use crate::domain::a005_work_week::ui::CreateWeekForm;
use crate::projections::p900_weekly_payroll::api::fetch_payroll;
use crate::shared::api_utils::currency;
use crate::shared::components::table::{format_money, format_number_int, TableCellMoney};
use crate::shared::components::{row_renderer, DataTable, PageHeader, WeekSelector};
use crate::shared::ListResource;
use contracts::domain::a005_work_week::aggregate::WorkWeekId;
use contracts::projections::p900_weekly_payroll::{aggregate_payroll, EmployeeSummary};
use contracts::shared::resource::ResourceState;
use contracts::shared::table::{ColumnConfig, RowRenderError};
use leptos::prelude::*;
use thaw::*;

fn render_summary(emp: &EmployeeSummary) -> Result<AnyView, RowRenderError> {
    let name = emp.display_name();
    let phone = emp.phone.clone();
    let tasks = emp.task_count.to_string();
    let deduction = format!("({})", format_money(emp.total_deduction));
    let gross = emp.gross();
    let net = emp.net();

    Ok(view! {
        <TableRow>
            <TableCell>
                <div class="cell-title">{name}</div>
                <div class="cell-subtitle">{phone}</div>
            </TableCell>
            <TableCell class="text-center">
                <span class="badge badge--dark">{tasks}</span>
            </TableCell>
            <TableCellMoney value=gross />
            <TableCell class="text-right">
                <span style="color: var(--color-error-700)">{deduction}</span>
            </TableCell>
            <TableCellMoney value=net bold=true />
        </TableRow>
    }
    .into_any())
}

fn ledger_empty() -> impl IntoView {
    view! {
        <div class="placeholder">
            <p class="placeholder__title">"Payroll Ledger Empty"</p>
            <p class="placeholder__hint">
                "Select a finalized week or initialize a new period to see earnings."
            </p>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn WeeklyPayroll() -> impl IntoView {
    let weeks = ListResource::new(fetch_weeks);
    let selected = RwSignal::new(None::<WorkWeekId>);
    let show_week_form = RwSignal::new(false);

    let payroll = ListResource::idle(move || {
        let week = selected.get_untracked();
        async move {
            match week {
                Some(id) => fetch_payroll(id).await,
                None => Ok(Vec::new()),
            }
        }
    });

    Effect::new(move |_| match selected.get() {
        Some(_) => payroll.refetch(),
        None => payroll.set_ready(Vec::new()),
    });

    let summary = Memo::new(move |_| payroll.with(|s| s.value().map(|rows| aggregate_payroll(rows))));

    let rows = Signal::derive(move || match payroll.with(|s| s.error().cloned()) {
        Some(e) => ResourceState::Failed(e),
        None => match summary.get() {
            Some(s) => ResourceState::Ready(s.employees),
            None => ResourceState::Loading,
        },
    });

    // placeholder only for a settled, empty ledger; loading and failures stay in the table
    let ledger_is_empty = move || {
        selected.get().is_none() || summary.with(|s| s.as_ref().is_some_and(|s| s.is_empty()))
    };

    let on_week_created = Callback::new(move |_| {
        show_week_form.set(false);
        weeks.refetch();
    });
    let on_week_cancel = Callback::new(move |_| show_week_form.set(false));

    let columns = vec![
        ColumnConfig::sortable("Personnel", "name"),
        ColumnConfig::sortable("Tasks", "taskCount"),
        ColumnConfig::sortable("Gross", "gross"),
        ColumnConfig::new("Deduct"),
        ColumnConfig::sortable("Net Payable", "net"),
    ];

    let liability = move || {
        summary.get().map(|s| {
            view! {
                <div class="liability-card">
                    <p class="liability-card__label">"Total Liability"</p>
                    <h2 class="liability-card__value">
                        <span class="liability-card__currency">{currency()}</span>
                        {format_money(s.grand_total)}
                    </h2>
                    <div class="liability-card__row">
                        <span>"Headcount"</span>
                        <span>{format_number_int(s.headcount() as f64)}</span>
                    </div>
                    <div class="liability-card__row">
                        <span>"Total Units"</span>
                        <span>{format_number_int(s.total_units() as f64)}</span>
                    </div>
                </div>
            }
        })
    };

    view! {
        <div class="page">
            <PageHeader
                title="Payroll"
                subtitle="Production workforce payout consolidation".to_string()
            >
                <WeekSelector weeks=weeks.state() selected=selected />
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| show_week_form.set(true)>
                    "New Week"
                </Button>
            </PageHeader>

            <Show when=move || show_week_form.get()>
                <CreateWeekForm on_created=on_week_created on_cancel=on_week_cancel />
            </Show>

            <Show when=move || !ledger_is_empty() fallback=ledger_empty>
                <div class="payroll-grid">
                    <div class="payroll-grid__table">
                        <DataTable
                            columns=columns.clone()
                            resource=rows
                            on_refetch=payroll.refetch_callback()
                            render_row=row_renderer(render_summary)
                            items_per_page=0
                            loading_message="Consolidating payroll..."
                        />
                    </div>
                    <div class="payroll-grid__aside">{liability}</div>
                </div>
            </Show>
        </div>
    }
}
