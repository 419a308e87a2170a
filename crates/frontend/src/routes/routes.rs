use crate::dashboards::BusinessOverviewDashboard;
use crate::domain::a001_client::ui::ClientList;
use crate::domain::a002_invoice::ui::InvoiceList;
use crate::domain::a003_quotation::ui::QuotationList;
use crate::domain::a004_employee::ui::EmployeeList;
use crate::domain::a006_task::ui::TaskList;
use crate::layout::Shell;
use crate::projections::p900_weekly_payroll::ui::WeeklyPayroll;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="placeholder">
            <p class="placeholder__title">"Page not found"</p>
            <p class="placeholder__hint">"Use the menu on the left to open a workspace."</p>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=BusinessOverviewDashboard />
                    <Route path=path!("/clients") view=ClientList />
                    <Route path=path!("/invoices") view=InvoiceList />
                    <Route path=path!("/quotations") view=QuotationList />
                    <Route path=path!("/employees") view=EmployeeList />
                    <Route path=path!("/tasks") view=TaskList />
                    <Route path=path!("/payroll") view=WeeklyPayroll />
                </Routes>
            </Shell>
        </Router>
    }
}
