use crate::dashboards::d400_business_overview::api::fetch_overview;
use crate::shared::api_utils::currency;
use crate::shared::components::table::{format_currency, format_number_int};
use crate::shared::components::{DataError, PageHeader, StatCard, StatTone};
use crate::shared::RemoteResource;
use contracts::dashboards::d400_business_overview::{BusinessOverview, TrendPoint};
use contracts::shared::resource::ResourceState;
use contracts::shared::table::TableFault;
use leptos::prelude::*;

/// Bar widths relative to the largest amount of the trend, in percent
fn bar_widths(trend: &[TrendPoint]) -> Vec<f64> {
    let max = trend.iter().map(|p| p.amount).fold(0.0_f64, f64::max);
    trend
        .iter()
        .map(|p| if max > 0.0 { (p.amount.max(0.0) / max * 100.0).round() } else { 0.0 })
        .collect()
}

fn trend_view(trend: Vec<TrendPoint>) -> AnyView {
    if trend.is_empty() {
        return view! { <p class="placeholder__hint">"No invoices issued yet."</p> }.into_any();
    }
    let widths = bar_widths(&trend);
    trend
        .into_iter()
        .zip(widths)
        .map(|(point, width)| {
            view! {
                <div class="trend-row">
                    <span class="trend-row__label">{point.label}</span>
                    <div class="trend-row__track">
                        <div class="trend-row__bar" style=format!("width: {}%;", width)></div>
                    </div>
                    <span class="trend-row__amount">{format_currency(currency(), point.amount)}</span>
                </div>
            }
        })
        .collect_view()
        .into_any()
}

/// Executive overview: revenue, outstanding balance, headcounts and the invoice trend
#[component]
pub fn BusinessOverviewDashboard() -> impl IntoView {
    let overview = RemoteResource::new(fetch_overview);

    let stat = move |f: fn(&BusinessOverview) -> String| {
        Signal::derive(move || overview.with(|s| s.value().map(f)))
    };

    let revenue = stat(|o| format_currency(currency(), o.revenue));
    let pending = stat(|o| format_currency(currency(), o.pending));
    let pending_share = Signal::derive(move || {
        overview.with(|s| {
            s.value()
                .and_then(BusinessOverview::pending_share)
                .map(|p| format!("{:.1}% of revenue outstanding", p))
        })
    });
    let staff = stat(|o| format_number_int(o.staff_count as f64));
    let tasks = stat(|o| format_number_int(o.task_count as f64));
    let clients = stat(|o| format_number_int(o.client_count as f64));

    let on_retry = Callback::new(move |_| overview.refetch());

    view! {
        <div class="page">
            <PageHeader
                title="Executive Suite"
                subtitle="Brandflare Woodworks Performance Overview".to_string()
            />

            {move || match overview.get() {
                ResourceState::Failed(e) => view! {
                    <DataError fault=TableFault::Fetch(e) on_retry=on_retry />
                }
                .into_any(),
                state => {
                    let trend = state.value().map(|o| o.trend.clone());
                    view! {
                        <div class="stat-grid">
                            <StatCard label="Total Revenue" value=revenue tone=StatTone::Success />
                            <StatCard
                                label="Pending Amount"
                                value=pending
                                subtitle=pending_share
                                tone=StatTone::Warning
                            />
                            <StatCard label="Workforce" value=staff />
                            <StatCard label="Production Tasks" value=tasks />
                            <StatCard label="Clients" value=clients />
                        </div>
                        <div class="card">
                            <h3 class="card__title">"Revenue Trend"</h3>
                            <p class="card__subtitle">"Latest invoices"</p>
                            {match trend {
                                Some(t) => trend_view(t),
                                None => view! { <p class="table__loading">"Loading..."</p> }.into_any(),
                            }}
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(amount: f64) -> TrendPoint {
        TrendPoint {
            label: "Jan 6".to_string(),
            amount,
        }
    }

    #[test]
    fn test_bar_widths() {
        assert_eq!(bar_widths(&[point(500.0), point(1000.0), point(250.0)]), vec![50.0, 100.0, 25.0]);
        assert_eq!(bar_widths(&[point(0.0)]), vec![0.0]);
        assert!(bar_widths(&[]).is_empty());
    }
}
