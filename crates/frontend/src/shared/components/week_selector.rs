use contracts::domain::a005_work_week::aggregate::{WorkWeek, WorkWeekId};
use contracts::domain::common::AggregateId;
use contracts::shared::resource::ResourceState;
use leptos::prelude::*;

/// Dropdown of payroll weeks. The empty option clears the selection.
#[component]
pub fn WeekSelector(
    #[prop(into)]
    weeks: Signal<ResourceState<Vec<WorkWeek>>>,

    selected: RwSignal<Option<WorkWeekId>>,

    /// Show "06/01/2025 - 12/01/2025" instead of "Week Starting: 06 Jan"
    #[prop(optional)]
    show_range: bool,

    #[prop(optional, into)]
    placeholder: Option<String>,
) -> impl IntoView {
    let placeholder = placeholder.unwrap_or_else(|| "Select Work Week...".to_string());

    let on_change = move |ev| {
        let raw = event_target_value(&ev);
        let week = if raw.is_empty() {
            None
        } else {
            match WorkWeekId::from_string(&raw) {
                Ok(id) => Some(id),
                Err(e) => {
                    log::warn!("week selector: {}", e);
                    None
                }
            }
        };
        selected.set(week);
    };

    let options = move || {
        weeks.with(|state| match state {
            ResourceState::Ready(list) => list
                .iter()
                .map(|week| {
                    let value = week.id.as_string();
                    let label = if show_range { week.range_label() } else { week.label() };
                    let id = week.id;
                    view! {
                        <option value=value selected=move || selected.get() == Some(id)>
                            {label}
                        </option>
                    }
                })
                .collect_view()
                .into_any(),
            ResourceState::Loading => view! { <option disabled=true>"Loading weeks..."</option> }.into_any(),
            ResourceState::Failed(e) => {
                view! { <option disabled=true>{format!("Weeks unavailable: {}", e)}</option> }.into_any()
            }
        })
    };

    view! {
        <select class="week-selector" on:change=on_change>
            <option value="" selected=move || selected.get().is_none()>{placeholder}</option>
            {options}
        </select>
    }
}
