use leptos::prelude::*;

/// Visual accent of a stat card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatTone {
    #[default]
    Neutral,
    Success,
    Warning,
}

impl StatTone {
    fn class(self) -> &'static str {
        match self {
            StatTone::Neutral => "stat-card",
            StatTone::Success => "stat-card stat-card--success",
            StatTone::Warning => "stat-card stat-card--warning",
        }
    }
}

/// KPI tile. `value` is preformatted; `None` shows a dash while loading.
#[component]
pub fn StatCard(
    #[prop(into)]
    label: String,

    #[prop(into)]
    value: Signal<Option<String>>,

    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,

    #[prop(optional)]
    tone: StatTone,
) -> impl IntoView {
    view! {
        <div class=tone.class()>
            <div class="stat-card__label">{label}</div>
            <div class="stat-card__value">
                {move || value.get().unwrap_or_else(|| "—".to_string())}
            </div>
            {move || subtitle.get().map(|s| view! {
                <div class="stat-card__subtitle">{s}</div>
            })}
        </div>
    }
}
