use crate::domain::a005_work_week::api::create_week;
use crate::shared::components::DateInput;
use contracts::domain::a005_work_week::aggregate::WorkWeekDto;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Opens a new seven-day payroll period from its first day
#[component]
pub fn CreateWeekForm(on_created: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let starts_on = RwSignal::new(String::new());
    let saving = RwSignal::new(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let submit = move |_| {
        let dto = match WorkWeekDto::from_input(&starts_on.get_untracked()) {
            Ok(dto) => dto,
            Err(e) => {
                set_error.set(Some(e));
                return;
            }
        };

        saving.set(true);
        spawn_local(async move {
            match create_week(&dto).await {
                Ok(()) => {
                    log::info!("work week opened: {} .. {}", dto.starts_on, dto.ends_on);
                    starts_on.set(String::new());
                    set_error.set(None);
                    on_created.run(());
                }
                Err(e) => {
                    log::warn!("failed to create week: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            saving.set(false);
        });
    };

    view! {
        <div class="form-panel">
            <h2 class="form-panel__title">"Initialize Work Week"</h2>
            <p class="form-panel__hint">
                "Set the starting date. The system will automatically calculate the 7-day period."
            </p>
            <div class="form__group">
                <label class="form__label">"Opening Date (Monday)"</label>
                <DateInput value=starts_on required=true />
            </div>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <div class="form-panel__actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=submit
                    disabled=Signal::derive(move || saving.get())
                >
                    {move || if saving.get() { "Opening..." } else { "Open Payroll Week" }}
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                    "Cancel"
                </Button>
            </div>
        </div>
    }
}
