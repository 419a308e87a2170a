use leptos::prelude::*;

/// Native date picker bound to a `yyyy-mm-dd` string signal
#[component]
pub fn DateInput(
    value: RwSignal<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <input
            class="form__input"
            type="date"
            required=required
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}
