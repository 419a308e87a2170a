use contracts::shared::table::TableFault;
use leptos::prelude::*;
use thaw::*;

/// Error panel shown in place of a table body.
///
/// Only the owning table is replaced; the rest of the page keeps working.
#[component]
pub fn DataError(fault: TableFault, on_retry: Callback<()>) -> impl IntoView {
    let title = fault.title();
    let hint = fault.hint();
    let technical = fault.to_string();

    view! {
        <div class="data-error" role="alert">
            <div class="data-error__icon">"⚠"</div>
            <h3 class="data-error__title">{title}</h3>
            <p class="data-error__hint">{hint}</p>
            <code class="data-error__message">{technical}</code>
            <Button appearance=ButtonAppearance::Primary on_click=move |_| on_retry.run(())>
                "Retry Connection"
            </Button>
        </div>
    }
}
