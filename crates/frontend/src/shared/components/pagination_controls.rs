use contracts::shared::table::PaginationInfo;
use leptos::prelude::*;
use thaw::*;

/// Footer with Previous/Next and a "Showing X of Y results" caption.
///
/// Renders nothing while `info` is `None` (loading, failed, or a single page).
#[component]
pub fn PaginationControls(
    #[prop(into)]
    info: Signal<Option<PaginationInfo>>,

    on_prev: Callback<()>,

    on_next: Callback<()>,
) -> impl IntoView {
    move || {
        info.get().map(|p| {
            view! {
                <div class="pagination-controls">
                    <span class="pagination-info">
                        {format!("Showing {} of {} results", p.shown, p.total_count)}
                    </span>
                    <div class="pagination-buttons">
                        <Button
                            appearance=ButtonAppearance::Secondary
                            disabled=!p.has_prev
                            on_click=move |_| on_prev.run(())
                        >
                            "Previous"
                        </Button>
                        <span class="pagination-page">
                            {format!("Page {} of {}", p.page, p.total_pages)}
                        </span>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            disabled=!p.has_next
                            on_click=move |_| on_next.run(())
                        >
                            "Next"
                        </Button>
                    </div>
                </div>
            }
        })
    }
}
