pub mod left;

use leptos::prelude::*;

/// Main application shell
///
/// ```text
/// +-----------+------------------------------+
/// |  Sidebar  |           Content            |
/// |  (Left)   |   (routed page, scrollable)  |
/// +-----------+------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <div class="app-body">
                <left::Sidebar />
                <main class="app-main">
                    {children()}
                </main>
            </div>
        </div>
    }
}
