pub mod global_context;
pub mod header;

use leptos::prelude::*;

/// Page shell: header on top, planner content below.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                   |
/// +------------------------------------------+
/// |                 Content                  |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header />
            <main data-zone="center" class="app-main">
                {children()}
            </main>
        </div>
    }
}
