use crate::layout::global_context::PlannerContext;
use crate::layout::Shell;
use crate::usecases::u501_calculate_targets::view::PlannerPage;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Provide the planner session store to the whole app via context.
    provide_context(PlannerContext::new());

    view! {
        <ConfigProvider>
            <Shell>
                <PlannerPage />
            </Shell>
        </ConfigProvider>
    }
}
