use crate::layout::global_context::PlannerContext;
use crate::shared::icons::icon;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_calculate_targets::CalculateTargets;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = leptos::context::use_context::<PlannerContext>()
        .expect("PlannerContext context not found");

    let on_reset = move |_| {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message("Clear all inputs and results?")
                    .ok()
            })
            .unwrap_or(false);
        if confirmed {
            ctx.reset();
        }
    };

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <h1 class="header__title">
                    <span class="header__icon">{icon("target")}</span>
                    {CalculateTargets::display_name()}
                </h1>
                <p class="header__subtitle">{CalculateTargets::description()}</p>
            </div>
            <div class="header__actions">
                <Button
                    appearance=ButtonAppearance::Subtle
                    size=ButtonSize::Small
                    on_click=on_reset
                >
                    {icon("refresh")}
                    " Reset"
                </Button>
                <span class="header__badge">
                    {icon("chart-line")}
                    "Chunking Method"
                </span>
            </div>
        </header>
    }
}
