use super::chart_panel::ChartPanel;
use super::export_panel::ExportPanel;
use super::input_panel::InputPanel;
use super::results_panel::ResultsPanel;
use crate::layout::global_context::PlannerContext;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_USECASE};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_calculate_targets::CalculateTargets;
use leptos::prelude::*;

#[component]
pub fn PlannerPage() -> impl IntoView {
    let ctx = leptos::context::use_context::<PlannerContext>()
        .expect("PlannerContext context not found");

    let has_results = move || ctx.results.with(|r| r.is_some());

    view! {
        <PageFrame
            page_id=format!("{}--{}", CalculateTargets::full_name(), PAGE_CAT_USECASE)
            category=PAGE_CAT_USECASE
            class="page--planner"
        >
            <div class="planner-grid">
                <div class="planner-grid__column">
                    <InputPanel />
                </div>
                <div class="planner-grid__column">
                    <ResultsPanel />
                    <Show when=has_results>
                        <ExportPanel />
                        <ChartPanel />
                    </Show>
                </div>
            </div>
        </PageFrame>
    }
}
