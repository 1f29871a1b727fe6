use super::product_form::ProductForm;
use crate::layout::global_context::PlannerContext;
use crate::shared::components::InfoTooltip;
use crate::shared::icons::icon;
use contracts::usecases::u501_calculate_targets::AllocationStatus;
use leptos::prelude::*;
use thaw::*;
use web_sys::HtmlInputElement;

#[component]
pub fn InputPanel() -> impl IntoView {
    let ctx = leptos::context::use_context::<PlannerContext>()
        .expect("PlannerContext context not found");

    let report = Memo::new(move |_| ctx.report());
    let calculate_disabled = Signal::derive(move || !report.get().can_calculate);

    let revenue_goal = move || ctx.session.with(|s| s.revenue_goal().text().to_string());

    let on_revenue_input = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        if ctx.set_revenue_goal(&text).is_err() {
            // откат поля к последнему принятому значению
            let previous = ctx
                .session
                .with_untracked(|s| s.revenue_goal().text().to_string());
            event_target::<HtmlInputElement>(&ev).set_value(&previous);
        }
    };

    let product_ids = move || {
        ctx.session
            .with(|s| s.products().iter().map(|p| p.id).collect::<Vec<_>>())
    };

    let banner = move || {
        let r = report.get();
        let total = ctx.display().percent(r.total_product_value);
        match r.status {
            AllocationStatus::NotStarted => ().into_any(),
            AllocationStatus::Unbalanced => view! {
                <MessageBar intent=MessageBarIntent::Warning>
                    {format!("⚠️ Total Product Value must add up to 100%. Current total: {}", total)}
                </MessageBar>
            }
            .into_any(),
            AllocationStatus::Balanced => view! {
                <MessageBar intent=MessageBarIntent::Success>
                    "✅ Product Value percentages total 100% - Ready to calculate!"
                </MessageBar>
            }
            .into_any(),
        }
    };

    let error_box = move || {
        ctx.error.get().map(|err| {
            view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{err}</span>
                </div>
            }
        })
    };

    let revenue_label = ctx.display().currency_label("Revenue Goal");

    view! {
        <div class="card planner-panel">
            <h2 class="planner-panel__title">"Sales Input Parameters"</h2>

            <div class="form__group planner-panel__section">
                <label class="form__label" for="revenue-goal">
                    {revenue_label}
                    <InfoTooltip content="Enter your total revenue target for the planning period" />
                </label>
                <input
                    id="revenue-goal"
                    class="form__input"
                    type="number"
                    min="0"
                    step="0.01"
                    required=true
                    placeholder="Enter revenue goal (e.g., 1000000)"
                    prop:value=revenue_goal
                    on:input=on_revenue_input
                />
            </div>

            <div class="planner-panel__section">
                <label class="form__label">"Products Configuration"</label>
                <div class="planner-panel__actions">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| ctx.add_product()
                    >
                        {icon("plus")}
                        " Add Product"
                    </Button>
                </div>

                <div class="product-list">
                    <For
                        each=product_ids
                        key=|id| *id
                        children=move |id| view! { <ProductForm id=id /> }
                    />
                </div>
            </div>

            <div class="planner-panel__messages">
                {banner}
                {error_box}
            </div>

            <Button
                appearance=ButtonAppearance::Primary
                class="planner-panel__calculate"
                disabled=calculate_disabled
                on_click=move |_| ctx.calculate()
            >
                {icon("calculator")}
                " Calculate Sales Targets"
            </Button>
        </div>
    }
}
