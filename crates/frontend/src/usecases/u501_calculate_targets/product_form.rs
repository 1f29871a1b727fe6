use crate::layout::global_context::PlannerContext;
use crate::shared::components::InfoTooltip;
use crate::shared::icons::icon;
use contracts::domain::a001_sales_plan::{ProductField, ProductId};
use contracts::usecases::u501_calculate_targets::total_product_value;
use leptos::prelude::*;
use web_sys::HtmlInputElement;

fn step(field: ProductField) -> &'static str {
    match field {
        ProductField::Price => "0.01",
        _ => "0.1",
    }
}

/// Card with the name and the four numeric fields of one product
#[component]
pub fn ProductForm(id: ProductId) -> impl IntoView {
    let ctx = leptos::context::use_context::<PlannerContext>()
        .expect("PlannerContext context not found");

    let name = move || {
        ctx.session
            .with(|s| s.product(id).map(|p| p.name.clone()).unwrap_or_default())
    };

    let (editing, set_editing) = signal(false);
    let edit_name = RwSignal::new(String::new());

    let start_edit = move |_| {
        let current = ctx
            .session
            .with_untracked(|s| s.product(id).map(|p| p.name.clone()).unwrap_or_default());
        edit_name.set(current);
        set_editing.set(true);
    };
    let save = move || {
        ctx.rename_product(id, &edit_name.get_untracked());
        set_editing.set(false);
    };
    let cancel = move || set_editing.set(false);

    let delete = move |_| {
        let product_name = ctx
            .session
            .with_untracked(|s| s.product(id).map(|p| p.name.clone()).unwrap_or_default());
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(&format!(
                    "Are you sure you want to delete \"{}\"?",
                    product_name
                ))
                .ok()
            })
            .unwrap_or(false);
        if confirmed {
            ctx.remove_product(id);
        }
    };

    // "Total: x.x%" под полем доли выручки
    let indicator = move || {
        let (is_set, total) = ctx.session.with(|s| {
            let is_set = s
                .product(id)
                .map(|p| p.field(ProductField::ProductValue).is_set())
                .unwrap_or(false);
            (is_set, total_product_value(s.products()))
        });
        is_set.then(|| {
            let valid = ctx.gate().is_total_valid(total);
            let class = if valid {
                "percentage-indicator percentage-indicator--valid"
            } else {
                "percentage-indicator percentage-indicator--invalid"
            };
            let mark = if valid { "✅" } else { "⚠️" };
            view! {
                <div class=class>
                    {format!("Total: {} {}", ctx.display().percent(total), mark)}
                </div>
            }
        })
    };

    let fields = ProductField::ALL
        .into_iter()
        .map(|field| {
            let text = move || {
                ctx.session.with(|s| {
                    s.product(id)
                        .map(|p| p.field(field).text().to_string())
                        .unwrap_or_default()
                })
            };
            let on_input = move |ev: leptos::ev::Event| {
                let value = event_target_value(&ev);
                if ctx.update_field(id, field, &value).is_err() {
                    let previous = ctx.session.with_untracked(|s| {
                        s.product(id)
                            .map(|p| p.field(field).text().to_string())
                            .unwrap_or_default()
                    });
                    event_target::<HtmlInputElement>(&ev).set_value(&previous);
                }
            };
            let bounds = field.bounds();
            let label = field.display_label(&ctx.display());

            view! {
                <div class="form__group">
                    <label class="form__label">
                        {label}
                        <InfoTooltip content=field.hint() />
                    </label>
                    <input
                        class="form__input"
                        type="number"
                        min=bounds.min_attr()
                        max=bounds.max_attr()
                        step=step(field)
                        required=true
                        placeholder=field.placeholder()
                        prop:value=text
                        on:input=on_input
                    />
                    {(field == ProductField::ProductValue).then(|| indicator)}
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="product-card">
            <div class="product-card__header">
                <Show
                    when=move || editing.get()
                    fallback=move || view! { <h3 class="product-card__title">{name}</h3> }
                >
                    <input
                        class="form__input product-card__name-input"
                        autofocus=true
                        prop:value=move || edit_name.get()
                        on:input=move |ev| edit_name.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                save();
                            }
                        }
                    />
                </Show>

                <div class="product-card__actions">
                    <Show
                        when=move || editing.get()
                        fallback=move || view! {
                            <button
                                class="icon-button icon-button--edit"
                                title="Edit product name"
                                on:click=start_edit
                            >
                                {icon("edit")}
                            </button>
                            <button
                                class="icon-button icon-button--delete"
                                title="Delete product"
                                on:click=delete
                            >
                                {icon("trash")}
                            </button>
                        }
                    >
                        <button
                            class="icon-button icon-button--save"
                            title="Save changes"
                            on:click=move |_| save()
                        >
                            {icon("check")}
                        </button>
                        <button
                            class="icon-button icon-button--cancel"
                            title="Cancel editing"
                            on:click=move |_| cancel()
                        >
                            {icon("x")}
                        </button>
                    </Show>
                </div>
            </div>

            <div class="product-card__grid">{fields}</div>
        </div>
    }
}
