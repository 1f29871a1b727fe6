use crate::shared::icons::icon;
use leptos::prelude::*;

/// Hover popup above its children
#[component]
pub fn Tooltip(
    /// Popup text
    content: &'static str,
    children: Children,
) -> impl IntoView {
    let (visible, set_visible) = signal(false);

    view! {
        <span
            class="tooltip"
            on:mouseenter=move |_| set_visible.set(true)
            on:mouseleave=move |_| set_visible.set(false)
        >
            {children()}
            <Show when=move || visible.get()>
                <span class="tooltip__content" role="tooltip">{content}</span>
            </Show>
        </span>
    }
}

/// Info icon with a tooltip, placed next to form labels
#[component]
pub fn InfoTooltip(content: &'static str) -> impl IntoView {
    view! {
        <Tooltip content=content>
            <span class="tooltip__icon">{icon("info")}</span>
        </Tooltip>
    }
}
