use leptos::prelude::*;

/// One figure of a summary block: formatted value over a caption
#[component]
pub fn StatCard(
    /// Label displayed below the value
    label: &'static str,
    /// Value, already formatted for display
    #[prop(into)]
    value: Signal<String>,
    /// Highlights non-finite totals
    #[prop(into, optional)]
    warning: Signal<bool>,
) -> impl IntoView {
    let status_class = move || {
        if warning.get() {
            "stat-card stat-card--warning"
        } else {
            "stat-card"
        }
    };

    view! {
        <div class=status_class>
            <div class="stat-card__content">
                <div class="stat-card__value">{move || value.get()}</div>
                <div class="stat-card__label">{label}</div>
            </div>
        </div>
    }
}
