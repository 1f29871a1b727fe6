//! PageFrame: root wrapper of a use case page.
//!
//! Puts `id` (`"{usecase}--{category}"`, e.g. `"u501_calculate_targets--usecase"`)
//! and `data-page-category` on the root element.

use leptos::prelude::*;

pub const PAGE_CAT_USECASE: &str = "usecase";

#[component]
pub fn PageFrame(
    /// HTML id in format `{usecase}--{category}`
    page_id: String,
    category: &'static str,
    /// Additional CSS classes appended after the base class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let full_class = if class.is_empty() {
        "page".to_string()
    } else {
        format!("page {}", class)
    };

    view! {
        <div id=page_id class=full_class data-page-category=category>
            {children()}
        </div>
    }
}
