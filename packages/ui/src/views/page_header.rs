use dioxus::prelude::*;

/// Breadcrumb line plus page title.
#[component]
pub fn PageHeader(
    section: String,
    title: String,
    #[props(default)] subtitle: String,
) -> Element {
    rsx! {
        header {
            class: "page-header",
            nav {
                class: "breadcrumb",
                span { "Trade Rewards" }
                span { class: "breadcrumb-separator", "/" }
                span { class: "breadcrumb-current", "{section}" }
            }
            h1 { class: "page-title", "{title}" }
            if !subtitle.is_empty() {
                p { class: "muted", "{subtitle}" }
            }
        }
    }
}
