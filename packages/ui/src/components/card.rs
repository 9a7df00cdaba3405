use dioxus::prelude::*;

#[component]
pub fn Card(
    #[props(default)] title: String,
    #[props(default)] description: String,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "card {class}",
            if !title.is_empty() {
                div {
                    class: "card-header",
                    h3 { class: "card-title", "{title}" }
                    if !description.is_empty() {
                        p { class: "card-description", "{description}" }
                    }
                }
            }
            div { class: "card-content", {children} }
        }
    }
}

/// Headline number with a caption, as used on the home page and dashboard.
#[component]
pub fn StatCard(title: String, value: String, #[props(default)] caption: String) -> Element {
    rsx! {
        div {
            class: "card stat-card",
            span { class: "stat-title", "{title}" }
            span { class: "stat-value", "{value}" }
            if !caption.is_empty() {
                span { class: "stat-caption", "{caption}" }
            }
        }
    }
}
