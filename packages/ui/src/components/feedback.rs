use dioxus::prelude::*;

#[component]
pub fn LoadingState(message: String) -> Element {
    rsx! {
        div {
            class: "loading-state",
            div { class: "spinner" }
            p { "{message}" }
        }
    }
}

/// Error panel. Shows a retry button when `on_retry` is set.
#[component]
pub fn ErrorState(
    title: String,
    #[props(default = "Tente novamente mais tarde".to_string())] message: String,
    on_retry: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        div {
            class: "error-state",
            p { class: "error-title", "{title}" }
            p { class: "error-message", "{message}" }
            if let Some(retry) = on_retry {
                button {
                    class: "btn btn-outline",
                    onclick: move |_| retry.call(()),
                    "Tentar novamente"
                }
            }
        }
    }
}

#[component]
pub fn EmptyState(title: String, #[props(default)] message: String) -> Element {
    rsx! {
        div {
            class: "empty-state",
            p { class: "empty-title", "{title}" }
            if !message.is_empty() {
                p { class: "muted", "{message}" }
            }
        }
    }
}
