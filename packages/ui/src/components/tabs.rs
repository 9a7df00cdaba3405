use dioxus::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct TabItem {
    pub key: String,
    pub label: String,
}

impl TabItem {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// Tab strip; the caller owns the selected key and renders the panel.
#[component]
pub fn Tabs(items: Vec<TabItem>, active: String, on_change: EventHandler<String>) -> Element {
    rsx! {
        div {
            class: "tabs",
            role: "tablist",
            for item in items {
                button {
                    key: "{item.key}",
                    r#type: "button",
                    role: "tab",
                    class: if item.key == active { "tab active" } else { "tab" },
                    onclick: {
                        let key = item.key.clone();
                        move |_| on_change.call(key.clone())
                    },
                    "{item.label}"
                }
            }
        }
    }
}
