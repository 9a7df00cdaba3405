use dioxus::prelude::*;

use crate::icons::FaMagnifyingGlass;
use crate::Icon;

#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label { class: "label", r#for: html_for, {children} }
    }
}

#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] class: String,
    #[props(default)] placeholder: String,
    #[props(default)] disabled: bool,
    #[props(default)] invalid: bool,
    value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            id: id,
            r#type: r#type,
            class: if invalid { "input invalid {class}" } else { "input {class}" },
            placeholder: placeholder,
            disabled: disabled,
            value: value,
            oninput: move |evt| oninput.call(evt),
        }
    }
}

/// Text input with a leading magnifier icon.
#[component]
pub fn SearchInput(placeholder: String, value: String, on_change: EventHandler<String>) -> Element {
    rsx! {
        div {
            class: "search-input",
            Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
            input {
                r#type: "search",
                placeholder: placeholder,
                value: value,
                oninput: move |evt: FormEvent| on_change.call(evt.value()),
            }
        }
    }
}
