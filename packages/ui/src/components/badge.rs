use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum BadgeVariant {
    #[default]
    Neutral,
    Success,
    Muted,
    Outline,
}

#[component]
pub fn Badge(#[props(default)] variant: BadgeVariant, #[props(default)] class: String, children: Element) -> Element {
    let base = match variant {
        BadgeVariant::Neutral => "badge",
        BadgeVariant::Success => "badge badge-success",
        BadgeVariant::Muted => "badge badge-muted",
        BadgeVariant::Outline => "badge badge-outline",
    };
    rsx! {
        span { class: "{base} {class}", {children} }
    }
}
