use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};

/// Fallback for unknown paths.
#[component]
pub fn NotFoundView(path: String, on_home: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "not-found",
            h1 { class: "not-found-code", "404" }
            p { class: "item-title", "Página não encontrada" }
            p { class: "muted", "O endereço /{path} não existe." }
            Button {
                variant: ButtonVariant::Primary,
                onclick: move |_| on_home.call(()),
                "Voltar ao início"
            }
        }
    }
}
