use dioxus::prelude::*;

use crate::client::use_api;
use crate::components::{Button, ButtonVariant, Card};
use crate::format::initials;
use crate::session::{use_logout, use_session, GUEST_EMAIL, GUEST_NAME};
use crate::views::PageHeader;

/// Profile, connection and session settings, shared by both shells.
#[component]
pub fn SettingsView(section: String, on_logged_out: EventHandler<()>) -> Element {
    let session = use_session();
    let api = use_api();
    let logout = use_logout(on_logged_out);

    let (name, email, id) = match session.user() {
        Some(user) => (user.name, user.email, user.id),
        None => (GUEST_NAME.to_string(), GUEST_EMAIL.to_string(), String::from("-")),
    };
    let base_url = api.base_url().to_string();

    rsx! {
        div {
            class: "page",
            PageHeader {
                section: section,
                title: "Configurações",
                subtitle: "Gerencie seu perfil e sua sessão",
            }

            Card {
                title: "Perfil",
                description: "Dados da sessão atual",
                div {
                    class: "profile-row",
                    div { class: "avatar avatar-lg", "{initials(&name)}" }
                    dl {
                        class: "field-list",
                        dt { "Nome" }
                        dd { "{name}" }
                        dt { "Email" }
                        dd { "{email}" }
                        dt { "Identificador" }
                        dd { "{id}" }
                    }
                }
            }

            Card {
                title: "Conexão",
                description: "Endereço da API utilizada por este aplicativo",
                code { class: "mono", "{base_url}" }
            }

            Card {
                title: "Sessão",
                p { class: "muted", "Encerrar a sessão remove o token salvo neste dispositivo." }
                Button {
                    variant: ButtonVariant::Destructive,
                    onclick: move |_| logout.call(()),
                    "Sair"
                }
            }
        }
    }
}
