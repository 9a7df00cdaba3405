use api::LoginCredentials;
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input, Label};
use crate::session::use_login;
use crate::views::PublicLayoutView;

/// Email/password login. `admin` only changes the wording; where the user
/// lands afterwards is decided by `on_success`.
#[component]
pub fn LoginView(#[props(default)] admin: bool, on_success: EventHandler<()>) -> Element {
    let login = use_login();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut missing = use_signal(|| false);

    let loading = (login.loading)();
    let error = (login.error)();

    let handle_submit = move |_| {
        let credentials = LoginCredentials {
            email: email().trim().to_string(),
            password: password(),
        };
        if credentials.email.is_empty() || credentials.password.is_empty() {
            missing.set(true);
            return;
        }
        missing.set(false);
        login.submit(credentials, EventHandler::new(move |_| on_success.call(())));
    };

    rsx! {
        PublicLayoutView {
            div {
                class: "login-card",
                h1 { class: "login-title", if admin { "Área administrativa" } else { "Acesse sua conta" } }
                p {
                    class: "muted",
                    "Digite seu email abaixo para acessar sua conta"
                }

                div {
                    class: "field",
                    Label { html_for: "email", "Email" }
                    Input {
                        id: "email",
                        r#type: "email",
                        placeholder: "exemplo@tradetechnology.com.br",
                        disabled: loading,
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                }

                div {
                    class: "field",
                    Label { html_for: "password", "Senha" }
                    Input {
                        id: "password",
                        r#type: "password",
                        placeholder: "*******",
                        disabled: loading,
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                }

                if missing() {
                    p { class: "form-error", "Informe email e senha." }
                }
                if let Some(message) = error {
                    p { class: "form-error", "{message}" }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    class: "w-full",
                    disabled: loading,
                    onclick: handle_submit,
                    if loading { "Entrando..." } else { "Entrar" }
                }
            }
        }
    }
}
